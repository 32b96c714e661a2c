//! Variable, constraint, and objective construction, the solver driver, and
//! the solution extractor/classifier. Everything here operates on
//! a borrowed [`crate::model::DomainModel`] and produces either an
//! [`ExtractedSolution`] or a typed [`crate::error::InductionError`].

mod constraints;
mod driver;
mod extract;
mod handles;
mod objective;
mod variables;

pub use driver::{default_time_limit, solve, SolveReport, SolverStatus};
pub use extract::{ExtractedSolution, InductionRankingEntry, TripAssignment};
