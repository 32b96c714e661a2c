//! # Induction Core
//!
//! Daily induction and trip-assignment planning for a fixed-size metro
//! rolling-stock fleet. Given the day's timetabled trips, per-unit fleet
//! state, depot resources, and next-day terminal-start requirements, this
//! crate decides a disposition for every unit — in service with a specific
//! trip set, held for cleaning, held for maintenance/certification, or
//! standby — subject to hard operational rules and a weighted multi-objective.
//!
//! ## Pipeline
//!
//! Loader → Model → (Variable, Constraint, Objective) builders → Solver →
//! Extractor → Writer, exposed end-to-end through [`plan_day`].
//!
//! ## Modules
//!
//! - [`input`]: parses and validates the day-input JSON record.
//! - [`model`]: the immutable, post-load domain model.
//! - [`solve`]: decision variables, hard constraints, the objective, the
//!   solver driver, and the solution extractor/classifier.
//! - [`output`]: the canonical solution record and its JSON writer.
//! - [`error`]: the error taxonomy shared across every stage.

pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod solve;

mod pipeline;

pub use pipeline::{plan_day, PlanDayOptions};
