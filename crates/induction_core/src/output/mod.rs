//! Canonical solution record and the writer that emits it to `output_dir`.

mod schema;
mod writer;

pub use schema::{InductionRankingRecord, SolutionRecord, TripAssignmentRecord};
pub use writer::write_output;
