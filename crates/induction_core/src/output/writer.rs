use std::path::Path;

use log::info;

use crate::error::{InductionError, Result};

use super::schema::SolutionRecord;

/// Writes the canonical solution record to `output_dir/<date>_solution_details.json`,
/// creating the output directory if it doesn't exist yet.
pub fn write_output(output_dir: &Path, record: &SolutionRecord) -> Result<()> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(format!("{}_solution_details.json", record.planning_date));
    let json = serde_json::to_string_pretty(record)?;
    std::fs::write(&path, json).map_err(|source| InductionError::OutputWriteFailure {
        path: path.clone(),
        source,
    })?;
    info!("wrote solution to {}", path.display());
    Ok(())
}
