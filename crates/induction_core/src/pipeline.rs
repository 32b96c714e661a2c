use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;

use crate::error::Result;
use crate::input::load_input;
use crate::model::ObjectiveWeights;
use crate::output::{write_output, SolutionRecord};
use crate::solve::{default_time_limit, solve};

/// Resolved configuration for a single `solve <date>` run, gathered by the CLI
/// (or a test harness) before the pipeline runs.
#[derive(Debug, Clone)]
pub struct PlanDayOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub time_limit: Option<Duration>,
    pub weights: ObjectiveWeights,
}

impl Default for PlanDayOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("daily_input"),
            output_dir: PathBuf::from("daily_solution"),
            time_limit: None,
            weights: ObjectiveWeights::default(),
        }
    }
}

/// Runs the full pipeline for one planning date: Loader → Model → builders →
/// Solver → Extractor → Writer. Returns the solution record that was
/// written to disk.
pub fn plan_day(planning_date: &str, options: &PlanDayOptions) -> Result<SolutionRecord> {
    let input_path = options
        .input_dir
        .join(format!("{planning_date}_input_data.json"));
    let model = load_input(&input_path, options.weights)?;

    let time_limit = options.time_limit.unwrap_or_else(|| default_time_limit(&model));
    let report = solve(&model, time_limit)?;

    info!(
        "solved {planning_date}: {} trips serviced, {} unserviced, {} trains used",
        report.solution.trip_assignments.len(),
        report.solution.unserviced_trip_ids.len(),
        report.solution.total_trains_used
    );

    let record = SolutionRecord::from_solution(planning_date, report.status, &report.solution);
    write_output(&options.output_dir, &record)?;
    Ok(record)
}

/// Exposed for integration tests that want to drive the pipeline directly
/// against an already-parsed input path rather than the `<date>_input_data.json`
/// naming convention.
pub fn plan_from_path(input_path: &Path, options: &PlanDayOptions) -> Result<SolutionRecord> {
    let model = load_input(input_path, options.weights)?;
    let time_limit = options.time_limit.unwrap_or_else(|| default_time_limit(&model));
    let report = solve(&model, time_limit)?;
    let planning_date = model.planning_date.format("%Y-%m-%d").to_string();
    let record = SolutionRecord::from_solution(&planning_date, report.status, &report.solution);
    write_output(&options.output_dir, &record)?;
    Ok(record)
}
