use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use induction_core::error::InductionError;
use induction_core::model::ObjectiveWeights;
use induction_core::{plan_day, PlanDayOptions};
use log::error;

#[derive(Parser)]
#[command(
    name = "induction",
    about = "Daily induction and trip-assignment planner for a metro rolling-stock fleet"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one planning date and write the solution record.
    Solve {
        /// Planning date, `YYYY-MM-DD`.
        date: String,
        /// Directory containing `<date>_input_data.json`.
        #[arg(long, default_value = "daily_input")]
        input_dir: PathBuf,
        /// Directory the solution record is written to.
        #[arg(long, default_value = "daily_solution")]
        output_dir: PathBuf,
        /// Wall-clock solver budget in seconds; defaults to 60s or 180s
        /// depending on which shunting encoding the input selects.
        #[arg(long)]
        time_limit_secs: Option<u64>,
        /// JSON file overriding a subset of `ObjectiveWeights`.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            date,
            input_dir,
            output_dir,
            time_limit_secs,
            config,
        } => run_solve(&date, input_dir, output_dir, time_limit_secs, config),
    }
}

fn run_solve(
    date: &str,
    input_dir: PathBuf,
    output_dir: PathBuf,
    time_limit_secs: Option<u64>,
    config: Option<PathBuf>,
) -> ExitCode {
    let weights = match load_weights(config.as_deref()) {
        Ok(w) => w,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(1);
        }
    };

    let options = PlanDayOptions {
        input_dir,
        output_dir,
        time_limit: time_limit_secs.map(Duration::from_secs),
        weights,
    };

    match plan_day(date, &options) {
        Ok(record) => {
            println!(
                "{}: {} ({} trips serviced, {} unserviced, {} trains used)",
                record.planning_date,
                record.solver_status,
                record.trips_serviced,
                record.trips_unserviced,
                record.total_trains_used
            );
            ExitCode::from(0)
        }
        Err(e @ InductionError::BadInput(_)) | Err(e @ InductionError::MissingFile(_)) => {
            error!("{e}");
            ExitCode::from(1)
        }
        Err(e @ InductionError::Infeasible(_)) => {
            error!("{e}");
            ExitCode::from(2)
        }
        Err(e @ InductionError::SolverTimeout(_)) => {
            error!("{e}");
            ExitCode::from(3)
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(1)
        }
    }
}

fn load_weights(config: Option<&std::path::Path>) -> induction_core::error::Result<ObjectiveWeights> {
    match config {
        None => Ok(ObjectiveWeights::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let weights: ObjectiveWeights = serde_json::from_str(&text)?;
            Ok(weights)
        }
    }
}
