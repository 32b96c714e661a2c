use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use good_lp::solvers::coin_cbc::coin_cbc;
use good_lp::{ResolutionError, Solution, SolverModel};
use log::{info, warn};

use crate::error::{InductionError, Result};
use crate::model::DomainModel;

use super::constraints::add_constraints;
use super::extract::{extract_solution, ExtractedSolution};
use super::objective::build_objective;
use super::variables::build_variables;

/// Final solver status reported to the caller. `Unknown` only ever
/// appears wrapped in an `Err(InductionError::SolverTimeout)` — there is no
/// feasible incumbent to report alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    Optimal,
    Feasible,
}

impl SolverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolverStatus::Optimal => "OPTIMAL",
            SolverStatus::Feasible => "FEASIBLE",
        }
    }
}

pub struct SolveReport {
    pub status: SolverStatus,
    pub solution: ExtractedSolution,
}

/// Default wall-clock budgets: 60s for the `next_day_starts` (variant B)
/// encoding, 180s for the element-lookup (variant A) fallback, since variant A's
/// AND-linearized element lookup is considerably larger.
pub fn default_time_limit(model: &DomainModel) -> Duration {
    if model.uses_shunting_variant_b() {
        Duration::from_secs(60)
    } else {
        Duration::from_secs(180)
    }
}

/// Builds and solves the MILP with a hard wall-clock budget. The
/// solve itself runs on a dedicated thread since the underlying solver exposes
/// no mid-solve cancellation hook; the driver only waits on it with a
/// timeout.
pub fn solve(model: &DomainModel, time_limit: Duration) -> Result<SolveReport> {
    info!(
        "solving with {} trains, {} trips, variant {} (budget {:?})",
        model.trains.len(),
        model.trips.len(),
        if model.uses_shunting_variant_b() { "B" } else { "A" },
        time_limit
    );

    let model = model.clone();
    let (tx, rx) = mpsc::channel();
    let budget_secs = time_limit.as_secs().max(1);

    thread::spawn(move || {
        let started = Instant::now();
        let (vars, handles) = build_variables(&model);
        let objective = build_objective(&model, &handles);
        let mut problem = vars.minimise(objective).using(coin_cbc);
        problem.set_parameter("seconds", &budget_secs.to_string());
        problem.set_parameter("logLevel", "0");
        add_constraints(&mut problem, &model, &handles);

        let result = problem.solve();
        let elapsed = started.elapsed();
        let _ = tx.send(match result {
            Ok(solution) => {
                // `good_lp`'s `Solution` trait doesn't expose CBC's proof-of-optimality
                // flag, so a solve that consumed most of its time budget is reported
                // as a time-limited incumbent rather than a proven optimum.
                let status = if elapsed.as_secs_f64() < budget_secs as f64 * 0.9 {
                    SolverStatus::Optimal
                } else {
                    SolverStatus::Feasible
                };
                let extracted = extract_solution(&model, &handles, &solution);
                Ok(SolveReport {
                    status,
                    solution: extracted,
                })
            }
            Err(ResolutionError::Infeasible) => {
                Err(InductionError::Infeasible(infeasibility_diagnostics(&model)))
            }
            Err(other) => Err(InductionError::Infeasible(format!(
                "solver returned {other:?}"
            ))),
        });
    });

    match rx.recv_timeout(time_limit + Duration::from_secs(10)) {
        Ok(report) => report,
        Err(mpsc::RecvTimeoutError::Timeout) => {
            warn!("solver thread exceeded wall-clock budget of {budget_secs}s with no result");
            Err(InductionError::SolverTimeout(budget_secs))
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(InductionError::SolverTimeout(budget_secs)),
    }
}

fn infeasibility_diagnostics(model: &DomainModel) -> String {
    let mut causes = Vec::new();
    if !model.trains.is_empty() && model.trains.iter().all(|t| !t.is_eligible()) {
        causes.push("all trains are ineligible (open job cards or expired certificates)".to_string());
    }
    let due_count = model
        .trains
        .iter()
        .filter(|t| t.is_due_for_cleaning(model.depot.deep_clean_threshold_days))
        .count();
    if due_count > model.depot.cleaning_bays as usize && model.depot.cleaning_bays == 0 {
        causes.push(format!(
            "{due_count} trains are due for cleaning but depot has 0 cleaning bays"
        ));
    }
    let mut overlap_found = false;
    'outer: for j1 in 0..model.trips.len() {
        for j2 in (j1 + 1)..model.trips.len() {
            if model.trips[j1].overlaps(&model.trips[j2]) {
                overlap_found = true;
                break 'outer;
            }
        }
    }
    if overlap_found && model.trains.iter().filter(|t| t.is_eligible()).count() < 2 {
        causes.push("overlapping trips require more than one eligible train".to_string());
    }
    if causes.is_empty() {
        "no specific cause identified; inspect hard constraints manually".to_string()
    } else {
        causes.join("; ")
    }
}
