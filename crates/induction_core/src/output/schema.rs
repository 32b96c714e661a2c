use serde::Serialize;

use crate::solve::{ExtractedSolution, SolverStatus};

/// Canonical solution record written to `daily_solution/<date>_solution_details.json`.
#[derive(Debug, Clone, Serialize)]
pub struct SolutionRecord {
    pub planning_date: String,
    pub solver_status: String,
    pub total_trains_used: usize,
    pub trips_serviced: usize,
    pub trips_unserviced: usize,
    pub unserviced_trip_ids: Vec<String>,
    pub induction_ranking: Vec<InductionRankingRecord>,
    pub trip_assignments: Vec<TripAssignmentRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_shunting_km: Option<f64>,
    pub total_mileage_deviation: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TripAssignmentRecord {
    pub trip_id: String,
    pub train_id: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InductionRankingRecord {
    pub train_id: String,
    pub status: String,
    pub reason: String,
    pub final_mileage_km: i64,
    pub health_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shunting_distance_km: Option<f64>,
}

fn format_sec_as_clock(total_sec: i64) -> String {
    let sec = total_sec.rem_euclid(86_400);
    format!("{:02}:{:02}:{:02}", sec / 3600, (sec % 3600) / 60, sec % 60)
}

impl SolutionRecord {
    pub fn from_solution(
        planning_date: &str,
        status: SolverStatus,
        solution: &ExtractedSolution,
    ) -> Self {
        Self {
            planning_date: planning_date.to_string(),
            solver_status: status.as_str().to_string(),
            total_trains_used: solution.total_trains_used,
            trips_serviced: solution.trip_assignments.len(),
            trips_unserviced: solution.unserviced_trip_ids.len(),
            unserviced_trip_ids: solution.unserviced_trip_ids.clone(),
            induction_ranking: solution
                .induction_ranking
                .iter()
                .map(|r| InductionRankingRecord {
                    train_id: r.train_id.clone(),
                    status: r.status.clone(),
                    reason: r.reason.clone(),
                    final_mileage_km: r.final_mileage_km,
                    health_score: r.health_score,
                    shunting_distance_km: r.shunting_distance_km,
                })
                .collect(),
            trip_assignments: solution
                .trip_assignments
                .iter()
                .map(|a| TripAssignmentRecord {
                    trip_id: a.trip_id.clone(),
                    train_id: a.train_id.clone(),
                    start_time: format_sec_as_clock(a.start_sec),
                    end_time: format_sec_as_clock(a.end_sec),
                })
                .collect(),
            total_shunting_km: solution.total_shunting_km,
            total_mileage_deviation: solution.total_mileage_deviation,
        }
    }
}
