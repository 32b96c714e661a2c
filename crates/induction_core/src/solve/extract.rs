use good_lp::Solution;

use crate::model::DomainModel;

use super::handles::Handles;

#[derive(Debug, Clone, PartialEq)]
pub struct TripAssignment {
    pub trip_id: String,
    pub train_id: String,
    pub start_sec: i64,
    pub end_sec: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InductionRankingEntry {
    pub train_id: String,
    pub status: String,
    pub reason: String,
    pub final_mileage_km: i64,
    pub health_score: f64,
    pub shunting_distance_km: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractedSolution {
    pub trip_assignments: Vec<TripAssignment>,
    pub unserviced_trip_ids: Vec<String>,
    pub induction_ranking: Vec<InductionRankingEntry>,
    pub total_trains_used: usize,
    pub total_shunting_km: Option<f64>,
    pub total_mileage_deviation: f64,
}

/// Reads variable values out of a solved model and produces the canonical
/// solution record.
pub fn extract_solution(
    model: &DomainModel,
    handles: &Handles,
    solution: &impl Solution,
) -> ExtractedSolution {
    let is_one = |v: f64| v > 0.5;

    let mut trip_assignments = Vec::new();
    let mut unserviced_trip_ids = Vec::new();
    for (j, trip) in model.trips.iter().enumerate() {
        let mut serviced_by = None;
        for (t, train) in model.trains.iter().enumerate() {
            if let Some(a) = handles.assign_var(t, j) {
                if is_one(solution.value(a)) {
                    serviced_by = Some(train.id.clone());
                    break;
                }
            }
        }
        match serviced_by {
            Some(train_id) => trip_assignments.push(TripAssignment {
                trip_id: trip.id.clone(),
                train_id,
                start_sec: trip.start_sec,
                end_sec: trip.end_sec,
            }),
            None => unserviced_trip_ids.push(trip.id.clone()),
        }
    }
    trip_assignments.sort_by_key(|a| a.start_sec);
    unserviced_trip_ids.sort();

    let used_train_ids: Vec<bool> = model
        .trains
        .iter()
        .enumerate()
        .map(|(t, _)| {
            handles
                .train_used_var(t)
                .map(|v| is_one(solution.value(v)))
                .unwrap_or(false)
        })
        .collect();
    let total_trains_used = used_train_ids.iter().filter(|&&u| u).count();

    let final_mileages: Vec<i64> = model
        .trains
        .iter()
        .enumerate()
        .map(|(t, train)| {
            handles
                .final_mileage
                .get(&t)
                .map(|&v| (solution.value(v) / crate::model::DISTANCE_SCALE as f64).round() as i64)
                .unwrap_or(train.mileage_km)
        })
        .collect();

    let avg_in_service_mileage = {
        let in_service: Vec<i64> = model
            .trains
            .iter()
            .enumerate()
            .filter(|(t, _)| used_train_ids[*t])
            .map(|(_, train)| train.mileage_km)
            .collect();
        if in_service.is_empty() {
            0.0
        } else {
            in_service.iter().sum::<i64>() as f64 / in_service.len() as f64
        }
    };

    let mut induction_ranking = Vec::with_capacity(model.trains.len());
    for (t, train) in model.trains.iter().enumerate() {
        let is_cleaned = handles
            .is_cleaned_var(t)
            .map(|v| is_one(solution.value(v)))
            .unwrap_or(false);
        let shunting_distance_km = handles
            .shunting_dist
            .get(&t)
            .map(|&v| solution.value(v) / crate::model::DISTANCE_SCALE as f64);

        let (status, reason) = classify(
            train,
            used_train_ids[t],
            is_cleaned,
            train.mileage_km,
            avg_in_service_mileage,
        );

        induction_ranking.push(InductionRankingEntry {
            train_id: train.id.clone(),
            status,
            reason,
            final_mileage_km: final_mileages[t],
            health_score: train.anomaly_score,
            shunting_distance_km,
        });
    }
    induction_ranking.sort_by(|a, b| {
        b.status
            .cmp(&a.status)
            .then(a.final_mileage_km.cmp(&b.final_mileage_km))
    });

    let total_shunting_km = if model.uses_shunting_variant_b() {
        None
    } else {
        Some(
            handles
                .shunting_dist
                .values()
                .map(|&v| solution.value(v) / crate::model::DISTANCE_SCALE as f64)
                .sum(),
        )
    };

    let avg_mileage = model.computed_average_fleet_mileage();
    let total_mileage_deviation: f64 = final_mileages
        .iter()
        .map(|&m| (m as f64 - avg_mileage).abs())
        .sum();

    ExtractedSolution {
        trip_assignments,
        unserviced_trip_ids,
        induction_ranking,
        total_trains_used,
        total_shunting_km,
        total_mileage_deviation,
    }
}

/// Priority cascade: first matching rule wins.
fn classify(
    train: &crate::model::Train,
    is_used: bool,
    is_cleaned: bool,
    initial_mileage: i64,
    avg_in_service_mileage: f64,
) -> (String, String) {
    if train.has_open_job_card {
        return (
            "HELD FOR MAINTENANCE (Job Card Open)".to_string(),
            "open job card prevents service".to_string(),
        );
    }
    if train.telecom_cert_expired {
        return (
            "HELD (Telecom Cert Expired)".to_string(),
            "telecom certificate expired on the planning date".to_string(),
        );
    }
    if train.stock_cert_expired {
        return (
            "HELD (Stock Cert Expired)".to_string(),
            "stock certificate expired on the planning date".to_string(),
        );
    }
    if is_cleaned {
        return (
            "HELD FOR CLEANING".to_string(),
            "scheduled for deep cleaning today".to_string(),
        );
    }
    if is_used {
        return (
            "IN SERVICE".to_string(),
            "assigned at least one revenue trip".to_string(),
        );
    }
    if train.anomaly_score > 0.75 {
        return (
            "STANDBY (High Failure Risk)".to_string(),
            format!("anomaly score {:.2} exceeds the 0.75 risk threshold", train.anomaly_score),
        );
    }
    if avg_in_service_mileage > 0.0 && initial_mileage as f64 > 1.15 * avg_in_service_mileage {
        return (
            "STANDBY (For Mileage Balancing)".to_string(),
            format!(
                "mileage {initial_mileage} exceeds 1.15x the in-service average ({avg_in_service_mileage:.0})"
            ),
        );
    }
    ("STANDBY".to_string(), "not required for today's service".to_string())
}
