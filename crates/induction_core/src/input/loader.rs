use std::collections::HashSet;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime, Timelike};
use log::info;

use crate::error::{InductionError, Result};
use crate::model::{
    DepotResources, DomainModel, ObjectiveWeights, ShuntingMatrix, TerminalIndex, Train, Trip,
    DISTANCE_SCALE,
};

use super::schema::{RawInput, RawTrain, RawTrip};

/// Loads and validates one day's planning input. `weights` carries
/// whatever objective-weight overrides the CLI resolved before the solve; the
/// loader itself never reads weight configuration from the input file.
pub fn load_input(path: &Path, weights: ObjectiveWeights) -> Result<DomainModel> {
    if !path.exists() {
        return Err(InductionError::MissingFile(path.to_path_buf()));
    }
    info!("loading input from {}", path.display());
    let raw_text = std::fs::read_to_string(path)?;
    let raw: RawInput = serde_json::from_str(&raw_text)?;

    let planning_date = NaiveDate::parse_from_str(&raw.planning_date, "%Y-%m-%d")
        .map_err(|e| InductionError::BadInput(format!("invalid planning_date: {e}")))?;

    let trains = resolve_trains(&raw, planning_date)?;
    let trips = resolve_trips(&raw.trips)?;

    let mut terminal_ids: Vec<String> = Vec::new();
    for trip in &trips {
        terminal_ids.push(trip.start_stop_id.clone());
        terminal_ids.push(trip.end_stop_id.clone());
    }
    for edge in &raw.shunting_distances {
        terminal_ids.push(edge.from_stop_id.clone());
        terminal_ids.push(edge.to_stop_id.clone());
    }
    let terminals = TerminalIndex::build(terminal_ids);

    let mut shunting = ShuntingMatrix::new(&terminals);
    for edge in &raw.shunting_distances {
        if edge.distance_km < 0.0 {
            return Err(InductionError::BadInput(format!(
                "shunting edge {}->{} has negative distance",
                edge.from_stop_id, edge.to_stop_id
            )));
        }
        let from_idx = terminals.index_of(&edge.from_stop_id).unwrap();
        let to_idx = terminals.index_of(&edge.to_stop_id).unwrap();
        shunting.set(from_idx, to_idx, scale_distance(edge.distance_km));
    }

    let depot = DepotResources {
        cleaning_bays: raw.depot_resources.cleaning_bays,
        deep_clean_threshold_days: raw.depot_resources.deep_clean_threshold_days,
    };

    info!(
        "loaded {} trains, {} trips, {} terminals",
        trains.len(),
        trips.len(),
        terminals.len()
    );

    Ok(DomainModel::new(
        planning_date,
        trains,
        trips,
        terminals,
        shunting,
        depot,
        weights,
        raw.next_day_starts,
        raw.average_fleet_mileage,
    ))
}

fn scale_distance(km: f64) -> i64 {
    (km * DISTANCE_SCALE as f64).round() as i64
}

fn resolve_trains(raw: &RawInput, planning_date: NaiveDate) -> Result<Vec<Train>> {
    let mut seen_ids: HashSet<&str> = HashSet::new();
    let mut trains = Vec::with_capacity(raw.trains.len());
    for raw_train in &raw.trains {
        if !seen_ids.insert(raw_train.train_id.as_str()) {
            return Err(InductionError::BadInput(format!(
                "duplicate train id '{}'",
                raw_train.train_id
            )));
        }
        trains.push(resolve_train(raw_train, planning_date)?);
    }

    for job_card in &raw.job_cards {
        if job_card.status.eq_ignore_ascii_case("OPEN") {
            let train = trains
                .iter_mut()
                .find(|t| t.id == job_card.train_id)
                .ok_or_else(|| {
                    InductionError::BadInput(format!(
                        "job card references unknown train '{}'",
                        job_card.train_id
                    ))
                })?;
            train.has_open_job_card = true;
        }
    }
    for contract in &raw.ad_contracts {
        let train = trains
            .iter_mut()
            .find(|t| t.id == contract.train_id)
            .ok_or_else(|| {
                InductionError::BadInput(format!(
                    "ad contract references unknown train '{}'",
                    contract.train_id
                ))
            })?;
        train.has_branding_contract = true;
    }

    Ok(trains)
}

/// Default deep-clean duration (hours) when a record doesn't specify one, matching
/// the daily window from 23:00 plus 6h.
const DEFAULT_CLEANING_HOURS: f64 = 6.0;

fn resolve_train(raw: &RawTrain, planning_date: NaiveDate) -> Result<Train> {
    let mileage_km = raw.mileage.or(raw.initial_mileage_km).ok_or_else(|| {
        InductionError::BadInput(format!("train '{}' missing mileage", raw.train_id))
    })?;
    if mileage_km < 0 {
        return Err(InductionError::BadInput(format!(
            "train '{}' has negative mileage",
            raw.train_id
        )));
    }

    let anomaly_score = raw.anomaly_score.or(raw.health_score).ok_or_else(|| {
        InductionError::BadInput(format!(
            "train '{}' missing anomaly_score/health_score",
            raw.train_id
        ))
    })?;
    if !(0.0..=1.0).contains(&anomaly_score) {
        return Err(InductionError::BadInput(format!(
            "train '{}' anomaly score {} out of [0,1]",
            raw.train_id, anomaly_score
        )));
    }

    let has_legacy_fields = raw.last_deep_clean_date.is_some()
        || raw.telecom_cert_expiry_date.is_some()
        || raw.stock_cert_expiry_date.is_some();

    let (telecom_cert_expired, stock_cert_expired, days_since_last_deep_clean) = if has_legacy_fields
    {
        let telecom_expiry = parse_date_field(
            &raw.train_id,
            "telecom_cert_expiry_date",
            raw.telecom_cert_expiry_date.as_deref(),
        )?;
        let stock_expiry = parse_date_field(
            &raw.train_id,
            "stock_cert_expiry_date",
            raw.stock_cert_expiry_date.as_deref(),
        )?;
        let last_clean = parse_date_field(
            &raw.train_id,
            "last_deep_clean_date",
            raw.last_deep_clean_date.as_deref(),
        )?;
        let days = (planning_date - last_clean).num_days();
        (
            telecom_expiry < planning_date,
            stock_expiry < planning_date,
            Some(days),
        )
    } else {
        let certified = raw.is_fully_certified.ok_or_else(|| {
            InductionError::BadInput(format!(
                "train '{}' missing is_fully_certified",
                raw.train_id
            ))
        })?;
        // The flat schema collapses both certificates into one flag; attribute an
        // uncertified unit to the telecom certificate, since that's the first rule
        // the status cascade checks.
        (!certified, false, raw.days_since_last_deep_clean)
    };

    Ok(Train {
        id: raw.train_id.clone(),
        mileage_km,
        has_open_job_card: raw.has_open_job_card,
        telecom_cert_expired,
        stock_cert_expired,
        anomaly_score,
        has_branding_contract: raw.has_branding_contract,
        cleaning_required_hours: raw.cleaning_required_hours.unwrap_or(DEFAULT_CLEANING_HOURS),
        days_since_last_deep_clean,
    })
}

fn parse_date_field(train_id: &str, field: &str, value: Option<&str>) -> Result<NaiveDate> {
    let raw = value.ok_or_else(|| {
        InductionError::BadInput(format!("train '{train_id}' missing {field}"))
    })?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| InductionError::BadInput(format!("train '{train_id}' invalid {field}: {e}")))
}

fn resolve_trips(raw_trips: &[RawTrip]) -> Result<Vec<Trip>> {
    let mut seen_ids: HashSet<&str> = HashSet::new();
    let mut trips = Vec::with_capacity(raw_trips.len());
    for raw in raw_trips {
        if !seen_ids.insert(raw.trip_id.as_str()) {
            return Err(InductionError::BadInput(format!(
                "duplicate trip id '{}'",
                raw.trip_id
            )));
        }
        trips.push(resolve_trip(raw)?);
    }
    Ok(trips)
}

fn resolve_trip(raw: &RawTrip) -> Result<Trip> {
    let start_sec = parse_time_to_sec(&raw.trip_id, "start_time", &raw.start_time)?;
    let mut end_sec = parse_time_to_sec(&raw.trip_id, "end_time", &raw.end_time)?;
    if end_sec < start_sec {
        end_sec += 86_400;
    }
    if end_sec <= start_sec {
        return Err(InductionError::BadInput(format!(
            "trip '{}' has non-monotonic times after midnight adjustment",
            raw.trip_id
        )));
    }
    if raw.distance_km < 0.0 {
        return Err(InductionError::BadInput(format!(
            "trip '{}' has negative distance",
            raw.trip_id
        )));
    }

    let distance_scaled = scale_distance(raw.distance_km);
    let duration_hours = raw
        .duration_hours
        .unwrap_or_else(|| (end_sec - start_sec) as f64 / 3600.0);

    Ok(Trip {
        id: raw.trip_id.clone(),
        start_sec,
        end_sec,
        start_stop_id: raw.start_stop_id.clone(),
        end_stop_id: raw.end_stop_id.clone(),
        distance_scaled,
        is_late_evening: raw.is_late_evening.unwrap_or(false),
        duration_hours,
    })
}

fn parse_time_to_sec(trip_id: &str, field: &str, value: &str) -> Result<i64> {
    let time = NaiveTime::parse_from_str(value, "%H:%M:%S").map_err(|e| {
        InductionError::BadInput(format!(
            "trip '{trip_id}' invalid {field} '{value}': {e}"
        ))
    })?;
    Ok(time.num_seconds_from_midnight() as i64)
}
