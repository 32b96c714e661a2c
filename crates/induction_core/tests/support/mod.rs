use chrono::NaiveDate;
use induction_core::model::{
    DepotResources, DomainModel, ObjectiveWeights, ShuntingMatrix, TerminalIndex, Train, Trip,
    DISTANCE_SCALE,
};

pub fn train(id: &str, mileage_km: i64, anomaly_score: f64) -> Train {
    Train {
        id: id.to_string(),
        mileage_km,
        has_open_job_card: false,
        telecom_cert_expired: false,
        stock_cert_expired: false,
        anomaly_score,
        has_branding_contract: false,
        cleaning_required_hours: 6.0,
        days_since_last_deep_clean: None,
    }
}

pub fn trip(id: &str, start_sec: i64, end_sec: i64, from: &str, to: &str, distance_km: i64) -> Trip {
    Trip {
        id: id.to_string(),
        start_sec,
        end_sec,
        start_stop_id: from.to_string(),
        end_stop_id: to.to_string(),
        distance_scaled: distance_km * DISTANCE_SCALE,
        is_late_evening: false,
        duration_hours: (end_sec - start_sec) as f64 / 3600.0,
    }
}

pub fn model(trains: Vec<Train>, trips: Vec<Trip>, cleaning_bays: u32) -> DomainModel {
    model_with_next_day(trains, trips, cleaning_bays, None)
}

pub fn model_with_next_day(
    trains: Vec<Train>,
    trips: Vec<Trip>,
    cleaning_bays: u32,
    next_day_starts: Option<induction_core::model::NextDayStarts>,
) -> DomainModel {
    let mut terminal_ids = Vec::new();
    for t in &trips {
        terminal_ids.push(t.start_stop_id.clone());
        terminal_ids.push(t.end_stop_id.clone());
    }
    let terminals = TerminalIndex::build(terminal_ids);
    let shunting = ShuntingMatrix::new(&terminals);
    let depot = DepotResources {
        cleaning_bays,
        deep_clean_threshold_days: 30,
    };
    DomainModel::new(
        NaiveDate::from_ymd_opt(2026, 7, 29).unwrap(),
        trains,
        trips,
        terminals,
        shunting,
        depot,
        ObjectiveWeights::default(),
        next_day_starts,
        None,
    )
}
