//! Raw JSON DTOs for the day-input record. Kept separate from the domain
//! model so the loader is the only place that has to know about either accepted
//! train schema, with `deny_unknown_fields` on every struct.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawInput {
    pub planning_date: String,
    pub trains: Vec<RawTrain>,
    pub trips: Vec<RawTrip>,
    #[serde(default)]
    pub shunting_distances: Vec<RawShuntingEdge>,
    #[serde(default)]
    pub average_fleet_mileage: Option<f64>,
    pub depot_resources: RawDepotResources,
    #[serde(default)]
    pub next_day_starts: Option<BTreeMap<String, i64>>,
    /// Legacy schema only: open job cards keyed by train id.
    #[serde(default)]
    pub job_cards: Vec<RawJobCard>,
    /// Legacy schema only: active branding/advertising contracts keyed by train id.
    #[serde(default)]
    pub ad_contracts: Vec<RawAdContract>,
}

/// Accepts fields from either recognized train schema; the loader decides which
/// fields were actually supplied and rejects records that are missing a complete
/// set from either one.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTrain {
    pub train_id: String,

    // Flat schema.
    #[serde(default)]
    pub mileage: Option<i64>,
    #[serde(default)]
    pub is_fully_certified: Option<bool>,
    #[serde(default)]
    pub anomaly_score: Option<f64>,

    // Legacy schema.
    #[serde(default)]
    pub initial_mileage_km: Option<i64>,
    #[serde(default)]
    pub health_score: Option<f64>,
    #[serde(default)]
    pub last_deep_clean_date: Option<String>,
    #[serde(default)]
    pub telecom_cert_expiry_date: Option<String>,
    #[serde(default)]
    pub stock_cert_expiry_date: Option<String>,

    // Present under either schema.
    #[serde(default)]
    pub has_open_job_card: bool,
    #[serde(default)]
    pub has_branding_contract: bool,
    #[serde(default)]
    pub cleaning_required_hours: Option<f64>,
    #[serde(default)]
    pub days_since_last_deep_clean: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawJobCard {
    pub train_id: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawAdContract {
    pub train_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTrip {
    pub trip_id: String,
    pub start_time: String,
    pub end_time: String,
    pub start_stop_id: String,
    pub end_stop_id: String,
    pub distance_km: f64,
    #[serde(default)]
    pub duration_hours: Option<f64>,
    #[serde(default)]
    pub is_late_evening: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawShuntingEdge {
    pub from_stop_id: String,
    pub to_stop_id: String,
    pub distance_km: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawDepotResources {
    pub cleaning_bays: u32,
    pub deep_clean_threshold_days: i64,
}
