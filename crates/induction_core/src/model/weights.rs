use serde::{Deserialize, Serialize};

/// Objective term weights. Defaults match the reference weights; an
/// operator may override the whole set via `--config`, but the sign convention
/// (reward terms negative, penalty terms positive, trip coverage dominant) is a
/// modeling contract the defaults already satisfy and overrides are expected to
/// preserve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ObjectiveWeights {
    pub trip_coverage: f64,
    pub activation: f64,
    pub mileage_range: f64,
    pub branding: f64,
    pub cleaning_backlog: f64,
    /// Per-terminal mismatch weight, variant B (used when `next_day_starts` is present).
    pub shunting_mismatch: f64,
    /// Per-km weight, variant A (element-lookup fallback).
    pub shunting_distance: f64,
    pub health_risk: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            trip_coverage: -10_000.0,
            activation: 100.0,
            mileage_range: 1.0,
            branding: -20.0,
            cleaning_backlog: 500.0,
            shunting_mismatch: 300.0,
            shunting_distance: 100.0,
            health_risk: 5_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let weights: ObjectiveWeights =
            serde_json::from_str(r#"{"activation": 250.0}"#).expect("partial override parses");
        assert_eq!(weights.activation, 250.0);
        assert_eq!(weights.trip_coverage, ObjectiveWeights::default().trip_coverage);
        assert_eq!(weights.health_risk, ObjectiveWeights::default().health_risk);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result: Result<ObjectiveWeights, _> = serde_json::from_str(r#"{"bogus_field": 1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_object_round_trips_to_default() {
        let weights: ObjectiveWeights = serde_json::from_str("{}").expect("empty object parses");
        assert_eq!(weights, ObjectiveWeights::default());
    }
}
