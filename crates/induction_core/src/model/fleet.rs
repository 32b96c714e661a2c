use std::collections::HashMap;

use chrono::NaiveDate;

use super::depot::DepotResources;
use super::next_day::NextDayStarts;
use super::shunting::ShuntingMatrix;
use super::terminal::TerminalIndex;
use super::train::Train;
use super::trip::Trip;
use super::weights::ObjectiveWeights;

/// Upper bound on all time variables (seconds), large enough to accommodate a
/// trip that crosses midnight.
pub const HORIZON_SEC: i64 = 2 * 86_400;

/// Scale factor applied to real-valued km distances before they become integers,
/// preserving one decimal of precision throughout the solve.
pub const DISTANCE_SCALE: i64 = 10;

/// Immutable, validated view of a single day's planning inputs. Owned exclusively
/// by the pipeline; every builder downstream holds only a shared reference.
#[derive(Debug, Clone)]
pub struct DomainModel {
    pub planning_date: NaiveDate,
    pub trains: Vec<Train>,
    pub trips: Vec<Trip>,
    pub terminals: TerminalIndex,
    pub shunting: ShuntingMatrix,
    pub depot: DepotResources,
    pub weights: ObjectiveWeights,
    pub next_day_starts: Option<NextDayStarts>,
    pub average_fleet_mileage: Option<f64>,
    train_index: HashMap<String, usize>,
    trip_index: HashMap<String, usize>,
}

impl DomainModel {
    pub fn new(
        planning_date: NaiveDate,
        trains: Vec<Train>,
        trips: Vec<Trip>,
        terminals: TerminalIndex,
        shunting: ShuntingMatrix,
        depot: DepotResources,
        weights: ObjectiveWeights,
        next_day_starts: Option<NextDayStarts>,
        average_fleet_mileage: Option<f64>,
    ) -> Self {
        let train_index = trains
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.clone(), i))
            .collect();
        let trip_index = trips
            .iter()
            .enumerate()
            .map(|(i, j)| (j.id.clone(), i))
            .collect();
        Self {
            planning_date,
            trains,
            trips,
            terminals,
            shunting,
            depot,
            weights,
            next_day_starts,
            average_fleet_mileage,
            train_index,
            trip_index,
        }
    }

    pub fn train(&self, id: &str) -> Option<&Train> {
        self.train_index.get(id).map(|&i| &self.trains[i])
    }

    pub fn trip(&self, id: &str) -> Option<&Trip> {
        self.trip_index.get(id).map(|&i| &self.trips[i])
    }

    /// Variant B (next-day-start mismatch) is preferred whenever `next_day_starts`
    /// is supplied; variant A (element-lookup shunting distance) is the fallback.
    pub fn uses_shunting_variant_b(&self) -> bool {
        self.next_day_starts.is_some()
    }

    pub fn computed_average_fleet_mileage(&self) -> f64 {
        if let Some(avg) = self.average_fleet_mileage {
            return avg;
        }
        if self.trains.is_empty() {
            return 0.0;
        }
        let total: i64 = self.trains.iter().map(|t| t.mileage_km).sum();
        total as f64 / self.trains.len() as f64
    }
}
