use std::collections::HashMap;

use good_lp::Variable;

/// Every decision variable the solve needs, keyed by the stable indices into
/// `DomainModel::trains`/`DomainModel::trips`. The Variable Builder exclusively
/// owns these handles; every other builder references them through this
/// struct rather than holding its own copies.
#[derive(Debug, Default)]
pub struct Handles {
    /// `assign[t,j]`, present only for `(train_idx, trip_idx)` pairs where the
    /// train is eligible.
    pub assign: HashMap<(usize, usize), Variable>,
    /// `train_used[t]`, present only for eligible trains.
    pub train_used: HashMap<usize, Variable>,
    /// `trip_serviced[j]`, present for every trip.
    pub trip_serviced: HashMap<usize, Variable>,
    /// `is_cleaned[t]`, present only for trains due for a deep clean.
    pub is_cleaned: HashMap<usize, Variable>,
    /// `final_mileage[t]`, present only for eligible trains (mileage of an
    /// ineligible train is a constant, since it can never be assigned a trip).
    pub final_mileage: HashMap<usize, Variable>,
    /// Fleet-wide mileage envelope used by the mileage-range objective term.
    pub max_mileage: Option<Variable>,
    pub min_mileage: Option<Variable>,

    /// Variant A (element-lookup) helpers, present only when the domain model
    /// has no `next_day_starts` and therefore falls back to variant A.
    pub is_first: HashMap<(usize, usize), Variable>,
    pub is_last: HashMap<(usize, usize), Variable>,
    pub shunting_dist: HashMap<usize, Variable>,
    /// AND-linearization of `is_first[t,j1] ∧ is_last[t,j2]`, keyed `(train_idx,
    /// first_trip_idx, last_trip_idx)` — the standard decomposition of the
    /// two-index element lookup `D[last_loc_idx, first_loc_idx]`.
    pub shunting_conj: HashMap<(usize, usize, usize), Variable>,

    /// Variant B (mismatch) helpers, present only when `next_day_starts` is supplied.
    pub mismatch: HashMap<String, Variable>,
}

impl Handles {
    pub fn assign_var(&self, train_idx: usize, trip_idx: usize) -> Option<Variable> {
        self.assign.get(&(train_idx, trip_idx)).copied()
    }

    pub fn train_used_var(&self, train_idx: usize) -> Option<Variable> {
        self.train_used.get(&train_idx).copied()
    }

    pub fn is_cleaned_var(&self, train_idx: usize) -> Option<Variable> {
        self.is_cleaned.get(&train_idx).copied()
    }
}
