use good_lp::Expression;

use crate::model::DomainModel;

use super::handles::Handles;

fn sum_vars<I: IntoIterator<Item = good_lp::Variable>>(vars: I) -> Expression {
    vars.into_iter()
        .fold(Expression::from(0.0), |acc, v| acc + v)
}

/// Assembles the single weighted-sum minimization objective. Every term
/// is added with its signed weight already baked in, so reward terms (trip
/// coverage, branding hours) carry a negative weight and penalty terms a
/// positive one — the caller just minimizes the resulting expression.
pub fn build_objective(model: &DomainModel, handles: &Handles) -> Expression {
    let weights = &model.weights;
    let mut objective = Expression::from(0.0);

    // Trip coverage (reward).
    let coverage = sum_vars(handles.trip_serviced.values().copied());
    objective = objective + weights.trip_coverage * coverage;

    // Activation cost.
    let activation = sum_vars(handles.train_used.values().copied());
    objective = objective + weights.activation * activation;

    // Mileage range. max_m/min_m live in scaled units; convert the weight back
    // to a per-km basis so `weights.mileage_range` keeps its documented meaning.
    if let (Some(max_m), Some(min_m)) = (handles.max_mileage, handles.min_mileage) {
        let range = Expression::from(max_m) - Expression::from(min_m);
        let per_km_weight = weights.mileage_range / crate::model::DISTANCE_SCALE as f64;
        objective = objective + per_km_weight * range;
    }

    // Branding hours (reward).
    let mut branding_hours = Expression::from(0.0);
    for (t, train) in model.trains.iter().enumerate() {
        if !train.has_branding_contract {
            continue;
        }
        for (j, trip) in model.trips.iter().enumerate() {
            if let Some(assign) = handles.assign_var(t, j) {
                branding_hours = branding_hours + trip.duration_hours * Expression::from(assign);
            }
        }
    }
    objective = objective + weights.branding * branding_hours;

    // Cleaning backlog: Σ over due trains of (1 - is_cleaned[t]).
    let due_count = handles.is_cleaned.len() as f64;
    let cleaned_sum = sum_vars(handles.is_cleaned.values().copied());
    let backlog = Expression::from(due_count) - cleaned_sum;
    objective = objective + weights.cleaning_backlog * backlog;

    // Shunting term: variant B (mismatch) when available, else variant A (distance).
    if model.uses_shunting_variant_b() {
        let mismatch_sum = sum_vars(handles.mismatch.values().copied());
        objective = objective + weights.shunting_mismatch * mismatch_sum;
    } else {
        let dist_sum = sum_vars(handles.shunting_dist.values().copied());
        let per_km_weight = weights.shunting_distance / crate::model::DISTANCE_SCALE as f64;
        objective = objective + per_km_weight * dist_sum;
    }

    // Health risk: Σ_t train_used[t] · anomaly_score[t], score scaled ×100 to
    // stay integral. Divide the weight back down by that same factor so
    // `weights.health_risk` keeps its documented per-unit-score meaning and
    // trip coverage still dominates by an order of magnitude.
    let mut health_risk = Expression::from(0.0);
    for (t, train) in model.trains.iter().enumerate() {
        if let Some(used) = handles.train_used_var(t) {
            let scaled_score = (train.anomaly_score * 100.0).round();
            health_risk = health_risk + scaled_score * Expression::from(used);
        }
    }
    let per_unit_health_weight = weights.health_risk / 100.0;
    objective = objective + per_unit_health_weight * health_risk;

    objective
}
