use good_lp::{variable, ProblemVariables};
use log::debug;

use crate::model::DomainModel;

use super::handles::Handles;

/// Creates every decision variable and reified helper the constraint and
/// objective builders need. Returns the `good_lp` variable pool together
/// with the stable handles that reference each variable by `(train_idx, trip_idx)`
/// or `train_idx`/`trip_idx` alone.
pub fn build_variables(model: &DomainModel) -> (ProblemVariables, Handles) {
    let mut vars = ProblemVariables::new();
    let mut handles = Handles::default();

    for (t, train) in model.trains.iter().enumerate() {
        if !train.is_eligible() {
            continue;
        }
        handles
            .train_used
            .insert(t, vars.add(variable().binary()));
        for (j, _trip) in model.trips.iter().enumerate() {
            handles
                .assign
                .insert((t, j), vars.add(variable().binary()));
        }

        let initial_scaled = train.mileage_km * crate::model::DISTANCE_SCALE;
        let max_mileage = initial_scaled
            + model.trips.iter().map(|trip| trip.distance_scaled).sum::<i64>();
        handles.final_mileage.insert(
            t,
            vars.add(
                variable()
                    .integer()
                    .min(initial_scaled as f64)
                    .max(max_mileage as f64),
            ),
        );

        if model.uses_shunting_variant_b() {
            // handled globally below, not per train
        } else {
            for (j, _trip) in model.trips.iter().enumerate() {
                handles
                    .is_first
                    .insert((t, j), vars.add(variable().binary()));
                handles
                    .is_last
                    .insert((t, j), vars.add(variable().binary()));
            }
            let max_dist = model.shunting.max_distance();
            handles.shunting_dist.insert(
                t,
                vars.add(variable().integer().min(0.0).max(max_dist as f64)),
            );
            for (j1, _) in model.trips.iter().enumerate() {
                for (j2, _) in model.trips.iter().enumerate() {
                    handles
                        .shunting_conj
                        .insert((t, j1, j2), vars.add(variable().binary()));
                }
            }
        }
    }

    for (j, _trip) in model.trips.iter().enumerate() {
        handles
            .trip_serviced
            .insert(j, vars.add(variable().binary()));
    }

    for (t, train) in model.trains.iter().enumerate() {
        if train.is_due_for_cleaning(model.depot.deep_clean_threshold_days) {
            handles
                .is_cleaned
                .insert(t, vars.add(variable().binary()));
        }
    }

    if !model.trains.is_empty() {
        let scale = crate::model::DISTANCE_SCALE;
        let lowest = model.trains.iter().map(|t| t.mileage_km * scale).min().unwrap_or(0);
        let total_possible: i64 = model.trains.iter().map(|t| t.mileage_km * scale).sum::<i64>()
            + model.trains.len() as i64
                * model.trips.iter().map(|trip| trip.distance_scaled).sum::<i64>();
        handles.min_mileage = Some(vars.add(variable().integer().min(0.0).max(total_possible as f64)));
        handles.max_mileage = Some(vars.add(
            variable()
                .integer()
                .min(lowest as f64)
                .max(total_possible as f64),
        ));
    }

    if let Some(next_day_starts) = &model.next_day_starts {
        for terminal_id in next_day_starts.keys() {
            handles.mismatch.insert(
                terminal_id.clone(),
                vars.add(variable().integer().min(0.0)),
            );
        }
    }

    debug!(
        "built {} assignment variables across {} trains and {} trips",
        handles.assign.len(),
        model.trains.len(),
        model.trips.len()
    );

    (vars, handles)
}
