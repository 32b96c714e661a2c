use good_lp::{constraint, Expression, SolverModel};

use crate::model::DomainModel;

use super::handles::Handles;

/// Expression for a train's final mileage in scaled units (`crate::model::DISTANCE_SCALE`):
/// the decision variable if the train is eligible (and therefore could have been
/// assigned trips), or the constant initial mileage otherwise (an ineligible
/// train's mileage cannot change).
fn final_mileage_expr(model: &DomainModel, handles: &Handles, train_idx: usize) -> Expression {
    match handles.final_mileage.get(&train_idx) {
        Some(v) => Expression::from(*v),
        None => Expression::from(
            (model.trains[train_idx].mileage_km * crate::model::DISTANCE_SCALE) as f64,
        ),
    }
}

fn sum_vars<I: IntoIterator<Item = good_lp::Variable>>(vars: I) -> Expression {
    vars.into_iter()
        .fold(Expression::from(0.0), |acc, v| acc + v)
}

/// Posts every hard constraint onto `problem`.
pub fn add_constraints<M: SolverModel>(problem: &mut M, model: &DomainModel, handles: &Handles) {
    add_trip_coverage(problem, model, handles);
    add_non_overlap(problem, model, handles);
    add_usage_reification(problem, model, handles);
    add_cleaning_exclusion(problem, handles);
    add_cleaning_capacity(problem, model, handles);
    add_mileage_linkage(problem, model, handles);
    add_mileage_envelope(problem, model, handles);
    if model.uses_shunting_variant_b() {
        add_shunting_variant_b(problem, model, handles);
    } else {
        add_shunting_variant_a(problem, model, handles);
    }
}

/// C1 — trip coverage link: `Σ_t assign[t,j] == trip_serviced[j]`, with the
/// uniqueness half (`Σ_t assign[t,j] ≤ 1`) posted explicitly too since it's the
/// clause a property test checks for directly.
fn add_trip_coverage(problem: &mut impl SolverModel, model: &DomainModel, handles: &Handles) {
    for (j, _trip) in model.trips.iter().enumerate() {
        let serviced = *handles.trip_serviced.get(&j).expect("trip_serviced built for every trip");
        let coverage = sum_vars(
            model
                .trains
                .iter()
                .enumerate()
                .filter_map(|(t, _)| handles.assign_var(t, j)),
        );
        problem.add_constraint(constraint!(coverage.clone() == serviced));
        problem.add_constraint(constraint!(coverage <= 1));
    }
}

/// C2 — per-train non-overlap, pairwise encoding: for every pair of trips whose
/// half-open intervals intersect, at most one may be assigned to the same train.
fn add_non_overlap(problem: &mut impl SolverModel, model: &DomainModel, handles: &Handles) {
    for (t, train) in model.trains.iter().enumerate() {
        if !train.is_eligible() {
            continue;
        }
        for j1 in 0..model.trips.len() {
            for j2 in (j1 + 1)..model.trips.len() {
                if model.trips[j1].overlaps(&model.trips[j2]) {
                    let a1 = handles.assign_var(t, j1).unwrap();
                    let a2 = handles.assign_var(t, j2).unwrap();
                    problem.add_constraint(constraint!(a1 + a2 <= 1));
                }
            }
        }
    }
}

/// C3 — usage reification: `train_used[t] ⇔ (Σ_j assign[t,j] ≥ 1)`.
fn add_usage_reification(problem: &mut impl SolverModel, model: &DomainModel, handles: &Handles) {
    let trip_count = model.trips.len() as f64;
    for (t, train) in model.trains.iter().enumerate() {
        if !train.is_eligible() {
            continue;
        }
        let used = handles.train_used_var(t).unwrap();
        let total_assigned = sum_vars(
            model
                .trips
                .iter()
                .enumerate()
                .filter_map(|(j, _)| handles.assign_var(t, j)),
        );
        problem.add_constraint(constraint!(total_assigned.clone() <= trip_count * used));
        problem.add_constraint(constraint!(total_assigned >= used));
    }
}

/// C4 (cleaning half) — `is_cleaned[t] ⇒ ¬train_used[t]`.
fn add_cleaning_exclusion(problem: &mut impl SolverModel, handles: &Handles) {
    for (&t, &cleaned) in &handles.is_cleaned {
        if let Some(used) = handles.train_used_var(t) {
            problem.add_constraint(constraint!(used + cleaned <= 1));
        }
    }
}

/// C5 — cumulative cleaning-bay capacity. Every cleaning-eligible train's
/// interval shares the same fixed start instant (23:00), so the cumulative
/// resource constraint degenerates to one linear capacity constraint.
fn add_cleaning_capacity(problem: &mut impl SolverModel, model: &DomainModel, handles: &Handles) {
    if handles.is_cleaned.is_empty() {
        return;
    }
    let total_cleaned = sum_vars(handles.is_cleaned.values().copied());
    problem.add_constraint(constraint!(
        total_cleaned <= model.depot.cleaning_bays as f64
    ));
}

/// C6 — mileage linkage: `final_mileage[t] = initial_mileage[t] + Σ_j assign[t,j] · distance[j]`.
fn add_mileage_linkage(problem: &mut impl SolverModel, model: &DomainModel, handles: &Handles) {
    for (t, train) in model.trains.iter().enumerate() {
        let Some(final_mileage) = handles.final_mileage.get(&t).copied() else {
            continue;
        };
        let accrued = sum_vars(model.trips.iter().enumerate().filter_map(|(j, trip)| {
            handles
                .assign_var(t, j)
                .map(|a| (a, trip.distance_scaled))
        }).map(|(a, dist)| dist as f64 * Expression::from(a)).fold(Expression::from(0.0), |acc, e| acc + e));
        let initial_scaled = (train.mileage_km * crate::model::DISTANCE_SCALE) as f64;
        problem.add_constraint(constraint!(
            final_mileage == initial_scaled + accrued
        ));
    }
}

/// Envelope constraints feeding the mileage-range objective term: `max_mileage ≥
/// final_mileage[t]` and `min_mileage ≤ final_mileage[t]` for every train,
/// including ineligible ones whose mileage is a fixed constant.
fn add_mileage_envelope(problem: &mut impl SolverModel, model: &DomainModel, handles: &Handles) {
    let (Some(max_m), Some(min_m)) = (handles.max_mileage, handles.min_mileage) else {
        return;
    };
    for (t, _train) in model.trains.iter().enumerate() {
        let mileage = final_mileage_expr(model, handles, t);
        problem.add_constraint(constraint!(max_m >= mileage.clone()));
        problem.add_constraint(constraint!(min_m <= mileage));
    }
}

/// C7 — variant A, element-lookup shunting deduction. Used only when the domain
/// model has no `next_day_starts`.
fn add_shunting_variant_a(problem: &mut impl SolverModel, model: &DomainModel, handles: &Handles) {
    for (t, train) in model.trains.iter().enumerate() {
        if !train.is_eligible() {
            continue;
        }
        let used = handles.train_used_var(t).unwrap();

        // Exactly one is_first / is_last indicator is set when the train is used.
        let first_sum = sum_vars(
            model
                .trips
                .iter()
                .enumerate()
                .map(|(j, _)| *handles.is_first.get(&(t, j)).unwrap()),
        );
        problem.add_constraint(constraint!(first_sum == used));
        let last_sum = sum_vars(
            model
                .trips
                .iter()
                .enumerate()
                .map(|(j, _)| *handles.is_last.get(&(t, j)).unwrap()),
        );
        problem.add_constraint(constraint!(last_sum == used));

        for (j, trip) in model.trips.iter().enumerate() {
            let is_first = *handles.is_first.get(&(t, j)).unwrap();
            let is_last = *handles.is_last.get(&(t, j)).unwrap();
            let assign = handles.assign_var(t, j).unwrap();
            problem.add_constraint(constraint!(is_first <= assign));
            problem.add_constraint(constraint!(is_last <= assign));

            // Tie-break: a trip can only be "first" if no earlier-or-lex-smaller
            // assigned trip exists (analogously "last" with later-or-lex-smaller).
            for (j2, trip2) in model.trips.iter().enumerate() {
                if j2 == j {
                    continue;
                }
                let earlier_or_tied_smaller = trip2.start_sec < trip.start_sec
                    || (trip2.start_sec == trip.start_sec && trip2.id < trip.id);
                if earlier_or_tied_smaller {
                    let other_assign = handles.assign_var(t, j2).unwrap();
                    problem.add_constraint(constraint!(is_first + other_assign <= 1));
                }
                let later_or_tied_smaller = trip2.end_sec > trip.end_sec
                    || (trip2.end_sec == trip.end_sec && trip2.id < trip.id);
                if later_or_tied_smaller {
                    let other_assign = handles.assign_var(t, j2).unwrap();
                    problem.add_constraint(constraint!(is_last + other_assign <= 1));
                }
            }
        }

        // AND-linearization of the element lookup: shunting_dist[t] = Σ_{j1,j2}
        // (is_first[t,j1] ∧ is_last[t,j2]) · D[end_stop(j2), start_stop(j1)].
        let mut dist_expr = Expression::from(0.0);
        for (j1, trip1) in model.trips.iter().enumerate() {
            let start_idx = model.terminals.index_of(&trip1.start_stop_id).unwrap();
            let is_first = *handles.is_first.get(&(t, j1)).unwrap();
            for (j2, trip2) in model.trips.iter().enumerate() {
                let end_idx = model.terminals.index_of(&trip2.end_stop_id).unwrap();
                let is_last = *handles.is_last.get(&(t, j2)).unwrap();
                let conj = *handles.shunting_conj.get(&(t, j1, j2)).unwrap();
                problem.add_constraint(constraint!(conj <= is_first));
                problem.add_constraint(constraint!(conj <= is_last));
                problem.add_constraint(constraint!(conj >= is_first + is_last - 1));

                let weight = model.shunting.get(end_idx, start_idx) as f64;
                if weight != 0.0 {
                    dist_expr = dist_expr + weight * Expression::from(conj);
                }
            }
        }
        let shunting_dist = *handles.shunting_dist.get(&t).unwrap();
        problem.add_constraint(constraint!(shunting_dist == dist_expr));
    }
}

/// C7′ — variant B, next-day terminal-start mismatch. Preferred whenever
/// `next_day_starts` is supplied.
fn add_shunting_variant_b(problem: &mut impl SolverModel, model: &DomainModel, handles: &Handles) {
    let Some(next_day_starts) = &model.next_day_starts else {
        return;
    };
    for (terminal_id, &required) in next_day_starts {
        let n_s = sum_vars(model.trips.iter().enumerate().filter(|(_, trip)| {
            trip.is_late_evening && trip.end_stop_id == *terminal_id
        }).flat_map(|(j, _)| {
            model
                .trains
                .iter()
                .enumerate()
                .filter_map(move |(t, _)| handles.assign_var(t, j))
        }));
        let mismatch = *handles
            .mismatch
            .get(terminal_id)
            .expect("mismatch variable built for every next_day_starts terminal");
        problem.add_constraint(constraint!(mismatch.clone() >= n_s.clone() - required as f64));
        problem.add_constraint(constraint!(mismatch >= required as f64 - n_s));
    }
}
