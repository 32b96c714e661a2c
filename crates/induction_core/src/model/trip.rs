/// A single timetabled trip, with times already normalized to seconds since
/// midnight of the planning date and midnight-crossing already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: String,
    pub start_sec: i64,
    pub end_sec: i64,
    pub start_stop_id: String,
    pub end_stop_id: String,
    /// Distance scaled by `crate::model::DISTANCE_SCALE` (one decimal of precision
    /// preserved as an integer, per the loader's scaling policy).
    pub distance_scaled: i64,
    pub is_late_evening: bool,
    pub duration_hours: f64,
}

impl Trip {
    pub fn overlaps(&self, other: &Trip) -> bool {
        self.start_sec < other.end_sec && other.start_sec < self.end_sec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(id: &str, start_sec: i64, end_sec: i64) -> Trip {
        Trip {
            id: id.to_string(),
            start_sec,
            end_sec,
            start_stop_id: "A".to_string(),
            end_stop_id: "B".to_string(),
            distance_scaled: 0,
            is_late_evening: false,
            duration_hours: (end_sec - start_sec) as f64 / 3600.0,
        }
    }

    #[test]
    fn overlapping_intervals_detected_either_direction() {
        let a = trip("A", 0, 100);
        let b = trip("B", 50, 150);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn back_to_back_trips_do_not_overlap() {
        let a = trip("A", 0, 100);
        let b = trip("B", 100, 200);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn disjoint_trips_do_not_overlap() {
        let a = trip("A", 0, 100);
        let b = trip("B", 200, 300);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn one_trip_contained_in_another_overlaps() {
        let outer = trip("OUT", 0, 1000);
        let inner = trip("IN", 100, 200);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}
