use std::collections::BTreeMap;

/// Required next-morning start counts per terminal. A `BTreeMap` rather than a
/// hash map so iteration order (and therefore the mismatch terms posted into the
/// objective) is deterministic across runs.
pub type NextDayStarts = BTreeMap<String, i64>;
