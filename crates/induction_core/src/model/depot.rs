/// Depot-level resource limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepotResources {
    pub cleaning_bays: u32,
    pub deep_clean_threshold_days: i64,
}
