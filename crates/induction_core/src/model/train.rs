/// A single rolling-stock unit's state for the planning day.
///
/// Built by the loader from either of the two accepted input schemas (see
/// `crate::input::schema`); downstream code never sees the schema distinction again.
#[derive(Debug, Clone, PartialEq)]
pub struct Train {
    pub id: String,
    pub mileage_km: i64,
    pub has_open_job_card: bool,
    pub telecom_cert_expired: bool,
    pub stock_cert_expired: bool,
    /// 1.0 = highest failure risk.
    pub anomaly_score: f64,
    pub has_branding_contract: bool,
    pub cleaning_required_hours: f64,
    pub days_since_last_deep_clean: Option<i64>,
}

impl Train {
    /// A train is eligible for service if it has no open job card and no expired
    /// certificate on the planning date. Ineligible trains never get assignment
    /// variables (C4).
    pub fn is_eligible(&self) -> bool {
        !self.has_open_job_card && !self.telecom_cert_expired && !self.stock_cert_expired
    }

    /// Whether this unit is due for a deep clean (C5).
    pub fn is_due_for_cleaning(&self, threshold_days: i64) -> bool {
        self.days_since_last_deep_clean
            .map(|days| days > threshold_days)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(id: &str) -> Train {
        Train {
            id: id.to_string(),
            mileage_km: 0,
            has_open_job_card: false,
            telecom_cert_expired: false,
            stock_cert_expired: false,
            anomaly_score: 0.0,
            has_branding_contract: false,
            cleaning_required_hours: 6.0,
            days_since_last_deep_clean: None,
        }
    }

    #[test]
    fn eligible_with_no_holds() {
        assert!(base("T1").is_eligible());
    }

    #[test]
    fn job_card_blocks_eligibility() {
        let mut t = base("T1");
        t.has_open_job_card = true;
        assert!(!t.is_eligible());
    }

    #[test]
    fn either_expired_certificate_blocks_eligibility() {
        let mut telecom = base("T1");
        telecom.telecom_cert_expired = true;
        assert!(!telecom.is_eligible());

        let mut stock = base("T2");
        stock.stock_cert_expired = true;
        assert!(!stock.is_eligible());
    }

    #[test]
    fn cleaning_due_only_when_strictly_over_threshold() {
        let mut t = base("T1");
        t.days_since_last_deep_clean = Some(30);
        assert!(!t.is_due_for_cleaning(30), "exactly at threshold is not yet due");
        t.days_since_last_deep_clean = Some(31);
        assert!(t.is_due_for_cleaning(30));
    }

    #[test]
    fn never_cleaned_train_is_not_due() {
        assert!(!base("T1").is_due_for_cleaning(30));
    }
}
