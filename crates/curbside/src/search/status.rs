use crate::record::PermitRecord;

/// Restriction on permit status.
///
/// Matching is exact and case-insensitive. A status no record carries is not
/// an error; it simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// No restriction.
    #[default]
    Any,
    /// Only records whose status equals this value. Stored lower-cased.
    Exact(String),
}

impl StatusFilter {
    /// Parameter value that disables status filtering, in any case.
    pub const ALL: &'static str = "all";
    pub const APPROVED: &'static str = "APPROVED";

    /// Filter for a literal status value; `all` in any case means [`StatusFilter::Any`].
    ///
    /// The value is only lower-cased, so surrounding whitespace must match too.
    #[must_use]
    pub fn exact(status: &str) -> Self {
        let status = status.to_lowercase();
        if status == Self::ALL {
            Self::Any
        } else {
            Self::Exact(status)
        }
    }

    #[must_use]
    pub fn approved() -> Self {
        Self::exact(Self::APPROVED)
    }

    /// Interpret an optional request parameter. Absent or blank yields `None`
    /// so each operation can apply its own default.
    #[must_use]
    pub fn from_param(status: Option<&str>) -> Option<Self> {
        super::params::present(status).map(Self::exact)
    }

    #[must_use]
    pub fn matches(&self, record: &PermitRecord) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(status) => record.status_key() == status.as_str(),
        }
    }

    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: &str) -> PermitRecord {
        PermitRecord::new("Truck", "1 Main St", status, None)
    }

    #[test]
    fn test_all_in_any_case_disables_filter() {
        for value in ["all", "ALL", "All"] {
            assert_eq!(StatusFilter::exact(value), StatusFilter::Any);
        }
    }

    #[test]
    fn test_exact_is_case_insensitive_equality() {
        let filter = StatusFilter::exact("approved");
        assert!(filter.matches(&record("APPROVED")));
        assert!(filter.matches(&record("Approved")));
        assert!(!filter.matches(&record("NOT APPROVED")));
        assert!(!filter.matches(&record("APPROVE")));
    }

    #[test]
    fn test_from_param_blank_is_none() {
        assert_eq!(StatusFilter::from_param(None), None);
        assert_eq!(StatusFilter::from_param(Some("")), None);
        assert_eq!(StatusFilter::from_param(Some("   ")), None);
        assert_eq!(
            StatusFilter::from_param(Some("Expired")),
            Some(StatusFilter::Exact("expired".into()))
        );
    }

    #[test]
    fn test_padded_status_is_not_trimmed() {
        let filter = StatusFilter::exact(" approved ");
        assert_eq!(filter, StatusFilter::Exact(" approved ".into()));
        assert!(!filter.matches(&record("APPROVED")));
        assert!(!StatusFilter::exact(" all ").is_any());
    }

    #[test]
    fn test_unknown_status_matches_nothing() {
        let filter = StatusFilter::exact("bogus");
        assert!(!filter.matches(&record("APPROVED")));
        assert!(!filter.is_any());
    }
}
