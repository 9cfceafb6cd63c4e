use crate::{
    error::CurbsideError,
    search::{NearestConfig, StatusFilter},
};

/// Builder for nearest search configurations with ergonomic defaults
#[derive(Debug, Clone, Default)]
pub struct NearestConfigBuilder {
    config: NearestConfig,
}

impl NearestConfigBuilder {
    /// Create a new builder: approved permits only, five results
    pub fn new() -> Self {
        Self {
            config: NearestConfig::default(),
        }
    }

    /// Create a builder that ranks every permit regardless of status
    pub fn any_status() -> Self {
        Self::new().include_all_statuses()
    }

    /// Restrict results to one status, matched exactly and ignoring case.
    ///
    /// `all` in any case removes the restriction. A blank status is rejected
    /// since it would silently match nothing.
    pub fn status(mut self, status: &str) -> Result<Self, CurbsideError> {
        if status.trim().is_empty() {
            return Err(CurbsideError::ConfigError(
                "Status filter must not be blank; use `all` to disable it".to_string(),
            ));
        }
        self.config.status = StatusFilter::exact(status);
        Ok(self)
    }

    /// Rank permits of every status
    pub fn include_all_statuses(mut self) -> Self {
        self.config.status = StatusFilter::Any;
        self
    }

    /// Set the status filter directly
    pub fn status_filter(mut self, status: StatusFilter) -> Self {
        self.config.status = status;
        self
    }

    /// Set the maximum number of results to return
    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = limit;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> NearestConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builder() {
        let config = NearestConfigBuilder::new().build();
        assert_eq!(config.limit, 5);
        assert_eq!(config.status, StatusFilter::approved());
        assert_eq!(config, NearestConfig::default());
    }

    #[test]
    fn test_any_status_preset() {
        let config = NearestConfigBuilder::any_status().build();
        assert!(config.status.is_any());
        assert_eq!(config.limit, 5);
    }

    #[test]
    fn test_method_chaining() {
        let config = NearestConfigBuilder::new()
            .limit(12)
            .status("requested")
            .unwrap()
            .build();

        assert_eq!(config.limit, 12);
        assert_eq!(config.status, StatusFilter::Exact("requested".into()));
    }

    #[test]
    fn test_status_all_disables_filter() {
        let config = NearestConfigBuilder::new().status("ALL").unwrap().build();
        assert!(config.status.is_any());
    }

    #[test]
    fn test_blank_status_rejected() {
        let result = NearestConfigBuilder::new().status("  ");
        assert!(matches!(result, Err(CurbsideError::ConfigError(_))));
    }

    #[test]
    fn test_builder_override_presets() {
        let config = NearestConfigBuilder::any_status()
            .status_filter(StatusFilter::exact("expired"))
            .limit(0)
            .build();

        assert_eq!(config.status, StatusFilter::Exact("expired".into()));
        assert_eq!(config.limit, 0);
    }

    #[test]
    fn test_chaining_order_is_irrelevant() {
        let config1 = NearestConfigBuilder::new()
            .limit(3)
            .include_all_statuses()
            .build();
        let config2 = NearestConfigBuilder::new()
            .include_all_statuses()
            .limit(3)
            .build();

        assert_eq!(config1, config2);
    }
}
