use thiserror::Error;

pub use crate::search::ValidationError;

#[derive(Error, Debug)]
pub enum CurbsideError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Data processing error: {0}")]
    DataProcessing(#[from] curbside_data_processing::DataError),
    #[error("DataFrame error: {0}")]
    DataFrame(#[from] polars::prelude::PolarsError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Init Logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CurbsideError {
    /// The validation failure behind this error, if the caller's input was at fault.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CurbsideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_converts_and_keeps_reason() {
        let err: CurbsideError = ValidationError::MissingName.into();
        assert_eq!(err.as_validation().map(ValidationError::reason), Some("missing_name"));
        assert!(err.to_string().contains("name parameter is required"));
    }

    #[test]
    fn test_config_error_is_not_validation() {
        let err = CurbsideError::ConfigError("blank status".into());
        assert!(err.as_validation().is_none());
    }
}
