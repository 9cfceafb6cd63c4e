//! Query engine over the permit catalog.
//!
//! Text filters (applicant, address) and nearest-K by great-circle distance.
//! Every function here is pure over a borrowed slice of records; none of them
//! allocate records or touch the catalog itself. Raw request parameters are
//! validated in [`params`] before any scan starts.

pub use error::ValidationError;
mod nearest;
mod params;
mod status;
mod text_search;

pub use nearest::{
    DEFAULT_NEAREST_LIMIT, NearestConfig, NearestQuery, RankedPermit, nearest_inner,
};
pub(crate) use params::present;
pub use params::{NearestParams, parse_coordinate, parse_limit, require_name};
pub use status::StatusFilter;
pub use text_search::{address_search_inner, applicant_search_inner};

mod error {
    use thiserror::Error;

    /// A caller-supplied parameter was missing or could not be parsed.
    ///
    /// Always recoverable by resubmitting corrected input. [`reason`] gives a
    /// stable machine-readable code for the request boundary.
    ///
    /// [`reason`]: ValidationError::reason
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum ValidationError {
        #[error("name parameter is required")]
        MissingName,
        #[error("latitude and longitude parameters are required")]
        MissingCoordinates,
        #[error("latitude {latitude:?} and longitude {longitude:?} are not a valid coordinate")]
        InvalidCoordinates { latitude: String, longitude: String },
        #[error("limit {0:?} is not a non-negative integer")]
        InvalidLimit(String),
    }

    impl ValidationError {
        #[must_use]
        pub const fn reason(&self) -> &'static str {
            match self {
                Self::MissingName => "missing_name",
                Self::MissingCoordinates => "missing_coordinates",
                Self::InvalidCoordinates { .. } => "invalid_coordinates",
                Self::InvalidLimit(_) => "invalid_limit",
            }
        }
    }

    #[cfg(feature = "serde")]
    impl serde::Serialize for ValidationError {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            use serde::ser::SerializeStruct;

            let mut state = serializer.serialize_struct("ValidationError", 2)?;
            state.serialize_field("error", self.reason())?;
            state.serialize_field("message", &self.to_string())?;
            state.end()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_reason_codes() {
            assert_eq!(ValidationError::MissingName.reason(), "missing_name");
            assert_eq!(
                ValidationError::MissingCoordinates.reason(),
                "missing_coordinates"
            );
            assert_eq!(
                ValidationError::InvalidCoordinates {
                    latitude: "abc".into(),
                    longitude: "1".into()
                }
                .reason(),
                "invalid_coordinates"
            );
            assert_eq!(
                ValidationError::InvalidLimit("-1".into()).reason(),
                "invalid_limit"
            );
        }

        #[test]
        fn test_display_mentions_offending_input() {
            let err = ValidationError::InvalidCoordinates {
                latitude: "north".into(),
                longitude: "-122.4".into(),
            };
            assert!(err.to_string().contains("\"north\""));
        }

        #[cfg(feature = "serde")]
        #[test]
        fn test_serializes_reason_as_error_field() {
            let json = serde_json::to_value(ValidationError::MissingName).unwrap();
            assert_eq!(json["error"], "missing_name");
            assert_eq!(json["message"], "name parameter is required");
        }
    }
}
