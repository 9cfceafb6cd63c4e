use super::{NearestConfig, NearestQuery, StatusFilter, ValidationError};
use crate::record::Coordinate;

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// The value as given, unless it is absent or only whitespace.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// The applicant name to search for, exactly as given.
///
/// Absent or blank names fail with [`ValidationError::MissingName`].
/// Surrounding whitespace is part of the needle.
pub fn require_name(name: Option<&str>) -> Result<&str, ValidationError> {
    present(name).ok_or(ValidationError::MissingName)
}

/// Parse the query point of a nearest search from raw text.
///
/// Either side absent or blank is `MissingCoordinates`; anything that does not
/// parse to a finite in-range coordinate is `InvalidCoordinates`. A literal
/// `0` is a valid latitude or longitude.
pub fn parse_coordinate(
    latitude: Option<&str>,
    longitude: Option<&str>,
) -> Result<Coordinate, ValidationError> {
    let (Some(lat), Some(lon)) = (non_blank(latitude), non_blank(longitude)) else {
        return Err(ValidationError::MissingCoordinates);
    };
    Coordinate::parse(lat, lon).ok_or_else(|| ValidationError::InvalidCoordinates {
        latitude: lat.to_string(),
        longitude: lon.to_string(),
    })
}

/// Parse an optional result limit. Absent or blank yields `None`.
pub fn parse_limit(limit: Option<&str>) -> Result<Option<usize>, ValidationError> {
    non_blank(limit)
        .map(|raw| {
            raw.parse::<usize>()
                .map_err(|_| ValidationError::InvalidLimit(raw.to_string()))
        })
        .transpose()
}

/// Raw text parameters of a nearest search, as a request boundary extracts them.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestParams<'a> {
    pub latitude: Option<&'a str>,
    pub longitude: Option<&'a str>,
    pub status: Option<&'a str>,
    pub limit: Option<&'a str>,
}

impl<'a> NearestParams<'a> {
    #[must_use]
    pub const fn new(latitude: &'a str, longitude: &'a str) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            status: None,
            limit: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: &'a str) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: &'a str) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Validate into a typed query. Coordinates are checked before the limit;
    /// status defaults to `APPROVED` and limit to [`super::DEFAULT_NEAREST_LIMIT`].
    pub fn parse(&self) -> Result<NearestQuery, ValidationError> {
        let origin = parse_coordinate(self.latitude, self.longitude)?;
        let defaults = NearestConfig::default();
        let limit = parse_limit(self.limit)?.unwrap_or(defaults.limit);
        let status = StatusFilter::from_param(self.status).unwrap_or(defaults.status);
        Ok(NearestQuery::new(origin).with_config(NearestConfig { status, limit }))
    }
}
