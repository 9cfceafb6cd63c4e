//! Permit records and the parse step from raw CSV text.
//!
//! The loader hands over text exactly as it appeared in the source file. This
//! module is the only place that text is interpreted: coordinates are parsed
//! and validated here, and the lower-cased keys the text filters compare
//! against are computed once per record.

use std::fmt;

use itertools::izip;
use polars::prelude::*;

/// A validated point in decimal degrees.
///
/// Both components are finite, latitude lies in `[-90, 90]` and longitude in
/// `[-180, 180]`. Zero is a valid value for either.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Returns `None` when either component is non-finite or out of range.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        valid.then_some(Self {
            latitude,
            longitude,
        })
    }

    /// Parse a coordinate from raw text.
    ///
    /// Surrounding whitespace is ignored. Empty text, anything that is not a
    /// complete decimal number, and values rejected by [`Coordinate::new`] all
    /// yield `None`.
    #[must_use]
    pub fn parse(latitude: &str, longitude: &str) -> Option<Self> {
        let latitude = latitude.trim().parse::<f64>().ok()?;
        let longitude = longitude.trim().parse::<f64>().ok()?;
        Self::new(latitude, longitude)
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Lower-cased copies of the fields the text filters compare against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct MatchKeys {
    applicant: String,
    address: String,
    status: String,
}

/// One row of the permit CSV as text, before any interpretation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawPermit<'a> {
    pub location_id: Option<&'a str>,
    pub applicant: Option<&'a str>,
    pub facility_type: Option<&'a str>,
    pub address: Option<&'a str>,
    pub status: Option<&'a str>,
    pub food_items: Option<&'a str>,
    pub latitude: Option<&'a str>,
    pub longitude: Option<&'a str>,
}

/// A mobile food facility permit.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PermitRecord {
    location_id: Option<String>,
    applicant: String,
    facility_type: Option<String>,
    address: String,
    status: String,
    food_items: Option<String>,
    coordinate: Option<Coordinate>,
    #[cfg_attr(feature = "serde", serde(skip))]
    keys: MatchKeys,
}

impl PermitRecord {
    pub fn new(
        applicant: impl Into<String>,
        address: impl Into<String>,
        status: impl Into<String>,
        coordinate: Option<Coordinate>,
    ) -> Self {
        let applicant = applicant.into();
        let address = address.into();
        let status = status.into();
        let keys = MatchKeys {
            applicant: applicant.to_lowercase(),
            address: address.to_lowercase(),
            status: status.to_lowercase(),
        };
        Self {
            location_id: None,
            applicant,
            facility_type: None,
            address,
            status,
            food_items: None,
            coordinate,
            keys,
        }
    }

    /// Interpret one raw row. Never fails: missing required text becomes an
    /// empty string and an unusable coordinate becomes `None`.
    #[must_use]
    pub fn from_raw(raw: RawPermit<'_>) -> Self {
        let text = |value: Option<&str>| value.map(str::trim).unwrap_or_default().to_string();
        let optional = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(ToString::to_string)
        };
        let coordinate = raw
            .latitude
            .zip(raw.longitude)
            .and_then(|(lat, lon)| Coordinate::parse(lat, lon));

        Self {
            location_id: optional(raw.location_id),
            facility_type: optional(raw.facility_type),
            food_items: optional(raw.food_items),
            ..Self::new(
                text(raw.applicant),
                text(raw.address),
                text(raw.status),
                coordinate,
            )
        }
    }

    /// Create `PermitRecord` instances from the loader's raw text `DataFrame`.
    ///
    /// The `DataFrame` is expected to contain the string columns returned by
    /// `field_names()`; row order is preserved.
    pub fn from_df(df: &DataFrame) -> PolarsResult<Vec<Self>> {
        let cols = df.select(Self::field_names())?.take_columns();

        Ok(izip!(
            cols[0].str()?,
            cols[1].str()?,
            cols[2].str()?,
            cols[3].str()?,
            cols[4].str()?,
            cols[5].str()?,
            cols[6].str()?,
            cols[7].str()?,
        )
        .map(
            |(
                location_id,
                applicant,
                facility_type,
                address,
                status,
                food_items,
                latitude,
                longitude,
            )| {
                Self::from_raw(RawPermit {
                    location_id,
                    applicant,
                    facility_type,
                    address,
                    status,
                    food_items,
                    latitude,
                    longitude,
                })
            },
        )
        .collect())
    }

    /// Returns the column names expected in `DataFrames` for this record type.
    #[must_use]
    pub fn field_names() -> Vec<&'static str> {
        vec![
            "location_id",
            "applicant",
            "facility_type",
            "address",
            "status",
            "food_items",
            "latitude",
            "longitude",
        ]
    }

    #[must_use]
    pub fn with_location_id(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }

    #[must_use]
    pub fn with_facility_type(mut self, facility_type: impl Into<String>) -> Self {
        self.facility_type = Some(facility_type.into());
        self
    }

    #[must_use]
    pub fn with_food_items(mut self, food_items: impl Into<String>) -> Self {
        self.food_items = Some(food_items.into());
        self
    }

    #[must_use]
    pub fn location_id(&self) -> Option<&str> {
        self.location_id.as_deref()
    }

    #[must_use]
    pub fn applicant(&self) -> &str {
        &self.applicant
    }

    #[must_use]
    pub fn facility_type(&self) -> Option<&str> {
        self.facility_type.as_deref()
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[must_use]
    pub fn food_items(&self) -> Option<&str> {
        self.food_items.as_deref()
    }

    /// `None` when the source coordinates were blank, non-numeric or out of range.
    #[must_use]
    pub const fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    pub(crate) fn applicant_key(&self) -> &str {
        &self.keys.applicant
    }

    pub(crate) fn address_key(&self) -> &str {
        &self.keys.address
    }

    pub(crate) fn status_key(&self) -> &str {
        &self.keys.status
    }
}

impl fmt::Display for PermitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PermitRecord {{ applicant: \"{}\", address: \"{}\", status: {} }}",
            self.applicant, self.address, self.status
        )
    }
}
