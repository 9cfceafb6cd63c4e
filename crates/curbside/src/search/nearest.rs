use std::cmp::Ordering;

use super::StatusFilter;
use crate::{
    config::NearestConfigBuilder,
    geo::haversine_km,
    record::{Coordinate, PermitRecord},
};

/// Number of results a nearest search returns unless told otherwise.
pub const DEFAULT_NEAREST_LIMIT: usize = 5;

/// Configuration for nearest-K search.
///
/// Use [`NearestConfigBuilder`] for an ergonomic way to create configurations.
///
/// # Examples
///
/// ```rust
/// use curbside::NearestConfig;
///
/// let config = NearestConfig::builder().include_all_statuses().limit(10).build();
/// assert_eq!(config.limit, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearestConfig {
    /// Which permit statuses are eligible
    pub status: StatusFilter,
    /// Maximum number of results
    pub limit: usize,
}

impl NearestConfig {
    pub fn builder() -> NearestConfigBuilder {
        NearestConfigBuilder::default()
    }
}

impl Default for NearestConfig {
    fn default() -> Self {
        Self {
            status: StatusFilter::approved(),
            limit: DEFAULT_NEAREST_LIMIT,
        }
    }
}

/// A validated nearest search: where to search from and how.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestQuery {
    pub origin: Coordinate,
    pub config: NearestConfig,
}

impl NearestQuery {
    #[must_use]
    pub fn new(origin: Coordinate) -> Self {
        Self {
            origin,
            config: NearestConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: NearestConfig) -> Self {
        self.config = config;
        self
    }
}

/// A catalog record together with its distance from the query point.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedPermit<'a> {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub record: &'a PermitRecord,
    /// Great-circle distance in kilometers; finite and non-negative
    #[cfg_attr(feature = "serde", serde(rename = "distance"))]
    pub distance_km: f64,
}

struct Candidate {
    index: usize,
    distance_km: f64,
}

/// Distance first, catalog position second, so equal distances keep file order.
fn rank(a: &Candidate, b: &Candidate) -> Ordering {
    a.distance_km
        .total_cmp(&b.distance_km)
        .then_with(|| a.index.cmp(&b.index))
}

/// The `config.limit` records closest to `query.origin` that pass the status filter.
///
/// Records without a coordinate are skipped rather than ranked. Selection is
/// a partial sort: the top `limit` candidates are partitioned out in linear
/// time and only those are fully ordered.
pub fn nearest_inner<'a>(records: &'a [PermitRecord], query: &NearestQuery) -> Vec<RankedPermit<'a>> {
    let limit = query.config.limit;
    if limit == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<Candidate> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| query.config.status.matches(record))
        .filter_map(|(index, record)| {
            let distance_km = haversine_km(query.origin, record.coordinate()?);
            distance_km.is_finite().then_some(Candidate { index, distance_km })
        })
        .collect();

    if candidates.len() > limit {
        candidates.select_nth_unstable_by(limit - 1, rank);
        candidates.truncate(limit);
    }
    candidates.sort_unstable_by(rank);

    candidates
        .into_iter()
        .map(|c| RankedPermit {
            record: &records[c.index],
            distance_km: c.distance_km,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn permit(name: &str, status: &str, lat: f64, lon: f64) -> PermitRecord {
        PermitRecord::new(name, "Somewhere", status, Coordinate::new(lat, lon))
    }

    fn scenario() -> Vec<PermitRecord> {
        vec![
            permit("Joe's Tacos", "APPROVED", 37.77, -122.42),
            permit("Best Burgers", "REQUESTED", 37.78, -122.41),
        ]
    }

    fn query(lat: f64, lon: f64, config: NearestConfig) -> NearestQuery {
        NearestQuery::new(Coordinate::new(lat, lon).unwrap()).with_config(config)
    }

    fn names<'a>(ranked: &[RankedPermit<'a>]) -> Vec<&'a str> {
        ranked.iter().map(|r| r.record.applicant()).collect()
    }

    #[test]
    fn test_default_excludes_non_approved() {
        let records = scenario();
        let ranked = nearest_inner(&records, &query(37.77, -122.42, NearestConfig::default()));
        assert_eq!(names(&ranked), vec!["Joe's Tacos"]);
        assert_eq!(ranked[0].distance_km, 0.0);
    }

    #[test]
    fn test_all_statuses_orders_by_distance() {
        let records = scenario();
        let config = NearestConfig {
            status: StatusFilter::Any,
            ..Default::default()
        };
        let ranked = nearest_inner(&records, &query(37.77, -122.42, config));
        assert_eq!(names(&ranked), vec!["Joe's Tacos", "Best Burgers"]);
        assert!(ranked[0].distance_km < ranked[1].distance_km);
    }

    #[test]
    fn test_limit_and_sorted_output() {
        let records: Vec<_> = (0..20)
            .map(|i| permit(&format!("truck {i}"), "APPROVED", 37.70 + f64::from(i) * 0.01, -122.40))
            .rev()
            .collect();
        let config = NearestConfig {
            limit: 3,
            ..Default::default()
        };
        let ranked = nearest_inner(&records, &query(37.70, -122.40, config));
        assert_eq!(names(&ranked), vec!["truck 0", "truck 1", "truck 2"]);
        assert!(
            ranked
                .windows(2)
                .all(|w| w[0].distance_km <= w[1].distance_km)
        );
        assert!(ranked.iter().all(|r| r.distance_km >= 0.0));
    }

    #[test]
    fn test_fewer_candidates_than_limit() {
        let records = scenario();
        let config = NearestConfig {
            status: StatusFilter::Any,
            limit: 50,
        };
        assert_eq!(nearest_inner(&records, &query(0.0, 0.0, config)).len(), 2);
    }

    #[test]
    fn test_zero_limit_is_empty() {
        let records = scenario();
        let config = NearestConfig {
            limit: 0,
            ..Default::default()
        };
        assert!(nearest_inner(&records, &query(37.77, -122.42, config)).is_empty());
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let duplicates = vec![
            permit("a", "APPROVED", 37.78, -122.42),
            permit("b", "APPROVED", 37.78, -122.42),
            permit("c", "APPROVED", 37.78, -122.42),
        ];
        for limit in 1..=3 {
            let config = NearestConfig {
                limit,
                ..Default::default()
            };
            let ranked = nearest_inner(&duplicates, &query(37.77, -122.42, config));
            assert_eq!(names(&ranked), ["a", "b", "c"][..limit].to_vec());
        }
    }

    #[test]
    fn test_records_without_coordinates_are_skipped() {
        let records = vec![
            PermitRecord::new("nowhere", "?", "APPROVED", None),
            permit("somewhere", "APPROVED", 10.0, 10.0),
        ];
        let ranked = nearest_inner(&records, &query(0.0, 0.0, NearestConfig::default()));
        assert_eq!(names(&ranked), vec!["somewhere"]);
    }

    #[test]
    fn test_zero_coordinate_record_is_ranked_by_real_distance() {
        let records = vec![
            permit("null island", "APPROVED", 0.0, 0.0),
            permit("sf", "APPROVED", 37.77, -122.42),
        ];
        let ranked = nearest_inner(&records, &query(37.77, -122.42, NearestConfig::default()));
        assert_eq!(names(&ranked), vec!["sf", "null island"]);
        assert!(ranked[1].distance_km > 10_000.0);
    }
}
