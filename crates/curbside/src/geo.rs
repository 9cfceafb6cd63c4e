//! Great-circle distance on a spherical Earth.

use crate::record::Coordinate;

/// Mean Earth radius used by the haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometers.
///
/// Symmetric, non-negative, and exactly zero for identical points. The
/// intermediate `a` term is clamped to `[0, 1]` so floating point rounding
/// near antipodal points cannot push `sqrt(1 - a)` into `NaN`.
#[must_use]
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.latitude().to_radians();
    let lat2_rad = to.latitude().to_radians();
    let delta_lat = (to.latitude() - from.latitude()).to_radians();
    let delta_lng = (to.longitude() - from.longitude()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_haversine_identical_points_is_zero() {
        let p = point(37.7749, -122.4194);
        assert_eq!(haversine_km(p, p), 0.0);
        let origin = point(0.0, 0.0);
        assert_eq!(haversine_km(origin, origin), 0.0);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let sf = point(37.7749, -122.4194);
        let la = point(34.0522, -118.2437);
        assert_eq!(haversine_km(sf, la), haversine_km(la, sf));
    }

    #[test]
    fn test_haversine_known_distances() {
        // Paris to London is ~343.5 km
        let paris = point(48.8566, 2.3522);
        let london = point(51.5074, -0.1278);
        let distance = haversine_km(paris, london);
        assert!(
            (distance - 343.5).abs() < 1.0,
            "Paris-London should be ~343.5 km, got {distance}"
        );

        // San Francisco to Los Angeles is ~559 km
        let sf = point(37.7749, -122.4194);
        let la = point(34.0522, -118.2437);
        let distance = haversine_km(sf, la);
        assert!(
            (distance - 559.1).abs() < 2.0,
            "SF-LA should be ~559 km, got {distance}"
        );
    }

    #[test]
    fn test_haversine_antipodal_points_stay_finite() {
        let distance = haversine_km(point(0.0, 0.0), point(0.0, 180.0));
        assert!(distance.is_finite());
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((distance - half_circumference).abs() < 1e-6);
    }

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        let distance = haversine_km(point(0.0, 0.0), point(1.0, 0.0));
        assert!((distance - 111.19).abs() < 0.01, "got {distance}");
    }
}
