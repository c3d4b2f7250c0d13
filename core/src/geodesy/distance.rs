use crate::geodesy::coordinate::Coordinate;
use geo::{Destination, Distance, Geodesic};

/// Surface distance in meters between two fixes.
///
/// Computed with Karney's geodesic algorithm on the WGS84 ellipsoid
/// (`geo::Geodesic`), the same model the legacy geopy-based prototypes
/// used. Sub-meter accurate at the kilometer scales the detector cares
/// about; a spherical (haversine) approximation would drift by meters
/// over the same distances.
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    Geodesic.distance(a.to_point(), b.to_point())
}

/// Fix reached by travelling `distance_m` meters from `origin` along an
/// initial bearing in degrees clockwise from north.
pub fn destination(origin: Coordinate, bearing_deg: f64, distance_m: f64) -> Coordinate {
    Coordinate::from_point(Geodesic.destination(origin.to_point(), bearing_deg, distance_m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn fix(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude).unwrap()
    }

    #[test]
    fn coincident_fixes_are_zero_meters_apart() {
        let spot = fix(50.6874, 4.2606);
        assert_eq!(distance_meters(spot, spot), 0.0);
    }

    #[test]
    fn one_degree_of_equator_matches_wgs84() {
        // Equatorial circumference / 360 on the reference ellipsoid.
        let d = distance_meters(fix(0.0, 0.0), fix(0.0, 1.0));
        assert_abs_diff_eq!(d, 111_319.49, epsilon = 0.05);
    }

    #[test]
    fn one_degree_of_meridian_near_50_north_matches_wgs84() {
        let d = distance_meters(fix(50.0, 4.26), fix(51.0, 4.26));
        assert_abs_diff_eq!(d, 111_238.7, epsilon = 2.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = fix(50.68704115862972, 4.260554416777018);
        let b = fix(50.68280545646507, 4.269052508141664);
        assert_relative_eq!(
            distance_meters(a, b),
            distance_meters(b, a),
            max_relative = 1e-12
        );
    }

    #[test]
    fn destination_round_trips_through_distance() {
        let origin = fix(50.6874, 4.2606);
        let moved = destination(origin, 135.0, 501.0);
        assert_abs_diff_eq!(distance_meters(origin, moved), 501.0, epsilon = 1e-3);
    }
}
