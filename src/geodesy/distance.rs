use crate::error::Result;
use crate::geodesy::Sphere;
use crate::types::Coordinate;

impl Sphere {
    /// Great-circle distance in kilometres (Haversine formula)
    ///
    /// The result is symmetric in its arguments, zero for coincident points
    /// and never exceeds [`Sphere::max_distance_km`].
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidCoordinate`] if either input is out of range.
    pub fn distance(&self, from: Coordinate, to: Coordinate) -> Result<f64> {
        from.validate()?;
        to.validate()?;

        Ok(self.radius_km() * haversine_angle(from, to))
    }
}

/// Great-circle distance on the spherical Earth, in kilometres
///
/// Shorthand for [`Sphere::EARTH`]`.distance(from, to)`.
pub fn compute_distance(from: Coordinate, to: Coordinate) -> Result<f64> {
    Sphere::EARTH.distance(from, to)
}

/// Central angle between two valid coordinates, in radians
///
/// Uses the atan2 form of the Haversine formula, which stays accurate for
/// both tiny and near-antipodal separations.
pub(crate) fn haversine_angle(from: Coordinate, to: Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let half_dlat = ((lat2 - lat1) / 2.0).sin();
    let half_dlon = ((lon2 - lon1) / 2.0).sin();

    let h = half_dlat * half_dlat + lat1.cos() * lat2.cos() * half_dlon * half_dlon;
    let h = h.clamp(0.0, 1.0);

    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};
    use insta::assert_compact_debug_snapshot;

    const JAKARTA: Coordinate = Coordinate::new(-6.2, 106.816666);
    const NEW_YORK: Coordinate = Coordinate::new(40.712776, -74.005974);

    #[test]
    fn jakarta_to_new_york() {
        let distance = assert_ok!(compute_distance(JAKARTA, NEW_YORK));
        assert!((distance - 16176.567932).abs() < 1e-5, "{distance}");
    }

    #[test]
    fn london_to_paris() {
        let london = Coordinate::new(51.5074, -0.1278);
        let paris = Coordinate::new(48.8566, 2.3522);

        let distance = assert_ok!(compute_distance(london, paris));
        assert!((distance - 343.556060).abs() < 1e-5, "{distance}");
    }

    #[test]
    fn same_point_is_zero() {
        assert_eq!(assert_ok!(compute_distance(JAKARTA, JAKARTA)), 0.0);
        let origin = Coordinate::new(0.0, 0.0);
        assert_eq!(assert_ok!(compute_distance(origin, origin)), 0.0);
    }

    #[test]
    fn symmetric() {
        let there = assert_ok!(compute_distance(JAKARTA, NEW_YORK));
        let back = assert_ok!(compute_distance(NEW_YORK, JAKARTA));
        assert!((there - back).abs() <= there * 1e-9);
    }

    #[test]
    fn quarter_circle() {
        let distance = assert_ok!(compute_distance(
            Coordinate::new(0.0, 0.0),
            Coordinate::new(90.0, 0.0)
        ));
        let expected = Sphere::EARTH.max_distance_km() / 2.0;
        assert!((distance - expected).abs() < 1e-9);
    }

    #[test]
    fn antipodal_is_half_circumference() {
        let distance = assert_ok!(compute_distance(
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 180.0)
        ));
        assert!(distance <= Sphere::EARTH.max_distance_km());
        assert!((distance - Sphere::EARTH.max_distance_km()).abs() < 1e-9);
    }

    #[test]
    fn antimeridian_duplicates_are_the_same_point() {
        let distance = assert_ok!(compute_distance(
            Coordinate::new(10.0, 180.0),
            Coordinate::new(10.0, -180.0)
        ));
        assert!(distance < 1e-9);
    }

    #[test]
    fn scales_with_radius() {
        let unit = assert_ok!(Sphere::new(1.0));
        let angle = assert_ok!(unit.distance(JAKARTA, NEW_YORK));
        let km = assert_ok!(compute_distance(JAKARTA, NEW_YORK));
        assert!((angle * 6371.0 - km).abs() < 1e-9);
    }

    #[test]
    fn invalid_latitude() {
        let err = assert_err!(compute_distance(Coordinate::new(91.0, 0.0), NEW_YORK));
        assert_compact_debug_snapshot!(err, @"InvalidCoordinate { lat: 91.0, lon: 0.0 }");
    }

    #[test]
    fn invalid_longitude() {
        let err = assert_err!(compute_distance(JAKARTA, Coordinate::new(0.0, -180.5)));
        assert_compact_debug_snapshot!(err, @"InvalidCoordinate { lat: 0.0, lon: -180.5 }");
    }
}
