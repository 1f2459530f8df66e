use crate::error::{Error, Result};
use crate::geodesy::Sphere;
use crate::types::Coordinate;
use crate::utils::angle::normalize_longitude;

impl Sphere {
    /// Point reached by travelling `distance_km` from `start` along the great
    /// circle with initial bearing `bearing_deg`
    ///
    /// Negative distances travel in the opposite direction. The returned
    /// longitude is normalized to `[-180, 180]`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCoordinate`] for an out-of-range start and
    /// [`Error::NonFinite`] if the bearing or distance is NaN or infinite.
    pub fn destination(
        &self,
        start: Coordinate,
        bearing_deg: f64,
        distance_km: f64,
    ) -> Result<Coordinate> {
        start.validate()?;
        ensure_finite("bearing", bearing_deg)?;
        ensure_finite("distance", distance_km)?;

        let (lat1, lon1) = start.to_radians();
        let theta = bearing_deg.to_radians();
        let delta = distance_km / self.radius_km();

        let sin_lat2 = lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos();
        let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
        let lon2 = lon1
            + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * sin_lat2);

        Ok(Coordinate::new(
            lat2.to_degrees(),
            normalize_longitude(lon2.to_degrees()),
        ))
    }
}

fn ensure_finite(what: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFinite { what, value })
    }
}
