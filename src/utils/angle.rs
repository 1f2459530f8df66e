//! Angle helpers shared by the geodesy operations

/// Central angles (radians) at or below this are treated as zero, and at or
/// above `PI - ANGLE_EPSILON` as antipodal
pub(crate) const ANGLE_EPSILON: f64 = 1e-12;

/// Wrap an angle in degrees into `[0, 360)`
pub(crate) fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Wrap a longitude in degrees into `[-180, 180]`, keeping `180` as is
pub(crate) fn normalize_longitude(lon: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon) {
        return lon;
    }

    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    wrapped.clamp(-180.0, 180.0)
}
