use crate::error::Result;
use crate::geodesy::distance::haversine_angle;
use crate::types::{Bearing, Coordinate};
use crate::utils::angle::ANGLE_EPSILON;
use tracing::debug;

/// Initial and final compass bearings from `from` towards `to`
///
/// The initial bearing is the forward azimuth at `from`. The final bearing is
/// its reciprocal, `(initial + 180) mod 360`; use [`final_bearing_true`] for
/// the actual azimuth on arrival.
///
/// Coincident points have no defined direction. Their initial bearing is
/// reported as `0` (and the final bearing as `180`) instead of failing.
///
/// # Errors
///
/// [`crate::Error::InvalidCoordinate`] if either input is out of range.
pub fn bearing(from: Coordinate, to: Coordinate) -> Result<Bearing> {
    from.validate()?;
    to.validate()?;

    if haversine_angle(from, to) <= ANGLE_EPSILON {
        debug!(%from, %to, "Bearing between coincident points is undefined, using 0");
        return Ok(Bearing::from_initial(0.0));
    }

    Ok(Bearing::from_initial(forward_azimuth(from, to)))
}

/// Alias of [`bearing`] matching the other `compute_*` entry points
pub fn compute_bearing(from: Coordinate, to: Coordinate) -> Result<Bearing> {
    bearing(from, to)
}

/// Azimuth of travel when arriving at `to`, in degrees within `[0, 360)`
///
/// Computed from the reverse leg: the forward azimuth from `to` back to
/// `from`, turned around. Unlike [`Bearing::final_bearing`] this follows the
/// curvature of the great circle. Coincident points yield `180`, consistent
/// with [`bearing`].
pub fn final_bearing_true(from: Coordinate, to: Coordinate) -> Result<f64> {
    let reverse = bearing(to, from)?;
    Ok(reverse.final_bearing)
}

/// Forward azimuth in degrees within `[-180, 180]`
fn forward_azimuth(from: Coordinate, to: Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();
    let dlon = lon2 - lon1;

    let x = dlon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    x.atan2(y).to_degrees()
}
