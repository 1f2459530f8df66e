use crate::error::{Error, Result};
use crate::types::{Coordinate, GreatCirclePath};
use crate::utils::angle::ANGLE_EPSILON;
use crate::utils::vector::Vec3;
use std::f64::consts::PI;
use tracing::debug;

/// Sample `n` points along the shortest great-circle arc from `from` to `to`
///
/// Points are spaced uniformly by angle using spherical linear interpolation
/// (slerp). The first point is `from` and the last is `to`, both returned
/// exactly as passed in; interior points have longitudes in `[-180, 180]`.
///
/// If `from` and `to` coincide the path consists of `n` copies of that point,
/// except that the last sample is still `to` as passed in. The two differ
/// only in how the same place is written, e.g. `(0, 180)` and `(0, -180)`.
///
/// # Errors
///
/// - [`Error::InvalidCoordinate`] if either input is out of range
/// - [`Error::InvalidPointCount`] if `n < 2`
/// - [`Error::DegenerateGreatCircle`] if the points are antipodal, since no
///   single great circle connects them
pub fn interpolate(from: Coordinate, to: Coordinate, n: usize) -> Result<GreatCirclePath> {
    from.validate()?;
    to.validate()?;

    if n < 2 {
        return Err(Error::InvalidPointCount(n));
    }

    let start = Vec3::from_coordinate(from);
    let end = Vec3::from_coordinate(to);
    let sigma = arc_angle(from, to, start, end)?;
    let last = n - 1;

    if sigma <= ANGLE_EPSILON {
        debug!(%from, %to, n, "Coincident endpoints, repeating the shared point");
        let mut points = vec![from; n];
        points[last] = to;
        return Ok(GreatCirclePath::from_points(points));
    }

    let sin_sigma = sigma.sin();

    let points = (0..n)
        .map(|i| {
            if i == 0 {
                return from;
            }
            if i == last {
                return to;
            }

            let f = i as f64 / last as f64;
            let a = ((1.0 - f) * sigma).sin() / sin_sigma;
            let b = (f * sigma).sin() / sin_sigma;
            (start * a + end * b).to_coordinate()
        })
        .collect();

    Ok(GreatCirclePath::from_points(points))
}

/// Alias of [`interpolate`] matching the other `compute_*` entry points
pub fn compute_great_circle_path(
    from: Coordinate,
    to: Coordinate,
    n: usize,
) -> Result<GreatCirclePath> {
    interpolate(from, to, n)
}

/// Point halfway along the great-circle arc between `from` and `to`
///
/// Returns `from` when the points coincide.
///
/// # Errors
///
/// [`Error::InvalidCoordinate`] for out-of-range input and
/// [`Error::DegenerateGreatCircle`] for antipodal points.
pub fn midpoint(from: Coordinate, to: Coordinate) -> Result<Coordinate> {
    from.validate()?;
    to.validate()?;

    let start = Vec3::from_coordinate(from);
    let end = Vec3::from_coordinate(to);
    if arc_angle(from, to, start, end)? <= ANGLE_EPSILON {
        return Ok(from);
    }

    // Equal slerp weights, so the unnormalized sum points the right way
    Ok((start + end).to_coordinate())
}

/// Central angle between two valid coordinates, rejecting antipodal pairs
///
/// `start` and `end` are the unit vectors of `from` and `to`.
fn arc_angle(from: Coordinate, to: Coordinate, start: Vec3, end: Vec3) -> Result<f64> {
    let sigma = start.angle_to(end);

    if PI - sigma <= ANGLE_EPSILON {
        return Err(Error::DegenerateGreatCircle { from, to });
    }

    Ok(sigma)
}
