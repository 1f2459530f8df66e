use crate::utils::angle::normalize_degrees;

/// Compass bearings of a great-circle leg, in degrees clockwise from north
///
/// Both values are within `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bearing {
    /// Forward azimuth when leaving the start point
    pub initial_bearing: f64,
    /// Reciprocal of the initial bearing: `(initial_bearing + 180) mod 360`
    ///
    /// This is *not* the azimuth of arrival at the end point, which differs
    /// from the reciprocal on any leg that is not a meridian or the equator.
    /// See [`crate::final_bearing_true`] for that value.
    pub final_bearing: f64,
}

impl Bearing {
    /// Build from an initial bearing in degrees, normalizing it to `[0, 360)`
    /// and deriving the final bearing as its reciprocal
    pub fn from_initial(initial_bearing: f64) -> Self {
        let initial_bearing = normalize_degrees(initial_bearing);
        Self {
            initial_bearing,
            final_bearing: (initial_bearing + 180.0) % 360.0,
        }
    }
}
