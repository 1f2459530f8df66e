use crate::error::{Error, Result};

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Sphere model used for distance calculations
///
/// Only the radius matters: bearings and interpolated paths are the same on
/// every sphere, so those operations are free functions. The entry points at
/// the crate root use [`Sphere::EARTH`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    radius_km: f64,
}

impl Sphere {
    /// Spherical Earth with a radius of 6371 km
    pub const EARTH: Sphere = Sphere {
        radius_km: EARTH_RADIUS_KM,
    };

    /// Create a sphere with the given radius in kilometres
    ///
    /// The radius must be finite and positive.
    pub fn new(radius_km: f64) -> Result<Self> {
        if radius_km.is_finite() && radius_km > 0.0 {
            Ok(Self { radius_km })
        } else {
            Err(Error::InvalidRadius(radius_km))
        }
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Length of half a great circle, the largest possible distance
    pub fn max_distance_km(&self) -> f64 {
        std::f64::consts::PI * self.radius_km
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::EARTH
    }
}
