use crate::error::{Error, Result};
use std::fmt;

/// A geographic position in degrees
///
/// `Coordinate` is a plain value: constructing one with [`Coordinate::new`]
/// does not check the bounds, so values coming from user input or from a
/// deserializer can be represented as-is. Every geodesy operation validates
/// its inputs before computing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Create a coordinate, failing with [`Error::InvalidCoordinate`] if it is
    /// out of range
    pub fn try_new(lat: f64, lon: f64) -> Result<Self> {
        let coordinate = Self::new(lat, lon);
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Check that latitude is within [-90, 90] and longitude within [-180, 180]
    ///
    /// NaN is never in range.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Like [`Coordinate::is_valid`], but returns the typed error
    pub fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidCoordinate {
                lat: self.lat,
                lon: self.lon,
            })
        }
    }

    /// Latitude and longitude in radians
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lon.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Build from a `(lat, lon)` tuple
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}
