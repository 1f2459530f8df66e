use crate::types::Coordinate;
use std::ops::{Add, Mul, Sub};

/// Cartesian vector, used for points on the unit sphere
///
/// The x axis points at (0°, 0°), y at (0°, 90°E) and z at the north pole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Unit vector for a coordinate in degrees
    pub fn from_coordinate(coordinate: Coordinate) -> Self {
        let (lat, lon) = coordinate.to_radians();
        Self {
            x: lat.cos() * lon.cos(),
            y: lat.cos() * lon.sin(),
            z: lat.sin(),
        }
    }

    /// Direction of this vector as a coordinate in degrees
    ///
    /// Does not need to be normalized. At the poles longitude comes out as 0.
    pub fn to_coordinate(self) -> Coordinate {
        let lat = self.z.atan2(self.x.hypot(self.y));
        let lon = self.y.atan2(self.x);
        Coordinate::new(lat.to_degrees(), lon.to_degrees())
    }

    pub fn norm(self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Angle to `other` in radians, both being unit vectors
    ///
    /// Uses the chords, `2·atan2(|a−b|, |a+b|)`, which stays accurate right up
    /// to 0 and PI where `acos` of the dot product does not.
    pub fn angle_to(self, other: Vec3) -> f64 {
        2.0 * (self - other).norm().atan2((self + other).norm())
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
