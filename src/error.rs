use crate::types::Coordinate;

/// Errors reported by the geodesy operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid coordinate ({lat}, {lon}): latitude must be within [-90, 90] and longitude within [-180, 180]")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("Invalid point count {0}: a path needs at least 2 points")]
    InvalidPointCount(usize),

    /// Antipodal endpoints are joined by infinitely many great circles
    #[error("No unique great circle between antipodal points {from} and {to}")]
    DegenerateGreatCircle { from: Coordinate, to: Coordinate },

    #[error("Invalid sphere radius {0} km (must be finite and positive)")]
    InvalidRadius(f64),

    #[error("Non-finite {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
