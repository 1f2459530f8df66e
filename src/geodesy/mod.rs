//! Great-circle computations on a spherical Earth
//!
//! Every operation validates its coordinates first and is a pure function of
//! its inputs.

mod bearing;
mod destination;
mod distance;
mod path;
mod sphere;

pub use bearing::{bearing, compute_bearing, final_bearing_true};
pub use distance::compute_distance;
pub use path::{compute_great_circle_path, interpolate, midpoint};
pub use sphere::{EARTH_RADIUS_KM, Sphere};
