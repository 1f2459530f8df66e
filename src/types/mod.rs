mod bearing;
mod bounding_box;
mod coordinate;
mod path;

pub use bearing::*;
pub use bounding_box::*;
pub use coordinate::*;
pub use path::*;
