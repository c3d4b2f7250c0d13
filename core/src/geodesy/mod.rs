pub mod coordinate;
pub mod distance;

pub use coordinate::Coordinate;
pub use distance::{destination, distance_meters};
