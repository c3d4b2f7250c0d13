//! Proximity-detection core for the Rust beacon tracker.
//!
//! The modules distill the legacy scout-detector prototypes into a pure
//! library: a validated coordinate type, WGS84 geodesic distance, and a
//! deterministic nearest-beacon evaluation with no I/O and no history.

pub mod detector;
pub mod geodesy;
pub mod prelude;
pub mod telemetry;

pub use detector::{DetectionResult, ProximityDetector, Target};
pub use geodesy::Coordinate;
pub use prelude::{DetectError, DetectResult, DetectionConfig};
