pub mod proximity;
pub mod result;
pub mod target;

pub use proximity::ProximityDetector;
pub use result::DetectionResult;
pub use target::Target;
