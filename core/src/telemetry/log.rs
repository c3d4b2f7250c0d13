use log::info;

/// Thin logging facade used by drivers of the detector; `evaluate` itself
/// never logs so it stays side-effect free.
#[derive(Clone)]
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
