use serde::{Deserialize, Serialize};

/// Detection radius and intensity bounds shared by every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    pub radius_meters: f64,
    pub min_intensity: f64,
    pub max_intensity: f64,
}

impl DetectionConfig {
    /// Rejects non-positive radii and intensity bounds outside
    /// `0 < min <= max <= 1`.
    pub fn validate(&self) -> DetectResult<()> {
        if !self.radius_meters.is_finite() || self.radius_meters <= 0.0 {
            return Err(DetectError::Configuration(format!(
                "radius_meters {} must be positive",
                self.radius_meters
            )));
        }
        if !self.min_intensity.is_finite() || self.min_intensity <= 0.0 {
            return Err(DetectError::Configuration(format!(
                "min_intensity {} must be in (0, 1]",
                self.min_intensity
            )));
        }
        if !self.max_intensity.is_finite() || self.max_intensity > 1.0 {
            return Err(DetectError::Configuration(format!(
                "max_intensity {} must be in (0, 1]",
                self.max_intensity
            )));
        }
        if self.min_intensity > self.max_intensity {
            return Err(DetectError::Configuration(format!(
                "min_intensity {} exceeds max_intensity {}",
                self.min_intensity, self.max_intensity
            )));
        }
        Ok(())
    }
}

impl Default for DetectionConfig {
    /// The legacy prototype defaults: 500 m radius, alerts between 0.2 and 1.0.
    fn default() -> Self {
        Self {
            radius_meters: 500.0,
            min_intensity: 0.2,
            max_intensity: 1.0,
        }
    }
}

/// Common error type for detector construction and evaluation.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

pub type DetectResult<T> = Result<T, DetectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(DetectionConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_radius_is_rejected() {
        let config = DetectionConfig {
            radius_meters: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DetectError::Configuration(_))
        ));
    }

    #[test]
    fn intensity_bounds_are_checked() {
        let too_low = DetectionConfig {
            min_intensity: 0.0,
            ..Default::default()
        };
        assert!(too_low.validate().is_err());

        let too_high = DetectionConfig {
            max_intensity: 1.5,
            ..Default::default()
        };
        assert!(too_high.validate().is_err());

        let inverted = DetectionConfig {
            min_intensity: 0.9,
            max_intensity: 0.5,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());
    }
}
