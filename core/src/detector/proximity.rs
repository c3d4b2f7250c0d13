use crate::detector::result::DetectionResult;
use crate::detector::target::Target;
use crate::geodesy::{distance_meters, Coordinate};
use crate::prelude::{DetectError, DetectResult, DetectionConfig};

/// Distances within this margin count as a tie, resolved toward the
/// earlier target in configured order.
const TIE_EPSILON_METERS: f64 = 1e-6;

/// Stateless nearest-beacon detector over an immutable target table.
///
/// Every evaluation depends only on the sample it is given; the detector
/// keeps no history and is safe to share across threads.
#[derive(Debug, Clone)]
pub struct ProximityDetector {
    targets: Vec<Target>,
    config: DetectionConfig,
}

impl ProximityDetector {
    /// Validates the target table and configuration up front so that
    /// `evaluate` can only fail on bad samples.
    pub fn new(targets: Vec<Target>, config: DetectionConfig) -> DetectResult<Self> {
        if targets.is_empty() {
            return Err(DetectError::Configuration("target table is empty".into()));
        }
        for target in &targets {
            if target.name.is_empty() {
                return Err(DetectError::Configuration(
                    "target with empty name".into(),
                ));
            }
            target.location.validate().map_err(|err| {
                DetectError::Configuration(format!("target {}: {}", target.name, err))
            })?;
        }
        config.validate()?;

        Ok(Self { targets, config })
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Distance in meters from `sample` to every target, in configured order.
    pub fn distances(&self, sample: Coordinate) -> DetectResult<Vec<f64>> {
        sample.validate()?;
        Ok(self
            .targets
            .iter()
            .map(|target| distance_meters(sample, target.location))
            .collect())
    }

    /// Evaluates one fix: nearest target, range classification, and alert
    /// intensity. Intensity scales linearly from `max_intensity` at the
    /// target down to `min_intensity` at the radius; closer is always the
    /// stronger signal.
    pub fn evaluate(&self, sample: Coordinate) -> DetectResult<DetectionResult> {
        let distances = self.distances(sample)?;

        let mut best_index = 0;
        let mut best_distance = distances[0];
        for (index, &distance) in distances.iter().enumerate().skip(1) {
            if distance + TIE_EPSILON_METERS < best_distance {
                best_index = index;
                best_distance = distance;
            }
        }

        let in_range = best_distance <= self.config.radius_meters;
        let intensity = if in_range {
            let span = self.config.max_intensity - self.config.min_intensity;
            let raw = self.config.min_intensity
                + span * (1.0 - best_distance / self.config.radius_meters);
            Some(raw.clamp(self.config.min_intensity, self.config.max_intensity))
        } else {
            None
        };

        Ok(DetectionResult {
            nearest_target: self.targets[best_index].clone(),
            distance_meters: best_distance,
            in_range,
            intensity,
        })
    }
}
