use crate::mission::config::MissionConfig;
use crate::sources::LocationSource;
use anyhow::Context;
use beaconcore::telemetry::{LogManager, MetricsRecorder, MetricsSnapshot};
use beaconcore::{Coordinate, DetectError, DetectResult, DetectionResult, ProximityDetector};
use std::sync::Arc;

/// Aggregate of one track evaluation: per-fix results plus the beacon
/// distance listing of the last valid fix.
pub struct TrackSummary {
    pub results: Vec<DetectionResult>,
    pub in_range_count: usize,
    pub rejected_count: usize,
    pub last_fix: Option<Coordinate>,
    pub beacon_distances: Vec<(String, f64)>,
}

/// Drives the detector over incoming fixes and records telemetry.
#[derive(Clone)]
pub struct Runner {
    detector: ProximityDetector,
    metrics: Arc<MetricsRecorder>,
    logger: LogManager,
}

impl Runner {
    pub fn new(mission: &MissionConfig) -> anyhow::Result<Self> {
        let detector = mission
            .to_detector()
            .context("building detector from mission config")?;
        Ok(Self {
            detector,
            metrics: Arc::new(MetricsRecorder::new()),
            logger: LogManager::new(),
        })
    }

    pub fn detector(&self) -> &ProximityDetector {
        &self.detector
    }

    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Evaluates a single fix, counting it in the metrics either way.
    pub fn evaluate_fix(&self, fix: Coordinate) -> DetectResult<DetectionResult> {
        match self.detector.evaluate(fix) {
            Ok(result) => {
                self.metrics.record_evaluation(result.in_range);
                self.logger.record(&format!(
                    "fix ({:.6}, {:.6}) -> {} at {:.1} m{}",
                    fix.latitude,
                    fix.longitude,
                    result.nearest_target.name,
                    result.distance_meters,
                    if result.in_range { " (in range)" } else { "" }
                ));
                Ok(result)
            }
            Err(err) => {
                self.metrics.record_rejected();
                Err(err)
            }
        }
    }

    /// Drains a location source, skipping rejected fixes so one bad sample
    /// never aborts the rest of the track.
    pub fn execute(&self, source: &mut dyn LocationSource) -> anyhow::Result<TrackSummary> {
        let mut results = Vec::new();
        let mut in_range_count = 0;
        let mut rejected_count = 0;
        let mut last_fix = None;

        while let Some(fix) = source.next_fix() {
            match self.evaluate_fix(fix) {
                Ok(result) => {
                    if result.in_range {
                        in_range_count += 1;
                    }
                    last_fix = Some(fix);
                    results.push(result);
                }
                Err(DetectError::InvalidCoordinate(reason)) => {
                    self.logger.record(&format!("rejected fix: {}", reason));
                    rejected_count += 1;
                }
                Err(err) => return Err(err).context("evaluating fix"),
            }
        }

        let mut beacon_distances = Vec::new();
        if let Some(fix) = last_fix {
            let distances = self
                .detector
                .distances(fix)
                .context("listing beacon distances")?;
            beacon_distances = self
                .detector
                .targets()
                .iter()
                .zip(distances)
                .map(|(target, distance)| (target.name.clone(), distance))
                .collect();
        }

        Ok(TrackSummary {
            results,
            in_range_count,
            rejected_count,
            last_fix,
            beacon_distances,
        })
    }
}
