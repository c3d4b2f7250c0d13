use crate::mission::runner::TrackSummary;
use beaconcore::telemetry::MetricsSnapshot;
use beaconcore::{Coordinate, DetectionResult};
use serde::{Deserialize, Serialize};

/// Distance to one configured beacon, part of the listing the legacy
/// pages rendered under the current position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconDistance {
    pub name: String,
    pub distance_meters: f64,
}

/// Snapshot served to the UI layer: the last known position, its
/// evaluation, the per-beacon distances, and the running counters.
/// Everything is `None`/empty until the first fix arrives, which is the
/// "position not detected" state of the prototypes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionView {
    pub last_position: Option<Coordinate>,
    pub latest: Option<DetectionResult>,
    pub beacon_distances: Vec<BeaconDistance>,
    pub metrics: MetricsSnapshot,
}

impl DetectionView {
    pub fn from_summary(summary: &TrackSummary, metrics: MetricsSnapshot) -> Self {
        Self {
            last_position: summary.last_fix,
            latest: summary.results.last().cloned(),
            beacon_distances: summary
                .beacon_distances
                .iter()
                .map(|(name, distance)| BeaconDistance {
                    name: name.clone(),
                    distance_meters: *distance,
                })
                .collect(),
            metrics,
        }
    }
}
