use anyhow::Context;
use beaconcore::geodesy::destination;
use beaconcore::Coordinate;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for generating a synthetic walk toward the beacon field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    pub start_lat: f64,
    pub start_lon: f64,
    pub steps: usize,
    pub step_meters: f64,
    pub heading_deg: f64,
    pub heading_jitter_deg: f64,
    pub seed: u64,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            // Roughly a kilometer south-west of the default beacon table,
            // heading north-east into it.
            start_lat: 50.6795,
            start_lon: 4.2520,
            steps: 60,
            step_meters: 25.0,
            heading_deg: 45.0,
            heading_jitter_deg: 10.0,
            seed: 0,
        }
    }
}

impl WalkConfig {
    fn normalized_steps(&self) -> usize {
        self.steps.max(1)
    }
}

/// Builds a deterministic track of fixes, one geodesic step at a time.
pub fn build_walk_track(config: &WalkConfig) -> anyhow::Result<Vec<Coordinate>> {
    let start = Coordinate::new(config.start_lat, config.start_lon)
        .context("validating walk start fix")?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut track = Vec::with_capacity(config.normalized_steps());
    let mut current = start;
    track.push(current);

    for _ in 1..config.normalized_steps() {
        let jitter = if config.heading_jitter_deg > 0.0 {
            rng.gen_range(-config.heading_jitter_deg..config.heading_jitter_deg)
        } else {
            0.0
        };
        current = destination(
            current,
            config.heading_deg + jitter,
            config.step_meters.max(0.0),
        );
        track.push(current);
    }

    Ok(track)
}

#[cfg(test)]
mod tests {
    use super::*;
    use beaconcore::geodesy::distance_meters;

    #[test]
    fn walk_has_configured_length() {
        let track = build_walk_track(&WalkConfig::default()).unwrap();
        assert_eq!(track.len(), 60);
    }

    #[test]
    fn walk_is_deterministic_per_seed() {
        let config = WalkConfig {
            seed: 13,
            ..Default::default()
        };
        let first = build_walk_track(&config).unwrap();
        let second = build_walk_track(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn consecutive_fixes_are_one_step_apart() {
        let config = WalkConfig {
            steps: 10,
            step_meters: 40.0,
            ..Default::default()
        };
        let track = build_walk_track(&config).unwrap();
        for pair in track.windows(2) {
            let step = distance_meters(pair[0], pair[1]);
            assert!((step - 40.0).abs() < 0.01, "step was {step} m");
        }
    }

    #[test]
    fn invalid_start_fix_is_rejected() {
        let config = WalkConfig {
            start_lat: 95.0,
            ..Default::default()
        };
        assert!(build_walk_track(&config).is_err());
    }
}
