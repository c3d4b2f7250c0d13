use anyhow::Context;
use beaconcore::{Coordinate, DetectionConfig, ProximityDetector, Target};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One named beacon entry in a mission file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BeaconSpec {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Mission-level configuration: the beacon table plus detection bounds.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionConfig {
    pub beacons: Vec<BeaconSpec>,
    pub radius_meters: f64,
    pub min_intensity: f64,
    pub max_intensity: f64,
}

impl Default for MissionConfig {
    /// The hard-coded spot table of the legacy prototype pages.
    fn default() -> Self {
        Self {
            beacons: vec![
                BeaconSpec {
                    name: "Bonus 1".into(),
                    lat: 50.68704115862972,
                    lon: 4.260554416777018,
                },
                BeaconSpec {
                    name: "Bonus 2".into(),
                    lat: 50.68141372627077,
                    lon: 4.264321702154752,
                },
                BeaconSpec {
                    name: "Bonus 3".into(),
                    lat: 50.68280545646507,
                    lon: 4.269052508141664,
                },
            ],
            radius_meters: 500.0,
            min_intensity: 0.2,
            max_intensity: 1.0,
        }
    }
}

impl MissionConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading mission config {}", path_ref.display()))?;
        let config: MissionConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing mission config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn to_detection_config(&self) -> DetectionConfig {
        DetectionConfig {
            radius_meters: self.radius_meters,
            min_intensity: self.min_intensity,
            max_intensity: self.max_intensity,
        }
    }

    /// Builds the detector, surfacing beacon-table mistakes with the
    /// offending entry named.
    pub fn to_detector(&self) -> anyhow::Result<ProximityDetector> {
        let targets = self
            .beacons
            .iter()
            .map(|beacon| -> anyhow::Result<Target> {
                let location = Coordinate::new(beacon.lat, beacon.lon)
                    .with_context(|| format!("beacon {}", beacon.name))?;
                Ok(Target::new(beacon.name.clone(), location))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        ProximityDetector::new(targets, self.to_detection_config())
            .context("validating mission config")
    }
}
