use crate::detector::target::Target;
use serde::{Deserialize, Serialize};

/// Outcome of evaluating one fix against the configured beacons.
///
/// A plain value owned by the caller; `intensity` is present only for
/// in-range fixes so the wire form never carries a misleading zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub nearest_target: Target,
    pub distance_meters: f64,
    pub in_range: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesy::Coordinate;

    #[test]
    fn out_of_range_result_serializes_without_intensity() {
        let result = DetectionResult {
            nearest_target: Target::new("Bonus 1", Coordinate::new(50.6874, 4.2606).unwrap()),
            distance_meters: 812.4,
            in_range: false,
            intensity: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("intensity").is_none());
        assert_eq!(json["nearest_target"]["name"], "Bonus 1");
        assert_eq!(json["in_range"], false);
    }

    #[test]
    fn result_round_trips_through_json() {
        let result = DetectionResult {
            nearest_target: Target::new("Bonus 2", Coordinate::new(50.6814, 4.2643).unwrap()),
            distance_meters: 120.0,
            in_range: true,
            intensity: Some(0.808),
        };

        let json = serde_json::to_string(&result).unwrap();
        let decoded: DetectionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, result);
    }
}
