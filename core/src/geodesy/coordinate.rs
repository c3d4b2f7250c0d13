use crate::prelude::{DetectError, DetectResult};
use serde::{Deserialize, Serialize};

/// A GPS fix in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Builds a validated coordinate.
    pub fn new(latitude: f64, longitude: f64) -> DetectResult<Self> {
        let coordinate = Self {
            latitude,
            longitude,
        };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Rejects out-of-range or non-finite components; never clamps.
    pub fn validate(&self) -> DetectResult<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(DetectError::InvalidCoordinate(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(DetectError::InvalidCoordinate(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }

    pub(crate) fn to_point(self) -> geo::Point {
        geo::Point::new(self.longitude, self.latitude)
    }

    pub(crate) fn from_point(point: geo::Point) -> Self {
        Self {
            latitude: point.y(),
            longitude: point.x(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_in_range_components() {
        let fix = Coordinate::new(50.6874, 4.2606).unwrap();
        assert_eq!(fix.latitude, 50.6874);
        assert_eq!(fix.longitude, 4.2606);
    }

    #[test]
    fn accepts_boundary_values() {
        assert!(Coordinate::new(-90.0, 180.0).is_ok());
        assert!(Coordinate::new(90.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        assert!(matches!(
            Coordinate::new(91.0, 0.0),
            Err(DetectError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        assert!(matches!(
            Coordinate::new(0.0, 200.0),
            Err(DetectError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn rejects_non_finite_components() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }
}
