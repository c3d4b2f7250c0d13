use crate::geodesy::Coordinate;
use serde::{Deserialize, Serialize};

/// A named beacon the detector measures against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub location: Coordinate,
}

impl Target {
    pub fn new(name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}
