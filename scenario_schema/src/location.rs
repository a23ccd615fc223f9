use serde::{Deserialize, Serialize};

/// Static reference point on the map. `weight` is only an apportionment key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedLocation {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub weight: f64,
}

impl NamedLocation {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            weight,
        }
    }
}

/// Per-location map attributes derived from the last two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDisplayAttributes {
    pub name: String,
    pub value: i64,
    pub growth: i64,
}
