use serde::{Deserialize, Serialize};

/// Header row of the delimited-text export.
pub const DELIMITED_HEADER: &str = "t,population,employed,unemployed,migration";

/// One simulated month. All figures are rounded to whole units; the engine
/// carries the unrounded values internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub t: u32,
    pub population: i64,
    pub employed: i64,
    pub unemployed: i64,
    pub migration: i64,
}

impl SimulationSnapshot {
    pub fn delimited_row(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.t, self.population, self.employed, self.unemployed, self.migration
        )
    }
}
