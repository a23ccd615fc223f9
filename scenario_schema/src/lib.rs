//! Shared data types for the scenario explorer.
//!
//! Everything here is plain serde data: the parameter document the UI edits and
//! persists, the partial overlay documents merged on top of it, the monthly
//! snapshots produced by the engine, and the named locations used for the map
//! overlay.

mod location;
mod overlay;
mod params;
mod snapshot;

pub use location::{LocationDisplayAttributes, NamedLocation};
pub use overlay::{
    merge_overlay, OrganizationActionsOverlay, ParameterOverlay, PersonAttributesOverlay,
    PersonBehaviorRatesOverlay,
};
pub use params::{
    OrganizationActions, PersonAttributes, PersonBehaviorRates, RangeViolation,
    ScenarioParameters,
};
pub use snapshot::{SimulationSnapshot, DELIMITED_HEADER};
