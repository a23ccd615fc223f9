//! Core crate for the scenario explorer.
//!
//! [`simulate`] maps a parameter set to a month-by-month snapshot sequence and
//! [`project`] apportions the latest employment figures across named map
//! locations. Both are pure; everything else here loads their inputs or
//! renders their outputs.

pub mod engine;
pub mod export;
pub mod locations;
pub mod map_style;
mod projection;
pub mod scenario_config;
mod session;
pub mod store;

pub use engine::{simulate, MonthlyRates, ScenarioRun, SimulationState};
pub use export::{
    feature_collection, to_delimited_text, write_delimited, ExportError, FeatureCollection,
};
pub use locations::{builtin_locations, load_locations_from_env};
pub use map_style::{load_map_style_from_env, MapStyle, Rgb};
pub use projection::{project, ProjectionError};
pub use scenario_config::{
    builtin_defaults, load_parameter_overlay_from_env, load_static_overlay, ConfigError,
};
pub use session::ScenarioSession;
pub use store::{
    clear_parameters, load_stored_overlay, save_parameters, FileStore, KeyValueStore, MemoryStore,
    StoreError, PARAMETERS_KEY,
};
