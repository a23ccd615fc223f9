use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use scenario_schema::NamedLocation;

use crate::scenario_config::ConfigError;

pub const BUILTIN_LOCATIONS: &str = include_str!("data/locations.json");

/// Env var naming an optional replacement city list.
pub const LOCATIONS_PATH_ENV: &str = "SCENARIO_LOCATIONS_PATH";

/// Reference cities shown on the map overlay.
pub fn builtin_locations() -> Arc<[NamedLocation]> {
    let locations: Vec<NamedLocation> =
        serde_json::from_str(BUILTIN_LOCATIONS).expect("builtin locations should parse");
    locations.into()
}

pub fn locations_from_file(path: &Path) -> Result<Vec<NamedLocation>, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn load_locations_from_env() -> Arc<[NamedLocation]> {
    let Some(path) = env::var(LOCATIONS_PATH_ENV).ok().map(PathBuf::from) else {
        return builtin_locations();
    };

    match locations_from_file(&path) {
        Ok(locations) => {
            tracing::info!(
                target: "scenario::config",
                path = %path.display(),
                count = locations.len(),
                "locations.loaded=file"
            );
            locations.into()
        }
        Err(err) => {
            tracing::warn!(
                target: "scenario::config",
                path = %path.display(),
                error = %err,
                "locations.load_failed"
            );
            builtin_locations()
        }
    }
}
