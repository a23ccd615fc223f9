use std::{
    env, fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use scenario_schema::{ParameterOverlay, ScenarioParameters};
use thiserror::Error;

pub const BUILTIN_SCENARIO_DEFAULTS: &str = include_str!("data/scenario_defaults.json");

/// Env var naming an optional static overlay document.
pub const OVERLAY_PATH_ENV: &str = "SCENARIO_OVERLAY_PATH";

/// Parameter set the UI starts from before any overlay is applied.
pub fn builtin_defaults() -> Arc<ScenarioParameters> {
    Arc::new(
        serde_json::from_str(BUILTIN_SCENARIO_DEFAULTS)
            .expect("builtin scenario defaults should parse"),
    )
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse scenario document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read scenario document from {path:?}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn read_overlay_file(path: &Path) -> Result<ParameterOverlay, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let overlay = ParameterOverlay::from_json_str(&contents)?;
    Ok(overlay)
}

/// Load an optional static overlay. Missing or malformed documents are logged
/// and yield `None`; the caller keeps its current parameters.
pub fn load_static_overlay(path: &Path) -> Option<ParameterOverlay> {
    match read_overlay_file(path) {
        Ok(overlay) => {
            tracing::info!(
                target: "scenario::config",
                path = %path.display(),
                "scenario_overlay.loaded=file"
            );
            Some(overlay)
        }
        Err(err) => {
            tracing::warn!(
                target: "scenario::config",
                path = %path.display(),
                error = %err,
                "scenario_overlay.load_failed"
            );
            None
        }
    }
}

pub fn load_parameter_overlay_from_env() -> Option<ParameterOverlay> {
    let path = env::var(OVERLAY_PATH_ENV).ok().map(PathBuf::from)?;
    load_static_overlay(&path)
}
