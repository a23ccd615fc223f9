use std::path::PathBuf;
use std::sync::Arc;

use scenario_core::{
    builtin_defaults, load_locations_from_env, load_parameter_overlay_from_env,
    load_static_overlay, load_stored_overlay, FileStore, ScenarioSession,
};
use scenario_schema::{merge_overlay, ScenarioParameters};
use tracing::debug;

/// Where the effective parameters come from, lowest precedence first:
/// builtin defaults, the static overlay, the stored overlay, then flags.
#[derive(Debug)]
pub struct SessionSources {
    pub overlay: Option<PathBuf>,
    pub store: Option<FileStore>,
    pub horizon: Option<i64>,
}

impl SessionSources {
    pub fn resolve_parameters(&self) -> ScenarioParameters {
        let mut params = (*builtin_defaults()).clone();

        let static_overlay = match &self.overlay {
            Some(path) => load_static_overlay(path),
            None => load_parameter_overlay_from_env(),
        };
        if let Some(overlay) = static_overlay {
            params = merge_overlay(&params, &overlay);
        }

        if let Some(store) = &self.store {
            match load_stored_overlay(store) {
                Some(overlay) => {
                    debug!(
                        target: "scenario::cli",
                        path = %store.path().display(),
                        "stored_overlay.applied"
                    );
                    params = merge_overlay(&params, &overlay);
                }
                None => debug!(
                    target: "scenario::cli",
                    path = %store.path().display(),
                    "stored_overlay.absent"
                ),
            }
        }

        if let Some(horizon) = self.horizon {
            params.horizon_months = horizon;
        }

        params
    }

    pub fn build(&self) -> ScenarioSession {
        ScenarioSession::new(
            Arc::new(self.resolve_parameters()),
            load_locations_from_env(),
        )
    }
}
