#![allow(dead_code)]

use std::path::PathBuf;

use scenario_schema::ScenarioParameters;

pub fn fixture_path(name: &str) -> PathBuf {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);

    debug_assert!(path.exists(), "missing fixture at {}", path.display());
    path
}

/// Fresh path under the temp dir, unique per test and process.
pub fn scratch_path(label: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "scenario_it_{}_{}.json",
        label,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

pub fn params_with_horizon(horizon_months: i64) -> ScenarioParameters {
    ScenarioParameters {
        horizon_months,
        ..ScenarioParameters::default()
    }
}
