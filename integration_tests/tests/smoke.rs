mod common;

use std::sync::Arc;

use scenario_core::{builtin_defaults, builtin_locations, ScenarioSession};

#[test]
fn default_session_initializes() {
    let session = ScenarioSession::new(builtin_defaults(), builtin_locations());
    assert_eq!(session.snapshots().len(), 60);
    assert_eq!(
        session.projection().expect("projection").len(),
        builtin_locations().len()
    );
}

#[test]
fn single_month_session_projects_zero_growth() {
    let session = ScenarioSession::new(
        Arc::new(common::params_with_horizon(1)),
        builtin_locations(),
    );
    let projection = session.projection().expect("projection");
    assert!(projection.iter().all(|attributes| attributes.growth == 0));
}
