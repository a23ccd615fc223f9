mod common;

use scenario_core::{simulate, ScenarioRun};

#[test]
fn deterministic_sequences_match() {
    let mut params = common::params_with_horizon(240);
    params.employment_shock = 0.03;
    params.people_actions.migrate_prob = 0.8;

    let run_a = simulate(&params);
    let run_b = simulate(&params);

    assert_eq!(run_a.len(), 240);
    assert_eq!(run_a, run_b);
}

#[test]
fn iterator_and_collected_runs_agree() {
    let params = common::params_with_horizon(48);
    let mut run = ScenarioRun::new(&params);
    assert_eq!(run.len(), 48);

    let mut stepped = Vec::new();
    while let Some(snapshot) = run.next() {
        stepped.push(snapshot);
    }
    assert_eq!(stepped, simulate(&params));
}

#[test]
fn length_tracks_horizon() {
    for horizon in [-24i64, -1, 0, 1, 2, 13, 120] {
        let snapshots = simulate(&common::params_with_horizon(horizon));
        assert_eq!(snapshots.len() as i64, horizon.max(0), "horizon {horizon}");
    }
}

#[test]
fn prefix_of_longer_run_is_shorter_run() {
    let short = simulate(&common::params_with_horizon(10));
    let long = simulate(&common::params_with_horizon(30));
    assert_eq!(&long[..10], short.as_slice());
}
