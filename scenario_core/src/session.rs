use std::sync::Arc;

use scenario_schema::{
    merge_overlay, LocationDisplayAttributes, NamedLocation, ParameterOverlay, ScenarioParameters,
    SimulationSnapshot,
};

use crate::{
    engine::simulate,
    projection::{project, ProjectionError},
};

/// The interactive layer's single current-value slot.
///
/// Parameters are never edited in place: every change builds a new value and
/// [`ScenarioSession::replace`]s the slot, which recomputes the whole sequence
/// synchronously.
#[derive(Debug, Clone)]
pub struct ScenarioSession {
    params: Arc<ScenarioParameters>,
    snapshots: Vec<SimulationSnapshot>,
    locations: Arc<[NamedLocation]>,
}

impl ScenarioSession {
    pub fn new(params: Arc<ScenarioParameters>, locations: Arc<[NamedLocation]>) -> Self {
        let snapshots = run(&params);
        Self {
            params,
            snapshots,
            locations,
        }
    }

    pub fn params(&self) -> Arc<ScenarioParameters> {
        Arc::clone(&self.params)
    }

    pub fn snapshots(&self) -> &[SimulationSnapshot] {
        &self.snapshots
    }

    pub fn locations(&self) -> &[NamedLocation] {
        &self.locations
    }

    pub fn replace(&mut self, params: Arc<ScenarioParameters>) {
        self.snapshots = run(&params);
        self.params = params;
    }

    /// Merge `overlay` into the current value and replace the slot with the
    /// result.
    pub fn apply_overlay(&mut self, overlay: &ParameterOverlay) {
        let merged = merge_overlay(&self.params, overlay);
        self.replace(Arc::new(merged));
    }

    /// Build a new parameter value from the current one and replace the slot.
    pub fn edit(&mut self, change: impl FnOnce(&mut ScenarioParameters)) {
        let mut next = (*self.params).clone();
        change(&mut next);
        self.replace(Arc::new(next));
    }

    pub fn projection(&self) -> Result<Vec<LocationDisplayAttributes>, ProjectionError> {
        project(&self.snapshots, &self.locations)
    }
}

fn run(params: &ScenarioParameters) -> Vec<SimulationSnapshot> {
    for violation in params.range_violations() {
        tracing::warn!(
            target: "scenario::session",
            field = violation.field,
            value = violation.value,
            min = violation.min,
            max = violation.max,
            "parameters.out_of_range"
        );
    }
    simulate(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::builtin_locations;

    fn session(horizon_months: i64) -> ScenarioSession {
        ScenarioSession::new(
            Arc::new(ScenarioParameters {
                horizon_months,
                ..ScenarioParameters::default()
            }),
            builtin_locations(),
        )
    }

    #[test]
    fn replace_recomputes_sequence() {
        let mut session = session(12);
        assert_eq!(session.snapshots().len(), 12);

        session.replace(Arc::new(ScenarioParameters {
            horizon_months: 3,
            ..ScenarioParameters::default()
        }));
        assert_eq!(session.snapshots().len(), 3);
        assert_eq!(session.params().horizon_months, 3);
    }

    #[test]
    fn edit_does_not_mutate_previous_value() {
        let mut session = session(6);
        let before = session.params();
        session.edit(|params| params.org_actions.hire_rate = 0.5);

        assert_eq!(before.org_actions.hire_rate, 0.05);
        assert_eq!(session.params().org_actions.hire_rate, 0.5);
        assert!(!Arc::ptr_eq(&before, &session.params()));
    }

    #[test]
    fn overlay_merges_into_current_value() {
        let mut session = session(6);
        session.edit(|params| params.birth_rate = 0.02);
        let overlay =
            ParameterOverlay::from_json_str(r#"{"peopleProps":{"illness":0.3}}"#).expect("parse");
        session.apply_overlay(&overlay);

        assert_eq!(session.params().birth_rate, 0.02);
        assert_eq!(session.params().people_props.illness, 0.3);
        assert_eq!(session.params().people_props.skills, 0.5);
    }

    #[test]
    fn projection_follows_current_snapshots() {
        let session = session(2);
        let projection = session.projection().expect("projection");
        assert_eq!(projection.len(), session.locations().len());
        assert!(projection.iter().all(|attributes| attributes.growth > 0));
    }

    #[test]
    fn empty_horizon_has_no_projection() {
        let session = session(0);
        assert_eq!(session.projection(), Err(ProjectionError::NoSnapshots));
    }
}
