//! Monthly population and employment recurrence.
//!
//! Each step depends only on the previous step's unrounded population and
//! employed share plus the static parameters. There is no randomness and no
//! clock input, so identical parameters always yield identical sequences.

use std::f64::consts::PI;

use scenario_schema::{ScenarioParameters, SimulationSnapshot};

pub const INITIAL_POPULATION: f64 = 146_000_000.0;
pub const INITIAL_EMPLOYED_SHARE: f64 = 0.60;
pub const EMPLOYED_SHARE_MIN: f64 = 0.45;
pub const EMPLOYED_SHARE_MAX: f64 = 0.70;
/// Fixed labour-force participation ceiling used for the unemployed count.
/// Deliberately independent of the employed-share clamp.
pub const LABOR_FORCE_CEILING: f64 = 0.68;
/// Retirement ages below this reduce the employed share every month.
pub const RETIREMENT_PIVOT_AGE: i32 = 65;

const MONTHS_PER_YEAR: f64 = 12.0;
const RETIREMENT_DRAG_PER_YEAR: f64 = 0.002;

/// Carried state between months. Population is not floored: extreme negative
/// migration can drive it below zero over long horizons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub month: u32,
    pub population: f64,
    pub employed_share: f64,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            month: 0,
            population: INITIAL_POPULATION,
            employed_share: INITIAL_EMPLOYED_SHARE,
        }
    }
}

/// Per-run constants derived once from the parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyRates {
    pub birth_rate: f64,
    pub death_rate: f64,
    pub migration: f64,
    pub shock_amplitude: f64,
    /// Sum of the non-cyclical employed-share adjustments.
    pub employment_drift: f64,
    pub retirement_drag: f64,
}

impl MonthlyRates {
    pub fn from_params(params: &ScenarioParameters) -> Self {
        let props = &params.people_props;
        let actions = &params.people_actions;
        let org = &params.org_actions;

        let effective_birth = params.birth_rate
            * (1.0 + actions.birth_rate_adj + 0.1 * (actions.pair_create_rate + actions.marry_rate)
                - 0.05 * actions.divorce_rate);
        let effective_death =
            params.death_rate * (1.0 + actions.death_rate_adj + 0.5 * props.illness);

        let migration_factor =
            1.0 + (actions.migrate_prob - 0.5) * 0.5 + (org.wage_index - 1.0) * 0.3;

        let employment_drift = 0.02 * (props.skills - 0.5)
            + 0.01 * (actions.job_search_prob - 0.5)
            - 0.01 * (actions.quit_prob - 0.5)
            + 0.01 * (org.hire_rate - org.fire_rate)
            + 0.003 * ((org.wage_index - 1.0) + (org.hours_index - 1.0))
            - 0.02 * (props.fatigue + props.illness - 1.0);

        let early_years = RETIREMENT_PIVOT_AGE.saturating_sub(actions.retire_age).max(0);

        Self {
            birth_rate: effective_birth / MONTHS_PER_YEAR,
            death_rate: effective_death / MONTHS_PER_YEAR,
            migration: params.migration_net / MONTHS_PER_YEAR * migration_factor,
            shock_amplitude: params.employment_shock,
            employment_drift,
            retirement_drag: f64::from(early_years) * RETIREMENT_DRAG_PER_YEAR,
        }
    }

    /// Annual-period employment disturbance, phase aligned to month 0.
    pub fn shock(&self, month: u32) -> f64 {
        self.shock_amplitude * (2.0 * PI * f64::from(month) / MONTHS_PER_YEAR).sin()
    }
}

impl SimulationState {
    /// Advance one month, returning the next state and the rounded snapshot
    /// for the month just simulated.
    pub fn advance(&self, rates: &MonthlyRates) -> (SimulationState, SimulationSnapshot) {
        let births = rates.birth_rate * self.population;
        let deaths = rates.death_rate * self.population;
        let population = self.population + (births - deaths + rates.migration);

        let mut employed_share = self.employed_share;
        employed_share += rates.shock(self.month) + rates.employment_drift;
        employed_share -= rates.retirement_drag;
        let employed_share = employed_share.clamp(EMPLOYED_SHARE_MIN, EMPLOYED_SHARE_MAX);

        let employed = population * employed_share;
        let unemployed = (population * LABOR_FORCE_CEILING - employed).max(0.0);

        let snapshot = SimulationSnapshot {
            t: self.month,
            population: round_whole(population),
            employed: round_whole(employed),
            unemployed: round_whole(unemployed),
            migration: round_whole(rates.migration),
        };

        let next = SimulationState {
            month: self.month.saturating_add(1),
            population,
            employed_share,
        };
        (next, snapshot)
    }
}

/// Rounds half away from zero. Non-finite values saturate per `as` casts.
fn round_whole(value: f64) -> i64 {
    value.round() as i64
}

/// Iterator over the monthly snapshots of one run.
///
/// [`ScenarioRun::state`] exposes the unrounded carried state after the most
/// recently yielded month.
#[derive(Debug, Clone)]
pub struct ScenarioRun {
    rates: MonthlyRates,
    state: SimulationState,
    remaining: usize,
}

impl ScenarioRun {
    pub fn new(params: &ScenarioParameters) -> Self {
        Self {
            rates: MonthlyRates::from_params(params),
            state: SimulationState::default(),
            remaining: params.horizon_len(),
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }
}

impl Iterator for ScenarioRun {
    type Item = SimulationSnapshot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let (next, snapshot) = self.state.advance(&self.rates);
        self.state = next;
        Some(snapshot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ScenarioRun {}

/// Run the full horizon. Zero or negative `horizon_months` yields an empty
/// sequence.
pub fn simulate(params: &ScenarioParameters) -> Vec<SimulationSnapshot> {
    let snapshots: Vec<SimulationSnapshot> = ScenarioRun::new(params).collect();
    tracing::debug!(
        target: "scenario::engine",
        months = snapshots.len(),
        final_population = snapshots.last().map(|s| s.population),
        "simulation.completed"
    );
    snapshots
}
