use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Full parameter set for one simulation run.
///
/// This is also the persisted document layout: top-level scalars plus the
/// three grouped objects `peopleProps`, `peopleActions` and `orgActions`.
/// Missing fields fall back to [`ScenarioParameters::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ScenarioParameters {
    /// Number of monthly steps. Zero or negative produces no snapshots.
    pub horizon_months: i64,
    pub birth_rate: f64,
    pub death_rate: f64,
    /// Net migrants per year, signed.
    pub migration_net: f64,
    /// Amplitude of the annual employment cycle, signed.
    pub employment_shock: f64,
    pub people_props: PersonAttributes,
    pub people_actions: PersonBehaviorRates,
    pub org_actions: OrganizationActions,
}

impl ScenarioParameters {
    /// Number of snapshots a run over these parameters emits.
    pub fn horizon_len(&self) -> usize {
        usize::try_from(self.horizon_months.max(0)).unwrap_or(usize::MAX)
    }

    /// Every field that lies outside its documented range.
    ///
    /// Out-of-range values still simulate; callers decide whether to surface
    /// the list.
    pub fn range_violations(&self) -> Vec<RangeViolation> {
        let mut out = Vec::new();
        let mut check = |field: &'static str, value: f64, min: f64, max: f64| {
            if !(min..=max).contains(&value) {
                out.push(RangeViolation {
                    field,
                    value,
                    min,
                    max,
                });
            }
        };

        check(
            "horizonMonths",
            self.horizon_months as f64,
            0.0,
            f64::INFINITY,
        );
        check("birthRate", self.birth_rate, 0.0, 1.0);
        check("deathRate", self.death_rate, 0.0, 1.0);
        check(
            "migrationNet",
            self.migration_net,
            f64::NEG_INFINITY,
            f64::INFINITY,
        );
        check("employmentShock", self.employment_shock, -1.0, 1.0);

        let p = &self.people_props;
        for (field, value) in [
            ("peopleProps.careerOrientation", p.career_orientation),
            ("peopleProps.openness", p.openness),
            ("peopleProps.stress", p.stress),
            ("peopleProps.skills", p.skills),
            ("peopleProps.memory", p.memory),
            ("peopleProps.socialNormCompliance", p.social_norm_compliance),
            ("peopleProps.fatigue", p.fatigue),
            ("peopleProps.illness", p.illness),
        ] {
            check(field, value, 0.0, 1.0);
        }
        check("peopleProps.income", p.income, 0.0, f64::INFINITY);
        check("peopleProps.savings", p.savings, 0.0, f64::INFINITY);

        let a = &self.people_actions;
        for (field, value) in [
            ("peopleActions.jobSearchProb", a.job_search_prob),
            ("peopleActions.hireProb", a.hire_prob),
            ("peopleActions.quitProb", a.quit_prob),
            ("peopleActions.migrateProb", a.migrate_prob),
            ("peopleActions.trainingProb", a.training_prob),
            ("peopleActions.educationProb", a.education_prob),
            ("peopleActions.meetProb", a.meet_prob),
            ("peopleActions.pairCreateRate", a.pair_create_rate),
            ("peopleActions.marryRate", a.marry_rate),
            ("peopleActions.divorceRate", a.divorce_rate),
        ] {
            check(field, value, 0.0, 1.0);
        }
        check("peopleActions.birthRateAdj", a.birth_rate_adj, -0.5, 0.5);
        check("peopleActions.deathRateAdj", a.death_rate_adj, -0.5, 0.5);
        check(
            "peopleActions.retireAge",
            f64::from(a.retire_age),
            PersonBehaviorRates::RETIRE_AGE_MIN as f64,
            PersonBehaviorRates::RETIRE_AGE_MAX as f64,
        );

        let o = &self.org_actions;
        check("orgActions.hireRate", o.hire_rate, 0.0, 1.0);
        check("orgActions.fireRate", o.fire_rate, 0.0, 1.0);
        check("orgActions.wageIndex", o.wage_index, 0.5, 1.5);
        check("orgActions.hoursIndex", o.hours_index, 0.5, 1.5);

        out
    }
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self {
            horizon_months: 60,
            birth_rate: 0.011,
            death_rate: 0.013,
            migration_net: 150_000.0,
            employment_shock: 0.001,
            people_props: PersonAttributes::default(),
            people_actions: PersonBehaviorRates::default(),
            org_actions: OrganizationActions::default(),
        }
    }
}

/// Population-wide personal traits. Fractions in [0, 1]; `income` and
/// `savings` in thousands of the currency unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonAttributes {
    pub career_orientation: f64,
    pub openness: f64,
    pub stress: f64,
    pub skills: f64,
    pub memory: f64,
    pub social_norm_compliance: f64,
    pub fatigue: f64,
    pub illness: f64,
    pub income: f64,
    pub savings: f64,
}

impl Default for PersonAttributes {
    fn default() -> Self {
        Self {
            career_orientation: 0.5,
            openness: 0.5,
            stress: 0.4,
            skills: 0.5,
            memory: 0.5,
            social_norm_compliance: 0.6,
            fatigue: 0.4,
            illness: 0.1,
            income: 60.0,
            savings: 200.0,
        }
    }
}

/// Per-month behaviour probabilities. `birth_rate_adj` and `death_rate_adj`
/// are signed multipliers in [-0.5, 0.5].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonBehaviorRates {
    pub job_search_prob: f64,
    pub hire_prob: f64,
    pub quit_prob: f64,
    pub migrate_prob: f64,
    pub training_prob: f64,
    pub education_prob: f64,
    pub meet_prob: f64,
    pub pair_create_rate: f64,
    pub marry_rate: f64,
    pub divorce_rate: f64,
    pub birth_rate_adj: f64,
    pub death_rate_adj: f64,
    pub retire_age: i32,
}

impl PersonBehaviorRates {
    pub const RETIRE_AGE_MIN: i32 = 55;
    pub const RETIRE_AGE_MAX: i32 = 68;
}

impl Default for PersonBehaviorRates {
    fn default() -> Self {
        Self {
            job_search_prob: 0.5,
            hire_prob: 0.3,
            quit_prob: 0.1,
            migrate_prob: 0.5,
            training_prob: 0.2,
            education_prob: 0.3,
            meet_prob: 0.3,
            pair_create_rate: 0.2,
            marry_rate: 0.1,
            divorce_rate: 0.05,
            birth_rate_adj: 0.0,
            death_rate_adj: 0.0,
            retire_age: 63,
        }
    }
}

/// Employer-side levers. The two indices are centred on 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct OrganizationActions {
    pub hire_rate: f64,
    pub fire_rate: f64,
    pub wage_index: f64,
    pub hours_index: f64,
}

impl Default for OrganizationActions {
    fn default() -> Self {
        Self {
            hire_rate: 0.05,
            fire_rate: 0.03,
            wage_index: 1.0,
            hours_index: 1.0,
        }
    }
}

/// A parameter outside its documented range.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeViolation {
    pub field: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} outside [{}, {}]",
            self.field, self.value, self.min, self.max
        )
    }
}
