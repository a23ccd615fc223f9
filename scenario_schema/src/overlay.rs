use serde::{Deserialize, Serialize};

use crate::params::{
    OrganizationActions, PersonAttributes, PersonBehaviorRates, ScenarioParameters,
};

/// Partial parameter document loaded from a static resource or local storage.
///
/// Every field is optional. Unknown fields are ignored so documents written by
/// newer builds still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParameterOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizon_months: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migration_net: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_shock: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people_props: Option<PersonAttributesOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people_actions: Option<PersonBehaviorRatesOverlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_actions: Option<OrganizationActionsOverlay>,
}

impl ParameterOverlay {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<&ScenarioParameters> for ParameterOverlay {
    fn from(params: &ScenarioParameters) -> Self {
        Self {
            horizon_months: Some(params.horizon_months),
            birth_rate: Some(params.birth_rate),
            death_rate: Some(params.death_rate),
            migration_net: Some(params.migration_net),
            employment_shock: Some(params.employment_shock),
            people_props: Some(PersonAttributesOverlay::from(&params.people_props)),
            people_actions: Some(PersonBehaviorRatesOverlay::from(&params.people_actions)),
            org_actions: Some(OrganizationActionsOverlay::from(&params.org_actions)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonAttributesOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_orientation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_norm_compliance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fatigue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub illness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<f64>,
}

impl PersonAttributesOverlay {
    fn apply(&self, base: &PersonAttributes) -> PersonAttributes {
        PersonAttributes {
            career_orientation: self.career_orientation.unwrap_or(base.career_orientation),
            openness: self.openness.unwrap_or(base.openness),
            stress: self.stress.unwrap_or(base.stress),
            skills: self.skills.unwrap_or(base.skills),
            memory: self.memory.unwrap_or(base.memory),
            social_norm_compliance: self
                .social_norm_compliance
                .unwrap_or(base.social_norm_compliance),
            fatigue: self.fatigue.unwrap_or(base.fatigue),
            illness: self.illness.unwrap_or(base.illness),
            income: self.income.unwrap_or(base.income),
            savings: self.savings.unwrap_or(base.savings),
        }
    }
}

impl From<&PersonAttributes> for PersonAttributesOverlay {
    fn from(props: &PersonAttributes) -> Self {
        Self {
            career_orientation: Some(props.career_orientation),
            openness: Some(props.openness),
            stress: Some(props.stress),
            skills: Some(props.skills),
            memory: Some(props.memory),
            social_norm_compliance: Some(props.social_norm_compliance),
            fatigue: Some(props.fatigue),
            illness: Some(props.illness),
            income: Some(props.income),
            savings: Some(props.savings),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonBehaviorRatesOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_search_prob: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_prob: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quit_prob: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_prob: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_prob: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_prob: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meet_prob: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pair_create_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marry_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divorce_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_rate_adj: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_rate_adj: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retire_age: Option<i32>,
}

impl PersonBehaviorRatesOverlay {
    fn apply(&self, base: &PersonBehaviorRates) -> PersonBehaviorRates {
        PersonBehaviorRates {
            job_search_prob: self.job_search_prob.unwrap_or(base.job_search_prob),
            hire_prob: self.hire_prob.unwrap_or(base.hire_prob),
            quit_prob: self.quit_prob.unwrap_or(base.quit_prob),
            migrate_prob: self.migrate_prob.unwrap_or(base.migrate_prob),
            training_prob: self.training_prob.unwrap_or(base.training_prob),
            education_prob: self.education_prob.unwrap_or(base.education_prob),
            meet_prob: self.meet_prob.unwrap_or(base.meet_prob),
            pair_create_rate: self.pair_create_rate.unwrap_or(base.pair_create_rate),
            marry_rate: self.marry_rate.unwrap_or(base.marry_rate),
            divorce_rate: self.divorce_rate.unwrap_or(base.divorce_rate),
            birth_rate_adj: self.birth_rate_adj.unwrap_or(base.birth_rate_adj),
            death_rate_adj: self.death_rate_adj.unwrap_or(base.death_rate_adj),
            retire_age: self.retire_age.unwrap_or(base.retire_age),
        }
    }
}

impl From<&PersonBehaviorRates> for PersonBehaviorRatesOverlay {
    fn from(rates: &PersonBehaviorRates) -> Self {
        Self {
            job_search_prob: Some(rates.job_search_prob),
            hire_prob: Some(rates.hire_prob),
            quit_prob: Some(rates.quit_prob),
            migrate_prob: Some(rates.migrate_prob),
            training_prob: Some(rates.training_prob),
            education_prob: Some(rates.education_prob),
            meet_prob: Some(rates.meet_prob),
            pair_create_rate: Some(rates.pair_create_rate),
            marry_rate: Some(rates.marry_rate),
            divorce_rate: Some(rates.divorce_rate),
            birth_rate_adj: Some(rates.birth_rate_adj),
            death_rate_adj: Some(rates.death_rate_adj),
            retire_age: Some(rates.retire_age),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrganizationActionsOverlay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fire_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wage_index: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_index: Option<f64>,
}

impl OrganizationActionsOverlay {
    fn apply(&self, base: &OrganizationActions) -> OrganizationActions {
        OrganizationActions {
            hire_rate: self.hire_rate.unwrap_or(base.hire_rate),
            fire_rate: self.fire_rate.unwrap_or(base.fire_rate),
            wage_index: self.wage_index.unwrap_or(base.wage_index),
            hours_index: self.hours_index.unwrap_or(base.hours_index),
        }
    }
}

impl From<&OrganizationActions> for OrganizationActionsOverlay {
    fn from(actions: &OrganizationActions) -> Self {
        Self {
            hire_rate: Some(actions.hire_rate),
            fire_rate: Some(actions.fire_rate),
            wage_index: Some(actions.wage_index),
            hours_index: Some(actions.hours_index),
        }
    }
}

/// Combine `overlay` with `defaults`, preferring overlay values where present.
///
/// Top-level scalars are replaced individually; each grouped object is merged
/// one level deep, so an overlay carrying only `orgActions.wageIndex` keeps the
/// other three organisation fields from `defaults`.
pub fn merge_overlay(
    defaults: &ScenarioParameters,
    overlay: &ParameterOverlay,
) -> ScenarioParameters {
    ScenarioParameters {
        horizon_months: overlay.horizon_months.unwrap_or(defaults.horizon_months),
        birth_rate: overlay.birth_rate.unwrap_or(defaults.birth_rate),
        death_rate: overlay.death_rate.unwrap_or(defaults.death_rate),
        migration_net: overlay.migration_net.unwrap_or(defaults.migration_net),
        employment_shock: overlay.employment_shock.unwrap_or(defaults.employment_shock),
        people_props: match &overlay.people_props {
            Some(group) => group.apply(&defaults.people_props),
            None => defaults.people_props.clone(),
        },
        people_actions: match &overlay.people_actions {
            Some(group) => group.apply(&defaults.people_actions),
            None => defaults.people_actions.clone(),
        },
        org_actions: match &overlay.org_actions {
            Some(group) => group.apply(&defaults.org_actions),
            None => defaults.org_actions.clone(),
        },
    }
}
