use crate::core::{
    age::get_age_bracket,
    costs::{filter_by_iua, find_plan_costs, parse_iua_preference},
    household::infer_household_type,
};
use crate::models::{EligiblePlan, HouseholdType, PlanCatalog, ProviderPlan, QuestionnaireResponse};

/// Check a single plan against resolved user criteria.
///
/// Returns the plan with its applicable price options, or `None` when the
/// plan does not price this age/household or has no option at the
/// preferred IUA. Without an IUA preference the matched row is kept as is,
/// even when it lists no options.
pub fn match_plan(
    plan: &ProviderPlan,
    age: u8,
    household: HouseholdType,
    iua: Option<u32>,
) -> Option<EligiblePlan> {
    let Some(bracket) = get_age_bracket(age, &plan.age_rules) else {
        tracing::debug!("Plan {} excluded: age {} outside its brackets", plan.id, age);
        return None;
    };

    let Some(costs) = find_plan_costs(plan, &bracket, household) else {
        tracing::debug!(
            "Plan {} excluded: no pricing row for ({}, {})",
            plan.id,
            bracket,
            household
        );
        return None;
    };

    let eligible_prices = filter_by_iua(costs, iua);
    if iua.is_some() && eligible_prices.is_empty() {
        tracing::debug!("Plan {} excluded: no option at IUA {:?}", plan.id, iua);
        return None;
    }

    Some(EligiblePlan {
        plan: plan.clone(),
        eligible_prices,
    })
}

/// Filter the catalog down to the plans this questionnaire qualifies for.
///
/// Result order follows catalog order. No matches yields an empty vector.
pub fn find_eligible_plans(
    catalog: &PlanCatalog,
    questionnaire: &QuestionnaireResponse,
) -> Vec<EligiblePlan> {
    let household = infer_household_type(questionnaire);
    let iua = parse_iua_preference(questionnaire.iua_preference.as_deref());

    catalog
        .iter()
        .filter_map(|plan| match_plan(plan, questionnaire.age, household, iua))
        .collect()
}
