use crate::core::{age::get_age_bracket, household::lookup_order};
use crate::models::{CostOption, HouseholdType, PlanCatalog, ProviderPlan, VisitFrequency};

/// Average out-of-pocket cost of an office visit in dollars
pub const VISIT_COST: f64 = 175.0;

/// Find the cost options for a plan's (age bracket, household type) row.
///
/// The first matching row in declaration order wins. A large-family lookup
/// falls back to the regular family row when the plan has no separate tier.
pub fn find_plan_costs<'a>(
    plan: &'a ProviderPlan,
    age_bracket: &str,
    household: HouseholdType,
) -> Option<&'a [CostOption]> {
    lookup_order(household).iter().find_map(|candidate| {
        plan.plan_matrix
            .iter()
            .find(|row| row.age_bracket == age_bracket && row.household_type == *candidate)
            .map(|row| row.costs.as_slice())
    })
}

/// Parse the questionnaire's IUA preference.
///
/// Blank and "any" mean no preference. Values like "$1,000" are accepted.
/// Anything else is logged and treated as no preference.
pub fn parse_iua_preference(preference: Option<&str>) -> Option<u32> {
    let raw = preference?.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("any") || raw.eq_ignore_ascii_case("no_preference") {
        return None;
    }

    let digits: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    match digits.parse::<u32>() {
        Ok(amount) => Some(amount),
        Err(_) => {
            tracing::warn!("Ignoring unparseable IUA preference: {:?}", raw);
            None
        }
    }
}

/// Keep only options whose IUA equals the preferred amount exactly
pub fn filter_by_iua(costs: &[CostOption], iua: Option<u32>) -> Vec<CostOption> {
    match iua {
        Some(amount) => costs
            .iter()
            .filter(|cost| cost.initial_unshared_amount == amount)
            .cloned()
            .collect(),
        None => costs.to_vec(),
    }
}

/// Resolve the single price a person would pay for a catalog plan.
///
/// Combines age-bracket resolution, row lookup, and the optional exact IUA
/// filter; returns the first remaining option.
pub fn get_plan_cost(
    catalog: &PlanCatalog,
    plan_id: &str,
    age: u8,
    household: HouseholdType,
    iua_preference: Option<&str>,
) -> Option<CostOption> {
    let plan = catalog.get(plan_id)?;
    let bracket = get_age_bracket(age, &plan.age_rules)?;
    let costs = find_plan_costs(plan, &bracket, household)?;

    filter_by_iua(costs, parse_iua_preference(iua_preference))
        .into_iter()
        .next()
}

/// Base visits per year for an individual
#[inline]
pub fn visits_per_year(frequency: VisitFrequency) -> f64 {
    match frequency {
        VisitFrequency::JustCheckups => 1.0,
        VisitFrequency::FewMonths => 3.0,
        VisitFrequency::MonthlyPlus => 12.0,
    }
}

/// How many people's worth of visits a household generates
#[inline]
pub fn household_multiplier(household: HouseholdType) -> f64 {
    match household {
        HouseholdType::MemberOnly => 1.0,
        HouseholdType::MemberSpouse | HouseholdType::MemberChildren => 2.0,
        HouseholdType::MemberFamily | HouseholdType::MemberFamilyLarge => 3.0,
    }
}

/// Estimate a comparable annual cost for a price option.
///
/// Without usage inputs this is twelve premiums plus one IUA. With a visit
/// frequency, estimated office-visit spend is added unless the plan is a
/// DPC/VPC plan that bundles primary care into the premium.
pub fn calculate_annual_cost(
    monthly_premium: f64,
    iua: u32,
    visit_frequency: Option<VisitFrequency>,
    household: Option<HouseholdType>,
    is_dpc_plan: bool,
) -> f64 {
    let base = monthly_premium * 12.0 + iua as f64;

    match visit_frequency {
        Some(frequency) if !is_dpc_plan => {
            let multiplier = household.map(household_multiplier).unwrap_or(1.0);
            base + visits_per_year(frequency) * VISIT_COST * multiplier
        }
        _ => base,
    }
}
