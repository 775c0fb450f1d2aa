use crate::core::{costs::calculate_annual_cost, household::infer_household_type};
use crate::models::{ProviderPlan, QuestionnaireResponse, Recommendation, ScoredRecommendation};

/// Join scored plans with display metadata for the caller.
///
/// Keeps the ranking order; adds the usage-aware annual cost estimate and
/// coverage notes relevant to the questionnaire.
pub fn aggregate(
    scored: Vec<ScoredRecommendation>,
    questionnaire: &QuestionnaireResponse,
) -> Vec<Recommendation> {
    let household = infer_household_type(questionnaire);

    scored
        .into_iter()
        .filter_map(|scored| {
            let option = scored.eligible_prices.first()?.clone();
            let estimated_annual_cost = calculate_annual_cost(
                option.monthly_premium,
                option.initial_unshared_amount,
                questionnaire.visit_frequency,
                Some(household),
                scored.plan.is_dpc(),
            );
            let notes = coverage_notes(&scored.plan, questionnaire);

            Some(Recommendation {
                plan_id: scored.plan.id,
                provider_name: scored.plan.provider_name,
                plan_name: scored.plan.plan_name,
                network_type: scored.plan.network_type,
                monthly_premium: option.monthly_premium,
                initial_unshared_amount: option.initial_unshared_amount,
                estimated_annual_cost,
                score: scored.score,
                factors: scored.factors,
                explanation: scored.explanation,
                eligible_prices: scored.eligible_prices,
                notes,
            })
        })
        .collect()
}

fn coverage_notes(plan: &ProviderPlan, questionnaire: &QuestionnaireResponse) -> Vec<String> {
    let mut notes = Vec::new();

    if questionnaire.pregnancy {
        notes.push(if plan.maternity {
            "Maternity expenses are eligible for sharing".to_string()
        } else {
            "Maternity expenses are not shared under this plan".to_string()
        });
    }

    if questionnaire.pre_existing {
        match &plan.pre_existing_conditions {
            Some(policy) => notes.push(format!("Pre-existing conditions: {}", policy)),
            None => notes.push("Pre-existing condition policy not published".to_string()),
        }
    }

    for period in &plan.waiting_periods {
        notes.push(format!("{}: {}-month waiting period", period.condition, period.months));
    }

    if plan.is_dpc() {
        notes.push("Primary care visits are included in the monthly price".to_string());
    }

    notes
}
