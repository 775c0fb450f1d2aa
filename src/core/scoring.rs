use crate::models::{
    AnnualHealthcareSpend, CostOption, EligiblePlan, ExpensePreference, QuestionnaireResponse,
    ScoreFactor, ScoreFactorKind, ScoredRecommendation,
};

/// IUA level that separates "low" from "high" cost sharing
const IUA_PIVOT: u32 = 2500;

/// Score eligible plans (0-100) and rank them.
///
/// Each plan is scored on its first eligible price option:
/// score = mean(
///     premium_score,          # lower monthly premium = higher
///     iua_alignment_score,    # IUA matches stated expense preference
///     annual_cost_score       # premiums + expected out-of-pocket
/// )
///
/// Plans without any price option are skipped. The sort is stable, so equal
/// scores keep their input order.
pub fn score_plans(
    eligible_plans: Vec<EligiblePlan>,
    questionnaire: &QuestionnaireResponse,
) -> Vec<ScoredRecommendation> {
    let mut scored: Vec<ScoredRecommendation> = eligible_plans
        .into_iter()
        .filter_map(|eligible| {
            let Some(option) = eligible.eligible_prices.first() else {
                tracing::debug!("Plan {} has no price options; not scored", eligible.plan.id);
                return None;
            };

            let factors = calculate_factors(option, questionnaire);
            let score = factors.iter().map(|f| f.score).sum::<f64>() / factors.len() as f64;
            let explanation = factors.iter().map(|f| f.explanation.clone()).collect();

            Some(ScoredRecommendation {
                plan: eligible.plan,
                eligible_prices: eligible.eligible_prices,
                score,
                factors,
                explanation,
            })
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
}

/// Compute the three sub-scores for one price option, in explanation order
pub fn calculate_factors(option: &CostOption, questionnaire: &QuestionnaireResponse) -> Vec<ScoreFactor> {
    let premium = option.monthly_premium;
    let iua = option.initial_unshared_amount;

    let premium_score = premium_score(premium);
    let alignment_score = iua_alignment_score(iua, questionnaire.expense_preference);

    let out_of_pocket = expected_out_of_pocket(questionnaire.annual_healthcare_spend);
    let expected_annual = premium * 12.0 + out_of_pocket;
    let annual_score = annual_cost_score(expected_annual);

    let alignment_explanation = match questionnaire.expense_preference {
        Some(ExpensePreference::LowerMonthly) if alignment_score >= 100.0 => {
            format!("IUA of ${} keeps monthly costs low, as preferred", iua)
        }
        Some(ExpensePreference::LowerMonthly) => {
            format!("IUA of ${} is lower than ideal for minimizing monthly costs", iua)
        }
        Some(ExpensePreference::HigherMonthly) if alignment_score >= 100.0 => {
            format!("IUA of ${} limits out-of-pocket exposure, as preferred", iua)
        }
        Some(ExpensePreference::HigherMonthly) => {
            format!("IUA of ${} is higher than preferred for predictable costs", iua)
        }
        None => format!("IUA of ${} (no cost-sharing preference given)", iua),
    };

    vec![
        ScoreFactor {
            factor: ScoreFactorKind::MonthlyPremium,
            score: premium_score,
            explanation: format!("Monthly premium of ${:.2}", premium),
        },
        ScoreFactor {
            factor: ScoreFactorKind::IuaAlignment,
            score: alignment_score,
            explanation: alignment_explanation,
        },
        ScoreFactor {
            factor: ScoreFactorKind::ExpectedAnnualCost,
            score: annual_score,
            explanation: format!(
                "Expected annual cost of ${:.0} including ${:.0} in typical healthcare spending",
                expected_annual, out_of_pocket
            ),
        },
    ]
}

/// Step score for the monthly premium
#[inline]
fn premium_score(monthly_premium: f64) -> f64 {
    if monthly_premium < 200.0 {
        100.0
    } else if monthly_premium < 400.0 {
        80.0
    } else if monthly_premium < 600.0 {
        60.0
    } else if monthly_premium < 800.0 {
        40.0
    } else {
        20.0
    }
}

/// Reward a high IUA for people who want low premiums, and a low IUA for
/// people willing to pay more each month
#[inline]
fn iua_alignment_score(iua: u32, preference: Option<ExpensePreference>) -> f64 {
    match preference {
        Some(ExpensePreference::LowerMonthly) if iua > IUA_PIVOT => 100.0,
        Some(ExpensePreference::HigherMonthly) if iua < IUA_PIVOT => 100.0,
        _ => 60.0,
    }
}

/// Expected yearly out-of-pocket spend for a questionnaire bucket
#[inline]
pub fn expected_out_of_pocket(spend: Option<AnnualHealthcareSpend>) -> f64 {
    match spend {
        Some(AnnualHealthcareSpend::Between1000And5000) => 3000.0,
        Some(AnnualHealthcareSpend::More5000) => 7500.0,
        Some(AnnualHealthcareSpend::Less1000) | Some(AnnualHealthcareSpend::Unknown) | None => 500.0,
    }
}

#[inline]
fn annual_cost_score(expected_annual: f64) -> f64 {
    if expected_annual < 5000.0 {
        100.0
    } else if expected_annual < 10000.0 {
        80.0
    } else if expected_annual < 15000.0 {
        60.0
    } else {
        40.0
    }
}
