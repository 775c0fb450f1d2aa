use crate::core::{
    costs::{calculate_annual_cost, get_plan_cost},
    eligibility::find_eligible_plans,
    recommend::aggregate,
    scoring::score_plans,
};
use crate::models::{
    CostOption, EligiblePlan, HouseholdType, PlanCatalog, QuestionnaireResponse, Recommendation,
    ScoredRecommendation, VisitFrequency,
};
use std::sync::Arc;

/// Result of the recommendation pipeline
#[derive(Debug)]
pub struct RecommendationResult {
    pub recommendations: Vec<Recommendation>,
    pub total_eligible: usize,
}

/// Main recommendation orchestrator over one catalog snapshot
///
/// # Pipeline Stages
/// 1. Age bracket + household resolution
/// 2. Cost matrix lookup and IUA filtering
/// 3. Scoring and ranking
/// 4. Display aggregation
#[derive(Debug, Clone)]
pub struct PlanEngine {
    catalog: Arc<PlanCatalog>,
}

impl PlanEngine {
    pub fn new(catalog: Arc<PlanCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    /// Plans this questionnaire qualifies for, in catalog order
    pub fn find_eligible_plans(&self, questionnaire: &QuestionnaireResponse) -> Vec<EligiblePlan> {
        find_eligible_plans(&self.catalog, questionnaire)
    }

    /// Eligible plans scored and sorted best first
    pub fn score_plans(&self, questionnaire: &QuestionnaireResponse) -> Vec<ScoredRecommendation> {
        score_plans(self.find_eligible_plans(questionnaire), questionnaire)
    }

    /// Single price option for a plan, or `None` when nothing resolves
    pub fn get_plan_cost(
        &self,
        plan_id: &str,
        age: u8,
        household: HouseholdType,
        iua_preference: Option<&str>,
    ) -> Option<CostOption> {
        get_plan_cost(&self.catalog, plan_id, age, household, iua_preference)
    }

    /// Price option for a plan together with its estimated annual cost
    pub fn quote(
        &self,
        plan_id: &str,
        age: u8,
        household: HouseholdType,
        iua_preference: Option<&str>,
        visit_frequency: Option<VisitFrequency>,
    ) -> Option<(CostOption, f64)> {
        let cost = self.get_plan_cost(plan_id, age, household, iua_preference)?;
        let is_dpc = self.catalog.get(plan_id).is_some_and(|plan| plan.is_dpc());
        let annual = calculate_annual_cost(
            cost.monthly_premium,
            cost.initial_unshared_amount,
            visit_frequency,
            Some(household),
            is_dpc,
        );
        Some((cost, annual))
    }

    /// Run the full pipeline and keep the top `limit` recommendations
    pub fn recommend(&self, questionnaire: &QuestionnaireResponse, limit: usize) -> RecommendationResult {
        let eligible = self.find_eligible_plans(questionnaire);
        let total_eligible = eligible.len();

        let mut scored = score_plans(eligible, questionnaire);
        scored.truncate(limit);

        let recommendations = aggregate(scored, questionnaire);

        tracing::debug!(
            "Recommended {} of {} eligible plans (catalog size {})",
            recommendations.len(),
            total_eligible,
            self.catalog.len()
        );

        RecommendationResult {
            recommendations,
            total_eligible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeRules, PlanMatrixRow, ProviderPlan};

    fn plan(id: &str, premium: f64) -> ProviderPlan {
        ProviderPlan {
            id: id.to_string(),
            provider_name: format!("Provider {}", id),
            plan_name: format!("Plan {}", id),
            age_rules: AgeRules::Standard,
            plan_matrix: vec![PlanMatrixRow {
                age_bracket: "18-29".to_string(),
                household_type: HouseholdType::MemberOnly,
                costs: vec![CostOption {
                    monthly_premium: premium,
                    initial_unshared_amount: 1000,
                    sharing_percentage: None,
                }],
            }],
            maternity: false,
            pre_existing_conditions: None,
            network_type: None,
            waiting_periods: vec![],
        }
    }

    fn engine() -> PlanEngine {
        let catalog = PlanCatalog::new(vec![plan("1", 650.0), plan("2", 150.0), plan("3", 350.0)]).unwrap();
        PlanEngine::new(Arc::new(catalog))
    }

    #[test]
    fn test_recommend_ranks_and_limits() {
        let result = engine().recommend(&QuestionnaireResponse::for_age(25), 2);

        assert_eq!(result.total_eligible, 3);
        assert_eq!(result.recommendations.len(), 2);
        assert_eq!(result.recommendations[0].plan_id, "2");
        assert_eq!(result.recommendations[1].plan_id, "3");
    }

    #[test]
    fn test_recommend_no_matches() {
        let result = engine().recommend(&QuestionnaireResponse::for_age(45), 10);
        assert_eq!(result.total_eligible, 0);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_quote() {
        let (cost, annual) = engine()
            .quote("2", 25, HouseholdType::MemberOnly, None, None)
            .unwrap();
        assert_eq!(cost.monthly_premium, 150.0);
        assert_eq!(annual, 2800.0);

        assert!(engine().quote("2", 25, HouseholdType::MemberFamily, None, None).is_none());
    }
}
