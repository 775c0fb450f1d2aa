//! Healthshare Match - plan eligibility matching and scoring
//!
//! Turns questionnaire answers into the list of healthshare plans a person
//! qualifies for, priced from each provider's cost matrix and ranked by a
//! 0-100 suitability score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    calculate_annual_cost, find_eligible_plans, find_plan_costs, get_age_bracket, get_plan_cost,
    get_standard_age_bracket, score_plans, PlanEngine,
};
pub use crate::models::{
    CostOption, EligiblePlan, HouseholdType, PlanCatalog, ProviderPlan, QuestionnaireResponse,
    Recommendation, ScoredRecommendation,
};
