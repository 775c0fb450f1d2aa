use serde::{Deserialize, Serialize};
use crate::models::domain::{CostOption, EligiblePlan, ScoreFactor};

/// A scored plan joined with its display metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub plan_id: String,
    pub provider_name: String,
    pub plan_name: String,
    pub network_type: Option<String>,
    pub monthly_premium: f64,
    pub initial_unshared_amount: u32,
    pub estimated_annual_cost: f64,
    pub score: f64,
    pub factors: Vec<ScoreFactor>,
    pub explanation: Vec<String>,
    pub eligible_prices: Vec<CostOption>,
    pub notes: Vec<String>,
}

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
    pub total: usize,
    pub request_id: String,
}

/// Response for the eligibility endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligiblePlansResponse {
    pub eligible_plans: Vec<EligiblePlan>,
    pub total: usize,
}

/// Response for a single plan price lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanCostResponse {
    pub plan_id: String,
    pub cost: CostOption,
    pub annual_cost: f64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub plans: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
