// Model exports
pub mod catalog;
pub mod domain;
pub mod requests;
pub mod responses;

pub use catalog::{CatalogError, CatalogFile, PlanCatalog};
pub use domain::{
    AgeRange, AgeRules, CostOption, CustomBrackets, EligiblePlan, HouseholdType, PlanMatrixRow,
    ProviderPlan, ScoreFactor, ScoreFactorKind, ScoredRecommendation, WaitingPeriod,
};
pub use requests::{
    AnnualHealthcareSpend, CoverageType, ExpensePreference, PlanCostQuery, QuestionnaireResponse,
    RecommendationsRequest, VisitFrequency,
};
pub use responses::{
    EligiblePlansResponse, ErrorResponse, HealthResponse, PlanCostResponse, Recommendation,
    RecommendationsResponse,
};
