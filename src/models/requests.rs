use serde::{Deserialize, Serialize};
use validator::Validate;

/// Who the user wants covered, as answered in the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageType {
    #[serde(alias = "individual", alias = "member_only")]
    JustMe,
    #[serde(alias = "spouse")]
    MeSpouse,
    #[serde(alias = "kids", alias = "children")]
    MeKids,
    Family,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitFrequency {
    JustCheckups,
    FewMonths,
    MonthlyPlus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpensePreference {
    LowerMonthly,
    HigherMonthly,
}

/// Expected yearly spend bucket. Unrecognized values fall into `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnualHealthcareSpend {
    #[serde(rename = "less_1000")]
    Less1000,
    #[serde(rename = "1000_5000")]
    Between1000And5000,
    #[serde(rename = "more_5000")]
    More5000,
    #[serde(other)]
    Unknown,
}

/// Questionnaire answers submitted by the user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuestionnaireResponse {
    #[validate(range(max = 120))]
    pub age: u8,
    #[serde(default)]
    pub coverage_type: Option<CoverageType>,
    #[validate(range(min = 1, max = 20))]
    #[serde(default)]
    pub household_size: Option<u8>,
    #[serde(default)]
    pub iua_preference: Option<String>,
    #[serde(default)]
    pub pregnancy: bool,
    #[serde(default)]
    pub pre_existing: bool,
    #[serde(default)]
    pub visit_frequency: Option<VisitFrequency>,
    #[serde(default)]
    pub expense_preference: Option<ExpensePreference>,
    #[serde(default)]
    pub annual_healthcare_spend: Option<AnnualHealthcareSpend>,
}

impl QuestionnaireResponse {
    /// Minimal questionnaire for an individual of the given age
    pub fn for_age(age: u8) -> Self {
        Self {
            age,
            coverage_type: None,
            household_size: None,
            iua_preference: None,
            pregnancy: false,
            pre_existing: false,
            visit_frequency: None,
            expense_preference: None,
            annual_healthcare_spend: None,
        }
    }
}

/// Request to rank plans for a questionnaire
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationsRequest {
    #[validate(nested)]
    #[serde(flatten)]
    pub questionnaire: QuestionnaireResponse,
    #[validate(range(min = 1, max = 50))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Query parameters for a single plan price lookup
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlanCostQuery {
    #[validate(range(max = 120))]
    pub age: u8,
    /// Pricing-sheet label or questionnaire coverage value
    #[serde(default)]
    pub household_type: Option<String>,
    #[validate(range(min = 1, max = 20))]
    #[serde(default)]
    pub household_size: Option<u8>,
    #[serde(default)]
    pub iua: Option<String>,
    #[serde(default)]
    pub visit_frequency: Option<VisitFrequency>,
}
