use serde::{Deserialize, Serialize};
use std::fmt;

/// Who is covered under a plan. Serialized with the labels used in provider
/// pricing sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HouseholdType {
    #[serde(rename = "Member Only")]
    MemberOnly,
    #[serde(rename = "Member & Spouse")]
    MemberSpouse,
    #[serde(rename = "Member & Child(ren)")]
    MemberChildren,
    #[serde(rename = "Member & Family")]
    MemberFamily,
    #[serde(rename = "Member & Family (5+)")]
    MemberFamilyLarge,
}

impl HouseholdType {
    pub const ALL: [HouseholdType; 5] = [
        HouseholdType::MemberOnly,
        HouseholdType::MemberSpouse,
        HouseholdType::MemberChildren,
        HouseholdType::MemberFamily,
        HouseholdType::MemberFamilyLarge,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HouseholdType::MemberOnly => "Member Only",
            HouseholdType::MemberSpouse => "Member & Spouse",
            HouseholdType::MemberChildren => "Member & Child(ren)",
            HouseholdType::MemberFamily => "Member & Family",
            HouseholdType::MemberFamilyLarge => "Member & Family (5+)",
        }
    }

    /// Parse a pricing-sheet label, e.g. from a query string
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|household| household.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for HouseholdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single inclusive age range in a provider-defined bracket scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
    pub bracket: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomBrackets {
    #[serde(default)]
    pub ranges: Vec<AgeRange>,
}

/// How a provider groups ages into pricing brackets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AgeRules {
    Standard,
    Custom {
        #[serde(rename = "customBrackets")]
        custom_brackets: CustomBrackets,
    },
}

impl Default for AgeRules {
    fn default() -> Self {
        AgeRules::Standard
    }
}

/// One selectable cost-sharing tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostOption {
    #[serde(rename = "monthlyPremium")]
    pub monthly_premium: f64,
    #[serde(rename = "initialUnsharedAmount")]
    pub initial_unshared_amount: u32,
    #[serde(rename = "sharingPercentage", default, skip_serializing_if = "Option::is_none")]
    pub sharing_percentage: Option<u8>,
}

/// Pricing for one (age bracket, household type) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMatrixRow {
    #[serde(rename = "ageBracket")]
    pub age_bracket: String,
    #[serde(rename = "householdType")]
    pub household_type: HouseholdType,
    #[serde(default)]
    pub costs: Vec<CostOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingPeriod {
    pub condition: String,
    pub months: u8,
}

/// A provider plan as loaded from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderPlan {
    pub id: String,
    #[serde(rename = "providerName")]
    pub provider_name: String,
    #[serde(rename = "planName")]
    pub plan_name: String,
    #[serde(rename = "ageRules", default)]
    pub age_rules: AgeRules,
    #[serde(rename = "planMatrix", default)]
    pub plan_matrix: Vec<PlanMatrixRow>,
    #[serde(default)]
    pub maternity: bool,
    #[serde(rename = "preExistingConditions", default)]
    pub pre_existing_conditions: Option<String>,
    #[serde(rename = "networkType", default)]
    pub network_type: Option<String>,
    #[serde(rename = "waitingPeriods", default)]
    pub waiting_periods: Vec<WaitingPeriod>,
}

impl ProviderPlan {
    /// Direct/virtual primary care plans bundle office visits into the premium
    pub fn is_dpc(&self) -> bool {
        let id = self.id.to_ascii_lowercase();
        let name = self.plan_name.to_ascii_lowercase();
        ["dpc", "vpc"]
            .iter()
            .any(|marker| id.contains(marker) || name.contains(marker))
    }
}

/// A plan the user qualifies for, with the price options that apply to them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligiblePlan {
    pub plan: ProviderPlan,
    #[serde(rename = "eligiblePrices")]
    pub eligible_prices: Vec<CostOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactorKind {
    MonthlyPremium,
    IuaAlignment,
    ExpectedAnnualCost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreFactor {
    pub factor: ScoreFactorKind,
    pub score: f64,
    pub explanation: String,
}

/// Eligible plan with its suitability score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecommendation {
    pub plan: ProviderPlan,
    #[serde(rename = "eligiblePrices")]
    pub eligible_prices: Vec<CostOption>,
    pub score: f64,
    pub factors: Vec<ScoreFactor>,
    pub explanation: Vec<String>,
}
