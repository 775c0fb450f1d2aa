use crate::models::{CoverageType, HouseholdType, QuestionnaireResponse};

/// Map questionnaire answers onto the household type used by plan matrices.
///
/// `coverage_type` wins when present; a family of five or more is promoted to
/// the large-family tier. Without it, `household_size` decides, treating two
/// people as member and spouse. No answer at all means an individual.
pub fn infer_household_type(questionnaire: &QuestionnaireResponse) -> HouseholdType {
    household_for(questionnaire.coverage_type, questionnaire.household_size)
}

/// Resolve a coverage answer and household size to a household type
pub fn household_for(coverage: Option<CoverageType>, size: Option<u8>) -> HouseholdType {
    match coverage {
        Some(CoverageType::JustMe) => HouseholdType::MemberOnly,
        Some(CoverageType::MeSpouse) => HouseholdType::MemberSpouse,
        Some(CoverageType::MeKids) => HouseholdType::MemberChildren,
        Some(CoverageType::Family) => match size {
            Some(n) if n >= 5 => HouseholdType::MemberFamilyLarge,
            _ => HouseholdType::MemberFamily,
        },
        None => match size {
            None | Some(0) | Some(1) => HouseholdType::MemberOnly,
            Some(2) => HouseholdType::MemberSpouse,
            Some(3) | Some(4) => HouseholdType::MemberFamily,
            Some(_) => HouseholdType::MemberFamilyLarge,
        },
    }
}

/// Parse a household given either as a pricing-sheet label
/// (`"Member & Spouse"`) or as a questionnaire coverage value (`"me_spouse"`).
///
/// Coverage values go through the same rule as [`infer_household_type`], so
/// `"family"` with a size of five or more is the large-family tier.
pub fn parse_household(value: &str, size: Option<u8>) -> Option<HouseholdType> {
    if let Some(household) = HouseholdType::from_label(value) {
        return Some(household);
    }

    let coverage: CoverageType =
        serde_json::from_value(serde_json::Value::String(value.trim().to_lowercase())).ok()?;
    Some(household_for(Some(coverage), size))
}

/// Household types to try, in order, when looking up a matrix row.
///
/// Providers that do not price large families separately charge the regular
/// family rate.
pub fn lookup_order(household: HouseholdType) -> &'static [HouseholdType] {
    match household {
        HouseholdType::MemberFamilyLarge => &[
            HouseholdType::MemberFamilyLarge,
            HouseholdType::MemberFamily,
        ],
        HouseholdType::MemberOnly => &[HouseholdType::MemberOnly],
        HouseholdType::MemberSpouse => &[HouseholdType::MemberSpouse],
        HouseholdType::MemberChildren => &[HouseholdType::MemberChildren],
        HouseholdType::MemberFamily => &[HouseholdType::MemberFamily],
    }
}
