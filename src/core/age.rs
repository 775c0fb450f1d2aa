use crate::models::AgeRules;

/// Standard four-bucket pricing brackets with inclusive bounds
const STANDARD_BRACKETS: [(u8, u8, &str); 4] = [
    (18, 29, "18-29"),
    (30, 39, "30-39"),
    (40, 49, "40-49"),
    (50, 64, "50-64"),
];

/// Resolve an age into the standard bracket scheme.
///
/// Returns `None` below 18 or above 64.
#[inline]
pub fn get_standard_age_bracket(age: u8) -> Option<&'static str> {
    STANDARD_BRACKETS
        .iter()
        .find(|(min, max, _)| (*min..=*max).contains(&age))
        .map(|(_, _, label)| *label)
}

/// Resolve an age against a plan's bracket rules.
///
/// Custom ranges are scanned in declaration order and the first inclusive
/// match wins. `None` means the plan does not price this age.
pub fn get_age_bracket(age: u8, rules: &AgeRules) -> Option<String> {
    match rules {
        AgeRules::Standard => get_standard_age_bracket(age).map(str::to_string),
        AgeRules::Custom { custom_brackets } => custom_brackets
            .ranges
            .iter()
            .find(|range| range.min <= age && age <= range.max)
            .map(|range| range.bracket.clone()),
    }
}
