// Integration tests for Healthshare Match, run against the bundled sample catalog

use healthshare_match::core::{find_eligible_plans, find_plan_costs, score_plans, PlanEngine};
use healthshare_match::models::{
    AnnualHealthcareSpend, CoverageType, ExpensePreference, HouseholdType, PlanCatalog,
    QuestionnaireResponse, VisitFrequency,
};
use std::sync::Arc;

const SAMPLE_CATALOG: &str = include_str!("../data/plans.json");

fn sample_catalog() -> PlanCatalog {
    PlanCatalog::from_json(SAMPLE_CATALOG).expect("sample catalog should parse")
}

fn individual(age: u8) -> QuestionnaireResponse {
    QuestionnaireResponse {
        coverage_type: Some(CoverageType::JustMe),
        ..QuestionnaireResponse::for_age(age)
    }
}

#[test]
fn test_regression_member_only_premium() {
    let catalog = sample_catalog();
    let plan = catalog.get("summit-share-essential").unwrap();

    let costs = find_plan_costs(plan, "30-39", HouseholdType::MemberOnly).unwrap();
    assert_eq!(costs[0].monthly_premium, 251.0);
}

#[test]
fn test_all_plans_eligible_for_individual() {
    let catalog = sample_catalog();
    let eligible = find_eligible_plans(&catalog, &individual(35));

    let ids: Vec<&str> = eligible.iter().map(|e| e.plan.id.as_str()).collect();
    let catalog_ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, catalog_ids, "eligible plans should keep catalog order");
}

#[test]
fn test_iua_preference_filters_exactly() {
    let catalog = sample_catalog();
    let q = QuestionnaireResponse {
        iua_preference: Some("1000".to_string()),
        ..individual(35)
    };

    let eligible = find_eligible_plans(&catalog, &q);
    assert!(!eligible.is_empty());
    for plan in &eligible {
        assert!(plan
            .eligible_prices
            .iter()
            .all(|price| price.initial_unshared_amount == 1000));
    }

    let ids: Vec<&str> = eligible.iter().map(|e| e.plan.id.as_str()).collect();
    assert_eq!(ids, vec!["summit-share-essential", "harbor-health-classic"]);
}

#[test]
fn test_age_limits() {
    let catalog = sample_catalog();
    assert!(find_eligible_plans(&catalog, &individual(17)).is_empty());
    assert!(find_eligible_plans(&catalog, &individual(65)).is_empty());
    assert_eq!(find_eligible_plans(&catalog, &individual(64)).len(), catalog.len());
}

#[test]
fn test_large_family_uses_family_rate_when_unpriced() {
    let catalog = sample_catalog();
    let q = QuestionnaireResponse {
        coverage_type: Some(CoverageType::Family),
        household_size: Some(6),
        ..QuestionnaireResponse::for_age(42)
    };

    let eligible = find_eligible_plans(&catalog, &q);
    let summit = eligible
        .iter()
        .find(|e| e.plan.id == "summit-share-essential")
        .expect("summit prices families of any size at the family rate");
    let plan = catalog.get("summit-share-essential").unwrap();
    let family = find_plan_costs(plan, "40-49", HouseholdType::MemberFamily).unwrap();
    assert_eq!(summit.eligible_prices, family.to_vec());

    // harbor has a dedicated 5+ tier
    let harbor = eligible.iter().find(|e| e.plan.id == "harbor-health-classic").unwrap();
    let harbor_plan = catalog.get("harbor-health-classic").unwrap();
    let large = find_plan_costs(harbor_plan, "40-49", HouseholdType::MemberFamilyLarge).unwrap();
    assert_eq!(harbor.eligible_prices, large.to_vec());
}

#[test]
fn test_family_never_cheaper_than_member_only() {
    let catalog = sample_catalog();
    for plan in &catalog {
        for row in plan.plan_matrix.iter().filter(|r| r.household_type == HouseholdType::MemberOnly) {
            let cheapest = |household| {
                find_plan_costs(plan, &row.age_bracket, household).map(|costs| {
                    costs
                        .iter()
                        .map(|c| c.monthly_premium)
                        .fold(f64::INFINITY, f64::min)
                })
            };
            let member_only = cheapest(HouseholdType::MemberOnly).unwrap();
            if let Some(family) = cheapest(HouseholdType::MemberFamily) {
                assert!(
                    family >= member_only,
                    "{} {}: family {} < member only {}",
                    plan.id,
                    row.age_bracket,
                    family,
                    member_only
                );
            }
        }
    }
}

#[test]
fn test_end_to_end_ranking() {
    let catalog = sample_catalog();
    let q = QuestionnaireResponse {
        expense_preference: Some(ExpensePreference::LowerMonthly),
        annual_healthcare_spend: Some(AnnualHealthcareSpend::Less1000),
        ..individual(35)
    };

    let scored = score_plans(find_eligible_plans(&catalog, &q), &q);

    let ids: Vec<&str> = scored.iter().map(|s| s.plan.id.as_str()).collect();
    // keystone: cheap premium and high IUA score 100; the rest tie at 80 in catalog order
    assert_eq!(
        ids,
        vec![
            "keystone-community-flex",
            "summit-share-essential",
            "harbor-health-classic",
            "meridian-dpc-complete",
        ]
    );
    assert_eq!(scored[0].score, 100.0);
    for pair in scored.windows(2) {
        assert!(pair[0].score >= pair[1].score, "Recommendations not sorted by score");
    }
}

#[test]
fn test_engine_recommendations() {
    let engine = PlanEngine::new(Arc::new(sample_catalog()));
    let q = QuestionnaireResponse {
        visit_frequency: Some(VisitFrequency::FewMonths),
        pregnancy: true,
        ..individual(35)
    };

    let result = engine.recommend(&q, 3);
    assert_eq!(result.total_eligible, 4);
    assert_eq!(result.recommendations.len(), 3);

    for rec in &result.recommendations {
        assert!(rec.score >= 0.0 && rec.score <= 100.0);
        assert!(!rec.provider_name.is_empty());
        assert!(rec.estimated_annual_cost >= rec.monthly_premium * 12.0);
        assert!(rec.notes.iter().any(|note| note.starts_with("Maternity")));
    }
}

#[test]
fn test_dpc_estimate_excludes_visits() {
    let engine = PlanEngine::new(Arc::new(sample_catalog()));

    let (cost, annual) = engine
        .quote(
            "meridian-dpc-complete",
            35,
            HouseholdType::MemberOnly,
            None,
            Some(VisitFrequency::MonthlyPlus),
        )
        .unwrap();
    assert_eq!(annual, cost.monthly_premium * 12.0 + cost.initial_unshared_amount as f64);

    let (cost, annual) = engine
        .quote(
            "summit-share-essential",
            35,
            HouseholdType::MemberOnly,
            None,
            Some(VisitFrequency::MonthlyPlus),
        )
        .unwrap();
    assert_eq!(annual, 251.0 * 12.0 + 1000.0 + 12.0 * 175.0);
    assert_eq!(cost.initial_unshared_amount, 1000);
}

#[test]
fn test_matching_is_idempotent() {
    let catalog = sample_catalog();
    let q = QuestionnaireResponse {
        coverage_type: Some(CoverageType::MeSpouse),
        iua_preference: Some("2500".to_string()),
        ..QuestionnaireResponse::for_age(47)
    };

    assert_eq!(find_eligible_plans(&catalog, &q), find_eligible_plans(&catalog, &q));
}
