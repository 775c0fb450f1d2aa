// HTTP boundary tests for Healthshare Match

use actix_web::{test, web, App};
use healthshare_match::config::RecommendationSettings;
use healthshare_match::models::PlanCatalog;
use healthshare_match::routes::{configure_routes, AppState};
use healthshare_match::services::{CacheManager, CatalogStore};
use serde_json::{json, Value};
use std::sync::Arc;

fn app_state(with_cache: bool) -> AppState {
    let catalog = PlanCatalog::from_json(include_str!("../data/plans.json")).unwrap();
    AppState {
        catalog: Arc::new(CatalogStore::from_catalog(catalog)),
        cache: with_cache.then(|| Arc::new(CacheManager::new(100, 60))),
        limits: RecommendationSettings::default(),
    }
}

#[actix_web::test]
async fn test_health() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(false)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["plans"], 4);
}

#[actix_web::test]
async fn test_recommendations() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(true)))
            .configure(configure_routes),
    )
    .await;

    let payload = json!({
        "age": 35,
        "coverage_type": "just_me",
        "expense_preference": "lower_monthly",
        "annual_healthcare_spend": "less_1000",
        "limit": 2
    });

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/v1/recommendations")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: Value = test::read_body_json(resp).await;
        let recommendations = body["recommendations"].as_array().unwrap();
        assert_eq!(recommendations.len(), 2);
        assert_eq!(body["total"], 4);
        assert_eq!(recommendations[0]["planId"], "keystone-community-flex");
        assert_eq!(recommendations[0]["score"], 100.0);
        assert!(recommendations[0]["eligiblePrices"].is_array());
        assert!(recommendations[0]["factors"].is_array());
        assert!(recommendations[0]["explanation"].is_array());
        assert!(body["requestId"].is_string());
    }
}

#[actix_web::test]
async fn test_eligible_plans_and_not_found() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(false)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/plans/eligible")
        .set_json(json!({"age": 35, "iua_preference": "1000"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 2);
    let first = &body["eligiblePlans"][0];
    assert_eq!(first["plan"]["id"], "summit-share-essential");
    assert_eq!(first["eligiblePrices"][0]["monthlyPremium"], 251.0);
    assert_eq!(first["eligiblePrices"][0]["initialUnsharedAmount"], 1000);

    let req = test::TestRequest::post()
        .uri("/api/v1/plans/eligible")
        .set_json(json!({"age": 70}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "no_eligible_plans");
}

#[actix_web::test]
async fn test_validation_failure() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(false)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .set_json(json!({"age": 35, "limit": 0}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_plan_cost() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(false)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/plans/summit-share-essential/cost?age=35&household_type=Member%20Only&iua=1000")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["planId"], "summit-share-essential");
    assert_eq!(body["cost"]["monthlyPremium"], 251.0);
    assert_eq!(body["annualCost"], 4012.0);

    let req = test::TestRequest::get()
        .uri("/api/v1/plans/summit-share-essential/cost?age=35&household_type=Everyone")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    let req = test::TestRequest::get()
        .uri("/api/v1/plans/unknown-plan/cost?age=35")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_web::test]
async fn test_plan_cost_accepts_coverage_type() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(false)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/plans/summit-share-essential/cost?age=35&household_type=me_spouse&iua=1000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["cost"]["monthlyPremium"], 464.0);
    assert_eq!(body["annualCost"], 6568.0);

    // family of five resolves to the separate large-family tier
    let req = test::TestRequest::get()
        .uri("/api/v1/plans/harbor-health-classic/cost?age=35&household_type=family&household_size=5&iua=500")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["cost"]["monthlyPremium"], 874.0);
}
