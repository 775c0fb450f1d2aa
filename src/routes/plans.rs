use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::RecommendationSettings;
use crate::core::parse_household;
use crate::models::{
    EligiblePlansResponse, ErrorResponse, HealthResponse, HouseholdType, PlanCostQuery, PlanCostResponse,
    QuestionnaireResponse, RecommendationsRequest, RecommendationsResponse,
};
use crate::services::{CacheKey, CacheManager, CatalogStore};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub cache: Option<Arc<CacheManager>>,
    pub limits: RecommendationSettings,
}

/// Configure all plan-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/plans/eligible", web::post().to(eligible_plans))
        .route("/plans/{plan_id}/cost", web::get().to(plan_cost))
        .route("/recommendations", web::post().to(recommendations));
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn no_eligible_plans() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "no_eligible_plans".to_string(),
        message: "No plans match the submitted criteria".to_string(),
        status_code: 404,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let plans = state.catalog.snapshot().len();
    let status = if plans > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        plans,
    })
}

/// Eligible plans endpoint
///
/// POST /api/v1/plans/eligible
///
/// Request body is a questionnaire:
/// ```json
/// {
///   "age": 34,
///   "coverage_type": "just_me",
///   "iua_preference": "1000"
/// }
/// ```
async fn eligible_plans(
    state: web::Data<AppState>,
    req: web::Json<QuestionnaireResponse>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for eligibility request: {:?}", errors);
        return validation_error(errors);
    }

    let snapshot = state.catalog.current();
    let cache_key = CacheKey::eligible(snapshot.generation, &*req).ok();
    if let (Some(cache), Some(key)) = (&state.cache, &cache_key) {
        if let Ok(cached) = cache.get::<EligiblePlansResponse>(key).await {
            return respond_eligible(cached);
        }
    }

    let eligible_plans = snapshot.engine().find_eligible_plans(&req);
    let response = EligiblePlansResponse {
        total: eligible_plans.len(),
        eligible_plans,
    };

    tracing::info!("Found {} eligible plans for age {}", response.total, req.age);

    if let (Some(cache), Some(key)) = (&state.cache, &cache_key) {
        if let Err(e) = cache.set(key, &response).await {
            tracing::warn!("Failed to cache eligibility response: {}", e);
        }
    }

    respond_eligible(response)
}

fn respond_eligible(response: EligiblePlansResponse) -> HttpResponse {
    if response.eligible_plans.is_empty() {
        no_eligible_plans()
    } else {
        HttpResponse::Ok().json(response)
    }
}

/// Ranked recommendations endpoint
///
/// POST /api/v1/recommendations
///
/// Request body is a questionnaire plus an optional `limit`:
/// ```json
/// {
///   "age": 34,
///   "coverage_type": "family",
///   "household_size": 4,
///   "visit_frequency": "few_months",
///   "expense_preference": "lower_monthly",
///   "annual_healthcare_spend": "1000_5000",
///   "limit": 5
/// }
/// ```
async fn recommendations(
    state: web::Data<AppState>,
    req: web::Json<RecommendationsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendations request: {:?}", errors);
        return validation_error(errors);
    }

    let limit = req
        .limit
        .unwrap_or(state.limits.default_limit)
        .min(state.limits.max_limit) as usize;
    let request_id = uuid::Uuid::new_v4().to_string();

    tracing::info!(request_id = %request_id, "Scoring plans for age {}, limit {}", req.questionnaire.age, limit);

    let snapshot = state.catalog.current();
    let cache_key = CacheKey::recommendations(snapshot.generation, &*req).ok();
    if let (Some(cache), Some(key)) = (&state.cache, &cache_key) {
        if let Ok(mut cached) = cache.get::<RecommendationsResponse>(key).await {
            cached.request_id = request_id;
            return respond_recommendations(cached);
        }
    }

    let result = snapshot.engine().recommend(&req.questionnaire, limit);
    let response = RecommendationsResponse {
        recommendations: result.recommendations,
        total: result.total_eligible,
        request_id,
    };

    tracing::info!(
        request_id = %response.request_id,
        "Returning {} recommendations (from {} eligible plans)",
        response.recommendations.len(),
        response.total
    );

    if let (Some(cache), Some(key)) = (&state.cache, &cache_key) {
        if let Err(e) = cache.set(key, &response).await {
            tracing::warn!("Failed to cache recommendations: {}", e);
        }
    }

    respond_recommendations(response)
}

fn respond_recommendations(response: RecommendationsResponse) -> HttpResponse {
    if response.recommendations.is_empty() {
        no_eligible_plans()
    } else {
        HttpResponse::Ok().json(response)
    }
}

/// Single plan price endpoint
///
/// GET /api/v1/plans/{plan_id}/cost?age=34&household_type=Member%20Only&iua=1000
///
/// `household_type` also accepts a coverage value such as `me_spouse`, with an
/// optional `household_size` for large families.
async fn plan_cost(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PlanCostQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    let household = match query.household_type.as_deref() {
        None => HouseholdType::MemberOnly,
        Some(label) => match parse_household(label, query.household_size) {
            Some(household) => household,
            None => {
                return HttpResponse::BadRequest().json(ErrorResponse {
                    error: "Invalid household type".to_string(),
                    message: format!("Unknown household type: {}", label),
                    status_code: 400,
                });
            }
        },
    };

    let plan_id = path.into_inner();
    let engine = state.catalog.engine();

    match engine.quote(&plan_id, query.age, household, query.iua.as_deref(), query.visit_frequency) {
        Some((cost, annual_cost)) => HttpResponse::Ok().json(PlanCostResponse {
            plan_id,
            cost,
            annual_cost,
        }),
        None => {
            tracing::debug!("No cost for plan {} at age {} ({})", plan_id, query.age, household);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "no_plan_cost".to_string(),
                message: format!("No price for plan {} matches the given criteria", plan_id),
                status_code: 404,
            })
        }
    }
}
