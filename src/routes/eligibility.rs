use actix_web::{web, HttpResponse, Responder};
use crate::core::{normalize_value, BrowseFilter, Matcher};
use crate::models::{ErrorResponse, HealthResponse, MatchRequest, MatchResponse, ProgramsResponse, ReloadResponse};
use crate::services::CatalogStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub matcher: Matcher,
}

/// Configure all eligibility-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/eligibility/match", web::post().to(match_programs))
        .route("/programs", web::get().to(list_programs))
        .route("/catalog/reload", web::post().to(reload_catalog));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let catalog = state.catalog.snapshot().await;
    let status = if catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_size: catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match a profile against the catalog
///
/// POST /api/v1/eligibility/match
///
/// Request body:
/// ```json
/// {
///   "profile": {
///     "gender": "female",
///     "currentClass": "UG",
///     "familyIncome": 100000
///   },
///   "filter": { "search": "aicte", "category": "Women", "level": "UG" }
/// }
/// ```
async fn match_programs(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    let request_id = uuid::Uuid::new_v4().to_string();

    let profile = match normalize_value(&req.profile) {
        Ok(profile) => profile,
        Err(e) => {
            tracing::info!("Rejected profile for request {}: {}", request_id, e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    // Hold one snapshot for the whole call, even if a reload lands meanwhile
    let catalog = state.catalog.snapshot().await;
    let result = state.matcher.find_eligible(&catalog, &profile);
    let eligible_count = result.eligible.len();

    let programs: Vec<_> = req
        .filter
        .apply(result.eligible)
        .into_iter()
        .cloned()
        .collect();

    tracing::info!(
        "Request {}: {} eligible of {} programs ({} after filter) for class {}",
        request_id,
        eligible_count,
        result.total_programs,
        programs.len(),
        profile.current_class
    );

    HttpResponse::Ok().json(MatchResponse {
        request_id,
        programs,
        total_programs: result.total_programs,
        eligible_count,
    })
}

/// Browse the catalog
///
/// GET /api/v1/programs?search={text}&category={tag}&level={level}
async fn list_programs(
    state: web::Data<AppState>,
    query: web::Query<BrowseFilter>,
) -> impl Responder {
    let catalog = state.catalog.snapshot().await;
    let programs: Vec<_> = query.apply(catalog.programs()).into_iter().cloned().collect();

    tracing::debug!("Listing {} of {} programs", programs.len(), catalog.len());

    HttpResponse::Ok().json(ProgramsResponse {
        total: programs.len(),
        programs,
    })
}

/// Reload the catalog file
///
/// POST /api/v1/catalog/reload
async fn reload_catalog(state: web::Data<AppState>) -> impl Responder {
    match state.catalog.reload().await {
        Ok(program_count) => HttpResponse::Ok().json(ReloadResponse {
            success: true,
            program_count,
        }),
        Err(e) => {
            tracing::error!("Failed to reload catalog from {}: {}", state.catalog.path().display(), e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to reload catalog".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
