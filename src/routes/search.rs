use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{settle_randomly, SearchError, SearchPipeline};
use crate::models::{ErrorResponse, HealthResponse, SearchRequest, SearchResponse, SearchSession, SettleResponse};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state shared across all handlers.
///
/// The session holds the most recent search outcome and the current random
/// pick; it is replaced wholesale on every new search, which discards any
/// previous pick.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: SearchPipeline,
    pub session: Arc<RwLock<Option<SearchSession>>>,
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/search", web::post().to(search))
        .route("/settle", web::post().to(settle));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Search endpoint
///
/// POST /api/v1/search
///
/// Request body:
/// ```json
/// {
///   "city": "string",
///   "cuisineA": "string",
///   "cuisineB": "string",
///   "radiusKm": 3
/// }
/// ```
async fn search(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Searching near {:?} (radius {}km, preferences {:?} / {:?})",
        req.city,
        req.radius_km,
        req.cuisine_a,
        req.cuisine_b
    );

    let outcome = match state
        .pipeline
        .run(&req.city, &req.cuisine_a, &req.cuisine_b, req.radius_km)
        .await
    {
        Ok(outcome) => outcome,
        Err(e @ SearchError::PlaceNotFound(_)) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "place_not_found".to_string(),
                message: e.to_string(),
                status_code: 404,
            });
        }
        Err(e @ SearchError::QueryService(_)) => {
            tracing::error!("Map-data query failed: {}", e);
            return HttpResponse::BadGateway().json(ErrorResponse {
                error: "query_service_error".to_string(),
                message: e.to_string(),
                status_code: 502,
            });
        }
        Err(e) => {
            tracing::error!("Search failed: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "search_failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::info!(
        "Shortlisted {} of the area's restaurants ({} cuisine tags)",
        outcome.shortlist.len(),
        outcome.cuisines.len()
    );

    let response = SearchResponse::from(&outcome);

    // Replace the session wholesale; any previous pick is discarded
    *state.session.write().await = Some(SearchSession::new(outcome));

    HttpResponse::Ok().json(response)
}

/// Settle endpoint: randomly pick one restaurant from the current
/// shortlist. Repeatable without re-running the search.
///
/// POST /api/v1/settle
async fn settle(state: web::Data<AppState>) -> impl Responder {
    let mut guard = state.session.write().await;

    let session = match guard.as_mut() {
        Some(session) => session,
        None => {
            return HttpResponse::Conflict().json(ErrorResponse {
                error: "empty_shortlist".to_string(),
                message: "no search has been run yet".to_string(),
                status_code: 409,
            });
        }
    };

    let pick = match settle_randomly(&session.outcome.shortlist) {
        Some(pick) => pick.clone(),
        None => {
            return HttpResponse::Conflict().json(ErrorResponse {
                error: "empty_shortlist".to_string(),
                message: SearchError::EmptyShortlist.to_string(),
                status_code: 409,
            });
        }
    };

    tracing::debug!("Settled on {:?}", pick.name);

    let response = SettleResponse {
        pick: (&pick).into(),
    };
    session.pick = Some(pick);

    HttpResponse::Ok().json(response)
}
