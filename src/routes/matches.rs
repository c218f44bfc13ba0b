use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{explain_match, MatchError, MatchingEngine};
use crate::models::{ErrorResponse, HealthResponse, RankRequest, RankResponse, RankedMatch};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: MatchingEngine,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_candidates));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank candidates endpoint
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "preferences": { "desiredBrand": "BMW", "desiredLocation": "Seoul" },
///   "weights": { "expertise": 0.3, "rating": 0.25, "availability": 0.2, "responseTime": 0.15, "location": 0.1 },
///   "candidates": [ ... ],
///   "limit": 5,
///   "explain": false
/// }
/// ```
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    let request_id = uuid::Uuid::new_v4().to_string();

    if let Err(errors) = req.validate() {
        tracing::info!(request_id = %request_id, "Validation failed for rank request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let RankRequest {
        preferences,
        weights,
        candidates,
        limit,
        explain,
    } = req.into_inner();

    let limit = state.matching.effective_limit(limit);
    let weights = weights.unwrap_or(*state.engine.weights());
    let total_candidates = candidates.len();

    tracing::info!(
        request_id = %request_id,
        candidates = total_candidates,
        limit,
        "Ranking candidates"
    );

    // Scoring is CPU-bound; keep it off the async workers
    let engine = state.engine.clone();
    let outcome = web::block(move || {
        engine
            .rank_with(&candidates, &preferences, &weights, limit)
            .map(|results| {
                results
                    .into_iter()
                    .map(|result| {
                        let breakdown = explain
                            .then(|| explain_match(&result.candidate, &preferences, &weights));
                        RankedMatch {
                            breakdown,
                            ..RankedMatch::from(result)
                        }
                    })
                    .collect::<Vec<_>>()
            })
    })
    .await;

    match outcome {
        Ok(Ok(matches)) => {
            tracing::info!(request_id = %request_id, returned = matches.len(), "Ranking complete");
            HttpResponse::Ok().json(RankResponse {
                request_id,
                matches,
                total_candidates,
            })
        }
        Ok(Err(e)) => {
            tracing::info!(request_id = %request_id, error = %e, "Rejected rank request");
            HttpResponse::BadRequest().json(error_response(&e))
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, "Ranking task failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "internal_error".to_string(),
                message: "Failed to rank candidates".to_string(),
                status_code: 500,
            })
        }
    }
}

fn error_response(error: &MatchError) -> ErrorResponse {
    ErrorResponse {
        error: error.code().to_string(),
        message: error.to_string(),
        status_code: 400,
    }
}
