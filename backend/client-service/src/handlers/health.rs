use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::AppState;

/// Liveness probe
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Readiness probe with a database round trip
pub async fn readiness_check(state: web::Data<AppState>) -> HttpResponse {
    match db_pool::check_health(&state.db).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "status": "ready" })),
        Err(error) => {
            tracing::warn!("readiness check failed: {}", error);
            HttpResponse::ServiceUnavailable().json(json!({ "status": "unavailable" }))
        }
    }
}
