//! Route configuration
use actix_web::{web, HttpResponse};

use crate::handlers;

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Operational endpoints
        .route("/metrics", web::get().to(metrics_handler))
        .route("/api/v1/openapi.json", web::get().to(openapi_handler))
        // API routes
        .service(
            web::scope("/api/v1")
                .route("/health", web::get().to(handlers::health_check))
                .route("/health/ready", web::get().to(handlers::readiness_check))
                .route("/clientes", web::post().to(handlers::register_cliente))
                .route("/clientes", web::get().to(handlers::list_clientes))
                .route("/usuarios", web::get().to(handlers::list_usuarios))
                .route("/empleados", web::get().to(handlers::list_empleados))
                .route("/roles", web::get().to(handlers::list_roles))
                .route("/citas", web::get().to(handlers::list_citas))
                .route("/citas", web::post().to(handlers::create_cita)),
        );
}

/// Prometheus metrics endpoint
async fn metrics_handler() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(crate::metrics::gather_metrics())
}

/// OpenAPI JSON endpoint
async fn openapi_handler() -> HttpResponse {
    use utoipa::OpenApi;
    HttpResponse::Ok()
        .content_type("application/json")
        .json(crate::openapi::ApiDoc::openapi())
}
