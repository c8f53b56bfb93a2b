/// Amara Client Service - Main entry point
/// REST API for client registration and the surrounding spa-management reads
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use client_service::{
    config::Settings, db, routes, services::registration::RegistrationService, AppState,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::load()?;

    tracing::info!("Starting client-service v{}", env!("CARGO_PKG_VERSION"));

    // Initialize database connection pool
    let db_config = db_pool::DbConfig::from_env("client-service").map_err(anyhow::Error::msg)?;
    let pool = db_pool::create_pool(&db_config).await?;

    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    // Create shared application state; the registration manager gets its own
    // pool handle injected here rather than reaching for a global.
    let state = AppState {
        db: pool.clone(),
        registration: RegistrationService::new(pool),
    };

    let server_settings = settings.server.clone();
    tracing::info!(
        "REST API listening on {}:{}",
        settings.server.host,
        settings.server.port
    );

    HttpServer::new(move || {
        // Build CORS configuration from allowed_origins
        let mut cors = Cors::default();
        for origin in server_settings.cors_allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .configure(routes::configure_routes)
    })
    .bind((settings.server.host.as_str(), settings.server.port))?
    .run()
    .await?;

    Ok(())
}
