//! # CareWell Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting CareWell blog server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config).await?;

    if config.seed_sample_post {
        match state.blog.seed_sample_post().await {
            Ok(Some(post)) => tracing::info!(post_id = post.id, "Seeded sample blog post"),
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to seed sample blog post: {}", e),
        }
    }

    let state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .configure(handlers::configure_app(state.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
