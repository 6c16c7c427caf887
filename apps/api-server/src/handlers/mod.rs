//! HTTP handlers and route configuration.

mod auth;
mod blogs;
mod health;
mod upload;

use actix_web::web;

use crate::middleware::error::{json_error_handler, query_error_handler};
use crate::state::AppState;

/// Register shared state, extractor error handlers and routes.
pub fn configure_app(state: web::Data<AppState>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(state)
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .configure(configure_routes);
    }
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/auth/login", web::post().to(auth::login))
            // Blog resource; writes check AdminIdentity
            .service(
                web::resource("/blogs")
                    .route(web::get().to(blogs::get_blogs))
                    .route(web::post().to(blogs::create_blog))
                    .route(web::put().to(blogs::update_blog))
                    .route(web::delete().to(blogs::delete_blog)),
            )
            .route("/upload", web::post().to(upload::upload_image)),
    );
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use carewell_infra::{InMemoryBlogPostRepository, LocalImageStore, StorageConfig};

    use crate::state::AppState;

    /// In-memory store, open admin mode.
    pub fn memory_state() -> AppState {
        AppState::from_parts(
            Arc::new(InMemoryBlogPostRepository::new()),
            Arc::new(LocalImageStore::new(StorageConfig::default())),
            None,
            1024 * 1024,
        )
    }
}
