//! Router configuration for Web API.

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{get_articles, get_repo_stats, AppState};
use super::middleware::{create_cors_layer, security_headers};

/// Create the main API router.
///
/// The statistics route is only mounted when statistics are enabled.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let mut api_routes = Router::new().route("/medium", get(get_articles));

    if app_state.stats.is_some() {
        api_routes = api_routes.route("/github", get(get_repo_stats));
    }

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(security_headers)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
