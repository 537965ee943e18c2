//! Article handlers for Web API.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{cache_control, AppState};
use crate::web::dto::ArticlesResponse;

/// GET /api/medium - Latest articles from the configured feed.
///
/// Any fetch failure degrades to `{ "articles": [] }` with status 500.
pub async fn get_articles(State(state): State<Arc<AppState>>) -> Response {
    match state.feed.articles().await {
        Ok(articles) => (
            [(header::CACHE_CONTROL, cache_control(state.feed.freshness()))],
            Json(ArticlesResponse::new(articles)),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error fetching articles from {}: {}", state.feed.url(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ArticlesResponse::empty()),
            )
                .into_response()
        }
    }
}
