//! Repository statistics handlers for Web API.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{cache_control, AppState};
use crate::web::dto::RepoStatsResponse;

/// GET /api/github - Recently updated repositories with totals.
///
/// Any fetch failure degrades to empty repos and zero totals with status 500.
pub async fn get_repo_stats(State(state): State<Arc<AppState>>) -> Response {
    let Some(client) = state.stats.as_ref() else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match client.stats().await {
        Ok(stats) => (
            [(header::CACHE_CONTROL, cache_control(client.freshness()))],
            Json(RepoStatsResponse::from(stats)),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(
                "Error fetching repository statistics from {}: {}",
                client.url(),
                e
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RepoStatsResponse::empty()),
            )
                .into_response()
        }
    }
}
