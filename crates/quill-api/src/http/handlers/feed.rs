//! Feed handler.

use axum::extract::State;

use quill_types::post::PostWithAuthor;

use crate::http::error::AppError;
use crate::http::extractors::Json;
use crate::state::AppState;

/// GET /feed - Every post with its author embedded.
pub async fn feed(State(state): State<AppState>) -> Result<Json<Vec<PostWithAuthor>>, AppError> {
    let posts = state.post_service.feed().await?;
    Ok(Json(posts))
}
