//! Post CRUD handlers.

use axum::extract::{Path, State};

use quill_types::post::{NewPost, Post, PostId, UpdatePost};

use crate::http::error::AppError;
use crate::http::extractors::Json;
use crate::state::AppState;

fn parse_id(raw: &str) -> Result<PostId, AppError> {
    raw.parse().map_err(|_| AppError::InvalidId(raw.to_string()))
}

/// POST /post - Create a post, resolving the author by email.
pub async fn create_post(
    State(state): State<AppState>,
    Json(body): Json<NewPost>,
) -> Result<Json<Post>, AppError> {
    let post = state.post_service.create_post(body).await?;
    Ok(Json(post))
}

/// GET /post/:id - Get a post by id.
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, AppError> {
    let id = parse_id(&id)?;
    let post = state.post_service.get_post(&id).await?;
    Ok(Json(post))
}

/// PUT /post/:id - Merge the supplied fields into an existing post.
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdatePost>,
) -> Result<Json<Post>, AppError> {
    let id = parse_id(&id)?;
    let post = state.post_service.update_post(&id, body).await?;
    Ok(Json(post))
}

/// DELETE /post/:id - Delete a post and return its prior state.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, AppError> {
    let id = parse_id(&id)?;
    let post = state.post_service.delete_post(&id).await?;
    Ok(Json(post))
}
