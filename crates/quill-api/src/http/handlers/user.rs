//! User handlers.

use axum::extract::{Path, State};

use quill_types::user::{NewUser, User};

use crate::http::error::AppError;
use crate::http::extractors::Json;
use crate::state::AppState;

/// POST /user - Create a user from the request body.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<NewUser>,
) -> Result<Json<User>, AppError> {
    let user = state.user_service.create_user(body).await?;
    Ok(Json(user))
}

/// GET /user/:username - Case-sensitive exact-match lookup.
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<User>, AppError> {
    let user = state.user_service.get_user_by_username(&username).await?;
    Ok(Json(user))
}
