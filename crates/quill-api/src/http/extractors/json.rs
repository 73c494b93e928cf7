//! JSON body extractor with enveloped rejections.
//!
//! axum's built-in `Json` rejection renders a plain-text body. Every
//! failure response here must carry the standard error envelope, so this
//! wrapper routes `JsonRejection` through `AppError` instead.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::http::error::AppError;

/// Drop-in replacement for `axum::Json` on both the request and the
/// response side; only the rejection differs.
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
