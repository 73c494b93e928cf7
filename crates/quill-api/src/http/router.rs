//! Axum router configuration with middleware.
//!
//! Routes mirror the public contract: `/feed`, `/post`, `/user`.
//! Middleware: CORS, request tracing. Unmatched paths fall through to a
//! handler producing the standard 404 error envelope.

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::error::AppError;
use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/feed", get(handlers::feed::feed))
        .route("/post", axum::routing::post(handlers::post::create_post))
        .route(
            "/post/{id}",
            get(handlers::post::get_post)
                .put(handlers::post::update_post)
                .delete(handlers::post::delete_post),
        )
        .route("/user", axum::routing::post(handlers::user::create_user))
        .route("/user/{username}", get(handlers::user::get_user))
        .route("/health", get(health_check))
        .fallback(route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Terminal handler: any unmatched route produces the 404 envelope.
async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}
