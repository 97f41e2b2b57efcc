//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use comment_api_auth::TokenValidator;
use comment_api_service::CommentService;

use crate::handlers::{self, comments, health};
use crate::state::GatewayState;

/// Create the gateway router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /alive` - Liveness probe
/// - `GET /api/v1/comment/:id` - Get comment
/// - `GET /api/v1/get-multiple` - List comments
///
/// ## Authenticated
/// - `POST /api/v1/comment` - Create comment
/// - `PUT /api/v1/comment/:id` - Update comment
/// - `DELETE /api/v1/comment/:id` - Delete comment
///
/// Any other path answers 404 `{"error":"path not found"}`.
pub fn create_router<C, V>(state: GatewayState<C, V>) -> Router
where
    C: CommentService + 'static,
    V: TokenValidator + 'static,
{
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout = state.config.request_timeout();

    let state = Arc::new(state);

    Router::new()
        .route("/alive", get(health::alive))
        .route("/api/v1/comment", post(comments::create_comment::<C, V>))
        .route(
            "/api/v1/comment/:id",
            get(comments::get_comment::<C, V>)
                .put(comments::update_comment::<C, V>)
                .delete(comments::delete_comment::<C, V>),
        )
        .route("/api/v1/get-multiple", get(comments::list_comments::<C, V>))
        .fallback(handlers::path_not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
