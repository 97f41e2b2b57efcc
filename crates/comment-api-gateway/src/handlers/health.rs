//! Liveness endpoint.

use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Liveness probe body.
pub const ALIVE: &str = "I am alive!!";

/// Liveness handler.
///
/// Public, never touches the store.
///
/// ```text
/// GET /alive
///
/// Response: 200 OK
/// I am alive!!
/// ```
pub async fn alive() -> impl IntoResponse {
    (StatusCode::OK, ALIVE)
}
