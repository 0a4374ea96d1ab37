//! Route definitions for registrations.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::registration;
use crate::state::AppState;

/// Registration routes, merged under `/api/v1`.
///
/// ```text
/// POST   /registrations          -> submit_registration
/// GET    /registrations/{id}     -> get_registration
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/registrations", post(registration::submit_registration))
        .route("/registrations/{id}", get(registration::get_registration))
}

/// The path the storefront form already posts to, kept at the root.
pub fn storefront_router() -> Router<AppState> {
    Router::new().route(
        "/process-shopify-registration",
        post(registration::submit_registration),
    )
}
