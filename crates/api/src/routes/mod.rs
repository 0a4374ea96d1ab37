pub mod health;
pub mod registration;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /registrations                 submit (POST)
/// /registrations/{id}            status and report (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(registration::router())
}
