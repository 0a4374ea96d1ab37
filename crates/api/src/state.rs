use std::sync::Arc;

use signup_pipeline::RegistrationOrchestrator;
use tokio_util::task::TaskTracker;

use crate::tracker::RegistrationTracker;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything inside is behind an `Arc` or is a handle.
#[derive(Clone)]
pub struct AppState {
    /// Runs the platform call sequence for each registration.
    pub orchestrator: RegistrationOrchestrator,
    /// Status of dispatched registrations.
    pub tracker: Arc<RegistrationTracker>,
    /// Background registration tasks, drained on shutdown.
    pub tasks: TaskTracker,
}
