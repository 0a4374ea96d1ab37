//! Hands a validated submission to a background task.

use std::sync::Arc;

use signup_core::metadata::MetadataValues;
use signup_core::registration::RegistrationForm;
use signup_pipeline::RegistrationOrchestrator;
use tokio_util::task::TaskTracker;
use tracing::Instrument;
use uuid::Uuid;

use crate::tracker::RegistrationTracker;

/// Record the submission as pending and start the registration sequence on
/// its own task. Returns as soon as the task is spawned.
///
/// The sequence runs on an inner task so a panic inside the platform client
/// still leaves a terminal status behind.
pub async fn spawn_registration(
    orchestrator: &RegistrationOrchestrator,
    tracker: &Arc<RegistrationTracker>,
    tasks: &TaskTracker,
    form: RegistrationForm,
    metadata: MetadataValues,
) -> Uuid {
    let id = tracker.insert_pending().await;

    let orchestrator = orchestrator.clone();
    let tracker = Arc::clone(tracker);
    let span = tracing::info_span!("registration", registration_id = %id);

    tasks.spawn(
        async move {
            tracker.mark_running(id).await;
            tracing::info!(email = %form.email, policy = %orchestrator.policy(), "Registration started");

            let run = tokio::spawn(
                async move { orchestrator.run(&form, &metadata).await }.in_current_span(),
            );

            match run.await {
                Ok(report) => {
                    tracing::info!(
                        account_id = ?report.account_id,
                        organization_id = ?report.organization_id,
                        halted_at = ?report.halted_at,
                        "Registration finished",
                    );
                    tracker.finish(id, report).await;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Registration task died");
                    tracker.abort(id, e.to_string()).await;
                }
            }
        }
        .instrument(span),
    );

    id
}
