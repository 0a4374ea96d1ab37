//! Periodic cleanup of finished registration records.
//!
//! Finished registrations stay queryable for the configured retention
//! period, then get dropped from the in-memory tracker.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio_util::sync::CancellationToken;

use crate::tracker::RegistrationTracker;

/// How often the cleanup job runs.
pub const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Run the retention loop until `cancel` is triggered.
pub async fn run(
    tracker: Arc<RegistrationTracker>,
    retention: Duration,
    interval: Duration,
    cancel: CancellationToken,
) {
    tracing::info!(
        retention_secs = retention.as_secs(),
        interval_secs = interval.as_secs(),
        "Registration retention job started"
    );

    let retention = chrono::Duration::from_std(retention).unwrap_or(chrono::Duration::MAX);
    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Registration retention job stopping");
                break;
            }
            _ = ticker.tick() => {
                let cutoff = Utc::now()
                    .checked_sub_signed(retention)
                    .unwrap_or(chrono::DateTime::<Utc>::MIN_UTC);
                let purged = tracker.purge_finished_before(cutoff).await;
                if purged > 0 {
                    tracing::info!(purged, "Registration retention: purged finished records");
                } else {
                    tracing::debug!("Registration retention: nothing to purge");
                }
            }
        }
    }
}
