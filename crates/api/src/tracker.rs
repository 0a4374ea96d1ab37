//! In-memory record of dispatched registrations.
//!
//! The submit endpoint answers before the platform calls finish; this is
//! where their progress and final report become observable. Records live
//! only in this process and are purged by the retention task.

use std::collections::HashMap;

use chrono::Utc;
use serde::Serialize;
use signup_core::types::Timestamp;
use signup_pipeline::RegistrationReport;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Lifecycle of one registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    /// Accepted, task not started yet.
    Pending,
    /// Platform calls in progress.
    Running,
    /// Every step succeeded.
    Completed,
    /// The sequence ran to the end but at least one step failed or was skipped.
    Partial,
    /// Halted by the fail-fast policy, or the task itself died.
    Failed,
}

impl RegistrationStatus {
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            RegistrationStatus::Completed | RegistrationStatus::Partial | RegistrationStatus::Failed
        )
    }

    /// Terminal status for a finished run.
    pub fn from_report(report: &RegistrationReport) -> Self {
        if report.is_halted() {
            RegistrationStatus::Failed
        } else if report.is_complete() {
            RegistrationStatus::Completed
        } else {
            RegistrationStatus::Partial
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationRecord {
    pub id: Uuid,
    pub status: RegistrationStatus,
    pub submitted_at: Timestamp,
    pub started_at: Option<Timestamp>,
    pub finished_at: Option<Timestamp>,
    pub report: Option<RegistrationReport>,
    /// Set when the task ended without producing a report.
    pub error: Option<String>,
}

/// Thread-safe registry of registrations, keyed by id.
///
/// Designed to be wrapped in `Arc` and shared through the app state.
pub struct RegistrationTracker {
    records: RwLock<HashMap<Uuid, RegistrationRecord>>,
}

impl RegistrationTracker {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new submission and return its id.
    pub async fn insert_pending(&self) -> Uuid {
        let id = Uuid::now_v7();
        let record = RegistrationRecord {
            id,
            status: RegistrationStatus::Pending,
            submitted_at: Utc::now(),
            started_at: None,
            finished_at: None,
            report: None,
            error: None,
        };
        self.records.write().await.insert(id, record);
        id
    }

    pub async fn mark_running(&self, id: Uuid) {
        if let Some(record) = self.records.write().await.get_mut(&id) {
            record.status = RegistrationStatus::Running;
            record.started_at = Some(Utc::now());
        }
    }

    /// Store the final report and derive the terminal status from it.
    pub async fn finish(&self, id: Uuid, report: RegistrationReport) {
        if let Some(record) = self.records.write().await.get_mut(&id) {
            record.status = RegistrationStatus::from_report(&report);
            record.finished_at = Some(Utc::now());
            record.report = Some(report);
        }
    }

    /// Mark a registration failed without a report (task panicked or was
    /// cancelled).
    pub async fn abort(&self, id: Uuid, error: impl Into<String>) {
        if let Some(record) = self.records.write().await.get_mut(&id) {
            record.status = RegistrationStatus::Failed;
            record.finished_at = Some(Utc::now());
            record.error = Some(error.into());
        }
    }

    pub async fn get(&self, id: Uuid) -> Option<RegistrationRecord> {
        self.records.read().await.get(&id).cloned()
    }

    /// Drop finished records that finished before `cutoff`.
    ///
    /// Pending and running records are never purged. Returns how many
    /// records were removed.
    pub async fn purge_finished_before(&self, cutoff: Timestamp) -> usize {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, r| {
            !(r.status.is_finished() && r.finished_at.is_some_and(|t| t < cutoff))
        });
        before - records.len()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for RegistrationTracker {
    fn default() -> Self {
        Self::new()
    }
}
