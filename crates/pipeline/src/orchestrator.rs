//! The registration sequence.
//!
//! Steps run strictly in order because each one needs the identifier the
//! previous one produced:
//!
//! ```text
//! resolve region -> create account -> create organization -> link -> update account
//! ```
//!
//! An unresolved region skips organization creation and linking. Every
//! other failure is logged, recorded in the [`RegistrationReport`], and
//! then handled according to the [`FailurePolicy`]. Nothing is rolled back.

use std::sync::Arc;

use signup_core::metadata::MetadataValues;
use signup_core::region::region_code;
use signup_core::registration::RegistrationForm;

use crate::platform::{CommercePlatform, PlatformError};
use crate::policy::FailurePolicy;
use crate::report::{RegistrationReport, Step, StepOutcome};

const UNRESOLVED_REGION: &str = "state name did not resolve to a region code";

/// Runs registrations against a [`CommercePlatform`].
///
/// Cheap to clone; the platform is shared behind an `Arc`.
#[derive(Clone)]
pub struct RegistrationOrchestrator {
    platform: Arc<dyn CommercePlatform>,
    policy: FailurePolicy,
}

impl RegistrationOrchestrator {
    pub fn new(platform: Arc<dyn CommercePlatform>, policy: FailurePolicy) -> Self {
        Self { platform, policy }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Run the full sequence for one submission.
    ///
    /// Never returns an error: the report carries each step's outcome and,
    /// for fail-fast runs, the step the run stopped at.
    pub async fn run(&self, form: &RegistrationForm, metadata: &MetadataValues) -> RegistrationReport {
        let mut report = RegistrationReport::default();

        // 1. Region
        let region = region_code(&form.state);
        report.region_code = region;
        match region {
            Some(code) => {
                tracing::debug!(state = %form.state, region_code = %code, "Region resolved");
                report.record(Step::ResolveRegion, StepOutcome::Succeeded);
            }
            None => {
                tracing::warn!(state = %form.state, "Unrecognized state name, skipping company creation");
                let err = PlatformError::MissingData(UNRESOLVED_REGION.to_string());
                report.record(Step::ResolveRegion, StepOutcome::failed(&err));
                if self.halts() {
                    return self.halt(report, Step::ResolveRegion);
                }
            }
        }

        // 2. Account
        match self.platform.create_account(form).await {
            Ok(id) => {
                tracing::info!(account_id = %id, "Account created");
                report.account_id = Some(id);
                report.record(Step::CreateAccount, StepOutcome::Succeeded);
            }
            Err(e) => {
                tracing::error!(error = %e, "Error creating account");
                report.record(Step::CreateAccount, StepOutcome::failed(&e));
                if self.halts() {
                    return self.halt(report, Step::CreateAccount);
                }
            }
        }

        // 3 + 4. Organization and link, only with a region.
        if let Some(code) = region {
            match self.platform.create_organization(form, code).await {
                Ok(id) => {
                    tracing::info!(organization_id = %id, "Organization created");
                    report.organization_id = Some(id);
                    report.record(Step::CreateOrganization, StepOutcome::Succeeded);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error creating organization");
                    report.record(Step::CreateOrganization, StepOutcome::failed(&e));
                    if self.halts() {
                        return self.halt(report, Step::CreateOrganization);
                    }
                }
            }

            match self
                .platform
                .link_account(report.organization_id.as_ref(), report.account_id.as_ref())
                .await
            {
                Ok(response) => {
                    tracing::debug!(response = %response, "Account linked to organization");
                    report.record(Step::LinkAccount, StepOutcome::Succeeded);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Error linking account to organization");
                    report.record(Step::LinkAccount, StepOutcome::failed(&e));
                    if self.halts() {
                        return self.halt(report, Step::LinkAccount);
                    }
                }
            }
        } else {
            let reason = UNRESOLVED_REGION.to_string();
            report.record(
                Step::CreateOrganization,
                StepOutcome::Skipped {
                    reason: reason.clone(),
                },
            );
            report.record(Step::LinkAccount, StepOutcome::Skipped { reason });
        }

        // 5. Address and metadata, whatever happened above.
        match self
            .platform
            .update_account(report.account_id.as_ref(), form, region, metadata)
            .await
        {
            Ok(_) => {
                tracing::info!("Account address and metadata updated");
                report.record(Step::UpdateAccount, StepOutcome::Succeeded);
            }
            Err(e) => {
                tracing::error!(error = %e, "Error updating account");
                report.record(Step::UpdateAccount, StepOutcome::failed(&e));
                if self.halts() {
                    return self.halt(report, Step::UpdateAccount);
                }
            }
        }

        report
    }

    fn halts(&self) -> bool {
        self.policy == FailurePolicy::FailFast
    }

    fn halt(&self, mut report: RegistrationReport, step: Step) -> RegistrationReport {
        tracing::warn!(step = ?step, policy = %self.policy, "Registration halted");
        report.halted_at = Some(step);
        report
    }
}
