//! Per-step record of what a registration run did.

use serde::Serialize;
use signup_core::ids::{AccountId, OrganizationId};
use signup_core::region::RegionCode;

use crate::platform::PlatformError;

/// The steps of a registration, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    ResolveRegion,
    CreateAccount,
    CreateOrganization,
    LinkAccount,
    UpdateAccount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    Succeeded,
    Skipped { reason: String },
    Failed { kind: String, error: String },
}

impl StepOutcome {
    pub fn failed(err: &PlatformError) -> Self {
        StepOutcome::Failed {
            kind: err.kind().to_string(),
            error: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub step: Step,
    #[serde(flatten)]
    pub outcome: StepOutcome,
}

/// Everything a registration produced, including partial results.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegistrationReport {
    pub region_code: Option<RegionCode>,
    pub account_id: Option<AccountId>,
    pub organization_id: Option<OrganizationId>,
    pub steps: Vec<StepRecord>,
    /// Set when a fail-fast run stopped early.
    pub halted_at: Option<Step>,
}

impl RegistrationReport {
    pub(crate) fn record(&mut self, step: Step, outcome: StepOutcome) {
        self.steps.push(StepRecord { step, outcome });
    }

    pub fn outcome(&self, step: Step) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|r| r.step == step)
            .map(|r| &r.outcome)
    }

    /// True when every step ran and succeeded.
    pub fn is_complete(&self) -> bool {
        self.halted_at.is_none()
            && self.steps.len() == 5
            && self
                .steps
                .iter()
                .all(|r| r.outcome == StepOutcome::Succeeded)
    }

    pub fn is_halted(&self) -> bool {
        self.halted_at.is_some()
    }
}
