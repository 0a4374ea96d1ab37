use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// What the registration sequence does after a step fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log the failure and keep going. Later steps run even when the
    /// identifiers they need are absent, so a half-created registration
    /// (customer without company, company without contact) is possible.
    #[default]
    BestEffort,
    /// Stop at the first failed step and mark the registration failed.
    FailFast,
}

impl FailurePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            FailurePolicy::BestEffort => "best_effort",
            FailurePolicy::FailFast => "fail_fast",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown failure policy '{0}' (expected best_effort or fail_fast)")]
pub struct UnknownPolicy(pub String);

impl FromStr for FailurePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "best_effort" => Ok(FailurePolicy::BestEffort),
            "fail_fast" => Ok(FailurePolicy::FailFast),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}
