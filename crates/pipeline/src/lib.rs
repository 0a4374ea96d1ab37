//! Registration pipeline: the fixed sequence of platform calls that turns a
//! storefront form submission into a customer, a company, and the link
//! between them.
//!
//! The platform sits behind [`CommercePlatform`] so the sequence can run
//! against Shopify in production and against a recording fake in tests.

pub mod orchestrator;
pub mod platform;
pub mod policy;
pub mod report;

pub use orchestrator::RegistrationOrchestrator;
pub use platform::{CommercePlatform, PlatformError};
pub use policy::FailurePolicy;
pub use report::{RegistrationReport, Step, StepOutcome};
