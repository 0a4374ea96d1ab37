//! The commerce platform seam.

use async_trait::async_trait;
use serde_json::Value;
use signup_core::ids::{AccountId, OrganizationId};
use signup_core::metadata::MetadataValues;
use signup_core::region::RegionCode;
use signup_core::registration::RegistrationForm;
use signup_shopify::{ShopifyClient, ShopifyError};

/// Failure of a single platform call.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlatformError {
    /// The request never produced a usable response (network, timeout,
    /// undecodable body).
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The platform answered with a non-2xx status.
    #[error("Platform returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The platform answered successfully but reported errors inside the
    /// response envelope.
    #[error("Platform rejected the request: {0}")]
    Rejected(String),

    /// Required data was missing, either in the response or as input to
    /// the call.
    #[error("Missing data: {0}")]
    MissingData(String),
}

impl PlatformError {
    /// Short machine-readable kind used in registration reports.
    pub fn kind(&self) -> &'static str {
        match self {
            PlatformError::Transport(_) => "transport",
            PlatformError::Status { .. } => "status",
            PlatformError::Rejected(_) => "rejected",
            PlatformError::MissingData(_) => "missing_data",
        }
    }
}

impl From<ShopifyError> for PlatformError {
    fn from(err: ShopifyError) -> Self {
        match err {
            ShopifyError::Request(e) => PlatformError::Transport(e.to_string()),
            ShopifyError::ApiError { status, body } => PlatformError::Status { status, body },
            e @ (ShopifyError::GraphQl(_) | ShopifyError::UserErrors(_)) => {
                PlatformError::Rejected(e.to_string())
            }
            e @ (ShopifyError::MissingField(_) | ShopifyError::MissingIdentifier(_)) => {
                PlatformError::MissingData(e.to_string())
            }
        }
    }
}

/// Operations the registration sequence needs from the platform.
///
/// `link_account` and `update_account` take optional identifiers: the
/// sequence may reach them after an earlier step failed, and it is up to the
/// implementation to refuse the call.
#[async_trait]
pub trait CommercePlatform: Send + Sync {
    async fn create_account(&self, form: &RegistrationForm) -> Result<AccountId, PlatformError>;

    async fn create_organization(
        &self,
        form: &RegistrationForm,
        region: RegionCode,
    ) -> Result<OrganizationId, PlatformError>;

    async fn link_account(
        &self,
        organization: Option<&OrganizationId>,
        account: Option<&AccountId>,
    ) -> Result<Value, PlatformError>;

    async fn update_account(
        &self,
        account: Option<&AccountId>,
        form: &RegistrationForm,
        region: Option<RegionCode>,
        metadata: &MetadataValues,
    ) -> Result<Value, PlatformError>;
}

#[async_trait]
impl CommercePlatform for ShopifyClient {
    async fn create_account(&self, form: &RegistrationForm) -> Result<AccountId, PlatformError> {
        Ok(self.create_customer(form).await?)
    }

    async fn create_organization(
        &self,
        form: &RegistrationForm,
        region: RegionCode,
    ) -> Result<OrganizationId, PlatformError> {
        Ok(self.create_company(form, region).await?)
    }

    async fn link_account(
        &self,
        organization: Option<&OrganizationId>,
        account: Option<&AccountId>,
    ) -> Result<Value, PlatformError> {
        Ok(self.assign_customer_as_contact(organization, account).await?)
    }

    async fn update_account(
        &self,
        account: Option<&AccountId>,
        form: &RegistrationForm,
        region: Option<RegionCode>,
        metadata: &MetadataValues,
    ) -> Result<Value, PlatformError> {
        Ok(self.update_customer(account, form, region, metadata).await?)
    }
}
