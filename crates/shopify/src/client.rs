//! HTTP client for the Shopify storefront and admin APIs.

use serde::de::DeserializeOwned;
use serde_json::Value;
use signup_core::ids::{AccountId, OrganizationId};
use signup_core::metadata::MetadataValues;
use signup_core::region::RegionCode;
use signup_core::registration::RegistrationForm;

use crate::config::ShopifyConfig;
use crate::error::ShopifyError;
use crate::graphql::{self, CompanyCreateData, CustomerCreateData, GraphQlResponse};
use crate::payload;

const ADMIN_TOKEN_HEADER: &str = "X-Shopify-Access-Token";
const STOREFRONT_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Which API, and therefore which token, a GraphQL call goes to.
#[derive(Debug, Clone, Copy)]
enum Api {
    Storefront,
    Admin,
}

/// Shopify client for a single store.
pub struct ShopifyClient {
    client: reqwest::Client,
    config: ShopifyConfig,
}

impl ShopifyClient {
    /// Build a client with its own connection pool and the configured timeout.
    pub fn new(config: ShopifyConfig) -> Result<Self, ShopifyError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: ShopifyConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ShopifyConfig {
        &self.config
    }

    /// Create a customer through the storefront API.
    ///
    /// Uses the storefront token and the shared default password.
    pub async fn create_customer(&self, form: &RegistrationForm) -> Result<AccountId, ShopifyError> {
        let variables = payload::customer_create_variables(form, &self.config.default_password);
        let response: GraphQlResponse<CustomerCreateData> = self
            .graphql(Api::Storefront, graphql::CUSTOMER_CREATE, variables)
            .await?;

        let id = graphql::parse_customer_create(response)?;
        tracing::debug!(account_id = %id, "Shopify customer created");
        Ok(id)
    }

    /// Create a company with a single location at the form's address.
    pub async fn create_company(
        &self,
        form: &RegistrationForm,
        region: RegionCode,
    ) -> Result<OrganizationId, ShopifyError> {
        let variables = payload::company_create_variables(form, region);
        let response: GraphQlResponse<CompanyCreateData> = self
            .graphql(Api::Admin, graphql::COMPANY_CREATE, variables)
            .await?;

        let id = graphql::parse_company_create(response)?;
        tracing::debug!(organization_id = %id, "Shopify company created");
        Ok(id)
    }

    /// Make the customer a contact of the company.
    ///
    /// Returns the raw response body; only the HTTP status is checked.
    pub async fn assign_customer_as_contact(
        &self,
        organization: Option<&OrganizationId>,
        account: Option<&AccountId>,
    ) -> Result<Value, ShopifyError> {
        let organization = organization.ok_or(ShopifyError::MissingIdentifier("organization"))?;
        let account = account.ok_or(ShopifyError::MissingIdentifier("account"))?;

        let variables = payload::assign_contact_variables(organization, account);
        self.graphql(
            Api::Admin,
            graphql::COMPANY_ASSIGN_CUSTOMER_AS_CONTACT,
            variables,
        )
        .await
    }

    /// Replace the customer's addresses and write the registration metafields.
    pub async fn update_customer(
        &self,
        account: Option<&AccountId>,
        form: &RegistrationForm,
        region: Option<RegionCode>,
        metadata: &MetadataValues,
    ) -> Result<Value, ShopifyError> {
        let account = account.ok_or(ShopifyError::MissingIdentifier("account"))?;
        let body = payload::customer_update_body(account, form, region, metadata);

        let response = self
            .client
            .put(self.config.customer_url(account.as_str()))
            .header(ADMIN_TOKEN_HEADER, &self.config.admin_access_token)
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    async fn graphql<T: DeserializeOwned>(
        &self,
        api: Api,
        query: &str,
        variables: Value,
    ) -> Result<T, ShopifyError> {
        let (url, header, token) = match api {
            Api::Storefront => (
                self.config.storefront_graphql_url(),
                STOREFRONT_TOKEN_HEADER,
                &self.config.storefront_access_token,
            ),
            Api::Admin => (
                self.config.admin_graphql_url(),
                ADMIN_TOKEN_HEADER,
                &self.config.admin_access_token,
            ),
        };

        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let response = self
            .client
            .post(url)
            .header(header, token)
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Return the response unchanged on a 2xx status, or an
    /// [`ShopifyError::ApiError`] carrying the status and body otherwise.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ShopifyError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ShopifyError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ShopifyError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
