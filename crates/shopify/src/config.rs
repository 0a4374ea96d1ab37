use std::fmt;
use std::time::Duration;

/// Default timeout for a single outbound request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Store credentials and endpoint settings.
///
/// Built once at startup and handed to [`ShopifyClient`](crate::ShopifyClient);
/// nothing reads these values from the environment after that.
#[derive(Clone)]
pub struct ShopifyConfig {
    /// Store domain, e.g. `my-store.myshopify.com`.
    pub store_domain: String,
    /// API version segment, e.g. `2024-01`.
    pub api_version: String,
    /// Admin API access token (`X-Shopify-Access-Token`).
    pub admin_access_token: String,
    /// Storefront API access token, used only for `customerCreate`.
    pub storefront_access_token: String,
    /// Shared password assigned to every created customer.
    pub default_password: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ShopifyConfig {
    pub fn storefront_graphql_url(&self) -> String {
        format!(
            "https://{}/api/{}/graphql.json",
            self.store_domain, self.api_version
        )
    }

    pub fn admin_graphql_url(&self) -> String {
        format!(
            "https://{}/admin/api/{}/graphql.json",
            self.store_domain, self.api_version
        )
    }

    pub fn customer_url(&self, customer_id: &str) -> String {
        format!(
            "https://{}/admin/api/{}/customers/{customer_id}.json",
            self.store_domain, self.api_version
        )
    }
}

// Tokens and the shared password stay out of logs.
impl fmt::Debug for ShopifyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShopifyConfig")
            .field("store_domain", &self.store_domain)
            .field("api_version", &self.api_version)
            .field("admin_access_token", &"<redacted>")
            .field("storefront_access_token", &"<redacted>")
            .field("default_password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
