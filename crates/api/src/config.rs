use std::time::Duration;

use signup_pipeline::FailurePolicy;
use signup_shopify::config::DEFAULT_TIMEOUT;
use signup_shopify::ShopifyConfig;

/// Errors raised while reading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long shutdown waits for in-flight registrations (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// How long finished registrations stay queryable (default: `3600`).
    pub registration_retention_secs: u64,
    /// What the registration sequence does after a failed step.
    pub failure_policy: FailurePolicy,
    /// Store credentials and endpoints.
    pub shopify: ShopifyConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                            | Default     |
    /// |------------------------------------|-------------|
    /// | `HOST`                             | `0.0.0.0`   |
    /// | `PORT`                             | `3000`      |
    /// | `CORS_ORIGINS`                     | `*`         |
    /// | `REQUEST_TIMEOUT_SECS`             | `30`        |
    /// | `SHUTDOWN_TIMEOUT_SECS`            | `30`        |
    /// | `REGISTRATION_RETENTION_SECS`      | `3600`      |
    /// | `REGISTRATION_FAILURE_POLICY`      | `best_effort` |
    /// | `SHOPIFY_STORE`                    | required    |
    /// | `SHOPIFY_API_VERSION`              | required    |
    /// | `SHOPIFY_ACCESS_TOKEN`             | required    |
    /// | `SHOPIFY_STOREFRONT_ACCESS_TOKEN`  | required    |
    /// | `SHOPIFY_DEFAULT_PASSWORD`         | required    |
    /// | `SHOPIFY_TIMEOUT_SECS`             | `30`        |
    ///
    /// The Shopify variables also fall back to the camelCase names older
    /// deployments use (`shopifyStore`, `apiVersion`, `accessToken`,
    /// `storefrontAccessToken`, `userPass`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 3000u16)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;
        let shutdown_timeout_secs = parse_or(&lookup, "SHUTDOWN_TIMEOUT_SECS", 30u64)?;
        let registration_retention_secs =
            parse_or(&lookup, "REGISTRATION_RETENTION_SECS", 3600u64)?;
        let failure_policy =
            parse_or(&lookup, "REGISTRATION_FAILURE_POLICY", FailurePolicy::default())?;

        let shopify_timeout_secs =
            parse_or(&lookup, "SHOPIFY_TIMEOUT_SECS", DEFAULT_TIMEOUT.as_secs())?;

        let shopify = ShopifyConfig {
            store_domain: required(&lookup, "SHOPIFY_STORE", "shopifyStore")?,
            api_version: required(&lookup, "SHOPIFY_API_VERSION", "apiVersion")?,
            admin_access_token: required(&lookup, "SHOPIFY_ACCESS_TOKEN", "accessToken")?,
            storefront_access_token: required(
                &lookup,
                "SHOPIFY_STOREFRONT_ACCESS_TOKEN",
                "storefrontAccessToken",
            )?,
            default_password: required(&lookup, "SHOPIFY_DEFAULT_PASSWORD", "userPass")?,
            timeout: Duration::from_secs(shopify_timeout_secs),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            registration_retention_secs,
            failure_policy,
            shopify,
        })
    }
}

fn required<F>(lookup: &F, name: &'static str, legacy: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .or_else(|| lookup(legacy))
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const SHOPIFY: [(&str, &str); 5] = [
        ("SHOPIFY_STORE", "azul.myshopify.com"),
        ("SHOPIFY_API_VERSION", "2024-01"),
        ("SHOPIFY_ACCESS_TOKEN", "admin"),
        ("SHOPIFY_STOREFRONT_ACCESS_TOKEN", "storefront"),
        ("SHOPIFY_DEFAULT_PASSWORD", "pass"),
    ];

    #[test]
    fn defaults_apply() {
        let config = ServerConfig::from_lookup(env(&SHOPIFY)).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["*"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.registration_retention_secs, 3600);
        assert_eq!(config.failure_policy, FailurePolicy::BestEffort);
        assert_eq!(config.shopify.timeout, Duration::from_secs(30));
        assert_eq!(config.shopify.store_domain, "azul.myshopify.com");
    }

    #[test]
    fn legacy_names_are_accepted() {
        let config = ServerConfig::from_lookup(env(&[
            ("shopifyStore", "legacy.myshopify.com"),
            ("apiVersion", "2023-10"),
            ("accessToken", "a"),
            ("storefrontAccessToken", "s"),
            ("userPass", "p"),
        ]))
        .unwrap();
        assert_eq!(config.shopify.store_domain, "legacy.myshopify.com");
        assert_eq!(config.shopify.default_password, "p");
    }

    #[test]
    fn missing_token_is_an_error() {
        let pairs: Vec<_> = SHOPIFY
            .iter()
            .copied()
            .filter(|(k, _)| *k != "SHOPIFY_ACCESS_TOKEN")
            .collect();
        let err = ServerConfig::from_lookup(env(&pairs)).unwrap_err();
        assert_matches!(err, ConfigError::Missing("SHOPIFY_ACCESS_TOKEN"));
    }

    #[test]
    fn invalid_port_is_an_error() {
        let mut pairs = SHOPIFY.to_vec();
        pairs.push(("PORT", "eighty"));
        let err = ServerConfig::from_lookup(env(&pairs)).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { name: "PORT", .. });
    }

    #[test]
    fn overrides_and_policy() {
        let mut pairs = SHOPIFY.to_vec();
        pairs.extend([
            ("PORT", "8080"),
            ("CORS_ORIGINS", "https://a.example, https://b.example,"),
            ("REGISTRATION_FAILURE_POLICY", "fail_fast"),
            ("SHOPIFY_TIMEOUT_SECS", "5"),
        ]);
        let config = ServerConfig::from_lookup(env(&pairs)).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.failure_policy, FailurePolicy::FailFast);
        assert_eq!(config.shopify.timeout, Duration::from_secs(5));
    }
}
