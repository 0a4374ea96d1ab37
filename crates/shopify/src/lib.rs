//! Shopify API client used by the registration bridge.
//!
//! Wraps the three GraphQL mutations (storefront `customerCreate`, admin
//! `companyCreate` and `companyAssignCustomerAsContact`) and the admin REST
//! customer update using [`reqwest`].

pub mod client;
pub mod config;
pub mod error;
pub mod graphql;
pub mod payload;

pub use client::ShopifyClient;
pub use config::ShopifyConfig;
pub use error::ShopifyError;
