use crate::graphql::UserError;

/// Errors from the Shopify API layer.
#[derive(Debug, thiserror::Error)]
pub enum ShopifyError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, body decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Shopify returned a non-2xx status code.
    #[error("Shopify API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// Top-level `errors` array in a GraphQL response.
    #[error("GraphQL errors: {0}")]
    GraphQl(String),

    /// The mutation ran but reported `userErrors`.
    #[error("User errors: {}", join_user_errors(.0))]
    UserErrors(Vec<UserError>),

    /// A successful response did not carry the expected field.
    #[error("Response missing {0}")]
    MissingField(&'static str),

    /// The call needs an identifier that an earlier step never produced.
    /// Nothing is sent in this case.
    #[error("Missing {0} identifier, request not sent")]
    MissingIdentifier(&'static str),
}

fn join_user_errors(errors: &[UserError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
