//! Platform identifiers.
//!
//! The platform hands out compound global ids such as
//! `gid://shopify/Customer/7012345678901`. Locally only the numeric part is
//! kept; it is re-wrapped into the compound form whenever a GraphQL call
//! needs it and used bare in REST paths.

use std::fmt;

use serde::Serialize;

const GID_PREFIX: &str = "gid://shopify";

/// Keep only the ASCII digits of a compound identifier.
///
/// Returns `None` when nothing numeric is left, so an empty or malformed id
/// never turns into an empty-string identifier downstream.
pub fn numeric_part(compound: &str) -> Option<String> {
    let digits: String = compound.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

macro_rules! platform_id {
    ($(#[$meta:meta])* $name:ident, $resource:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Platform resource name used in the compound id.
            pub const RESOURCE: &'static str = $resource;

            /// Extract the numeric id from a compound platform id.
            pub fn from_compound(compound: &str) -> Option<Self> {
                numeric_part(compound).map(Self)
            }

            /// Wrap an already-numeric id. Non-digit input is rejected.
            pub fn from_numeric(id: impl Into<String>) -> Option<Self> {
                let id = id.into();
                if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
                    Some(Self(id))
                } else {
                    None
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Compound form expected by the GraphQL APIs.
            pub fn to_gid(&self) -> String {
                format!("{GID_PREFIX}/{}/{}", Self::RESOURCE, self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

platform_id!(
    /// Numeric id of a customer account.
    AccountId,
    "Customer"
);

platform_id!(
    /// Numeric id of a company (organization) record.
    OrganizationId,
    "Company"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_compound_customer_id() {
        let id = AccountId::from_compound("gid://shopify/Customer/7012345678901").unwrap();
        assert_eq!(id.as_str(), "7012345678901");
    }

    #[test]
    fn numeric_part_matches_trailing_segment() {
        for gid in [
            "gid://shopify/Customer/1",
            "gid://shopify/Company/987654321",
            "gid://shopify/Customer/7012345678901",
        ] {
            let trailing = gid.rsplit('/').next().unwrap();
            let stripped = numeric_part(gid).unwrap();
            assert_eq!(stripped, trailing);
            assert!(stripped.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn compound_without_digits_is_absent() {
        assert_eq!(numeric_part("gid://shopify/Company/"), None);
        assert_eq!(OrganizationId::from_compound(""), None);
    }

    #[test]
    fn gid_round_trip() {
        let gid = "gid://shopify/Company/42";
        let id = OrganizationId::from_compound(gid).unwrap();
        assert_eq!(id.to_gid(), gid);
    }

    #[test]
    fn account_gid_uses_customer_resource() {
        let id = AccountId::from_numeric("55").unwrap();
        assert_eq!(id.to_gid(), "gid://shopify/Customer/55");
    }

    #[test]
    fn from_numeric_rejects_non_digits() {
        assert!(AccountId::from_numeric("12a").is_none());
        assert!(AccountId::from_numeric("").is_none());
        assert!(AccountId::from_numeric("0012").is_some());
    }

    #[test]
    fn serializes_as_bare_string() {
        let id = AccountId::from_numeric("123").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"123\"");
        assert_eq!(id.to_string(), "123");
    }
}
