//! GraphQL documents and response envelopes.
//!
//! Response parsing is kept free of I/O so each outcome (success, top-level
//! errors, `userErrors`, missing id) can be tested against canned JSON.

use std::fmt;

use serde::{Deserialize, Serialize};
use signup_core::ids::{AccountId, OrganizationId};

use crate::error::ShopifyError;

pub const CUSTOMER_CREATE: &str = r#"
mutation customerCreate($input: CustomerCreateInput!) {
  customerCreate(input: $input) {
    customer {
      id
    }
    userErrors {
      field
      message
    }
  }
}
"#;

pub const COMPANY_CREATE: &str = r#"
mutation companyCreate($input: CompanyCreateInput!) {
  companyCreate(input: $input) {
    company {
      id
    }
    userErrors {
      code
      field
      message
    }
  }
}
"#;

pub const COMPANY_ASSIGN_CUSTOMER_AS_CONTACT: &str = r#"
mutation companyAssignCustomerAsContact($companyId: ID!, $customerId: ID!) {
  companyAssignCustomerAsContact(companyId: $companyId, customerId: $customerId) {
    companyContact {
      id
      createdAt
      updatedAt
      isMainContact
      locale
      title
      company {
        id
        name
      }
      customer {
        id
        firstName
        lastName
      }
    }
    userErrors {
      field
      message
    }
  }
}
"#;

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Application-level error reported inside a mutation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub field: Option<Vec<String>>,
    pub message: String,
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(path) if !path.is_empty() => write!(f, "{}: {}", path.join("."), self.message),
            _ => f.write_str(&self.message),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Node {
    pub id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreateData {
    pub customer_create: Option<CustomerCreatePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreatePayload {
    pub customer: Option<Node>,
    #[serde(default)]
    pub user_errors: Vec<UserError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCreateData {
    pub company_create: Option<CompanyCreatePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCreatePayload {
    pub company: Option<Node>,
    #[serde(default)]
    pub user_errors: Vec<UserError>,
}

fn top_level_errors(errors: &[GraphQlError]) -> ShopifyError {
    ShopifyError::GraphQl(
        errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; "),
    )
}

/// Extract the new customer's id from a `customerCreate` response.
///
/// A customer node wins over anything else in the envelope; without one the
/// most specific failure is reported.
pub fn parse_customer_create(
    response: GraphQlResponse<CustomerCreateData>,
) -> Result<AccountId, ShopifyError> {
    let payload = response.data.and_then(|d| d.customer_create);

    match payload {
        Some(CustomerCreatePayload {
            customer: Some(node),
            ..
        }) => AccountId::from_compound(&node.id).ok_or(ShopifyError::MissingField("customer.id")),
        Some(CustomerCreatePayload { user_errors, .. }) if !user_errors.is_empty() => {
            Err(ShopifyError::UserErrors(user_errors))
        }
        _ if !response.errors.is_empty() => Err(top_level_errors(&response.errors)),
        _ => Err(ShopifyError::MissingField("customerCreate.customer")),
    }
}

/// Extract the new company's id from a `companyCreate` response.
///
/// Top-level errors are checked first, then `userErrors`, then the id.
pub fn parse_company_create(
    response: GraphQlResponse<CompanyCreateData>,
) -> Result<OrganizationId, ShopifyError> {
    if !response.errors.is_empty() {
        return Err(top_level_errors(&response.errors));
    }

    let payload = response
        .data
        .and_then(|d| d.company_create)
        .ok_or(ShopifyError::MissingField("companyCreate"))?;

    if !payload.user_errors.is_empty() {
        return Err(ShopifyError::UserErrors(payload.user_errors));
    }

    let node = payload
        .company
        .ok_or(ShopifyError::MissingField("companyCreate.company"))?;

    OrganizationId::from_compound(&node.id).ok_or(ShopifyError::MissingField("company.id"))
}
