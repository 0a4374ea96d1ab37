//! Request bodies for each outbound call.

use serde_json::{json, Value};
use signup_core::ids::{AccountId, OrganizationId};
use signup_core::metadata::{MetadataValues, METAFIELD_NAMESPACE};
use signup_core::region::RegionCode;
use signup_core::registration::{RegistrationForm, COMPANY_LOCALE, COUNTRY_CODE, COUNTRY_NAME};

/// Variables for the storefront `customerCreate` mutation.
pub fn customer_create_variables(form: &RegistrationForm, password: &str) -> Value {
    json!({
        "input": {
            "firstName": form.name,
            "lastName": form.trading_name,
            "email": form.email,
            "password": password,
            "acceptsMarketing": true,
        }
    })
}

/// Company location address; billing and shipping use the same one.
fn company_address(form: &RegistrationForm, region: RegionCode) -> Value {
    json!({
        "address1": form.street_line(),
        "address2": form.complement,
        "city": form.city,
        "countryCode": COUNTRY_CODE,
        "firstName": form.name,
        "lastName": form.trading_name,
        "zip": form.postal_code,
        "zoneCode": region.as_str(),
    })
}

/// Variables for the admin `companyCreate` mutation.
pub fn company_create_variables(form: &RegistrationForm, region: RegionCode) -> Value {
    let address = company_address(form, region);
    json!({
        "input": {
            "company": {
                "externalId": "",
                "name": form.name,
            },
            "companyLocation": {
                "billingAddress": address.clone(),
                "shippingAddress": address,
                "billingSameAsShipping": false,
                "buyerExperienceConfiguration": {
                    "checkoutToDraft": true,
                },
                "externalId": "",
                "locale": COMPANY_LOCALE,
                "name": form.name,
                "note": "",
                "taxExemptions": [],
                "taxRegistrationId": "",
            }
        }
    })
}

/// Variables for `companyAssignCustomerAsContact`.
pub fn assign_contact_variables(organization: &OrganizationId, account: &AccountId) -> Value {
    json!({
        "companyId": organization.to_gid(),
        "customerId": account.to_gid(),
    })
}

/// Body for the REST customer update: one default address plus one
/// metafield per metadata key.
///
/// An unresolved region leaves `province_code` empty; the state name still
/// goes into `province`.
pub fn customer_update_body(
    account: &AccountId,
    form: &RegistrationForm,
    region: Option<RegionCode>,
    metadata: &MetadataValues,
) -> Value {
    let metafields: Vec<Value> = metadata
        .entries()
        .map(|(key, value)| {
            json!({
                "namespace": METAFIELD_NAMESPACE,
                "key": key.as_str(),
                "value": value,
            })
        })
        .collect();

    json!({
        "customer": {
            "addresses": [{
                "customer_id": account.as_str(),
                "first_name": form.name,
                "last_name": "",
                "company": form.tax_id,
                "address1": form.street_line(),
                "address2": form.complement,
                "city": form.city,
                "province": form.state,
                "country": COUNTRY_NAME,
                "zip": form.postal_code,
                "phone": form.phone,
                "name": form.complete_name,
                "province_code": region.map(|r| r.as_str()).unwrap_or_default(),
                "country_code": COUNTRY_CODE,
                "country_name": COUNTRY_NAME,
                "default": true,
            }],
            "metafields": metafields,
        }
    })
}
