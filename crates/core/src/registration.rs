//! The registration form as posted by the storefront.

use serde::{Deserialize, Serialize};

/// Country every registration is created in.
pub const COUNTRY_CODE: &str = "BR";

/// Human-readable country name used by the REST address schema.
pub const COUNTRY_NAME: &str = "Brazil";

/// Locale assigned to created company locations.
pub const COMPANY_LOCALE: &str = "pt_BR";

/// Flat registration record.
///
/// Field names on the wire are the ones the storefront's form builder emits,
/// hence the renames. Missing and `null` fields deserialize as empty strings,
/// matching how the form treats untouched inputs; numbers keep their text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    #[serde(rename = "FirstName", deserialize_with = "crate::lenient::string")]
    pub name: String,
    #[serde(
        rename = "Trading_name",
        alias = "trading_name",
        deserialize_with = "crate::lenient::string"
    )]
    pub trading_name: String,
    #[serde(rename = "Complete_name", deserialize_with = "crate::lenient::string")]
    pub complete_name: String,
    #[serde(rename = "Email", deserialize_with = "crate::lenient::string")]
    pub email: String,
    #[serde(rename = "Logradouro", deserialize_with = "crate::lenient::string")]
    pub street: String,
    #[serde(rename = "Number", deserialize_with = "crate::lenient::string")]
    pub number: String,
    #[serde(rename = "Complement", deserialize_with = "crate::lenient::string")]
    pub complement: String,
    #[serde(deserialize_with = "crate::lenient::string")]
    pub city: String,
    #[serde(rename = "UF", deserialize_with = "crate::lenient::string")]
    pub state: String,
    #[serde(rename = "CEP", deserialize_with = "crate::lenient::string")]
    pub postal_code: String,
    #[serde(rename = "Cell", deserialize_with = "crate::lenient::string")]
    pub phone: String,
    #[serde(rename = "CNPJ", deserialize_with = "crate::lenient::string")]
    pub tax_id: String,
}

impl RegistrationForm {
    /// First address line: `"{street}, {number}"`.
    pub fn street_line(&self) -> String {
        format!("{}, {}", self.street, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_storefront_field_names() {
        let form: RegistrationForm = serde_json::from_value(serde_json::json!({
            "FirstName": "Loja Azul",
            "Trading_name": "Azul Comercio LTDA",
            "Complete_name": "Maria Souza",
            "Email": "compras@lojaazul.com.br",
            "Logradouro": "Rua das Flores",
            "Number": "120",
            "Complement": "Sala 4",
            "city": "Campinas",
            "UF": "São Paulo",
            "CEP": "13010-000",
            "Cell": "+55 19 99999-0000",
            "CNPJ": "12.345.678/0001-90"
        }))
        .unwrap();

        assert_eq!(form.name, "Loja Azul");
        assert_eq!(form.trading_name, "Azul Comercio LTDA");
        assert_eq!(form.state, "São Paulo");
        assert_eq!(form.postal_code, "13010-000");
        assert_eq!(form.tax_id, "12.345.678/0001-90");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let form: RegistrationForm =
            serde_json::from_value(serde_json::json!({ "FirstName": "Only" })).unwrap();
        assert_eq!(form.name, "Only");
        assert_eq!(form.email, "");
        assert_eq!(form.complement, "");
    }

    #[test]
    fn numeric_and_null_fields_are_accepted() {
        let form: RegistrationForm = serde_json::from_value(serde_json::json!({
            "Number": 120,
            "CEP": 13010000,
            "Complement": null
        }))
        .unwrap();
        assert_eq!(form.number, "120");
        assert_eq!(form.postal_code, "13010000");
        assert_eq!(form.complement, "");
    }

    #[test]
    fn lowercase_trading_name_is_accepted() {
        let form: RegistrationForm =
            serde_json::from_value(serde_json::json!({ "trading_name": "Acme" })).unwrap();
        assert_eq!(form.trading_name, "Acme");
    }

    #[test]
    fn street_line_joins_street_and_number() {
        let form = RegistrationForm {
            street: "Av. Paulista".into(),
            number: "1000".into(),
            ..Default::default()
        };
        assert_eq!(form.street_line(), "Av. Paulista, 1000");
    }
}
