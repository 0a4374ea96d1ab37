//! Lenient field deserialization for storefront payloads.
//!
//! The form builder posts whatever its inputs hold: strings usually, but
//! numbers for numeric inputs and `null` for cleared ones. All of them are
//! forwarded as text.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize any JSON value into a `String`.
///
/// `null` becomes `""`, strings are taken as-is, and anything else keeps its
/// JSON text (`120`, `true`, `["a"]`).
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Field {
        #[serde(deserialize_with = "super::string")]
        value: String,
    }

    fn parse(value: serde_json::Value) -> String {
        serde_json::from_value::<Field>(json!({ "value": value }))
            .unwrap()
            .value
    }

    #[test]
    fn scalars_become_text() {
        assert_eq!(parse(json!("Sala 4")), "Sala 4");
        assert_eq!(parse(json!(120)), "120");
        assert_eq!(parse(json!(-3)), "-3");
        assert_eq!(parse(json!(1.5)), "1.5");
        assert_eq!(parse(json!(true)), "true");
    }

    #[test]
    fn null_becomes_empty() {
        assert_eq!(parse(json!(null)), "");
    }

    #[test]
    fn containers_keep_their_json_text() {
        assert_eq!(parse(json!(["a"])), r#"["a"]"#);
        assert_eq!(parse(json!({ "a": 1 })), r#"{"a":1}"#);
    }
}
