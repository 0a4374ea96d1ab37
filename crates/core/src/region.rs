//! State name to region code lookup.
//!
//! The platform's address schema wants the two-letter code of the Brazilian
//! federative unit (`zoneCode` / `province_code`), while the storefront form
//! posts the full state name. [`region_code`] translates one into the other.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

/// Every recognized state name paired with its two-letter code.
///
/// Names are matched exactly, diacritics included, because that is how the
/// storefront's state dropdown submits them.
pub const REGIONS: [(&str, &str); 27] = [
    ("Acre", "AC"),
    ("Alagoas", "AL"),
    ("Amapá", "AP"),
    ("Amazonas", "AM"),
    ("Bahia", "BA"),
    ("Ceará", "CE"),
    ("Distrito Federal", "DF"),
    ("Espírito Santo", "ES"),
    ("Goiás", "GO"),
    ("Maranhão", "MA"),
    ("Mato Grosso", "MT"),
    ("Mato Grosso do Sul", "MS"),
    ("Minas Gerais", "MG"),
    ("Pará", "PA"),
    ("Paraíba", "PB"),
    ("Paraná", "PR"),
    ("Pernambuco", "PE"),
    ("Piauí", "PI"),
    ("Rio de Janeiro", "RJ"),
    ("Rio Grande do Norte", "RN"),
    ("Rio Grande do Sul", "RS"),
    ("Rondônia", "RO"),
    ("Roraima", "RR"),
    ("Santa Catarina", "SC"),
    ("São Paulo", "SP"),
    ("Sergipe", "SE"),
    ("Tocantins", "TO"),
];

static REGION_TABLE: LazyLock<HashMap<&'static str, RegionCode>> = LazyLock::new(|| {
    REGIONS
        .iter()
        .map(|&(name, code)| (name, RegionCode(code)))
        .collect()
});

/// Two-letter code of a first-level administrative subdivision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RegionCode(&'static str);

impl RegionCode {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Resolve a free-text state name into its region code.
///
/// Returns `None` for anything not in [`REGIONS`]; callers decide what an
/// unresolved region means for the steps that depend on it.
///
/// # Examples
///
/// ```
/// use signup_core::region::region_code;
///
/// assert_eq!(region_code("São Paulo").map(|c| c.as_str()), Some("SP"));
/// assert_eq!(region_code("Sao Paulo"), None);
/// ```
pub fn region_code(name: &str) -> Option<RegionCode> {
    REGION_TABLE.get(name).copied()
}
