//! Custom metadata fields attached to the created account.

use serde::{Deserialize, Serialize};

/// Namespace all registration metafields are written under.
pub const METAFIELD_NAMESPACE: &str = "custom";

/// The fixed set of metadata keys a registration carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKey {
    Type,
    Brand,
    Channel,
    StateRegistration,
}

impl MetadataKey {
    /// All keys, in the order they are written to the platform.
    pub const ALL: [MetadataKey; 4] = [
        MetadataKey::Type,
        MetadataKey::Brand,
        MetadataKey::Channel,
        MetadataKey::StateRegistration,
    ];

    /// Metafield key on the platform.
    pub fn as_str(self) -> &'static str {
        match self {
            MetadataKey::Type => "tipo",
            MetadataKey::Brand => "marca",
            MetadataKey::Channel => "canal",
            MetadataKey::StateRegistration => "estadual",
        }
    }
}

/// Values for each [`MetadataKey`].
///
/// Keys on the wire are the store's metafield keys (`tipo`, `marca`,
/// `canal`, `estadual`); the English names are accepted as aliases. Values
/// are read leniently, see [`crate::lenient`]. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataValues {
    #[serde(rename = "tipo", alias = "type", deserialize_with = "crate::lenient::string")]
    pub kind: String,
    #[serde(rename = "marca", alias = "brand", deserialize_with = "crate::lenient::string")]
    pub brand: String,
    #[serde(rename = "canal", alias = "channel", deserialize_with = "crate::lenient::string")]
    pub channel: String,
    #[serde(
        rename = "estadual",
        alias = "state-registration",
        deserialize_with = "crate::lenient::string"
    )]
    pub state_registration: String,
}

impl MetadataValues {
    pub fn get(&self, key: MetadataKey) -> &str {
        match key {
            MetadataKey::Type => &self.kind,
            MetadataKey::Brand => &self.brand,
            MetadataKey::Channel => &self.channel,
            MetadataKey::StateRegistration => &self.state_registration,
        }
    }

    /// `(key, value)` pairs in write order.
    pub fn entries(&self) -> impl Iterator<Item = (MetadataKey, &str)> + '_ {
        MetadataKey::ALL.into_iter().map(|k| (k, self.get(k)))
    }
}
