//! Add-on results attached to voice callbacks

use crate::types::Result;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Status envelope around the results of every add-on installed on a number
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddonsResults {
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub code: i32,
    /// Results keyed by add-on unique name
    pub results: BTreeMap<String, AddonResult>,
}

/// Result of a single add-on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddonResult {
    pub request_sid: String,
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    pub code: Option<i32>,
    /// Add-on specific payload
    pub result: BTreeMap<String, serde_json::Value>,
}

impl AddonsResults {
    /// Parse the JSON document carried in the `AddOns` form field
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_successful(&self) -> bool {
        self.status == "successful"
    }

    /// Look up the result of one add-on by name
    pub fn result(&self, name: &str) -> Option<&AddonResult> {
        self.results.get(name)
    }
}

impl AddonResult {
    pub fn is_successful(&self) -> bool {
        self.status == "successful"
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize the `AddOns` field
///
/// On the wire it is a JSON document inside a form field; an empty value
/// means no add-ons ran. An already structured value is accepted as well so
/// records can be read back from JSON.
pub(crate) fn deserialize_addons<'de, D>(deserializer: D) -> std::result::Result<AddonsResults, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Encoded(String),
        Structured(AddonsResults),
    }

    match Wire::deserialize(deserializer)? {
        Wire::Encoded(raw) if raw.trim().is_empty() => Ok(AddonsResults::default()),
        Wire::Encoded(raw) => serde_json::from_str(&raw).map_err(serde::de::Error::custom),
        Wire::Structured(results) => Ok(results),
    }
}
