// One row of the inventory interfaces table

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Interface observation as returned by the inventory API.
///
/// Only the fields the report reads are typed. Everything else the API returns
/// (description, media, speed, transceiver data, ...) is kept verbatim in `extra`
/// and written back out unmodified in the raw-data sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceRecord {
    /// A missing or null hostname becomes "", so such rows group together.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hostname: String,
    #[serde(default)]
    pub sn: Option<String>,
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub int_name: Option<String>,
    #[serde(default)]
    pub l1: Option<String>,
    #[serde(default)]
    pub l2: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InterfaceRecord {
    /// Minimal record with the given link states; handy for building fixtures.
    pub fn new(hostname: impl Into<String>, l1: &str, l2: &str) -> Self {
        Self {
            hostname: hostname.into(),
            sn: None,
            site_name: None,
            int_name: None,
            l1: Some(l1.to_string()),
            l2: Some(l2.to_string()),
            reason: None,
            extra: Map::new(),
        }
    }

    /// Value of an inventory column by its API name. Unknown columns are `Null`.
    pub fn column(&self, name: &str) -> Value {
        let opt = |v: &Option<String>| v.clone().map(Value::String).unwrap_or(Value::Null);
        match name {
            "hostname" => Value::String(self.hostname.clone()),
            "sn" => opt(&self.sn),
            "siteName" => opt(&self.site_name),
            "intName" => opt(&self.int_name),
            "l1" => opt(&self.l1),
            "l2" => opt(&self.l2),
            "reason" => opt(&self.reason),
            other => self.extra.get(other).cloned().unwrap_or(Value::Null),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
