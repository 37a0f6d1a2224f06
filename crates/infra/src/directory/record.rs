use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DirectoryAddress {
    #[serde(default, deserialize_with = "lenient_string")]
    pub street: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: Option<String>,
}

/// A user record from the Directory Service.
///
/// Decoding never fails on a single field: missing fields, nulls and
/// unexpected shapes all degrade to `None`, and scalar values are read as text
/// (`"id": 1` becomes `"1"`, a numeric phone counts as a phone).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DirectoryRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_address")]
    pub address: Option<DirectoryAddress>,
}

impl DirectoryRecord {
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn street(&self) -> Option<&str> {
        self.address.as_ref().and_then(|a| a.street.as_deref())
    }

    pub fn city(&self) -> Option<&str> {
        self.address.as_ref().and_then(|a| a.city.as_deref())
    }
}

// `false` reads as absent; arrays and objects are dropped.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_address<'de, D>(deserializer: D) -> Result<Option<DirectoryAddress>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        obj @ Value::Object(_) => serde_json::from_value(obj).ok(),
        _ => None,
    })
}
