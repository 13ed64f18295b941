//! Serde adapter that keeps identifier fields in canonical dashed form.
//!
//! Use with `#[serde(with = "crate::string_uuid")]` on a `String` field.
//! Both directions run the value through [`format_uuid`], so a model can
//! never hold or emit an undashed id. Formatting failures are reported as a
//! custom serde error carrying the `InvalidFormat` message.

use serde::{de, ser, Deserialize, Deserializer, Serializer};

use crate::identifier::format_uuid;

pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let formatted = format_uuid(value).map_err(ser::Error::custom)?;
    serializer.serialize_str(&formatted)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    format_uuid(&raw).map_err(de::Error::custom)
}
