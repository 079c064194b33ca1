//! Deserializers for the loosely typed JSON the forum backend emits.
//!
//! Ids arrive as numbers or strings and admin flags as booleans or SQL
//! tinyints, depending on the endpoint.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn value_is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true"),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn value_to_id(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn truthy<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    Ok(value_is_truthy(&v))
}

pub(crate) fn id<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    value_to_id(&v).ok_or_else(|| serde::de::Error::custom("expected a string or numeric id"))
}

pub(crate) fn opt_id<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    Ok(value_to_id(&v))
}

pub(crate) fn opt_count<'de, D>(d: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    Ok(match v {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
