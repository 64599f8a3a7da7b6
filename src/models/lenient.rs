//! Catalog numbers arrive as JSON numbers or as numeric strings, and
//! optional fields may be `null`.

use serde::de::{Deserializer, Error};
use serde::Deserialize;
use serde_json::Value;

use super::ListingId;

#[derive(Deserialize)]
#[serde(untagged)]
pub(super) enum RawId {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<RawId> for ListingId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Integer(n) => ListingId(n.to_string()),
            RawId::Float(n) => ListingId(n.to_string()),
            RawId::Text(s) => ListingId(s.trim().to_string()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    fn value(&self) -> Option<f64> {
        let n = match self {
            NumberOrText::Number(n) => *n,
            NumberOrText::Text(s) => s.trim().parse().ok()?,
        };
        n.is_finite().then_some(n)
    }
}

fn non_negative(n: f64) -> Option<f64> {
    (n >= 0.0).then_some(n)
}

fn whole_number(n: f64) -> Option<f64> {
    non_negative(n).filter(|n| n.fract() == 0.0)
}

/// Numeric value of an arbitrary JSON value, if it has one.
fn loose_number(value: Option<Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn float<'de, D>(deserializer: D, field: &str) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrText::deserialize(deserializer)?
        .value()
        .and_then(non_negative)
        .ok_or_else(|| {
            D::Error::custom(format!("invalid {field}: expected a non-negative number"))
        })
}

fn whole<'de, D>(deserializer: D, field: &str) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrText::deserialize(deserializer)?
        .value()
        .and_then(whole_number)
        .filter(|n| *n <= f64::from(u32::MAX))
        .map(|n| n as u32)
        .ok_or_else(|| {
            D::Error::custom(format!("invalid {field}: expected a non-negative whole number"))
        })
}

pub(super) fn price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    float(deserializer, "price")
}

pub(super) fn bedrooms<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    whole(deserializer, "bedrooms")
}

/// `null` reads as the type's default.
pub(super) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Date parts are best effort: anything unusable reads as missing.
pub(super) fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(loose_number(raw)
        .and_then(whole_number)
        .filter(|n| *n <= f64::from(u32::MAX))
        .map(|n| n as u32))
}

pub(super) fn opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(loose_number(raw)
        .filter(|n| n.fract() == 0.0 && *n >= f64::from(i32::MIN) && *n <= f64::from(i32::MAX))
        .map(|n| n as i32))
}

pub(super) fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}
