//! Lenient id parsing for request bodies.
//!
//! Clients send foreign keys both as JSON numbers and as numeric strings
//! (`"flightId": 3` and `"flightId": "3"`), so request DTOs accept either.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(i64),
    String(String),
}

/// Deserializes an optional `i32` id from a JSON number, a numeric string or `null`.
///
/// Blank strings are treated as absent so field-presence validation reports them
/// the same way as a missing key.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = Option::<NumberOrString>::deserialize(deserializer)?;

    match value {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => i32::try_from(n)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("id {} is out of range", n))),
        Some(NumberOrString::String(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::String(s)) => s
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid id '{}'", s))),
    }
}
