//! Lenient readers for values the editing UI stores loosely: enums saved as
//! `""` when unset, numeric targets saved as `""` or as numeric strings.

use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Reads `null`, a missing value, or a blank string as `None`.
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()).map(T::from))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

/// Reads a number, a numeric string, or a blank string (as `None`).
/// Unparseable text also reads as `None` rather than failing the document.
pub fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
{
    let raw = Option::<NumberOrText<T>>::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrText::Number(value)) => Some(value),
        Some(NumberOrText::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}
