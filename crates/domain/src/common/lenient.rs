//! Forgiving deserializers for model-authored JSON.
//!
//! Completion services return roughly the schema they were asked for: numbers
//! where strings were expected, `null` for absent values, a single string where
//! a list was requested. These helpers coerce such values instead of rejecting
//! the whole document. Use them with `#[serde(default, deserialize_with = ...)]`.

use serde::{Deserialize, Deserializer};

/// Sentinel used for string fields the model could not fill.
pub const UNKNOWN: &str = "Unknown";

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Text(String),
    Flag(bool),
    Integer(i64),
    Float(f64),
    List(Vec<Loose>),
    Other(serde::de::IgnoredAny),
}

impl Loose {
    fn into_text(self) -> Option<String> {
        match self {
            Loose::Text(text) => Some(text),
            Loose::Flag(flag) => Some(flag.to_string()),
            Loose::Integer(n) => Some(n.to_string()),
            Loose::Float(n) => Some(n.to_string()),
            Loose::List(items) => {
                let parts: Vec<String> = items
                    .into_iter()
                    .filter_map(Loose::into_text)
                    .filter(|s| !s.trim().is_empty())
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(", "))
                }
            }
            Loose::Other(_) => None,
        }
    }
}

/// Any scalar becomes a trimmed string; `null` and objects become `""`.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?
        .and_then(Loose::into_text)
        .map(|s| s.trim().to_string())
        .unwrap_or_default())
}

/// Like [`string`], but blank values become [`UNKNOWN`].
pub fn string_or_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = string(deserializer)?;
    if value.is_empty() {
        Ok(UNKNOWN.to_string())
    } else {
        Ok(value)
    }
}

/// Default for fields deserialized with [`string_or_unknown`].
pub fn unknown() -> String {
    UNKNOWN.to_string()
}

/// A list of strings. A bare string is split into lines with bullet markers
/// removed; `null` becomes an empty list.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::List(items)) => items.into_iter().filter_map(Loose::into_text).collect(),
        Some(Loose::Text(text)) => text
            .lines()
            .map(|line| line.trim().trim_start_matches(['-', '*', '•']).to_string())
            .collect(),
        Some(other) => other.into_text().into_iter().collect(),
        None => Vec::new(),
    };

    Ok(items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

/// Booleans, `"true"`/`"yes"` strings and non-zero numbers are true.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Flag(flag)) => flag,
        Some(Loose::Text(text)) => matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1"
        ),
        Some(Loose::Integer(n)) => n != 0,
        Some(Loose::Float(n)) => n != 0.0,
        _ => false,
    })
}
