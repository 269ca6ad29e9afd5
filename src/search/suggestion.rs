//! Suggestion records returned by the metadata search contract
//!
//! The payload is a JSON object with a top-level `results` key:
//! ```text
//! {"results": [{"title": "Chainsaw Man", "authors": ["Tatsuki Fujimoto"], ...}]}
//! ```
//! An absent, `null` or empty `results` all mean "no results".

use serde::{Deserialize, Deserializer, Serialize};

use super::source::SearchError;

/// One candidate metadata record for a work
///
/// Kept verbatim as received; nothing in the crate rewrites its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// May arrive absent or `null`; an empty title never replaces the form's
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub info_url: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub reading_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<String>,
    #[serde(default)]
    pub published_year: Option<i64>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl Suggestion {
    /// Create a suggestion with only a title set
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            info_url: None,
            cover_url: None,
            reading_type: None,
            authors: Vec::new(),
            published_year: None,
            summary: None,
        }
    }
}

/// Top-level search response body
#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    results: Option<Vec<Suggestion>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a search response body into suggestions, preserving order
///
/// Returns an empty vector when `results` is absent or `null`. Any body that
/// is not a JSON object of the expected shape is a [`SearchError::Parse`].
pub fn parse_payload(body: &str) -> Result<Vec<Suggestion>, SearchError> {
    let payload: SearchPayload =
        serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))?;
    Ok(payload.results.unwrap_or_default())
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
