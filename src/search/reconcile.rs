//! Reconciliation of a chosen suggestion into the work form
//!
//! Field rules, applied independently:
//! - `title` is replaced only by a non-empty suggestion title
//! - `info_url` and `link` both take the suggestion's info URL when present
//! - `reading_type` is replaced only by a code the form already offers
//! - `cover_url` takes the suggestion's cover, or is cleared when it has none
//!
//! Every other absence keeps the current value. There is no error path.

use serde::{Deserialize, Serialize};

use super::suggestion::Suggestion;

/// Editable fields of the work creation form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub title: String,
    pub link: Option<String>,
    pub reading_type: Option<String>,
    pub cover_url: Option<String>,
    pub info_url: Option<String>,
}

/// Closed set of reading-type codes offered by the form, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingTypes(Vec<String>);

impl ReadingTypes {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for code in codes.into_iter().map(Into::into) {
            if !unique.contains(&code) {
                unique.push(code);
            }
        }
        Self(unique)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.iter().any(|c| c == code)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The option after `current`, wrapping; the first option when unset or unknown
    pub fn next_after(&self, current: Option<&str>) -> Option<&str> {
        let position = current.and_then(|c| self.0.iter().position(|o| o == c));
        match position {
            Some(i) => self.0.get((i + 1) % self.0.len()),
            None => self.0.first(),
        }
        .map(String::as_str)
    }

    /// The option before `current`, wrapping; the last option when unset or unknown
    pub fn previous_before(&self, current: Option<&str>) -> Option<&str> {
        let position = current.and_then(|c| self.0.iter().position(|o| o == c));
        match position {
            Some(0) => self.0.last(),
            Some(i) => self.0.get(i - 1),
            None => self.0.last(),
        }
        .map(String::as_str)
    }
}

/// Treat `None` and `Some("")` alike
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Merge `suggestion` into a copy of `current`
pub fn apply_suggestion(
    suggestion: &Suggestion,
    current: &FormFields,
    reading_types: &ReadingTypes,
) -> FormFields {
    let mut fields = current.clone();

    if !suggestion.title.is_empty() {
        fields.title = suggestion.title.clone();
    }

    if let Some(info_url) = present(&suggestion.info_url) {
        fields.info_url = Some(info_url.to_string());
        fields.link = Some(info_url.to_string());
    }

    if let Some(code) = present(&suggestion.reading_type)
        && reading_types.contains(code)
    {
        fields.reading_type = Some(code.to_string());
    }

    // Cover follows the suggestion, including its absence
    fields.cover_url = present(&suggestion.cover_url).map(str::to_string);

    fields
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod reconcile_tests;
