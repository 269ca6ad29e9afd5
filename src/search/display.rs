//! Presentation mapping from suggestions to display units
//!
//! One suggestion maps to one selectable display unit carrying one apply
//! action. Rendering the unit is left to an adapter (see `app::render`).

use super::controller::{SearchPhase, SearchState};
use super::suggestion::Suggestion;

/// Badge text used when a suggestion has no reading type
pub const READING_TYPE_PLACEHOLDER: &str = "Type";

/// Separator between author names
pub const AUTHOR_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    pub url: String,
    pub alt: String,
}

/// Activation control of a display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyAction {
    /// Index of the suggestion in the current results
    pub index: usize,
}

/// Structured, renderer-neutral view of one suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUnit {
    pub cover: Option<CoverImage>,
    pub title: String,
    pub authors: Option<String>,
    pub published: Option<String>,
    pub summary: Option<String>,
    pub badge: String,
    pub action: ApplyAction,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_string)
}

pub fn display_unit(suggestion: &Suggestion, index: usize) -> DisplayUnit {
    let cover = non_empty(&suggestion.cover_url).map(|url| CoverImage {
        url,
        alt: format!("Suggested cover for {}", suggestion.title),
    });

    let authors =
        (!suggestion.authors.is_empty()).then(|| suggestion.authors.join(AUTHOR_SEPARATOR));

    DisplayUnit {
        cover,
        title: suggestion.title.clone(),
        authors,
        published: suggestion.published_year.map(|year| year.to_string()),
        summary: non_empty(&suggestion.summary),
        badge: non_empty(&suggestion.reading_type)
            .unwrap_or_else(|| READING_TYPE_PLACEHOLDER.to_string()),
        action: ApplyAction { index },
    }
}

/// Display units for the current results, empty outside the `Results` phase
pub fn display_units(state: &SearchState) -> Vec<DisplayUnit> {
    if state.phase() != SearchPhase::Results {
        return Vec::new();
    }
    state
        .results()
        .iter()
        .enumerate()
        .map(|(index, suggestion)| display_unit(suggestion, index))
        .collect()
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod display_tests;
