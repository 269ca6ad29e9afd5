//! Search request lifecycle
//!
//! Owns the search phase, the last result set and the status line. Requests
//! carry a `request_id`; a response is only applied when its id matches the
//! current generation, so a late answer to an abandoned search is dropped.

use super::reconcile::{FormFields, ReadingTypes, apply_suggestion};
use super::source::{MetadataSource, SearchError};
use super::suggestion::Suggestion;

pub const STATUS_QUERY_REQUIRED: &str = "Enter a title or an identifier first.";
pub const STATUS_SEARCHING: &str = "Searching…";
pub const STATUS_SELECT: &str = "Select one of the suggestions to pre-fill the form.";
pub const STATUS_NO_RESULTS: &str = "No suggestion found. Try another title or add the work manually.";
pub const STATUS_FAILED: &str = "Search failed. Check your connection and retry.";
pub const STATUS_APPLIED: &str = "Suggestion applied. You can still adjust the fields before saving.";

/// Discrete state of the search workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
    Results,
    /// The search succeeded but matched nothing
    Empty,
    Error,
}

/// Status line text and whether it is styled as an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Request sent to the search worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Trimmed query text
    pub query: String,
    /// Generation this request belongs to
    pub request_id: u64,
}

/// Answer from the search worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub request_id: u64,
    pub outcome: Result<Vec<Suggestion>, SearchError>,
}

/// Search state for one form session
///
/// `results` is non-empty exactly in [`SearchPhase::Results`], and a search is
/// in flight exactly in [`SearchPhase::Searching`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    phase: SearchPhase,
    results: Vec<Suggestion>,
    status: Option<StatusMessage>,
    /// Incremented for every dispatched request, used to filter stale responses
    request_id: u64,
}

impl SearchState {
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn results(&self) -> &[Suggestion] {
        &self.results
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn in_flight(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    /// Whether the results section should be shown
    ///
    /// Hidden only while idle; an empty or failed search still shows the
    /// (empty) section next to its status.
    pub fn results_visible(&self) -> bool {
        self.phase != SearchPhase::Idle
    }
}

/// Drives [`SearchState`] through the search lifecycle
#[derive(Debug, Default)]
pub struct SearchController {
    state: SearchState,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Start a search for `query`
    ///
    /// Returns the request to dispatch, or `None` when nothing must be sent:
    /// either a search is already in flight (the state is left untouched) or
    /// the trimmed query is empty (the state goes back to idle with a prompt).
    pub fn trigger_search(&mut self, query: &str) -> Option<SearchRequest> {
        if self.state.in_flight() {
            log::debug!(
                "Ignoring search trigger, request {} still in flight",
                self.state.request_id
            );
            return None;
        }

        let query = query.trim();
        if query.is_empty() {
            self.state.phase = SearchPhase::Idle;
            self.state.results.clear();
            self.state.status = Some(StatusMessage::error(STATUS_QUERY_REQUIRED));
            return None;
        }

        self.state.request_id = self.state.request_id.wrapping_add(1);
        self.state.phase = SearchPhase::Searching;
        self.state.results.clear();
        self.state.status = Some(StatusMessage::info(STATUS_SEARCHING));

        log::debug!("Starting search request {} for {:?}", self.state.request_id, query);

        Some(SearchRequest {
            query: query.to_string(),
            request_id: self.state.request_id,
        })
    }

    /// Apply a worker response
    ///
    /// Returns false, leaving the state untouched, when the response belongs
    /// to another generation or no search is in flight.
    pub fn resolve(&mut self, response: SearchResponse) -> bool {
        if !self.state.in_flight() || response.request_id != self.state.request_id {
            log::debug!(
                "Discarding stale response {} (current: {})",
                response.request_id,
                self.state.request_id
            );
            return false;
        }

        match response.outcome {
            Ok(results) if results.is_empty() => {
                self.state.phase = SearchPhase::Empty;
                self.state.results.clear();
                self.state.status = Some(StatusMessage::error(STATUS_NO_RESULTS));
            }
            Ok(results) => {
                self.state.phase = SearchPhase::Results;
                self.state.results = results;
                self.state.status = Some(StatusMessage::info(STATUS_SELECT));
            }
            Err(e) => {
                log::warn!("Metadata lookup failed: {}", e);
                self.state.phase = SearchPhase::Error;
                self.state.results.clear();
                self.state.status = Some(StatusMessage::error(STATUS_FAILED));
            }
        }

        true
    }

    /// Trigger a search and resolve it against `source` in one call
    pub async fn search<S: MetadataSource>(&mut self, query: &str, source: &S) -> &SearchState {
        if let Some(request) = self.trigger_search(query) {
            let outcome = source.search(&request.query).await;
            self.resolve(SearchResponse {
                request_id: request.request_id,
                outcome,
            });
        }
        &self.state
    }

    /// Apply the suggestion at `index` of the current results to `current`
    ///
    /// Returns `None` when there is no such suggestion.
    pub fn apply(
        &mut self,
        index: usize,
        current: &FormFields,
        reading_types: &ReadingTypes,
    ) -> Option<FormFields> {
        if self.state.phase != SearchPhase::Results {
            return None;
        }
        let suggestion = self.state.results.get(index)?;
        let fields = apply_suggestion(suggestion, current, reading_types);
        self.state.status = Some(StatusMessage::info(STATUS_APPLIED));
        Some(fields)
    }

    /// Replace the status line without changing the phase
    pub fn set_status(&mut self, status: StatusMessage) {
        self.state.status = Some(status);
    }

    /// Return to idle for a new form session, keeping the generation counter
    pub fn reset(&mut self) {
        self.state.phase = SearchPhase::Idle;
        self.state.results.clear();
        self.state.status = None;
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
