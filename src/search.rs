//! Metadata search and reconciliation
//!
//! [`SearchController`] turns a title into a list of [`Suggestion`]s,
//! [`apply_suggestion`] merges a chosen one into the [`FormFields`], and
//! [`display_units`] maps results to renderer-neutral cards.

pub mod controller;
pub mod display;
pub mod reconcile;
pub mod source;
pub mod suggestion;
pub mod worker;

pub use controller::{
    SearchController, SearchPhase, SearchRequest, SearchResponse, SearchState, StatusMessage,
};
pub use display::{ApplyAction, CoverImage, DisplayUnit, display_unit, display_units};
pub use reconcile::{FormFields, ReadingTypes, apply_suggestion};
pub use source::{HttpSearchClient, MetadataSource, SearchError};
pub use suggestion::{Suggestion, parse_payload};
pub use worker::{SearchWorker, spawn_worker};
