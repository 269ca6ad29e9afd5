//! Terminal adapter over the search workflow
//!
//! Renders the work form, the suggestion cards and the status line, and maps
//! key events onto [`SearchController`](crate::search::SearchController)
//! operations.

mod app_events;
mod app_render;
mod app_state;
mod input_state;
mod selection;

pub use app_render::{card_text, truncate_to_width};
pub use app_state::{App, Focus, Outcome, initial_form};
pub use input_state::FieldInput;
pub use selection::SelectionState;
