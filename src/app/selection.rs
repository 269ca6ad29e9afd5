//! Selection state for result cards
//!
//! Tracks the currently selected card index.

/// Selection state for result card navigation
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Currently selected card index (None = no selection)
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    pub fn select_index(&mut self, index: usize) {
        self.selected_index = Some(index);
    }

    pub fn clear_selection(&mut self) {
        self.selected_index = None;
    }

    pub fn get_selected(&self) -> Option<usize> {
        self.selected_index
    }

    /// Move to the next card, wrapping to the first one at the end
    pub fn navigate_next(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        self.selected_index = match self.selected_index {
            Some(current) => Some((current + 1) % count),
            None => Some(0),
        };
    }

    /// Move to the previous card, wrapping to the last one at the start
    pub fn navigate_previous(&mut self, count: usize) {
        if count == 0 {
            return;
        }

        self.selected_index = match self.selected_index {
            Some(0) | None => Some(count - 1),
            Some(current) => Some(current - 1),
        };
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
