use super::input_state::FieldInput;
use super::selection::SelectionState;
use crate::error::AppError;
use crate::search::{
    FormFields, ReadingTypes, SearchController, SearchError, SearchPhase, SearchResponse,
    SearchWorker, StatusMessage,
};

/// Which part of the form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Title,
    Link,
    ReadingType,
    Results,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Title => Focus::Link,
            Focus::Link => Focus::ReadingType,
            Focus::ReadingType => Focus::Results,
            Focus::Results => Focus::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Title => Focus::Results,
            Focus::Link => Focus::Title,
            Focus::ReadingType => Focus::Link,
            Focus::Results => Focus::ReadingType,
        }
    }
}

/// How the session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Ctrl+W: hand the form over
    Saved(FormFields),
    /// Esc or Ctrl+C
    Cancelled,
}

/// Application state for one form session
pub struct App {
    pub title: FieldInput,
    pub link: FieldInput,
    /// Holds the fields without a text input; title and link live in their inputs
    form: FormFields,
    pub reading_types: ReadingTypes,
    pub search: SearchController,
    pub selection: SelectionState,
    pub focus: Focus,
    worker: SearchWorker,
    outcome: Option<Outcome>,
}

impl App {
    pub fn new(initial: FormFields, reading_types: ReadingTypes, worker: SearchWorker) -> Self {
        let mut app = Self {
            title: FieldInput::new("Title", &initial.title),
            link: FieldInput::new("Link", initial.link.as_deref().unwrap_or_default()),
            form: initial,
            reading_types,
            search: SearchController::new(),
            selection: SelectionState::new(),
            focus: Focus::Title,
            worker,
            outcome: None,
        };
        app.set_focus(Focus::Title);
        app
    }

    /// Show a startup warning (for instance a config problem) in the status line
    pub fn with_warning(mut self, warning: Option<String>) -> Self {
        if let Some(warning) = warning {
            self.search.set_status(StatusMessage::error(warning));
        }
        self
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
    }

    /// Current form content, reading the text inputs
    pub fn form_fields(&self) -> FormFields {
        let link = self.link.text().trim();
        FormFields {
            title: self.title.text().to_string(),
            link: (!link.is_empty()).then(|| link.to_string()),
            ..self.form.clone()
        }
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.title.set_focused(focus == Focus::Title);
        self.link.set_focused(focus == Focus::Link);
    }

    /// Search with the title field content
    pub fn start_search(&mut self) {
        let query = self.title.text().to_string();
        let Some(request) = self.search.trigger_search(&query) else {
            return;
        };
        self.selection.clear_selection();

        let request_id = request.request_id;
        if !self.worker.dispatch(request) {
            self.search.resolve(SearchResponse {
                request_id,
                outcome: Err(SearchError::Network("search worker stopped".to_string())),
            });
        }
    }

    /// Apply any finished search; call once per frame
    pub fn tick(&mut self) {
        while let Some(response) = self.worker.poll() {
            if self.search.resolve(response) && self.search.state().phase() == SearchPhase::Results
            {
                self.selection.select_index(0);
            }
        }
    }

    /// Apply the selected result card to the form
    pub fn apply_selected(&mut self) -> bool {
        let Some(index) = self.selection.get_selected() else {
            return false;
        };
        let current = self.form_fields();
        let Some(fields) = self.search.apply(index, &current, &self.reading_types) else {
            return false;
        };

        self.title.set_text(&fields.title);
        self.link.set_text(fields.link.as_deref().unwrap_or_default());
        self.form = fields;
        self.set_focus(self.focus);
        true
    }

    pub fn reading_type(&self) -> Option<&str> {
        self.form.reading_type.as_deref()
    }

    pub fn next_reading_type(&mut self) {
        if let Some(next) = self.reading_types.next_after(self.reading_type()) {
            self.form.reading_type = Some(next.to_string());
        }
    }

    pub fn previous_reading_type(&mut self) {
        if let Some(previous) = self.reading_types.previous_before(self.reading_type()) {
            self.form.reading_type = Some(previous.to_string());
        }
    }
}

/// Build the starting form from command-line values
///
/// An explicit reading type must be one of the offered options; otherwise
/// the configured default is used when it is offered.
pub fn initial_form(
    title: Option<&str>,
    link: Option<&str>,
    reading_type: Option<&str>,
    default_reading_type: Option<&str>,
    reading_types: &ReadingTypes,
) -> Result<FormFields, AppError> {
    let reading_type = match reading_type {
        Some(code) if reading_types.contains(code) => Some(code.to_string()),
        Some(code) => {
            return Err(AppError::UnknownReadingType(
                code.to_string(),
                reading_types.as_slice().join(", "),
            ));
        }
        None => default_reading_type
            .filter(|code| reading_types.contains(code))
            .map(str::to_string),
    };

    Ok(FormFields {
        title: title.unwrap_or_default().to_string(),
        link: link.filter(|l| !l.trim().is_empty()).map(str::to_string),
        reading_type,
        cover_url: None,
        info_url: None,
    })
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
