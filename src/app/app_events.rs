use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::{App, Focus, Outcome};

/// How long to wait for input before letting the caller poll the worker
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

impl App {
    /// Wait briefly for a terminal event and handle it
    pub fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(EVENT_POLL_INTERVAL)? {
            return Ok(());
        }
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Title => self.handle_title_key(key),
            Focus::Link => {
                if !is_line_break(key) {
                    self.link.textarea.input(key);
                }
            }
            Focus::ReadingType => self.handle_reading_type_key(key),
            Focus::Results => self.handle_results_key(key),
        }
    }

    /// Paste goes to the focused text field as a single line
    pub fn handle_paste_event(&mut self, text: String) {
        let text = text.replace(['\r', '\n'], " ");
        match self.focus {
            Focus::Title => {
                self.title.textarea.insert_str(&text);
            }
            Focus::Link => {
                self.link.textarea.insert_str(&text);
            }
            _ => {}
        }
    }

    /// Keys that work regardless of focus; returns true if handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.finish(Outcome::Cancelled);
                true
            }
            KeyCode::Esc => {
                self.finish(Outcome::Cancelled);
                true
            }
            KeyCode::Char('w') if ctrl => {
                self.finish(Outcome::Saved(self.form_fields()));
                true
            }
            KeyCode::Char('s') if ctrl => {
                self.start_search();
                true
            }
            KeyCode::F(5) => {
                self.start_search();
                true
            }
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                true
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.previous());
                true
            }
            _ => false,
        }
    }

    fn handle_title_key(&mut self, key: KeyEvent) {
        if is_line_break(key) {
            self.start_search();
            return;
        }
        self.title.textarea.input(key);
    }

    fn handle_reading_type_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                self.previous_reading_type()
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') | KeyCode::Char('l')
            | KeyCode::Char('j') => self.next_reading_type(),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        let count = self.search.state().results().len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.selection.navigate_next(count),
            KeyCode::Up | KeyCode::Char('k') => self.selection.navigate_previous(count),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.apply_selected();
            }
            _ => {}
        }
    }
}

/// Keys the text area would turn into a new line
///
/// The form fields are single-line, so these never reach `TextArea::input`.
fn is_line_break(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
