use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

/// Single-line text field of the form
pub struct FieldInput {
    pub textarea: TextArea<'static>,
    label: &'static str,
}

impl FieldInput {
    pub fn new(label: &'static str, initial: &str) -> Self {
        let mut field = Self {
            textarea: TextArea::default(),
            label,
        };
        field.set_text(initial);
        field
    }

    /// Get the current field text
    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the field content, leaving the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        // A single-line field never keeps line breaks
        let line = text.replace(['\r', '\n'], " ");
        let mut textarea = TextArea::new(vec![line]);
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(CursorMove::End);
        self.textarea = textarea;
        self.set_focused(false);
    }

    /// Update the border to reflect focus
    pub fn set_focused(&mut self, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.label))
                .border_style(Style::default().fg(border_color)),
        );
    }
}
