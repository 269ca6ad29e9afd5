use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthChar;

use super::app_state::{App, Focus};
use crate::search::{DisplayUnit, SearchPhase, display_units};

const HELP_TEXT: &str =
    " Enter/F5 search · Tab focus · ↑↓ select · Enter apply · Ctrl+W save · Esc cancel";

/// Indentation of the detail lines under a card title
const CARD_INDENT: &str = "    ";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Link
            Constraint::Length(3), // Reading type
            Constraint::Length(1), // Cover / info URLs
            Constraint::Min(3),    // Suggestions
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

        frame.render_widget(&self.title.textarea, layout[0]);
        frame.render_widget(&self.link.textarea, layout[1]);
        self.render_reading_type(frame, layout[2]);
        self.render_metadata_line(frame, layout[3]);
        self.render_results(frame, layout[4]);
        self.render_status(frame, layout[5]);
        frame.render_widget(
            Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
            layout[6],
        );
    }

    fn render_reading_type(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::ReadingType;
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Reading type ")
            .border_style(Style::default().fg(border_color));

        let line = match self.reading_type() {
            Some(code) => Line::from(vec![
                Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
                Span::styled(code.to_string(), Style::default().fg(Color::Yellow)),
                Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
            ]),
            None => Line::from(Span::styled(
                "(not set)",
                Style::default().fg(Color::DarkGray),
            )),
        };

        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_metadata_line(&self, frame: &mut Frame, area: Rect) {
        let fields = self.form_fields();
        let label = Style::default().fg(Color::DarkGray);
        let line = Line::from(vec![
            Span::styled(" Cover: ", label),
            Span::raw(fields.cover_url.unwrap_or_else(|| "-".to_string())),
            Span::styled("  Info: ", label),
            Span::raw(fields.info_url.unwrap_or_else(|| "-".to_string())),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let state = self.search.state();
        if !state.results_visible() {
            return;
        }

        let focused = self.focus == Focus::Results;
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        let title = match state.phase() {
            SearchPhase::Results => format!(" Suggestions ({}) ", state.results().len()),
            _ => " Suggestions ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color));

        if state.phase() == SearchPhase::Searching {
            let loading = Paragraph::new(Span::styled(
                "Searching…",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block);
            frame.render_widget(loading, area);
            return;
        }

        let inner_width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = display_units(state)
            .iter()
            .map(|unit| ListItem::new(card_text(unit, inner_width)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));

        let mut list_state = ListState::default();
        list_state.select(self.selection.get_selected());
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let Some(status) = self.search.state().status() else {
            return;
        };
        let style = if status.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        frame.render_widget(
            Paragraph::new(format!(" {}", status.text)).style(style),
            area,
        );
    }
}

/// Lines of one result card, each fitted to `width` columns
pub fn card_text(unit: &DisplayUnit, width: usize) -> Text<'static> {
    let mut lines = Vec::new();

    let badge = format!("[{}] ", unit.badge);
    let title_width = width.saturating_sub(display_width(&badge));
    lines.push(Line::from(vec![
        Span::styled(badge, Style::default().fg(Color::Yellow)),
        Span::styled(
            truncate_to_width(&unit.title, title_width),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));

    let detail_width = width.saturating_sub(CARD_INDENT.len());
    let byline = match (&unit.authors, &unit.published) {
        (Some(authors), Some(year)) => Some(format!("{} · first published {}", authors, year)),
        (Some(authors), None) => Some(authors.clone()),
        (None, Some(year)) => Some(format!("First published {}", year)),
        (None, None) => None,
    };
    if let Some(byline) = byline {
        lines.push(detail_line(&byline, detail_width, Color::Gray));
    }
    if let Some(summary) = &unit.summary {
        lines.push(detail_line(summary, detail_width, Color::White));
    }
    if let Some(cover) = &unit.cover {
        lines.push(detail_line(
            &format!("cover: {}", cover.url),
            detail_width,
            Color::DarkGray,
        ));
    }

    Text::from(lines)
}

fn detail_line(text: &str, width: usize, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::raw(CARD_INDENT),
        Span::styled(truncate_to_width(text, width), Style::default().fg(color)),
    ])
}

fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Cut `text` to at most `max_width` columns, marking the cut with `…`
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        // Reserve one column for the ellipsis
        if used + w > max_width - 1 {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push('…');
    result
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
