//! Tests for app_render

use super::*;
use crate::search::{CoverImage, Suggestion, display_unit};
use crate::test_utils::test_helpers::{StubSource, test_app, type_text, wait_for_search};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

fn text_to_plain(text: &Text) -> Vec<String> {
    text.lines
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}

#[test]
fn test_idle_screen_shows_form_without_suggestions() {
    let mut app = test_app(StubSource::returning(Vec::new()));

    let output = render_to_string(&mut app, 80, 20);

    assert!(output.contains("Title"));
    assert!(output.contains("Link"));
    assert!(output.contains("Reading type"));
    assert!(output.contains("(not set)"));
    assert!(!output.contains("Suggestions"));
}

#[test]
fn test_results_screen_shows_cards_and_status() {
    let berserk = Suggestion {
        authors: vec!["Kentaro Miura".to_string()],
        published_year: Some(1989),
        reading_type: Some("Manga".to_string()),
        ..Suggestion::titled("Berserk")
    };
    let mut app = test_app(StubSource::returning(vec![berserk, Suggestion::titled("Dune")]));
    type_text(&mut app, "b");
    app.start_search();
    assert!(wait_for_search(&mut app, 2000));

    let output = render_to_string(&mut app, 80, 24);

    assert!(output.contains("Suggestions (2)"));
    assert!(output.contains("[Manga] Berserk"));
    assert!(output.contains("Kentaro Miura · first published 1989"));
    assert!(output.contains("[Type] Dune"));
    assert!(output.contains("Select one of the suggestions"));
}

#[test]
fn test_empty_result_screen_shows_status() {
    let mut app = test_app(StubSource::returning(Vec::new()));
    type_text(&mut app, "zzz");
    app.start_search();
    assert!(wait_for_search(&mut app, 2000));

    let output = render_to_string(&mut app, 90, 20);

    assert!(output.contains("Suggestions"));
    assert!(output.contains("No suggestion found"));
}

#[test]
fn test_empty_query_prompt_is_rendered() {
    let mut app = test_app(StubSource::returning(Vec::new()));
    app.start_search();

    let output = render_to_string(&mut app, 80, 20);

    assert!(output.contains("Enter a title or an identifier first."));
}

#[test]
fn test_card_text_minimal() {
    let unit = display_unit(&Suggestion::titled("Dune"), 0);

    let lines = text_to_plain(&card_text(&unit, 40));

    assert_eq!(lines, vec!["[Type] Dune".to_string()]);
}

#[test]
fn test_card_text_full() {
    let mut unit = display_unit(
        &Suggestion {
            authors: vec!["A".to_string(), "B".to_string()],
            summary: Some("Short".to_string()),
            ..Suggestion::titled("T")
        },
        0,
    );
    unit.cover = Some(CoverImage {
        url: "http://c/1.jpg".to_string(),
        alt: String::new(),
    });

    let lines = text_to_plain(&card_text(&unit, 40));

    assert_eq!(
        lines,
        vec![
            "[Type] T".to_string(),
            "    A, B".to_string(),
            "    Short".to_string(),
            "    cover: http://c/1.jpg".to_string(),
        ]
    );
}

#[test]
fn test_card_text_year_only() {
    let unit = display_unit(
        &Suggestion {
            published_year: Some(1965),
            ..Suggestion::titled("Dune")
        },
        0,
    );

    let lines = text_to_plain(&card_text(&unit, 40));

    assert_eq!(lines[1], "    First published 1965");
}

#[test]
fn test_truncate_to_width() {
    assert_eq!(truncate_to_width("Dune", 10), "Dune");
    assert_eq!(truncate_to_width("Dune", 4), "Dune");
    assert_eq!(truncate_to_width("Dune Messiah", 6), "Dune …");
    assert_eq!(truncate_to_width("Dune", 0), "");
    assert_eq!(truncate_to_width("Dune", 1), "…");
}

#[test]
fn test_truncate_counts_wide_characters() {
    // Each CJK character takes two columns
    assert_eq!(truncate_to_width("進撃の巨人", 10), "進撃の巨人");
    assert_eq!(truncate_to_width("進撃の巨人", 7), "進撃の…");
}
