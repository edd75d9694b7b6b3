use super::*;

#[test]
fn test_new_editor_is_one_empty_line() {
    let editor = EditorState::default();
    assert_eq!(editor.line_count(), 1);
    assert_eq!(editor.cursor(), Position::origin());
    assert_eq!(editor.serialize(), "");
    assert!(!editor.selection().is_active());
    assert_eq!(editor.history().undo_len(), 1);
}

#[test]
fn test_click_counter_cycles_within_timeout() {
    let t0 = Instant::now();
    let mut mouse = EditorMouseState::new(Duration::from_millis(200));

    assert_eq!(mouse.register_click(t0), 1);
    assert_eq!(mouse.register_click(t0 + Duration::from_millis(100)), 2);
    assert_eq!(mouse.register_click(t0 + Duration::from_millis(250)), 3);
    assert_eq!(mouse.register_click(t0 + Duration::from_millis(400)), 1);
    assert_eq!(mouse.register_click(t0 + Duration::from_millis(900)), 1);
    assert_eq!(mouse.click_count(), 1);
}

#[test]
fn test_load_text_resets_everything() {
    let t0 = Instant::now();
    let mut editor = EditorState::from_text_at("one\ntwo", EditorConfig::default(), t0);
    editor.set_cursor(Position::new(1, 2));
    editor.take_document_changed();
    let revision = editor.revision();

    editor.load_text("fresh\r\ntext\n", t0);

    assert_eq!(editor.serialize(), "fresh\ntext\n");
    assert_eq!(editor.cursor(), Position::origin());
    assert_eq!(editor.preferred_col(), None);
    assert_eq!(editor.history().undo_entries().collect::<Vec<_>>(), vec!["fresh\ntext\n"]);
    assert!(editor.revision() > revision);
    assert!(editor.take_document_changed());
    assert!(!editor.take_document_changed());
}

#[test]
fn test_load_text_truncates_to_configured_line_cap() {
    let config = EditorConfig {
        max_lines: 3,
        ..EditorConfig::default()
    };
    let mut editor = EditorState::new(config);
    editor.load_text("1\n2\n3\n4\n5", Instant::now());
    assert_eq!(editor.serialize(), "1\n2\n3");
}

#[test]
fn test_set_cursor_clamps() {
    let mut editor = EditorState::from_text("ab\nc", EditorConfig::default());
    editor.set_cursor(Position::new(7, 7));
    assert_eq!(editor.cursor(), Position::new(1, 1));
}

#[test]
fn test_metadata_drives_language_and_theme() {
    let editor = EditorState::from_text(
        "// language: C; theme: default\nint x;",
        EditorConfig::default(),
    );
    assert_eq!(editor.language(), LanguageId::C);
    assert_eq!(editor.theme(), ThemeId::Default);
    assert_eq!(editor.metadata().get("theme"), Some("default"));

    let plain = EditorState::from_text("just words", EditorConfig::default());
    assert_eq!(plain.language(), LanguageId::PlainText);
    assert!(plain.metadata().is_empty());
}

#[test]
fn test_cursor_move_forces_caret_visible() {
    let mut editor = EditorState::from_text("abc", EditorConfig::default());
    assert!(!editor.toggle_caret());

    editor.set_cursor(Position::new(0, 2));
    assert!(editor.caret().is_visible());
    assert!(editor.toggle_caret());
    assert!(!editor.toggle_caret());
}

#[test]
fn test_resize_reports_change_and_follows_cursor() {
    let text = (0..40).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
    let mut editor = EditorState::from_text(&text, EditorConfig::default());
    editor.set_cursor(Position::new(30, 0));
    assert_eq!(editor.viewport().scroll_y, 0.0);

    assert!(editor.resize(300.0, 200.0));
    assert!(!editor.resize(300.0, 200.0));
    assert!(editor.viewport().scroll_y > 0.0);
}

#[test]
fn test_gutter_tracks_line_count() {
    let config = EditorConfig {
        show_line_numbers: true,
        ..EditorConfig::default()
    };
    let mut editor = EditorState::from_text("a", config);
    let narrow = editor.viewport().gutter_width();

    let text = vec!["x"; 150].join("\n");
    editor.load_text(&text, Instant::now());
    assert!(editor.viewport().gutter_width() > narrow);
}
