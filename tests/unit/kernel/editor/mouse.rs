use super::*;
use crate::kernel::services::ports::EditorConfig;
use std::time::Duration;

fn editor(text: &str) -> EditorState {
    EditorState::from_text(text, EditorConfig::default())
}

fn pos(line: usize, col: usize) -> Position {
    Position::new(line, col)
}

/// Pixel inside the cell of `(line, col)` with the default metrics.
fn at(line: usize, col: usize) -> (f32, f32) {
    (16.0 + col as f32 * 9.6 + 1.0, 16.0 + line as f32 * 20.0 + 5.0)
}

#[test]
fn test_click_places_cursor() {
    let t0 = Instant::now();
    let mut editor = editor("hello\nworld");
    let (x, y) = at(1, 2);

    assert!(editor.mouse_down(x, y, false, t0));
    assert_eq!(editor.cursor(), pos(1, 2));
    assert!(!editor.selection().is_active());
}

#[test]
fn test_click_past_text_clamps() {
    let mut editor = editor("hi\nthere");
    let (x, y) = at(9, 40);
    editor.mouse_down(x, y, false, Instant::now());
    assert_eq!(editor.cursor(), pos(1, 5));
}

#[test]
fn test_shift_click_extends_from_cursor() {
    let t0 = Instant::now();
    let mut editor = editor("abcdef");
    editor.set_cursor(pos(0, 1));
    let (x, y) = at(0, 4);

    editor.mouse_down(x, y, true, t0);
    assert_eq!(editor.selection().anchor(), pos(0, 1));
    assert_eq!(editor.selection().active(), pos(0, 4));
}

#[test]
fn test_drag_extends_selection() {
    let t0 = Instant::now();
    let mut editor = editor("one\ntwo\nthree");
    let (x, y) = at(0, 1);
    editor.mouse_down(x, y, false, t0);

    let (x, y) = at(2, 3);
    assert!(editor.mouse_drag(x, y));
    assert_eq!(editor.normalized_selection(), Some((pos(0, 1), pos(2, 3))));
    assert_eq!(editor.selected_text(), "ne\ntwo\nthr");
}

#[test]
fn test_double_click_selects_word() {
    let t0 = Instant::now();
    let mut editor = editor("foo bar_baz qux");
    let (x, y) = at(0, 6);

    editor.mouse_down(x, y, false, t0);
    editor.mouse_down(x, y, false, t0 + Duration::from_millis(120));
    assert_eq!(editor.normalized_selection(), Some((pos(0, 4), pos(0, 11))));
    assert_eq!(editor.cursor(), pos(0, 11));
    assert_eq!(editor.selected_text(), "bar_baz");
}

#[test]
fn test_double_click_on_special_char_only_moves_caret() {
    let t0 = Instant::now();
    let mut editor = editor("a + b");
    let (x, y) = at(0, 2);

    editor.mouse_down(x, y, false, t0);
    editor.mouse_down(x, y, false, t0 + Duration::from_millis(50));
    assert_eq!(editor.cursor(), pos(0, 2));
    assert!(!editor.selection().has_content());
}

#[test]
fn test_triple_click_selects_line_with_break() {
    let t0 = Instant::now();
    let mut editor = editor("foo\nbar");
    let (x, y) = at(0, 1);

    for i in 0..3 {
        editor.mouse_down(x, y, false, t0 + Duration::from_millis(i * 100));
    }
    assert_eq!(editor.normalized_selection(), Some((pos(0, 0), pos(1, 0))));
    assert_eq!(editor.selected_text(), "foo\n");
}

#[test]
fn test_triple_click_on_last_line_stops_at_line_end() {
    let mut editor = editor("foo\nbar");
    assert!(editor.select_line_at(1));
    assert_eq!(editor.normalized_selection(), Some((pos(1, 0), pos(1, 3))));
    assert_eq!(editor.cursor(), pos(1, 3));
}

#[test]
fn test_slow_clicks_do_not_escalate() {
    let t0 = Instant::now();
    let mut editor = editor("foo bar");
    let (x, y) = at(0, 1);

    editor.mouse_down(x, y, false, t0);
    editor.mouse_down(x, y, false, t0 + Duration::from_millis(300));
    assert!(!editor.selection().is_active());
    assert_eq!(editor.cursor(), pos(0, 1));
}
