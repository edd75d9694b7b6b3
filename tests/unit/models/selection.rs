use super::*;

fn pos(line: usize, col: usize) -> Position {
    Position::new(line, col)
}

#[test]
fn test_default_is_inactive() {
    let selection = Selection::default();
    assert!(!selection.is_active());
    assert!(!selection.has_content());
}

#[test]
fn test_storage_keeps_direction() {
    let selection = Selection::new(pos(2, 4), pos(0, 1));
    assert_eq!(selection.anchor(), pos(2, 4));
    assert_eq!(selection.active(), pos(0, 1));
    assert_eq!(selection.range(), (pos(0, 1), pos(2, 4)));
}

#[test]
fn test_empty_active_selection_has_no_content() {
    let selection = Selection::new(pos(1, 1), pos(1, 1));
    assert!(selection.is_active());
    assert!(selection.is_empty());
    assert!(!selection.has_content());
}

#[test]
fn test_deactivate_hides_content() {
    let mut selection = Selection::new(pos(0, 0), pos(0, 3));
    assert!(selection.contains(pos(0, 2)));
    selection.deactivate();
    assert!(!selection.has_content());
    assert!(!selection.contains(pos(0, 2)));
    assert!(selection.line_span(0, 3).is_none());
}

#[test]
fn test_touched_lines_excludes_trailing_column_zero() {
    assert_eq!(Selection::new(pos(0, 0), pos(2, 0)).touched_lines(), 0..=1);
    assert_eq!(Selection::new(pos(2, 0), pos(0, 1)).touched_lines(), 0..=1);
    assert_eq!(Selection::new(pos(0, 0), pos(2, 1)).touched_lines(), 0..=2);
    assert_eq!(Selection::new(pos(1, 0), pos(1, 0)).touched_lines(), 1..=1);
}

#[test]
fn test_line_spans() {
    let selection = Selection::new(pos(2, 2), pos(0, 1));

    assert_eq!(
        selection.line_span(0, 5),
        Some(LineSpan {
            line: 0,
            start_col: 1,
            end_col: 5,
            includes_line_break: true,
        })
    );
    assert_eq!(
        selection.line_span(1, 0),
        Some(LineSpan {
            line: 1,
            start_col: 0,
            end_col: 0,
            includes_line_break: true,
        })
    );
    assert_eq!(
        selection.line_span(2, 4),
        Some(LineSpan {
            line: 2,
            start_col: 0,
            end_col: 2,
            includes_line_break: false,
        })
    );
    assert_eq!(selection.line_span(3, 4), None);
}
