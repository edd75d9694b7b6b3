use super::*;

#[test]
fn test_classification() {
    assert!(is_word_char('a'));
    assert!(is_word_char('Z'));
    assert!(is_word_char('7'));
    assert!(is_word_char('_'));
    assert!(is_word_char('é'));
    assert!(is_special_char(' '));
    assert!(is_special_char('.'));
    assert!(is_special_char('('));
    assert!(is_special_char('\t'));
}

#[test]
fn test_word_right_lands_on_next_word_start() {
    let line = "hello world";
    assert_eq!(word_right(line, 0), Some(6));
    assert_eq!(word_right(line, 6), Some(11));
    assert_eq!(word_right(line, 11), None);
}

#[test]
fn test_word_right_from_special_run() {
    assert_eq!(word_right("a  ..b", 1), Some(5));
    assert_eq!(word_right("foo()", 3), Some(5));
}

#[test]
fn test_word_left_lands_on_word_start() {
    let line = "hello world";
    assert_eq!(word_left(line, 11), Some(6));
    assert_eq!(word_left(line, 6), Some(0));
    assert_eq!(word_left(line, 3), Some(0));
    assert_eq!(word_left(line, 0), None);
}

#[test]
fn test_word_left_past_line_end_is_clamped() {
    assert_eq!(word_left("ab cd", 99), Some(3));
}

#[test]
fn test_word_left_inverts_word_right() {
    let line = "let value = compute(x, y);";
    let mut col = 0;
    while let Some(next) = word_right(line, col) {
        if next == line.chars().count() {
            break;
        }
        assert_eq!(word_left(line, next), Some(col));
        col = next;
    }
}

#[test]
fn test_word_bounds_at() {
    let line = "foo_bar baz";
    assert_eq!(word_bounds_at(line, 2), (0, 7));
    assert_eq!(word_bounds_at(line, 7), (0, 7));
    assert_eq!(word_bounds_at(line, 9), (8, 11));
    assert_eq!(word_bounds_at("a + b", 2), (2, 2));
}
