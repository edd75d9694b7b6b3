//! 单词边界扫描
//!
//! 单词字符：XID_Continue（字母、数字、下划线）；其余均为特殊字符。

use unicode_xid::UnicodeXID;

pub fn is_word_char(c: char) -> bool {
    c.is_xid_continue()
}

pub fn is_special_char(c: char) -> bool {
    !is_word_char(c)
}

/// Column reached by a word-right move inside `line`, or `None` when `col` is at the line end.
///
/// Skips the rest of the current word, then the special run after it, so the
/// cursor lands on the start of the next word.
pub fn word_right(line: &str, col: usize) -> Option<usize> {
    let chars: Vec<char> = line.chars().collect();
    if col >= chars.len() {
        return None;
    }
    let mut i = col;
    while i < chars.len() && is_word_char(chars[i]) {
        i += 1;
    }
    while i < chars.len() && is_special_char(chars[i]) {
        i += 1;
    }
    Some(i)
}

/// Column reached by a word-left move inside `line`, or `None` when `col` is 0.
pub fn word_left(line: &str, col: usize) -> Option<usize> {
    let chars: Vec<char> = line.chars().collect();
    let col = col.min(chars.len());
    if col == 0 {
        return None;
    }
    let mut i = col;
    while i > 0 && is_special_char(chars[i - 1]) {
        i -= 1;
    }
    while i > 0 && is_word_char(chars[i - 1]) {
        i -= 1;
    }
    Some(i)
}

/// Bounds of the word under `col`; an empty range when `col` is on a special char.
pub fn word_bounds_at(line: &str, col: usize) -> (usize, usize) {
    let chars: Vec<char> = line.chars().collect();
    let col = col.min(chars.len());

    let mut start = col;
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }
    let mut end = col;
    while end < chars.len() && is_word_char(chars[end]) {
        end += 1;
    }
    (start, end)
}

#[cfg(test)]
#[path = "../../tests/unit/models/word.rs"]
mod tests;
