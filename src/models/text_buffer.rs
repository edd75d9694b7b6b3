//! 文本缓冲区模型
//!
//! 职责：
//! - 行序列存储（Rope，仅以 `\n` 分行）
//! - 结构性修改：插入、删除区间、拆行
//! - 位置钳制与行数上限

use super::position::Position;
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;

pub const DEFAULT_MAX_LINES: usize = 10_000;

/// 从 RopeSlice 获取字符串，优先零拷贝
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

fn strip_cr(text: &str) -> Cow<'_, str> {
    if memchr::memchr(b'\r', text.as_bytes()).is_some() {
        Cow::Owned(text.replace('\r', ""))
    } else {
        Cow::Borrowed(text)
    }
}

/// Cuts `text` right before its `max_lines`-th line break.
fn truncate_lines(text: &str, max_lines: usize) -> &str {
    match memchr::memchr_iter(b'\n', text.as_bytes()).nth(max_lines.saturating_sub(1)) {
        Some(idx) => &text[..idx],
        None => text,
    }
}

#[derive(Clone, Debug)]
pub struct TextBuffer {
    rope: Rope,
    max_lines: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::with_max_lines(DEFAULT_MAX_LINES)
    }

    pub fn with_max_lines(max_lines: usize) -> Self {
        Self {
            rope: Rope::new(),
            max_lines: max_lines.max(1),
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_text_with_max_lines(text, DEFAULT_MAX_LINES)
    }

    pub fn from_text_with_max_lines(text: &str, max_lines: usize) -> Self {
        let mut buffer = Self::with_max_lines(max_lines);
        buffer.replace_text(text);
        buffer
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    pub fn set_max_lines(&mut self, max_lines: usize) {
        self.max_lines = max_lines.max(1);
        self.enforce_line_limit();
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn last_line(&self) -> usize {
        self.line_count() - 1
    }

    /// Line content without its terminator.
    pub fn line_slice(&self, line: usize) -> Option<RopeSlice<'_>> {
        if line >= self.line_count() {
            return None;
        }
        let slice = self.rope.line(line);
        let len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            Some(slice.slice(..len - 1))
        } else {
            Some(slice)
        }
    }

    pub fn line_at(&self, line: usize) -> Option<Cow<'_, str>> {
        self.line_slice(line).map(slice_to_cow)
    }

    pub fn line_len(&self, line: usize) -> usize {
        self.line_slice(line).map(|s| s.len_chars()).unwrap_or(0)
    }

    pub fn end(&self) -> Position {
        let last = self.last_line();
        Position::new(last, self.line_len(last))
    }

    /// The single source of truth for position validity.
    pub fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.last_line());
        Position::new(line, pos.col.min(self.line_len(line)))
    }

    pub fn char_at(&self, pos: Position) -> Option<char> {
        let slice = self.line_slice(pos.line)?;
        (pos.col < slice.len_chars()).then(|| slice.char(pos.col))
    }

    pub fn pos_to_char(&self, pos: Position) -> usize {
        let pos = self.clamp(pos);
        self.rope.line_to_char(pos.line) + pos.col
    }

    /// Inserts `text` at `pos` and returns the position right after it.
    pub fn insert(&mut self, pos: Position, text: &str) -> Position {
        let pos = self.clamp(pos);
        let text = strip_cr(text);
        if text.is_empty() {
            return pos;
        }

        let char_offset = self.pos_to_char(pos);
        self.rope.insert(char_offset, &text);

        let newlines = memchr::memchr_iter(b'\n', text.as_bytes()).count();
        let after = match text.rfind('\n') {
            Some(idx) => Position::new(pos.line + newlines, text[idx + 1..].chars().count()),
            None => Position::new(pos.line, pos.col + text.chars().count()),
        };

        if self.enforce_line_limit() {
            self.clamp(after)
        } else {
            after
        }
    }

    /// Removes the text between `start` and `end` and returns the merge point.
    pub fn delete_range(&mut self, start: Position, end: Position) -> Position {
        let (start, end) = Position::ordered(self.clamp(start), self.clamp(end));
        if start == end {
            return start;
        }
        let from = self.pos_to_char(start);
        let to = self.pos_to_char(end);
        self.rope.remove(from..to);
        start
    }

    /// Splits the line at `pos`, carrying `indent` onto the new line.
    pub fn split_line(&mut self, pos: Position, indent: &str) -> Position {
        let mut text = String::with_capacity(indent.len() + 1);
        text.push('\n');
        text.push_str(indent);
        self.insert(pos, &text)
    }

    pub fn text_range(&self, start: Position, end: Position) -> String {
        let (start, end) = Position::ordered(self.clamp(start), self.clamp(end));
        let from = self.pos_to_char(start);
        let to = self.pos_to_char(end);
        self.rope.slice(from..to).to_string()
    }

    pub fn leading_whitespace(&self, line: usize) -> String {
        self.line_slice(line)
            .map(|slice| {
                slice
                    .chars()
                    .take_while(|c| *c == ' ' || *c == '\t')
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn starts_with(&self, line: usize, prefix: &str) -> bool {
        let Some(slice) = self.line_slice(line) else {
            return false;
        };
        let mut chars = slice.chars();
        prefix.chars().all(|p| chars.next() == Some(p))
    }

    /// Removes `prefix` from the start of `line` if present; returns the chars removed.
    pub fn strip_line_prefix(&mut self, line: usize, prefix: &str) -> usize {
        if prefix.is_empty() || !self.starts_with(line, prefix) {
            return 0;
        }
        let width = prefix.chars().count();
        self.delete_range(Position::new(line, 0), Position::new(line, width));
        width
    }

    /// Lines joined by `\n`.
    pub fn serialize(&self) -> String {
        self.rope.to_string()
    }

    /// Replaces the whole document; oversized text keeps only its first `max_lines` lines.
    pub fn replace_text(&mut self, text: &str) {
        let cleaned = strip_cr(text);
        let kept = truncate_lines(&cleaned, self.max_lines);
        if kept.len() < cleaned.len() {
            tracing::warn!(
                max_lines = self.max_lines,
                dropped_bytes = cleaned.len() - kept.len(),
                "loaded text exceeds line limit, truncating"
            );
        }
        self.rope = Rope::from_str(kept);
    }

    #[cfg(test)]
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    fn enforce_line_limit(&mut self) -> bool {
        let count = self.line_count();
        if count <= self.max_lines {
            return false;
        }
        let cut = self.rope.line_to_char(self.max_lines) - 1;
        let len = self.rope.len_chars();
        self.rope.remove(cut..len);
        tracing::warn!(
            max_lines = self.max_lines,
            dropped_lines = count - self.max_lines,
            "line limit exceeded, truncating tail"
        );
        true
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
