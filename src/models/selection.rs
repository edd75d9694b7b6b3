//! 选区模型：anchor（固定端）+ active（移动端），存储时不归一化

use super::position::Position;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    anchor: Position,
    active: Position,
    in_selection: bool,
}

/// Selected columns of one line, as the renderer needs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub line: usize,
    pub start_col: usize,
    pub end_col: usize,
    /// The selection continues past the end of this line.
    pub includes_line_break: bool,
}

impl Selection {
    pub fn new(anchor: Position, active: Position) -> Self {
        Self {
            anchor,
            active,
            in_selection: true,
        }
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    pub fn active(&self) -> Position {
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.in_selection
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Active and spanning at least one character.
    pub fn has_content(&self) -> bool {
        self.in_selection && !self.is_empty()
    }

    pub fn start(&mut self, anchor: Position, active: Position) {
        self.anchor = anchor;
        self.active = active;
        self.in_selection = true;
    }

    pub fn set_active(&mut self, active: Position) {
        self.active = active;
    }

    pub fn set_anchor(&mut self, anchor: Position) {
        self.anchor = anchor;
    }

    pub fn deactivate(&mut self) {
        self.in_selection = false;
    }

    /// `(start, end)` with `start <= end`.
    pub fn range(&self) -> (Position, Position) {
        Position::ordered(self.anchor, self.active)
    }

    pub fn contains(&self, pos: Position) -> bool {
        let (start, end) = self.range();
        self.in_selection && start <= pos && pos < end
    }

    /// Lines an indent/un-indent applies to. A multi-line selection ending at
    /// column 0 does not touch its last line.
    pub fn touched_lines(&self) -> RangeInclusive<usize> {
        let (start, end) = self.range();
        if end.line > start.line && end.col == 0 {
            start.line..=end.line - 1
        } else {
            start.line..=end.line
        }
    }

    pub fn line_span(&self, line: usize, line_len: usize) -> Option<LineSpan> {
        if !self.has_content() {
            return None;
        }
        let (start, end) = self.range();
        if line < start.line || line > end.line {
            return None;
        }
        let start_col = if line == start.line { start.col } else { 0 };
        let (end_col, includes_line_break) = if line == end.line {
            (end.col, false)
        } else {
            (line_len, true)
        };
        Some(LineSpan {
            line,
            start_col: start_col.min(line_len),
            end_col: end_col.min(line_len),
            includes_line_break,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/selection.rs"]
mod tests;
