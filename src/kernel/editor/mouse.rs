use crate::models::{word, Position};
use std::time::Instant;

use super::state::EditorState;

impl EditorState {
    /// Primary button press at viewport pixel `(x, y)`. The click counter picks
    /// the gesture: caret placement, word selection or line selection.
    pub fn mouse_down(&mut self, x: f32, y: f32, extend: bool, now: Instant) -> bool {
        let pos = self.viewport.position_at(x, y, &self.buffer);
        match self.mouse.register_click(now) {
            2 => self.select_word_at(pos),
            3 => self.select_line_at(pos.line),
            _ => self.place_cursor(pos, extend),
        }
    }

    /// Drag with the primary button held: extends the selection to `(x, y)`.
    pub fn mouse_drag(&mut self, x: f32, y: f32) -> bool {
        let pos = self.viewport.position_at(x, y, &self.buffer);
        self.place_cursor(pos, true)
    }

    pub fn place_cursor(&mut self, pos: Position, extend: bool) -> bool {
        let old = self.cursor;
        let old_selection = self.selection;
        self.cursor = self.buffer.clamp(pos);
        self.preferred_col = None;
        self.apply_selection(extend, old);
        self.after_cursor_move();
        self.cursor != old || self.selection != old_selection
    }

    /// Selects the word under `pos`; on a special character only the caret moves.
    pub fn select_word_at(&mut self, pos: Position) -> bool {
        let pos = self.buffer.clamp(pos);
        let line = self.buffer.line_at(pos.line).unwrap_or_default();
        let (start, end) = word::word_bounds_at(&line, pos.col);
        if start == end {
            return self.place_cursor(pos, false);
        }
        self.select_span(pos.with_col(start), pos.with_col(end))
    }

    /// Selects `line` including its line break; the last line ends at its length.
    pub fn select_line_at(&mut self, line: usize) -> bool {
        let line = line.min(self.buffer.last_line());
        let end = if line < self.buffer.last_line() {
            Position::new(line + 1, 0)
        } else {
            Position::new(line, self.buffer.line_len(line))
        };
        self.select_span(Position::new(line, 0), end)
    }

    fn select_span(&mut self, anchor: Position, active: Position) -> bool {
        let old = self.cursor;
        let old_selection = self.selection;
        self.selection.start(anchor, active);
        self.cursor = active;
        self.preferred_col = None;
        self.after_cursor_move();
        self.cursor != old || self.selection != old_selection
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/mouse.rs"]
mod tests;
