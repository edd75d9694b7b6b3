use crate::models::{Position, SnapshotReason};
use std::ops::RangeInclusive;
use std::time::Instant;

use super::state::EditorState;

impl EditorState {
    /// Types or pastes `text` at the cursor, replacing a non-empty selection.
    pub fn insert_text(&mut self, text: &str, now: Instant) -> bool {
        if self.selection.has_content() || !self.history.can_coalesce(text, now) {
            return self.structural_edit(now, |s| {
                let removed = s.remove_selection();
                let before = s.cursor;
                s.cursor = s.buffer.insert(s.cursor, text);
                removed || s.cursor != before
            });
        }

        self.selection.deactivate();
        self.cursor = self.buffer.insert(self.cursor, text);
        self.history.mark_pending();
        tracing::trace!(cursor = %self.cursor, "coalesced keystroke");
        self.preferred_col = None;
        self.after_text_change();
        self.after_cursor_move();
        true
    }

    /// Splits the line at the cursor, carrying the indentation left of it.
    pub fn newline(&mut self, now: Instant) -> bool {
        self.structural_edit(now, |s| {
            let removed = s.remove_selection();
            let indent: String = if s.config.auto_indent {
                s.buffer
                    .leading_whitespace(s.cursor.line)
                    .chars()
                    .take(s.cursor.col)
                    .collect()
            } else {
                String::new()
            };
            let before = s.cursor;
            s.cursor = s.buffer.split_line(s.cursor, &indent);
            removed || s.cursor != before
        })
    }

    pub fn backspace(&mut self, word: bool, now: Instant) -> bool {
        self.structural_edit(now, |s| {
            if s.remove_selection() {
                return true;
            }
            let end = s.cursor;
            let start = if word {
                s.word_left_of(end)
            } else {
                s.char_left_of(end)
            };
            if start == end {
                return false;
            }
            s.cursor = s.buffer.delete_range(start, end);
            true
        })
    }

    pub fn delete(&mut self, word: bool, now: Instant) -> bool {
        self.structural_edit(now, |s| {
            if s.remove_selection() {
                return true;
            }
            let start = s.cursor;
            let end = if word {
                s.word_right_of(start)
            } else {
                s.char_right_of(start)
            };
            if start == end {
                return false;
            }
            s.cursor = s.buffer.delete_range(start, end);
            true
        })
    }

    /// Removes the selected text; a no-op for an empty or inactive selection.
    pub fn delete_selection(&mut self, now: Instant) -> bool {
        if !self.selection.has_content() {
            return false;
        }
        self.structural_edit(now, Self::remove_selection)
    }

    /// Tab: pads the cursor to the next indent stop, or indents every touched line.
    pub fn indent(&mut self, now: Instant) -> bool {
        let unit = self.config.indent_unit();
        if self.selection.has_content() {
            return self.structural_edit(now, |s| {
                let lines = s.selection.touched_lines();
                let width = unit.chars().count();
                let added: Vec<usize> = lines
                    .clone()
                    .map(|line| {
                        s.buffer.insert(Position::new(line, 0), &unit);
                        width
                    })
                    .collect();
                s.shift_selection(&lines, &added, true);
                true
            });
        }

        self.structural_edit(now, |s| {
            let width = unit.chars().count();
            let pad = width - s.cursor.col % width;
            s.cursor = s.buffer.insert(s.cursor, &unit[..pad]);
            true
        })
    }

    /// Shift+Tab: strips one indent unit from the touched lines that start with it.
    pub fn unindent(&mut self, now: Instant) -> bool {
        let unit = self.config.indent_unit();
        if self.selection.has_content() {
            return self.structural_edit(now, |s| {
                let lines = s.selection.touched_lines();
                let removed: Vec<usize> = lines
                    .clone()
                    .map(|line| s.buffer.strip_line_prefix(line, &unit))
                    .collect();
                s.shift_selection(&lines, &removed, false);
                removed.iter().any(|w| *w > 0)
            });
        }

        self.structural_edit(now, |s| {
            let removed = s.buffer.strip_line_prefix(s.cursor.line, &unit);
            s.cursor = s.cursor.with_col(s.cursor.col.saturating_sub(removed));
            removed > 0
        })
    }

    pub fn undo(&mut self, now: Instant) -> bool {
        let current = self.buffer.serialize();
        match self.history.undo(&current, now) {
            Some(text) => {
                self.restore_snapshot(&text);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self, now: Instant) -> bool {
        match self.history.redo(now) {
            Some(text) => {
                self.restore_snapshot(&text);
                true
            }
            None => false,
        }
    }

    fn restore_snapshot(&mut self, text: &str) {
        self.buffer.replace_text(text);
        self.cursor = Position::origin();
        self.preferred_col = None;
        self.selection.deactivate();
        self.after_text_change();
        self.after_cursor_move();
    }

    /// Runs a non-coalesced edit: flushes merged keystrokes into history,
    /// applies `edit`, then snapshots the result if the text changed.
    fn structural_edit(&mut self, now: Instant, edit: impl FnOnce(&mut Self) -> bool) -> bool {
        if self.history.is_pending() {
            let current = self.buffer.serialize();
            self.history.commit_pending(&current, now);
        }
        if !self.selection.has_content() {
            self.selection.deactivate();
        }

        let changed = edit(self);
        self.preferred_col = None;
        if changed {
            let text = self.buffer.serialize();
            self.history.snapshot(text, SnapshotReason::Edit, now);
            self.after_text_change();
        }
        self.after_cursor_move();
        changed
    }

    fn remove_selection(&mut self) -> bool {
        if !self.selection.has_content() {
            self.selection.deactivate();
            return false;
        }
        let (start, end) = self.selection.range();
        self.cursor = self.buffer.delete_range(start, end);
        self.selection.deactivate();
        true
    }

    /// Moves selection endpoints with the text of re-indented lines. Endpoints
    /// at column 0 stay put; the cursor follows the active end.
    fn shift_selection(&mut self, lines: &RangeInclusive<usize>, deltas: &[usize], grow: bool) {
        let shift = |pos: Position| {
            if pos.col == 0 || !lines.contains(&pos.line) {
                return pos;
            }
            let delta = deltas[pos.line - lines.start()];
            if grow {
                pos.with_col(pos.col + delta)
            } else {
                pos.with_col(pos.col.saturating_sub(delta))
            }
        };
        let anchor = shift(self.selection.anchor());
        let active = shift(self.selection.active());
        self.selection.start(anchor, active);
        self.cursor = active;
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/edit.rs"]
mod tests;
