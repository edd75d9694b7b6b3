use crate::models::{word, Position};

use super::action::{Direction, Granularity, Movement};
use super::state::EditorState;

impl EditorState {
    /// Applies a movement intent; returns whether cursor or selection changed.
    pub fn move_cursor(&mut self, movement: Movement) -> bool {
        let old = self.cursor;
        let old_selection = self.selection;

        let target = self.movement_target(movement);
        self.cursor = self.buffer.clamp(target);
        self.apply_selection(movement.extend_selection, old);
        self.after_cursor_move();

        self.cursor != old || self.selection != old_selection
    }

    fn movement_target(&mut self, movement: Movement) -> Position {
        let pos = self.cursor;
        match (movement.direction, movement.granularity) {
            (Direction::Up | Direction::Down, Granularity::Document)
            | (Direction::Left | Direction::Right, Granularity::Document)
            | (Direction::Home | Direction::End, Granularity::Document) => {
                self.preferred_col = None;
                match movement.direction {
                    Direction::Up | Direction::Left | Direction::Home => Position::origin(),
                    _ => self.buffer.end(),
                }
            }
            (Direction::Left, Granularity::Line) | (Direction::Home, _) => {
                self.preferred_col = None;
                pos.with_col(0)
            }
            (Direction::Right, Granularity::Line) | (Direction::End, _) => {
                self.preferred_col = None;
                pos.with_col(self.buffer.line_len(pos.line))
            }
            (Direction::Left, Granularity::Word) => {
                self.preferred_col = None;
                self.word_left_of(pos)
            }
            (Direction::Right, Granularity::Word) => {
                self.preferred_col = None;
                self.word_right_of(pos)
            }
            (Direction::Left, _) => {
                self.preferred_col = None;
                self.char_left_of(pos)
            }
            (Direction::Right, _) => {
                self.preferred_col = None;
                self.char_right_of(pos)
            }
            (Direction::Up, _) => match pos.line.checked_sub(1) {
                Some(line) => self.vertical_target(pos, line),
                None => pos,
            },
            (Direction::Down, _) => {
                if pos.line < self.buffer.last_line() {
                    self.vertical_target(pos, pos.line + 1)
                } else {
                    pos
                }
            }
            (Direction::PageUp, _) => self.page_up_target(pos),
            (Direction::PageDown, _) => self.page_down_target(pos),
        }
    }

    /// Column on `line` for a vertical move, honouring the sticky preferred column.
    fn vertical_target(&mut self, pos: Position, line: usize) -> Position {
        let goal = self.preferred_col.unwrap_or(pos.col);
        self.preferred_col = Some(goal);
        Position::new(line, goal.min(self.buffer.line_len(line)))
    }

    fn page_up_target(&mut self, pos: Position) -> Position {
        let page = self.viewport.lines_per_page();
        if page > pos.line {
            self.preferred_col = None;
            return Position::origin();
        }
        self.vertical_target(pos, pos.line - page)
    }

    fn page_down_target(&mut self, pos: Position) -> Position {
        let page = self.viewport.lines_per_page();
        let last = self.buffer.last_line();
        let target = pos.line.saturating_add(page);
        if target > last {
            self.preferred_col = None;
            return self.buffer.end();
        }
        self.vertical_target(pos, target)
    }

    pub(super) fn char_left_of(&self, pos: Position) -> Position {
        if pos.col > 0 {
            pos.with_col(pos.col - 1)
        } else if pos.line > 0 {
            Position::new(pos.line - 1, self.buffer.line_len(pos.line - 1))
        } else {
            pos
        }
    }

    pub(super) fn char_right_of(&self, pos: Position) -> Position {
        if pos.col < self.buffer.line_len(pos.line) {
            pos.with_col(pos.col + 1)
        } else if pos.line < self.buffer.last_line() {
            Position::new(pos.line + 1, 0)
        } else {
            pos
        }
    }

    pub(super) fn word_left_of(&self, pos: Position) -> Position {
        let line = self.buffer.line_at(pos.line).unwrap_or_default();
        match word::word_left(&line, pos.col) {
            Some(col) => pos.with_col(col),
            None => self.char_left_of(pos),
        }
    }

    pub(super) fn word_right_of(&self, pos: Position) -> Position {
        let line = self.buffer.line_at(pos.line).unwrap_or_default();
        match word::word_right(&line, pos.col) {
            Some(col) => pos.with_col(col),
            None => self.char_right_of(pos),
        }
    }

    /// Selects the whole document and parks the cursor at its end.
    pub fn select_all(&mut self) -> bool {
        let end = self.buffer.end();
        let old_selection = self.selection;
        self.selection.start(Position::origin(), end);
        self.cursor = end;
        self.preferred_col = None;
        self.after_cursor_move();
        self.selection != old_selection
    }

    /// `(start, end)` of the active selection, `start <= end`.
    pub fn normalized_selection(&self) -> Option<(Position, Position)> {
        self.selection.is_active().then(|| self.selection.range())
    }

    pub fn selected_text(&self) -> String {
        if !self.selection.has_content() {
            return String::new();
        }
        let (start, end) = self.selection.range();
        self.buffer.text_range(start, end)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/movement.rs"]
mod tests;
