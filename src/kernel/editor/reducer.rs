use std::time::Instant;

use super::action::EditorAction;
use super::state::EditorState;

impl EditorState {
    /// Applies one input intent; returns whether anything observable changed.
    pub fn dispatch(&mut self, action: EditorAction) -> bool {
        self.dispatch_at(action, Instant::now())
    }

    pub fn dispatch_at(&mut self, action: EditorAction, now: Instant) -> bool {
        match action {
            EditorAction::Move(movement) => self.move_cursor(movement),
            EditorAction::InsertText(text) => self.insert_text(&text, now),
            EditorAction::Newline => self.newline(now),
            EditorAction::Backspace { word } => self.backspace(word, now),
            EditorAction::Delete { word } => self.delete(word, now),
            EditorAction::Indent => self.indent(now),
            EditorAction::Unindent => self.unindent(now),
            EditorAction::Undo => self.undo(now),
            EditorAction::Redo => self.redo(now),
            EditorAction::SelectAll => self.select_all(),
            EditorAction::MouseDown { x, y, extend } => self.mouse_down(x, y, extend, now),
            EditorAction::MouseDrag { x, y } => self.mouse_drag(x, y),
            EditorAction::Wheel { delta_y } => self.scroll_by(delta_y),
            EditorAction::Zoom { font_size } => self.zoom(font_size),
            EditorAction::Resize { width, height } => self.resize(width, height),
            EditorAction::Load { text } => {
                self.load_text(&text, now);
                true
            }
        }
    }
}
