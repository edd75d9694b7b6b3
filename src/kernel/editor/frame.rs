use crate::models::LineSpan;
use std::ops::Range;

use super::state::EditorState;

/// Everything a renderer needs to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub visible_lines: Range<usize>,
    pub scroll_x: f32,
    pub scroll_y: f32,
    pub text_origin: (f32, f32),
    pub line_height: f32,
    pub char_width: f32,
    pub gutter_width: f32,
    /// One entry per visible line touched by the selection, in line order.
    pub selection_spans: Vec<LineSpan>,
    /// Caret position in viewport pixels (scroll already applied).
    pub caret: (f32, f32),
    pub caret_visible: bool,
}

impl EditorState {
    pub fn frame(&self) -> RenderFrame {
        let viewport = &self.viewport;
        let visible_lines = viewport.visible_range(self.buffer.line_count());
        let selection_spans = visible_lines
            .clone()
            .filter_map(|line| self.selection.line_span(line, self.buffer.line_len(line)))
            .collect();

        RenderFrame {
            visible_lines,
            scroll_x: viewport.scroll_x,
            scroll_y: viewport.scroll_y,
            text_origin: viewport.text_origin(),
            line_height: viewport.line_height(),
            char_width: viewport.char_width(),
            gutter_width: viewport.gutter_width(),
            selection_spans,
            caret: viewport.caret_screen_pos(self.cursor),
            caret_visible: self.caret.is_visible(),
        }
    }
}
