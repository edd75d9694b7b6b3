use crate::kernel::services::ports::EditorConfig;
use crate::models::{Position, TextBuffer};
use std::ops::Range;

pub const MIN_FONT_SIZE: f32 = 6.0;
pub const MAX_FONT_SIZE: f32 = 96.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollDelta {
    pub dx: f32,
    pub dy: f32,
}

impl ScrollDelta {
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Pixel scroll state plus the character metrics it is derived from.
#[derive(Debug, Clone)]
pub struct Viewport {
    pub scroll_x: f32,
    pub scroll_y: f32,
    pub width: f32,
    pub height: f32,
    font_size: f32,
    line_height: f32,
    char_width: f32,
    base_font_size: f32,
    base_line_height: f32,
    base_char_width: f32,
    padding: f32,
    margin: f32,
    show_line_numbers: bool,
    gutter_width: f32,
}

impl Viewport {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width: 0.0,
            height: 0.0,
            font_size: config.font_size,
            line_height: config.line_height,
            char_width: config.char_width,
            base_font_size: config.font_size,
            base_line_height: config.line_height,
            base_char_width: config.char_width,
            padding: config.padding,
            margin: config.scroll_margin,
            show_line_numbers: config.show_line_numbers,
            gutter_width: 0.0,
        }
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    pub fn gutter_width(&self) -> f32 {
        self.gutter_width
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Top-left pixel of line 0, column 0 in content coordinates.
    pub fn text_origin(&self) -> (f32, f32) {
        (self.padding + self.gutter_width, self.padding)
    }

    /// Recomputes the line-number gutter for `line_count` lines.
    pub fn sync_gutter(&mut self, line_count: usize) {
        self.gutter_width = if self.show_line_numbers {
            let digits = line_count.max(1).ilog10() as f32 + 1.0;
            (digits + 1.0) * self.char_width
        } else {
            0.0
        };
    }

    /// Lines moved by PageUp/PageDown; 0 for a degenerate viewport.
    pub fn lines_per_page(&self) -> usize {
        if self.height <= 0.0 || self.line_height <= 0.0 {
            return 0;
        }
        ((self.height + self.line_height) / self.line_height).floor() as usize
    }

    pub fn caret_content_pos(&self, cursor: Position) -> (f32, f32) {
        let (origin_x, origin_y) = self.text_origin();
        (
            origin_x + cursor.col as f32 * self.char_width,
            origin_y + cursor.line as f32 * self.line_height,
        )
    }

    pub fn caret_screen_pos(&self, cursor: Position) -> (f32, f32) {
        let (x, y) = self.caret_content_pos(cursor);
        (x - self.scroll_x, y - self.scroll_y)
    }

    /// Scrolls the minimal amount that keeps `margin` pixels around the caret.
    pub fn ensure_visible(&mut self, cursor: Position, line_count: usize) -> ScrollDelta {
        if self.width <= 0.0 || self.height <= 0.0 {
            return ScrollDelta::default();
        }

        let (old_x, old_y) = (self.scroll_x, self.scroll_y);
        let (caret_x, caret_y) = self.caret_content_pos(cursor);
        let margin = self.margin;

        if caret_x - margin < self.scroll_x {
            self.scroll_x = (caret_x - margin).max(0.0);
        }
        if caret_y - margin < self.scroll_y {
            self.scroll_y = (caret_y - margin).max(0.0);
        }
        if caret_x + margin > self.scroll_x + self.width {
            self.scroll_x = caret_x + margin - self.width;
        }
        if caret_y + self.line_height + margin > self.scroll_y + self.height {
            self.scroll_y = caret_y + self.line_height + margin - self.height;
        }

        self.scroll_x = self.scroll_x.max(0.0);
        self.scroll_y = self.scroll_y.clamp(0.0, self.max_scroll_y(line_count));

        ScrollDelta {
            dx: self.scroll_x - old_x,
            dy: self.scroll_y - old_y,
        }
    }

    /// Applies a vertical wheel delta; returns whether the offset moved.
    pub fn scroll_by(&mut self, delta_y: f32, line_count: usize) -> bool {
        let old = self.scroll_y;
        self.scroll_y = (self.scroll_y + delta_y).clamp(0.0, self.max_scroll_y(line_count));
        self.scroll_y != old
    }

    pub fn zoom(&mut self, font_size: f32, line_count: usize) -> bool {
        let font_size = font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        if font_size == self.font_size || self.base_font_size <= 0.0 {
            return false;
        }
        let scale = font_size / self.base_font_size;
        self.font_size = font_size;
        self.line_height = self.base_line_height * scale;
        self.char_width = self.base_char_width * scale;
        self.sync_gutter(line_count);
        self.scroll_y = self.scroll_y.clamp(0.0, self.max_scroll_y(line_count));
        true
    }

    pub fn visible_range(&self, line_count: usize) -> Range<usize> {
        if self.line_height <= 0.0 {
            return 0..0;
        }
        let start = ((self.scroll_y / self.line_height).floor() as usize).min(line_count);
        let rows = ((self.height.max(0.0) + self.line_height) / self.line_height).ceil() as usize;
        start..line_count.min(start.saturating_add(rows))
    }

    /// Inverse of the render mapping, clamped into the document.
    pub fn position_at(&self, x: f32, y: f32, buffer: &TextBuffer) -> Position {
        if self.line_height <= 0.0 || self.char_width <= 0.0 {
            return Position::origin();
        }
        let (origin_x, origin_y) = self.text_origin();
        let content_x = x + self.scroll_x - origin_x;
        let content_y = y + self.scroll_y - origin_y;

        let line = (content_y / self.line_height).floor().max(0.0) as usize;
        let col = (content_x / self.char_width).round().max(0.0) as usize;
        buffer.clamp(Position::new(line, col))
    }

    fn max_scroll_y(&self, line_count: usize) -> f32 {
        line_count.saturating_sub(1) as f32 * self.line_height
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/viewport.rs"]
mod tests;
