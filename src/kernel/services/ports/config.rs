use serde::{Deserialize, Serialize};

use crate::models::edit_history::{DEFAULT_COALESCE_WINDOW_MS, DEFAULT_HISTORY_CAPACITY};
use crate::models::{EditHistoryConfig, DEFAULT_MAX_LINES};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub max_lines: usize,
    pub indent_width: usize,
    pub auto_indent: bool,
    pub history_capacity: usize,
    pub coalesce_window_ms: u64,
    pub multi_click_ms: u64,
    pub save_debounce_ms: u64,
    pub caret_blink_ms: u64,
    pub font_size: f32,
    pub line_height: f32,
    pub char_width: f32,
    pub padding: f32,
    pub scroll_margin: f32,
    pub show_line_numbers: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            indent_width: 2,
            auto_indent: true,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            coalesce_window_ms: DEFAULT_COALESCE_WINDOW_MS,
            multi_click_ms: 200,
            save_debounce_ms: 300,
            caret_blink_ms: 500,
            font_size: 16.0,
            line_height: 20.0,
            char_width: 9.6,
            padding: 16.0,
            scroll_margin: 24.0,
            show_line_numbers: false,
        }
    }
}

impl EditorConfig {
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width.max(1))
    }

    pub fn history(&self) -> EditHistoryConfig {
        EditHistoryConfig {
            capacity: self.history_capacity,
            coalesce_window_ms: self.coalesce_window_ms,
        }
    }
}
