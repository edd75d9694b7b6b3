use crate::kernel::services::ports::EditorConfig;
use crate::kernel::theme::ThemeId;
use crate::models::{EditHistory, Position, Selection, TextBuffer};
use std::time::{Duration, Instant};

use super::caret::CaretBlink;
use super::metadata::DocumentMetadata;
use super::syntax::LanguageId;
use super::viewport::Viewport;

/// Multi-click detection: clicks closer than `timeout` bump the counter 1 → 2 → 3 → 1.
#[derive(Debug, Clone)]
pub struct EditorMouseState {
    last_click: Option<Instant>,
    click_count: u8,
    timeout: Duration,
}

impl EditorMouseState {
    pub fn new(timeout: Duration) -> Self {
        Self {
            last_click: None,
            click_count: 0,
            timeout,
        }
    }

    pub fn click_count(&self) -> u8 {
        self.click_count
    }

    pub fn register_click(&mut self, now: Instant) -> u8 {
        let within = self
            .last_click
            .is_some_and(|last| now.saturating_duration_since(last) <= self.timeout);
        self.click_count = if within {
            self.click_count % 3 + 1
        } else {
            1
        };
        self.last_click = Some(now);
        self.click_count
    }
}

/// The single-document editor: buffer, cursor, selection, history and viewport.
pub struct EditorState {
    pub(super) config: EditorConfig,
    pub(super) buffer: TextBuffer,
    pub(super) cursor: Position,
    pub(super) preferred_col: Option<usize>,
    pub(super) selection: Selection,
    pub(super) history: EditHistory,
    pub(super) viewport: Viewport,
    pub(super) caret: CaretBlink,
    pub(super) mouse: EditorMouseState,
    pub(super) metadata: DocumentMetadata,
    revision: u64,
    document_changed: bool,
}

impl std::fmt::Debug for EditorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorState")
            .field("cursor", &self.cursor)
            .field("selection", &self.selection)
            .field("lines", &self.buffer.line_count())
            .field("revision", &self.revision)
            .finish()
    }
}

impl EditorState {
    pub fn new(config: EditorConfig) -> Self {
        Self::from_text("", config)
    }

    pub fn from_text(text: &str, config: EditorConfig) -> Self {
        Self::from_text_at(text, config, Instant::now())
    }

    pub fn from_text_at(text: &str, config: EditorConfig, now: Instant) -> Self {
        let buffer = TextBuffer::from_text_with_max_lines(text, config.max_lines);
        let history = EditHistory::new(buffer.serialize(), now).with_config(config.history());
        let mut viewport = Viewport::new(&config);
        viewport.sync_gutter(buffer.line_count());
        let metadata = DocumentMetadata::parse(&buffer.line_at(0).unwrap_or_default());
        let mouse = EditorMouseState::new(Duration::from_millis(config.multi_click_ms));

        Self {
            config,
            buffer,
            cursor: Position::origin(),
            preferred_col: None,
            selection: Selection::default(),
            history,
            viewport,
            caret: CaretBlink::new(),
            mouse,
            metadata,
            revision: 0,
            document_changed: false,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn preferred_col(&self) -> Option<usize> {
        self.preferred_col
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn caret(&self) -> &CaretBlink {
        &self.caret
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    pub fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    pub fn serialize(&self) -> String {
        self.buffer.serialize()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Reads and clears the "document changed" signal.
    pub fn take_document_changed(&mut self) -> bool {
        std::mem::take(&mut self.document_changed)
    }

    pub fn language(&self) -> LanguageId {
        self.metadata
            .language_hint()
            .map(LanguageId::from_hint)
            .unwrap_or_default()
    }

    pub fn theme(&self) -> ThemeId {
        self.metadata
            .theme_hint()
            .map(ThemeId::from_hint)
            .unwrap_or_default()
    }

    /// Blink tick from the host timer; returns the new visibility.
    pub fn toggle_caret(&mut self) -> bool {
        self.caret.toggle()
    }

    /// Places the cursor without touching the selection or history.
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = self.buffer.clamp(pos);
        self.preferred_col = None;
        self.after_cursor_move();
    }

    /// Replaces the document, resetting cursor, selection, scroll and history.
    pub fn load_text(&mut self, text: &str, now: Instant) {
        self.buffer.replace_text(text);
        self.cursor = Position::origin();
        self.preferred_col = None;
        self.selection.deactivate();
        self.history.reset(self.buffer.serialize(), now);
        self.viewport.scroll_x = 0.0;
        self.viewport.scroll_y = 0.0;
        tracing::debug!(lines = self.buffer.line_count(), "document loaded");
        self.after_text_change();
        self.after_cursor_move();
    }

    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if self.viewport.width == width && self.viewport.height == height {
            return false;
        }
        self.viewport.resize(width, height);
        self.follow_cursor();
        true
    }

    pub fn scroll_by(&mut self, delta_y: f32) -> bool {
        self.viewport.scroll_by(delta_y, self.buffer.line_count())
    }

    pub fn zoom(&mut self, font_size: f32) -> bool {
        let changed = self.viewport.zoom(font_size, self.buffer.line_count());
        if changed {
            self.follow_cursor();
        }
        changed
    }

    /// Extends or drops the selection after the cursor moved away from `old`.
    pub(super) fn apply_selection(&mut self, extend: bool, old: Position) {
        if !extend {
            self.selection.deactivate();
        } else if self.selection.is_active() {
            self.selection.set_active(self.cursor);
        } else {
            self.selection.start(old, self.cursor);
        }
    }

    pub(super) fn after_cursor_move(&mut self) {
        self.caret.force_visible();
        self.follow_cursor();
    }

    pub(super) fn after_text_change(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.document_changed = true;
        self.cursor = self.buffer.clamp(self.cursor);
        let anchor = self.buffer.clamp(self.selection.anchor());
        let active = self.buffer.clamp(self.selection.active());
        self.selection.set_anchor(anchor);
        self.selection.set_active(active);
        self.metadata = DocumentMetadata::parse(&self.buffer.line_at(0).unwrap_or_default());
        self.viewport.sync_gutter(self.buffer.line_count());
    }

    fn follow_cursor(&mut self) {
        let line_count = self.buffer.line_count();
        self.viewport.ensure_visible(self.cursor, line_count);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/state.rs"]
mod tests;
