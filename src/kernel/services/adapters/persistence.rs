//! 编辑器与文档存储之间的防抖保存

use crate::kernel::editor::EditorState;
use crate::kernel::services::ports::config::EditorConfig;
use crate::kernel::services::ports::storage::{DocumentStore, Result, StoredDocument};
use std::time::{Duration, Instant};

use super::save_debouncer::SaveDebouncer;

pub struct PersistenceService<S: DocumentStore> {
    store: S,
    id: String,
    debouncer: SaveDebouncer,
}

impl<S: DocumentStore> PersistenceService<S> {
    pub fn new(store: S, id: impl Into<String>, delay: Duration) -> Self {
        Self {
            store,
            id: id.into(),
            debouncer: SaveDebouncer::new(delay),
        }
    }

    pub fn from_config(store: S, id: impl Into<String>, config: &EditorConfig) -> Self {
        Self::new(store, id, Duration::from_millis(config.save_debounce_ms))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_save_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Loads the stored document into `editor`. Returns whether one existed.
    pub fn restore(&mut self, editor: &mut EditorState, now: Instant) -> Result<bool> {
        let doc = self.store.load(&self.id).inspect_err(|e| {
            tracing::warn!(id = %self.id, error = %e, "restore failed");
        })?;
        let Some(doc) = doc else {
            return Ok(false);
        };
        editor.load_text(&doc.text, now);
        editor.take_document_changed();
        self.debouncer.cancel();
        tracing::info!(id = %self.id, lines = editor.line_count(), "document restored");
        Ok(true)
    }

    /// Consumes the editor's change signal and (re)schedules a save.
    pub fn note_change(&mut self, editor: &mut EditorState, now: Instant) -> bool {
        if !editor.take_document_changed() {
            return false;
        }
        self.debouncer.schedule(now);
        true
    }

    /// Saves when the quiet period has elapsed. Returns whether a save happened.
    pub fn poll(&mut self, editor: &EditorState, now: Instant) -> Result<bool> {
        if !self.debouncer.poll(now) {
            return Ok(false);
        }
        self.save(editor)?;
        Ok(true)
    }

    /// Saves immediately if a save is scheduled.
    pub fn flush(&mut self, editor: &EditorState) -> Result<bool> {
        if !self.debouncer.is_pending() {
            return Ok(false);
        }
        self.debouncer.cancel();
        self.save(editor)?;
        Ok(true)
    }

    fn save(&mut self, editor: &EditorState) -> Result<()> {
        let doc = StoredDocument::new(self.id.clone(), editor.serialize());
        self.store.save(&doc).inspect_err(|e| {
            tracing::warn!(id = %self.id, error = %e, "save failed");
        })
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/persistence.rs"]
mod tests;
