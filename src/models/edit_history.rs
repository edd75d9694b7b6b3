//! 编辑历史管理（快照模型）
//!
//! - 每个条目是整篇文档的序列化文本，不存差异
//! - undo / redo 两个有界栈，溢出时丢弃最旧条目
//! - 连续输入的普通字符合并为一个快照

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::word::is_special_char;

/// 每个栈最多保留的快照数
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// 普通字符输入的合并窗口（毫秒）
pub const DEFAULT_COALESCE_WINDOW_MS: u64 = 1000;

#[derive(Clone, Debug)]
pub struct EditHistoryConfig {
    pub capacity: usize,
    pub coalesce_window_ms: u64,
}

impl Default for EditHistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
            coalesce_window_ms: DEFAULT_COALESCE_WINDOW_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotReason {
    Edit,
    Replay,
}

#[derive(Debug)]
pub struct EditHistory {
    undo: VecDeque<String>,
    redo: VecDeque<String>,
    /// 当前文档领先于 undo 栈顶（有已合并但未提交的输入）
    pending: bool,
    last_snapshot: Instant,
    config: EditHistoryConfig,
}

impl EditHistory {
    pub fn new(initial: String, now: Instant) -> Self {
        let mut undo = VecDeque::new();
        undo.push_back(initial);
        Self {
            undo,
            redo: VecDeque::new(),
            pending: false,
            last_snapshot: now,
            config: EditHistoryConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EditHistoryConfig) -> Self {
        self.config = EditHistoryConfig {
            capacity: config.capacity.max(1),
            ..config
        };
        self
    }

    pub fn config(&self) -> &EditHistoryConfig {
        &self.config
    }

    /// 丢弃全部历史，只保留 `initial` 一个条目
    pub fn reset(&mut self, initial: String, now: Instant) {
        self.undo.clear();
        self.undo.push_back(initial);
        self.redo.clear();
        self.pending = false;
        self.last_snapshot = now;
    }

    pub fn snapshot(&mut self, text: String, reason: SnapshotReason, now: Instant) {
        push_bounded(&mut self.undo, text, self.config.capacity);
        if reason == SnapshotReason::Edit {
            self.redo.clear();
        }
        self.pending = false;
        self.last_snapshot = now;
        tracing::trace!(
            undo = self.undo.len(),
            redo = self.redo.len(),
            ?reason,
            "history snapshot"
        );
    }

    /// Whether inserting `text` may be merged into the pending state.
    pub fn can_coalesce(&self, text: &str, now: Instant) -> bool {
        let mut chars = text.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return false;
        };
        if is_special_char(c) {
            return false;
        }
        let window = Duration::from_millis(self.config.coalesce_window_ms);
        now.saturating_duration_since(self.last_snapshot) <= window
    }

    /// Records a merged keystroke: no snapshot, but redo is invalidated.
    pub fn mark_pending(&mut self) {
        self.pending = true;
        self.redo.clear();
    }

    /// Pushes `current` if merged keystrokes left it ahead of the undo top.
    pub fn commit_pending(&mut self, current: &str, now: Instant) {
        if !self.pending {
            return;
        }
        self.pending = false;
        if self.undo.back().map(String::as_str) == Some(current) {
            return;
        }
        self.snapshot(current.to_string(), SnapshotReason::Edit, now);
    }

    /// Returns the text to restore, or `None` when only the initial entry remains.
    pub fn undo(&mut self, current: &str, now: Instant) -> Option<String> {
        self.commit_pending(current, now);
        if self.undo.len() <= 1 {
            return None;
        }
        let top = self.undo.pop_back()?;
        push_bounded(&mut self.redo, top, self.config.capacity);
        let restored = self.undo.back().cloned();
        tracing::debug!(undo = self.undo.len(), redo = self.redo.len(), "undo");
        restored
    }

    /// Pops the newest redo entry and pushes that restored text onto undo as a
    /// `Replay` snapshot, leaving the rest of the redo stack intact. The
    /// pre-redo text is not pushed: it is already the undo top, so pushing it
    /// again would make the next undo a no-op instead of reversing the redo.
    pub fn redo(&mut self, now: Instant) -> Option<String> {
        let text = self.redo.pop_back()?;
        self.snapshot(text.clone(), SnapshotReason::Replay, now);
        tracing::debug!(undo = self.undo.len(), redo = self.redo.len(), "redo");
        Some(text)
    }

    pub fn can_undo(&self) -> bool {
        self.undo.len() > 1 || self.pending
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Undo entries, oldest first.
    pub fn undo_entries(&self) -> impl Iterator<Item = &str> {
        self.undo.iter().map(String::as_str)
    }
}

fn push_bounded(stack: &mut VecDeque<String>, text: String, capacity: usize) {
    stack.push_back(text);
    while stack.len() > capacity {
        stack.pop_front();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit_history.rs"]
mod tests;
