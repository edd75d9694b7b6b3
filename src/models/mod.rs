//! 数据模型层

pub mod edit_history;
pub mod position;
pub mod selection;
pub mod text_buffer;
pub mod word;

pub use edit_history::{EditHistory, EditHistoryConfig, SnapshotReason};
pub use position::Position;
pub use selection::{LineSpan, Selection};
pub use text_buffer::{slice_to_cow, TextBuffer, DEFAULT_MAX_LINES};
