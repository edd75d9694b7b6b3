//! Service ports: traits + data contracts.

pub mod config;
pub mod storage;

pub use config::EditorConfig;
pub use storage::{DocumentStore, Result as StorageResult, StorageError, StoredDocument};
