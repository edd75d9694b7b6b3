//! Service adapters: file-system and timing implementations.

pub mod config;
pub mod persistence;
pub mod save_debouncer;
pub mod storage;

pub use config::{load_config, load_config_or_default, write_default_config, ConfigError};
pub use persistence::PersistenceService;
pub use save_debouncer::SaveDebouncer;
pub use storage::{JsonFileStore, MemoryStore, DEFAULT_DOCUMENT_ID};
