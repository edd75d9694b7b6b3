//! 文档存储适配器
//!
//! - JsonFileStore: 每个文档一个 `<id>.json`，写临时文件后 rename
//! - MemoryStore: 进程内存储（测试与无盘场景）

use crate::kernel::services::ports::storage::{
    DocumentStore, Result, StorageError, StoredDocument,
};
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_DOCUMENT_ID: &str = "default";

fn validate_id(id: &str) -> Result<()> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidId(id.to_string()))
    }
}

pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> Result<PathBuf> {
        validate_id(id)?;
        Ok(self.dir.join(format!("{id}.json")))
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self, id: &str) -> Result<Option<StoredDocument>> {
        let path = self.path_for(id)?;
        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let doc: StoredDocument = serde_json::from_str(&data)?;
        tracing::debug!(id, path = %path.display(), "document loaded");
        Ok(Some(doc))
    }

    fn save(&mut self, doc: &StoredDocument) -> Result<()> {
        let path = self.path_for(&doc.id)?;
        std::fs::create_dir_all(&self.dir)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec(doc)?)?;
        std::fs::rename(&tmp, &path)?;
        tracing::debug!(id = %doc.id, bytes = doc.text.len(), "document saved");
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    docs: FxHashMap<String, StoredDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self, id: &str) -> Result<Option<StoredDocument>> {
        validate_id(id)?;
        Ok(self.docs.get(id).cloned())
    }

    fn save(&mut self, doc: &StoredDocument) -> Result<()> {
        validate_id(&doc.id)?;
        self.docs.insert(doc.id.clone(), doc.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/storage.rs"]
mod tests;
