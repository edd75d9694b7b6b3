use serde::{Deserialize, Serialize};
use std::{fmt, io};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: String,
    pub text: String,
}

impl StoredDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Serde(serde_json::Error),
    InvalidId(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "storage io error: {e}"),
            StorageError::Serde(e) => write!(f, "malformed stored document: {e}"),
            StorageError::InvalidId(id) => write!(f, "invalid document id: {id:?}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Serde(e) => Some(e),
            StorageError::InvalidId(_) => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serde(e)
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Where documents are persisted. Identity and medium are up to the implementor.
pub trait DocumentStore {
    fn load(&self, id: &str) -> Result<Option<StoredDocument>>;
    fn save(&mut self, doc: &StoredDocument) -> Result<()>;
}
