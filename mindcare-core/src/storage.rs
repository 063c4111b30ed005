//! In-memory key/value store used by tests and non-browser hosts.
use crate::KeyValueStore;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage rejected write for `{key}`")]
    Rejected { key: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Mode {
    #[default]
    ReadWrite,
    ReadOnly,
    Unavailable,
}

/// Shared map-backed store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    mode: Mode,
}

impl MemoryStore {
    /// A store whose reads succeed but whose writes are rejected.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            mode: Mode::ReadOnly,
            ..Self::default()
        }
    }

    /// A store that fails every operation, like a browser with storage disabled.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            mode: Mode::Unavailable,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    type Error = StorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        if self.mode == Mode::Unavailable {
            return Err(StorageError::Unavailable("memory store disabled".into()));
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        match self.mode {
            Mode::ReadWrite => {
                self.entries
                    .borrow_mut()
                    .insert(key.to_string(), value.to_string());
                Ok(())
            }
            Mode::ReadOnly => Err(StorageError::Rejected {
                key: key.to_string(),
            }),
            Mode::Unavailable => Err(StorageError::Unavailable("memory store disabled".into())),
        }
    }
}
