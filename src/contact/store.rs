use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::JsValue;

use super::models::Submission;
use crate::config;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("stored submissions are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// String key-value storage with the localStorage contract.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

fn js_reason(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// `window.localStorage`, resolved lazily on every access.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }
}

/// In-memory storage. `fail_writes` simulates a full quota.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: std::cell::RefCell<std::collections::HashMap<String, String>>,
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = MemoryStorage::default();
        storage.items.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn failing() -> Self {
        MemoryStorage {
            fail_writes: true,
            ..MemoryStorage::default()
        }
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            });
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Bounded, newest-first log of contact submissions under a single key.
pub struct RecordStore<S> {
    storage: S,
    key: String,
    capacity: usize,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_capacity(storage, config::SUBMISSIONS_KEY, config::SUBMISSIONS_CAPACITY)
    }

    pub fn with_capacity(storage: S, key: &str, capacity: usize) -> Self {
        RecordStore {
            storage,
            key: key.to_string(),
            capacity,
        }
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    // An empty value reads the same as a missing key.
    fn read_text(&self) -> Result<Option<String>, StoreError> {
        Ok(self.storage.get_item(&self.key)?.filter(|text| !text.is_empty()))
    }

    // Entries are kept as raw JSON so records written by other code survive a prepend.
    fn read_raw(&self) -> Result<Vec<Value>, StoreError> {
        match self.read_text()? {
            Some(text) => Ok(serde_json::from_str(&text)?),
            None => Ok(Vec::new()),
        }
    }

    /// Prepends `record` and truncates to capacity. Returns the new length.
    pub fn append(&self, record: &Submission) -> Result<usize, StoreError> {
        let mut entries = self.read_raw()?;
        entries.insert(0, serde_json::to_value(record)?);
        entries.truncate(self.capacity);

        let text = serde_json::to_string(&entries)?;
        self.storage.set_item(&self.key, &text)?;
        Ok(entries.len())
    }

    pub fn load(&self) -> Result<Vec<Submission>, StoreError> {
        match self.read_text()? {
            Some(text) => Ok(serde_json::from_str(&text)?),
            None => Ok(Vec::new()),
        }
    }
}
