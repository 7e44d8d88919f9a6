//! Persistence for the todo collection
//!
//! The collection lives in a single key-value slot as a JSON array. Backends
//! implement [`KeyValueStore`]; [`TodoStorage`] owns the encoding and the
//! fall-back-to-empty policy on top of any backend.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::{TodoError, TodoResult};
use crate::todo::TodoItem;

/// Slot key the todo collection is stored under
pub const STORAGE_KEY: &str = "todoItems";

/// A persistent string slot keyed by name
pub trait KeyValueStore {
    /// Read a slot, `None` when it has never been written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace a slot's value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete a slot, returning whether it existed
    fn remove(&mut self, key: &str) -> Result<bool>;
}

/// In-memory backend
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.slots.remove(key).is_some())
    }
}

/// File backend: each slot is `<dir>/<key>.json`
///
/// Writes land in a temporary file next to the target and are renamed over
/// it, so readers see either the old or the new document.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;

        let path = self.slot_path(key);
        let mut tmp = NamedTempFile::new_in(&self.dir)
            .with_context(|| format!("failed to create temp file in {}", self.dir.display()))?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path)
            .with_context(|| format!("failed to replace {}", path.display()))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        let path = self.slot_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("failed to remove {}", path.display())),
        }
    }
}

/// Storage adapter for the todo collection
///
/// `load` and `save` never fail the caller: a missing or corrupt slot reads
/// as an empty collection and a failed write is logged and dropped. The
/// `try_` variants expose the underlying errors.
#[derive(Debug)]
pub struct TodoStorage<S> {
    backend: S,
}

impl<S: KeyValueStore> TodoStorage<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load the stored collection, falling back to an empty one
    pub fn load(&self) -> Vec<TodoItem> {
        match self.try_load() {
            Ok(todos) => {
                debug!("loaded {} todo(s) from '{}'", todos.len(), STORAGE_KEY);
                todos
            }
            Err(e) => {
                warn!("discarding stored todos: {}", e);
                Vec::new()
            }
        }
    }

    /// Load the stored collection, reporting read and parse failures
    ///
    /// An absent slot is an empty collection, not an error.
    pub fn try_load(&self) -> TodoResult<Vec<TodoItem>> {
        let Some(content) = self.backend.get(STORAGE_KEY)? else {
            return Ok(Vec::new());
        };
        let todos: Vec<TodoItem> = serde_json::from_str(&content)?;
        Ok(todos)
    }

    /// Persist the full collection, logging instead of failing
    pub fn save(&mut self, todos: &[TodoItem]) {
        if let Err(e) = self.try_save(todos) {
            warn!("failed to save {} todo(s): {}", todos.len(), e);
        }
    }

    /// Persist the full collection, overwriting the slot
    pub fn try_save(&mut self, todos: &[TodoItem]) -> TodoResult<()> {
        let content = serde_json::to_string(todos).map_err(|e| TodoError::Storage {
            reason: e.to_string(),
        })?;
        self.backend.set(STORAGE_KEY, &content)?;
        debug!("saved {} todo(s) to '{}'", todos.len(), STORAGE_KEY);
        Ok(())
    }

    /// Drop the stored collection entirely
    pub fn clear(&mut self) -> TodoResult<bool> {
        Ok(self.backend.remove(STORAGE_KEY)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::{Priority, TodoStatus};
    use chrono::NaiveDate;

    #[test]
    fn test_memory_store_slots() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);
        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert!(store.remove("a").unwrap());
        assert!(!store.remove("a").unwrap());
    }

    #[test]
    fn test_load_missing_slot_is_empty() {
        let storage = TodoStorage::new(MemoryStore::new());
        assert!(storage.try_load().unwrap().is_empty());
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_slot_is_empty() {
        let mut backend = MemoryStore::new();
        backend.set(STORAGE_KEY, "{not json").unwrap();
        let storage = TodoStorage::new(backend);

        assert!(matches!(
            storage.try_load(),
            Err(TodoError::Deserialization { .. })
        ));
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_save_writes_camel_case_document() {
        let mut storage = TodoStorage::new(MemoryStore::new());
        let mut item = TodoItem::new(
            "Buy milk",
            Priority::High,
            NaiveDate::from_ymd_opt(2024, 1, 10),
        );
        item.id = "fixed-id".to_string();
        storage.save(std::slice::from_ref(&item));

        let raw = storage.backend().get(STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "id": "fixed-id",
                "description": "Buy milk",
                "priority": "High",
                "dueDate": "2024-01-10T00:00:00.000Z",
                "status": "Not Started"
            }])
        );
    }

    #[test]
    fn test_save_omits_missing_due_date() {
        let mut storage = TodoStorage::new(MemoryStore::new());
        storage.save(&[TodoItem::new("No date", Priority::Low, None)]);

        let raw = storage.backend().get(STORAGE_KEY).unwrap().unwrap();
        assert!(!raw.contains("dueDate"));
        let loaded = storage.load();
        assert_eq!(loaded[0].due_date, None);
        assert_eq!(loaded[0].status, TodoStatus::NotStarted);
    }

    #[test]
    fn test_clear_removes_slot() {
        let mut storage = TodoStorage::new(MemoryStore::new());
        storage.save(&[TodoItem::new("x", Priority::Medium, None)]);
        assert!(storage.clear().unwrap());
        assert!(storage.load().is_empty());
    }
}
