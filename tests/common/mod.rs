//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;
use todo_list::{FileStore, FormPolicy, MemoryStore, TodoStore};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Form policy that accepts todos without a due date
pub fn relaxed_policy() -> FormPolicy {
    FormPolicy {
        require_due_date: false,
        ..Default::default()
    }
}

/// Create a store backed by memory
pub fn get_memory_store() -> TodoStore<MemoryStore> {
    TodoStore::initialize(MemoryStore::new(), relaxed_policy())
}

/// Create a store backed by a temporary directory
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn get_file_store() -> (TodoStore<FileStore>, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = TodoStore::initialize(FileStore::new(dir.path()), relaxed_policy());
    (store, dir)
}
