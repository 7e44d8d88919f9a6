//! Todo List Library
//!
//! This library provides a local todo list: items with a description,
//! priority, optional due date and status, kept in memory and written through
//! to a persistent key-value slot on every change.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Presentation Layer**: the `todo-list` binary - parses commands and renders results
//! - **Domain Layer**: `store` and `todo` modules - the todo collection and its operations
//! - **Persistence Layer**: `storage` module - JSON document in a key-value slot
//!
//! # Example
//!
//! ```
//! use todo_list::{FormPolicy, MemoryStore, Priority, StatusFilter, TodoStore};
//! use chrono::NaiveDate;
//!
//! let mut store = TodoStore::initialize(MemoryStore::new(), FormPolicy::default());
//! let item = store
//!     .add("Buy milk", Priority::High, NaiveDate::from_ymd_opt(2024, 1, 10))
//!     .unwrap();
//! store.toggle_status(&item.id).unwrap();
//! assert_eq!(store.filter_by_status(StatusFilter::All).len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod storage;
pub mod store;
pub mod todo;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{TodoError, TodoResult};
pub use storage::{FileStore, KeyValueStore, MemoryStore, STORAGE_KEY, TodoStorage};
pub use store::TodoStore;
pub use todo::{Priority, StatusFilter, TodoItem, TodoPatch, TodoStatus};
pub use validation::FormPolicy;
