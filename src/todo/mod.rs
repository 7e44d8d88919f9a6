//! Todo domain model
//!
//! - `todo_item`: the TodoItem entity with its priority and status enums
//! - `serde_impl`: due date encoding for the persisted document

mod serde_impl;
mod todo_item;

pub use serde_impl::{format_due_date, parse_due_date};
pub use todo_item::{
    Priority, StatusFilter, TodoItem, TodoPatch, TodoStatus, local_date_today,
};
