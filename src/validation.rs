//! Validation helpers for todo input
//!
//! This module holds the add-form policy and the parsers that turn
//! user-supplied strings into priorities, status filters and dates.

use crate::error::{TodoError, TodoResult};
use crate::todo::{Priority, StatusFilter, TodoStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rules the add form enforces before a todo may be created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormPolicy {
    /// Reject new todos without a due date
    pub require_due_date: bool,
    /// Priority preselected when the form is reset
    pub default_priority: Priority,
}

impl Default for FormPolicy {
    fn default() -> Self {
        Self {
            require_due_date: true,
            default_priority: Priority::Medium,
        }
    }
}

impl FormPolicy {
    /// Check whether the add form may be submitted
    ///
    /// # Arguments
    /// * `description` - Raw description text; must not be blank after trimming
    /// * `due_date` - Chosen due date, if any
    pub fn validate_new_todo(
        &self,
        description: &str,
        due_date: Option<NaiveDate>,
    ) -> TodoResult<()> {
        if description.trim().is_empty() {
            return Err(TodoError::Validation {
                reason: "description must not be empty".to_string(),
            });
        }
        if self.require_due_date && due_date.is_none() {
            return Err(TodoError::Validation {
                reason: "a due date is required".to_string(),
            });
        }
        Ok(())
    }

    pub fn is_form_valid(&self, description: &str, due_date: Option<NaiveDate>) -> bool {
        self.validate_new_todo(description, due_date).is_ok()
    }
}

/// Parse a due date typed by the user
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
pub fn parse_due_date_input(date_str: &str) -> TodoResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| TodoError::InvalidValue {
        field: "due date (use YYYY-MM-DD, e.g. '2025-03-15')",
        value: date_str.to_string(),
    })
}

pub fn parse_priority(priority_str: &str) -> TodoResult<Priority> {
    priority_str.parse()
}

pub fn parse_status(status_str: &str) -> TodoResult<TodoStatus> {
    status_str.parse()
}

pub fn parse_status_filter(filter_str: &str) -> TodoResult<StatusFilter> {
    filter_str.parse()
}

/// Normalize a todo ID typed by the user
///
/// IDs are opaque; only surrounding whitespace is stripped.
pub fn normalize_todo_id(id: &str) -> String {
    id.trim().to_string()
}
