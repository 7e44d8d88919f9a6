use crate::error::TodoError;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Lowercases and folds `_`/`-` into spaces so "not_started", "Not-Started"
/// and "Not Started" compare equal.
fn normalize_token(s: &str) -> String {
    s.trim().to_lowercase().replace(['_', '-'], " ")
}

/// Todo priority
///
/// Serialized with the capitalized names used by the persisted document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(TodoError::InvalidValue {
                field: "priority",
                value: s.to_string(),
            }),
        }
    }
}

/// Todo status
///
/// Items normally move `NotStarted -> InProgress -> Completed`. The toggle
/// shortcut jumps between `NotStarted` and `Completed` directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TodoStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::NotStarted => "Not Started",
            TodoStatus::InProgress => "In Progress",
            TodoStatus::Completed => "Completed",
        }
    }

    /// Status after a toggle: `Completed` goes back to `NotStarted`, anything
    /// else is completed.
    pub fn toggled(self) -> Self {
        match self {
            TodoStatus::Completed => TodoStatus::NotStarted,
            TodoStatus::NotStarted | TodoStatus::InProgress => TodoStatus::Completed,
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TodoStatus {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "not started" => Ok(TodoStatus::NotStarted),
            "in progress" => Ok(TodoStatus::InProgress),
            "completed" => Ok(TodoStatus::Completed),
            _ => Err(TodoError::InvalidValue {
                field: "status",
                value: s.to_string(),
            }),
        }
    }
}

/// Status filter used by list views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TodoStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: TodoStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl From<TodoStatus> for StatusFilter {
    fn from(status: TodoStatus) -> Self {
        StatusFilter::Only(status)
    }
}

impl FromStr for StatusFilter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if normalize_token(s) == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse::<TodoStatus>()
            .map(StatusFilter::Only)
            .map_err(|_| TodoError::InvalidValue {
                field: "status filter",
                value: s.to_string(),
            })
    }
}

/// A single todo item
///
/// Field names serialize in camelCase so the persisted document reads
/// `{"id", "description", "priority", "dueDate", "status"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Unique identifier, assigned at creation and never changed
    pub id: String,
    /// Free-form description
    pub description: String,
    pub priority: Priority,
    /// Optional due date; the time of day is not tracked
    #[serde(
        default,
        with = "super::serde_impl::due_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<NaiveDate>,
    pub status: TodoStatus,
}

impl TodoItem {
    /// Create a new item with a fresh id and status `NotStarted`
    pub fn new(
        description: impl Into<String>,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            priority,
            due_date,
            status: TodoStatus::NotStarted,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TodoStatus::Completed
    }

    /// Check whether the item is past due on `today`
    ///
    /// Completed items are never overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_completed() && self.due_date.is_some_and(|due| due < today)
    }

    /// Overwrite every field the patch carries; `id` is left untouched
    pub fn apply(&mut self, patch: TodoPatch) {
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    pub fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }
}

/// Field changes submitted by the edit form
///
/// `None` keeps the current value. For `due_date`, `Some(None)` clears the
/// date and `Some(Some(d))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<NaiveDate>>,
    pub status: Option<TodoStatus>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
    }
}
