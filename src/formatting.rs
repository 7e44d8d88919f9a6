//! Formatting helper functions for the todo list
//!
//! This module renders todo items as plain text for the command line.

use crate::todo::TodoItem;
use chrono::NaiveDate;

/// Format a single todo as a short block
///
/// # Arguments
/// * `todo` - The item to render
/// * `today` - Reference date used to flag overdue items
pub fn format_todo(todo: &TodoItem, today: NaiveDate) -> String {
    let check = if todo.is_completed() { "x" } else { " " };
    let mut result = format!("- [{}] {} ({})\n", check, todo.description, todo.id);
    result.push_str(&format!("  Priority: {}\n", todo.priority));
    if let Some(due) = todo.due_date {
        let overdue = if todo.is_overdue(today) { " (overdue)" } else { "" };
        result.push_str(&format!("  Due: {}{}\n", due.format("%Y-%m-%d"), overdue));
    }
    result.push_str(&format!("  Status: {}\n", todo.status));
    result
}

/// Format a list of todos into a display string
///
/// # Arguments
/// * `todos` - Items to render, in display order
/// * `today` - Reference date used to flag overdue items
///
/// # Returns
/// Formatted string representation of the todos
pub fn format_todos<'a>(todos: impl IntoIterator<Item = &'a TodoItem>, today: NaiveDate) -> String {
    let todos: Vec<&TodoItem> = todos.into_iter().collect();
    if todos.is_empty() {
        return "No todos found".to_string();
    }

    let mut result = format!("Found {} todo(s):\n\n", todos.len());
    for todo in todos {
        result.push_str(&format_todo(todo, today));
    }
    result
}
