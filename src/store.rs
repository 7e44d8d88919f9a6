//! The todo store
//!
//! [`TodoStore`] owns the authoritative in-memory collection. Every mutation
//! is written through to its [`TodoStorage`] before the call returns.

use chrono::NaiveDate;
use log::debug;

use crate::error::{TodoError, TodoResult};
use crate::storage::{KeyValueStore, TodoStorage};
use crate::todo::{Priority, StatusFilter, TodoItem, TodoPatch};
use crate::validation::FormPolicy;

pub struct TodoStore<S> {
    /// Items in insertion order
    todos: Vec<TodoItem>,
    storage: TodoStorage<S>,
    policy: FormPolicy,
}

impl<S: KeyValueStore> TodoStore<S> {
    /// Create a store seeded from whatever the backend holds
    ///
    /// A missing or unreadable slot yields an empty store.
    pub fn initialize(backend: S, policy: FormPolicy) -> Self {
        let storage = TodoStorage::new(backend);
        let todos = storage.load();
        debug!("todo store initialized with {} item(s)", todos.len());
        Self {
            todos,
            storage,
            policy,
        }
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn policy(&self) -> &FormPolicy {
        &self.policy
    }

    pub fn storage(&self) -> &TodoStorage<S> {
        &self.storage
    }

    pub fn get(&self, id: &str) -> Option<&TodoItem> {
        self.todos.iter().find(|t| t.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut TodoItem> {
        self.todos.iter_mut().find(|t| t.id == id)
    }

    fn persist(&mut self) {
        self.storage.save(&self.todos);
    }

    /// Add a new todo
    ///
    /// # Arguments
    /// * `description` - What needs doing; rejected when blank
    /// * `priority` - High, Medium or Low
    /// * `due_date` - Optional due date; rejected when absent and the form
    ///   policy requires one
    ///
    /// # Returns
    /// The created item, with a fresh id and status `NotStarted`
    pub fn add(
        &mut self,
        description: impl Into<String>,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> TodoResult<TodoItem> {
        let description = description.into();
        self.policy.validate_new_todo(&description, due_date)?;

        let todo = TodoItem::new(description, priority, due_date);
        debug!("adding todo {}", todo.id);
        self.todos.push(todo.clone());
        self.persist();
        Ok(todo)
    }

    /// Apply an edit to the todo with `id`
    pub fn update(&mut self, id: &str, patch: TodoPatch) -> TodoResult<TodoItem> {
        let todo = self.find_mut(id).ok_or_else(|| TodoError::not_found(id))?;
        todo.apply(patch);
        let updated = todo.clone();
        debug!("updated todo {}", id);
        self.persist();
        Ok(updated)
    }

    /// Flip a todo between completed and not started
    ///
    /// An in-progress todo is completed by a toggle.
    pub fn toggle_status(&mut self, id: &str) -> TodoResult<TodoItem> {
        let todo = self.find_mut(id).ok_or_else(|| TodoError::not_found(id))?;
        todo.toggle_status();
        let toggled = todo.clone();
        debug!("toggled todo {} to {}", id, toggled.status);
        self.persist();
        Ok(toggled)
    }

    /// Remove the todo with `id`
    ///
    /// # Returns
    /// `true` if an item was removed. The collection is saved either way.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        let removed = self.todos.len() != before;
        debug!("remove todo {}: removed={}", id, removed);
        self.persist();
        removed
    }

    /// Items matching `filter`, in collection order
    pub fn filter_by_status(&self, filter: StatusFilter) -> Vec<&TodoItem> {
        self.todos
            .iter()
            .filter(|t| filter.matches(t.status))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, STORAGE_KEY};
    use crate::todo::TodoStatus;

    fn due() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 1, 10)
    }

    fn new_store() -> TodoStore<MemoryStore> {
        TodoStore::initialize(MemoryStore::new(), FormPolicy::default())
    }

    #[test]
    fn test_buy_milk_scenario() {
        let mut store = new_store();

        let item = store.add("Buy milk", Priority::High, due()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(item.status, TodoStatus::NotStarted);

        let item = store.toggle_status(&item.id).unwrap();
        assert_eq!(item.status, TodoStatus::Completed);

        let item = store.toggle_status(&item.id).unwrap();
        assert_eq!(item.status, TodoStatus::NotStarted);

        assert!(store.remove(&item.id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_rejected_by_policy_does_not_persist() {
        let mut store = new_store();
        assert!(store.add("  ", Priority::Low, due()).is_err());
        assert!(store.add("No date", Priority::Low, None).is_err());
        assert!(store.is_empty());
        assert_eq!(store.storage().backend().get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_every_mutation_is_saved() {
        let mut store = new_store();
        let item = store.add("Call mom", Priority::Medium, due()).unwrap();
        assert_eq!(store.storage().load(), store.todos());

        store
            .update(
                &item.id,
                TodoPatch {
                    status: Some(TodoStatus::InProgress),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(store.storage().load()[0].status, TodoStatus::InProgress);

        store.toggle_status(&item.id).unwrap();
        assert_eq!(store.storage().load()[0].status, TodoStatus::Completed);

        store.remove(&item.id);
        assert!(store.storage().load().is_empty());
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let mut store = new_store();
        assert_eq!(
            store.update("nope", TodoPatch::default()),
            Err(TodoError::not_found("nope"))
        );
        assert_eq!(store.toggle_status("nope"), Err(TodoError::not_found("nope")));
        assert!(!store.remove("nope"));
    }

    #[test]
    fn test_filter_does_not_mutate() {
        let mut store = new_store();
        let a = store.add("a", Priority::High, due()).unwrap();
        store.add("b", Priority::Low, due()).unwrap();
        store.toggle_status(&a.id).unwrap();

        let completed = store.filter_by_status(StatusFilter::Only(TodoStatus::Completed));
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, a.id);
        assert_eq!(store.filter_by_status(StatusFilter::All).len(), 2);
        assert_eq!(store.len(), 2);
    }
}
