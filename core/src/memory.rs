//! In-memory repository implementation.
//!
//! The authoritative store for the process lifetime: a BTreeMap keyed by id
//! behind a single RwLock. Ids are monotonic, so iteration order is
//! insertion order. The allocator lives inside the same lock as the map,
//! which makes id allocation and insertion one atomic step.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;

use crate::{
    error::{Result, TodoError},
    models::{NewTodo, Todo, TodoSummary, UpdateTodo},
    repository::TodoRepository,
};

/// Produces unique, strictly increasing identifiers. Deleted ids are never
/// reissued because the counter only moves forward.
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Start above the given id, for stores seeded with existing records
    pub fn starting_after(max_id: u64) -> Self {
        Self { next: max_id + 1 }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

struct Store {
    todos: BTreeMap<u64, Todo>,
    allocator: IdAllocator,
}

/// Thread-safe in-memory implementation of [`TodoRepository`].
///
/// Reads take the shared lock and may run concurrently; mutations take the
/// exclusive lock, so concurrent creates can never receive the same id and
/// a delete racing an update resolves to one consistent final state.
pub struct InMemoryTodoRepository {
    store: RwLock<Store>,
}

impl InMemoryTodoRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                todos: BTreeMap::new(),
                allocator: IdAllocator::new(),
            }),
        }
    }

    /// Create a repository pre-populated with todos, continuing id
    /// allocation above the highest seeded id.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let mut map = BTreeMap::new();
        let mut max_id = 0;
        for todo in todos {
            max_id = max_id.max(todo.id);
            map.insert(todo.id, todo);
        }
        Self {
            store: RwLock::new(Store {
                todos: map,
                allocator: IdAllocator::starting_after(max_id),
            }),
        }
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(TodoError::empty_field("title"));
    }
    Ok(())
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, todo: NewTodo) -> Result<Todo> {
        validate_title(&todo.title)?;

        let mut store = self.store.write();
        let id = store.allocator.next_id();
        let new_todo = Todo {
            id,
            title: todo.title,
            description: todo.description,
            completed: false,
            created_at: Utc::now(),
        };
        store.todos.insert(id, new_todo.clone());
        debug!(id, "todo created");

        Ok(new_todo)
    }

    async fn get(&self, id: u64) -> Result<Todo> {
        let store = self.store.read();
        store
            .todos
            .get(&id)
            .cloned()
            .ok_or_else(|| TodoError::not_found_id(id))
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        let store = self.store.read();
        // BTreeMap iterates in id order, which is insertion order
        Ok(store.todos.values().cloned().collect())
    }

    async fn update(&self, id: u64, updates: UpdateTodo) -> Result<Todo> {
        // Validate before touching the record so the call is all-or-nothing
        if let Some(ref title) = updates.title {
            validate_title(title)?;
        }

        let mut store = self.store.write();
        let todo = store
            .todos
            .get_mut(&id)
            .ok_or_else(|| TodoError::not_found_id(id))?;

        if let Some(title) = updates.title {
            todo.title = title;
        }
        if let Some(description) = updates.description {
            todo.description = description;
        }
        if let Some(completed) = updates.completed {
            todo.completed = completed;
        }
        debug!(id, "todo updated");

        Ok(todo.clone())
    }

    async fn delete(&self, id: u64) -> Result<Todo> {
        let mut store = self.store.write();
        let removed = store
            .todos
            .remove(&id)
            .ok_or_else(|| TodoError::not_found_id(id))?;
        debug!(id, "todo deleted");

        Ok(removed)
    }

    async fn summary(&self) -> Result<TodoSummary> {
        let store = self.store.read();
        let total = store.todos.len() as u64;
        let completed = store.todos.values().filter(|t| t.completed).count() as u64;
        let completion_rate = if total > 0 {
            completed as f64 / total as f64
        } else {
            0.0
        };

        Ok(TodoSummary {
            total,
            completed,
            pending: total - completed,
            completion_rate,
        })
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
