use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo record.
///
/// Todos are owned exclusively by the repository. The `id` is assigned by the
/// repository's allocator and is never reused, even after deletion;
/// `created_at` is stamped once at creation and never changes.
///
/// # Examples
///
/// ```rust
/// use todo_core::models::Todo;
/// use chrono::Utc;
///
/// let todo = Todo {
///     id: 1,
///     title: "Write the report".to_string(),
///     description: String::new(),
///     completed: false,
///     created_at: Utc::now(),
/// };
/// assert!(!todo.completed);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    /// Monotonically allocated identifier, unique for the process lifetime
    pub id: u64,
    /// Short title, never empty for a stored todo
    pub title: String,
    /// Free-form description, defaults to empty
    pub description: String,
    /// Completion flag
    pub completed: bool,
    /// Creation timestamp, immutable after insert
    pub created_at: DateTime<Utc>,
}

/// Data transfer object for creating a todo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTodo {
    /// Required title; creation is rejected when empty
    pub title: String,
    /// Optional description
    #[serde(default)]
    pub description: String,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
        }
    }

    pub fn with_description(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Data transfer object for partial updates.
///
/// A field present in the payload is applied, a field absent is left
/// unchanged. Presence is the signal, not truthiness: `completed: false` and
/// an empty `description` are both applied when supplied.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UpdateTodo {
    /// Optional new title; an empty value fails validation
    pub title: Option<String>,
    /// Optional new description; empty is allowed
    pub description: Option<String>,
    /// Optional new completion flag
    pub completed: Option<bool>,
}

impl UpdateTodo {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field is supplied; such an update still succeeds and
    /// returns the current state.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

/// Aggregate counts over the whole store. All fields are derived on demand,
/// never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodoSummary {
    /// Total number of todos
    pub total: u64,
    /// Number of completed todos
    pub completed: u64,
    /// Number of pending todos (`total - completed`)
    pub pending: u64,
    /// `completed / total`, or exactly 0.0 for an empty store
    pub completion_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_defaults_description() {
        let new_todo: NewTodo = serde_json::from_value(serde_json::json!({
            "title": "Learn X"
        }))
        .unwrap();
        assert_eq!(new_todo.title, "Learn X");
        assert_eq!(new_todo.description, "");
    }

    #[test]
    fn test_update_todo_is_empty() {
        assert!(UpdateTodo::new().is_empty());

        let update = UpdateTodo {
            completed: Some(false),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_update_todo_absent_fields_deserialize_to_none() {
        let update: UpdateTodo = serde_json::from_value(serde_json::json!({
            "completed": true
        }))
        .unwrap();
        assert_eq!(update.title, None);
        assert_eq!(update.description, None);
        assert_eq!(update.completed, Some(true));
    }

    #[test]
    fn test_todo_serializes_created_at_as_rfc3339() {
        let todo = Todo {
            id: 1,
            title: "Test".to_string(),
            description: String::new(),
            completed: false,
            created_at: "2024-03-01T12:00:00Z".parse().unwrap(),
        };

        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(value["id"], 1);
        assert!(value["created_at"]
            .as_str()
            .unwrap()
            .starts_with("2024-03-01T12:00:00"));
    }
}
