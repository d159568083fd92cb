use thiserror::Error;

/// Result type alias for todo operations
pub type Result<T> = std::result::Result<T, TodoError>;

/// Error types for the todo service.
///
/// These cover every failure mode an operation can surface, and each maps to
/// an HTTP status code so the protocol bindings translate the same value the
/// same way.
///
/// # Examples
///
/// ```rust
/// use todo_core::error::TodoError;
///
/// let not_found = TodoError::not_found_id(42);
/// assert!(not_found.is_not_found());
/// assert_eq!(not_found.status_code(), 404);
///
/// let invalid = TodoError::empty_field("title");
/// assert!(invalid.is_validation());
/// assert_eq!(invalid.status_code(), 400);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// Todo not found by the given identifier
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error with details
    #[error("Validation error: {0}")]
    Validation(String),

    /// Tool or resource name not present in the operation catalog.
    /// Distinct from NotFound: the name is wrong, not the todo id.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Internal system error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TodoError {
    /// Create a not found error for a todo ID
    pub fn not_found_id(id: u64) -> Self {
        Self::NotFound(format!("Todo with ID {id} not found"))
    }

    /// Create a validation error for an empty field
    pub fn empty_field(field: &str) -> Self {
        Self::Validation(format!("Field '{field}' cannot be empty"))
    }

    /// Create an unknown-operation error for a tool name
    pub fn unknown_tool(name: &str) -> Self {
        Self::UnknownOperation(format!("Tool '{name}' not found"))
    }

    /// Create an unknown-operation error for a resource name
    pub fn unknown_resource(name: &str) -> Self {
        Self::UnknownOperation(format!("Resource '{name}' not found"))
    }

    /// Check if this error indicates a missing todo
    pub fn is_not_found(&self) -> bool {
        matches!(self, TodoError::NotFound(_))
    }

    /// Check if this error indicates a validation problem
    pub fn is_validation(&self) -> bool {
        matches!(self, TodoError::Validation(_))
    }

    /// Check if this error indicates an unregistered operation name
    pub fn is_unknown_operation(&self) -> bool {
        matches!(self, TodoError::UnknownOperation(_))
    }

    /// Convert to the appropriate HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            TodoError::NotFound(_) => 404,
            TodoError::Validation(_) => 400,
            TodoError::UnknownOperation(_) => 404,
            TodoError::Internal(_) => 500,
        }
    }
}
