//! Error translation for the protocol bindings.
//!
//! Each binding maps the core taxonomy to its own surface vocabulary:
//! status codes plus an `{"error": ...}` body for REST, a structured
//! `{kind, message}` failure for the tool surface. Neither invents new
//! error meaning; the message text is the core error's and is identical
//! on both surfaces.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use todo_core::TodoError;

/// REST error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Translates a [`TodoError`] into a REST response
#[derive(Debug)]
pub struct RestError(pub TodoError);

impl From<TodoError> for RestError {
    fn from(err: TodoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Failure classes exposed on the tool surface
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Validation,
    NotFound,
    /// Tool or resource name not in the catalog; never conflated with a
    /// missing todo id
    UnknownOperation,
    Internal,
}

/// Structured failure returned by the tool/resource binding
#[derive(Debug, Serialize)]
pub struct ToolFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl ToolFailure {
    pub fn status(&self) -> StatusCode {
        match self.kind {
            FailureKind::Validation => StatusCode::BAD_REQUEST,
            FailureKind::NotFound => StatusCode::NOT_FOUND,
            FailureKind::UnknownOperation => StatusCode::NOT_FOUND,
            FailureKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TodoError> for ToolFailure {
    fn from(err: TodoError) -> Self {
        let kind = match err {
            TodoError::Validation(_) => FailureKind::Validation,
            TodoError::NotFound(_) => FailureKind::NotFound,
            TodoError::UnknownOperation(_) => FailureKind::UnknownOperation,
            TodoError::Internal(_) => FailureKind::Internal,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ToolFailure {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kind_mapping() {
        let failure = ToolFailure::from(TodoError::empty_field("title"));
        assert_eq!(failure.kind, FailureKind::Validation);
        assert_eq!(failure.status(), StatusCode::BAD_REQUEST);

        let failure = ToolFailure::from(TodoError::not_found_id(3));
        assert_eq!(failure.kind, FailureKind::NotFound);
        assert_eq!(failure.status(), StatusCode::NOT_FOUND);

        let failure = ToolFailure::from(TodoError::unknown_tool("not_a_tool"));
        assert_eq!(failure.kind, FailureKind::UnknownOperation);
        assert_eq!(failure.status(), StatusCode::NOT_FOUND);

        let failure = ToolFailure::from(TodoError::Internal("boom".to_string()));
        assert_eq!(failure.kind, FailureKind::Internal);
        assert_eq!(failure.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let failure = ToolFailure::from(TodoError::unknown_resource("x"));
        let value = serde_json::to_value(&failure).unwrap();
        assert_eq!(value["kind"], "unknown_operation");
        assert!(value["message"].as_str().unwrap().contains('x'));
    }

    #[test]
    fn test_rest_and_tool_surfaces_share_message_text() {
        let err = TodoError::empty_field("title");
        let rest_message = err.to_string();
        let tool = ToolFailure::from(err);
        assert_eq!(tool.message, rest_message);
    }
}
