//! Static operation catalog.
//!
//! The single place the service's operations are described: every entry
//! carries the name, the surface it belongs to (tool or resource), a
//! human-readable description and the argument schema. Both protocol
//! bindings derive their catalogs and their input validation from this
//! table, so adding or changing an operation is visible identically to
//! REST and tool callers.

use serde_json::{json, Map, Value};

use crate::error::{Result, TodoError};

/// Which invocation surface an operation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Parameterized or side-effecting, invoked by name with an argument payload
    Tool,
    /// Read-only, parameterless view over the whole store
    Resource,
}

/// JSON type expected for an argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Integer,
    String,
    Boolean,
}

impl ParamType {
    /// Wire name used in the generated catalog
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamType::Integer => "integer",
            ParamType::String => "string",
            ParamType::Boolean => "boolean",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            ParamType::Integer => value.is_u64(),
            ParamType::String => value.is_string(),
            ParamType::Boolean => value.is_boolean(),
        }
    }
}

/// Schema for a single operation argument
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub ty: ParamType,
    pub required: bool,
}

/// One entry in the operation catalog
#[derive(Debug, Clone, Copy)]
pub struct OperationSpec {
    pub name: &'static str,
    pub kind: OperationKind,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
}

/// Every operation the service exposes, tools first.
pub const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        name: "create_todo",
        kind: OperationKind::Tool,
        description: "Create a new todo item",
        params: &[
            ParamSpec {
                name: "title",
                ty: ParamType::String,
                required: true,
            },
            ParamSpec {
                name: "description",
                ty: ParamType::String,
                required: false,
            },
        ],
    },
    OperationSpec {
        name: "update_todo",
        kind: OperationKind::Tool,
        description: "Update fields of an existing todo item",
        params: &[
            ParamSpec {
                name: "id",
                ty: ParamType::Integer,
                required: true,
            },
            ParamSpec {
                name: "title",
                ty: ParamType::String,
                required: false,
            },
            ParamSpec {
                name: "description",
                ty: ParamType::String,
                required: false,
            },
            ParamSpec {
                name: "completed",
                ty: ParamType::Boolean,
                required: false,
            },
        ],
    },
    OperationSpec {
        name: "delete_todo",
        kind: OperationKind::Tool,
        description: "Delete a todo item by ID",
        params: &[ParamSpec {
            name: "id",
            ty: ParamType::Integer,
            required: true,
        }],
    },
    OperationSpec {
        name: "get_todo",
        kind: OperationKind::Tool,
        description: "Get a single todo item by ID",
        params: &[ParamSpec {
            name: "id",
            ty: ParamType::Integer,
            required: true,
        }],
    },
    OperationSpec {
        name: "list_todos",
        kind: OperationKind::Resource,
        description: "All todo items in creation order",
        params: &[],
    },
    OperationSpec {
        name: "todo_summary",
        kind: OperationKind::Resource,
        description: "Aggregate completion statistics for all todos",
        params: &[],
    },
];

/// Look up any operation by name
pub fn find(name: &str) -> Option<&'static OperationSpec> {
    OPERATIONS.iter().find(|op| op.name == name)
}

/// Look up a tool by name; resources are not addressable as tools
pub fn find_tool(name: &str) -> Option<&'static OperationSpec> {
    OPERATIONS
        .iter()
        .find(|op| op.kind == OperationKind::Tool && op.name == name)
}

/// Look up a resource by name; tools are not addressable as resources
pub fn find_resource(name: &str) -> Option<&'static OperationSpec> {
    OPERATIONS
        .iter()
        .find(|op| op.kind == OperationKind::Resource && op.name == name)
}

/// All registered tools, in declaration order
pub fn tools() -> impl Iterator<Item = &'static OperationSpec> {
    OPERATIONS.iter().filter(|op| op.kind == OperationKind::Tool)
}

/// All registered resources, in declaration order
pub fn resources() -> impl Iterator<Item = &'static OperationSpec> {
    OPERATIONS
        .iter()
        .filter(|op| op.kind == OperationKind::Resource)
}

impl OperationSpec {
    /// Validate an argument payload against this operation's schema.
    ///
    /// Checks that the payload is an object, that every required argument is
    /// present and non-null, that supplied arguments carry the declared JSON
    /// type, and that no unknown arguments are supplied. A JSON null counts
    /// as absent.
    pub fn validate_args(&self, args: &Value) -> Result<()> {
        let map: &Map<String, Value> = args.as_object().ok_or_else(|| {
            TodoError::Validation("Arguments must be a JSON object".to_string())
        })?;

        for param in self.params {
            match map.get(param.name) {
                None | Some(Value::Null) => {
                    if param.required {
                        return Err(TodoError::Validation(format!(
                            "Field '{}' is required",
                            param.name
                        )));
                    }
                }
                Some(value) => {
                    if !param.ty.matches(value) {
                        return Err(TodoError::Validation(format!(
                            "Field '{}' must be a {}",
                            param.name,
                            param.ty.type_name()
                        )));
                    }
                }
            }
        }

        for key in map.keys() {
            if !self.params.iter().any(|p| p.name == key) {
                return Err(TodoError::Validation(format!(
                    "Unknown argument '{key}' for operation '{}'",
                    self.name
                )));
            }
        }

        Ok(())
    }

    /// Render the argument schema for the generated tool catalog
    pub fn parameters_json(&self) -> Value {
        let mut params = Map::new();
        for param in self.params {
            params.insert(
                param.name.to_string(),
                json!({
                    "type": param.ty.type_name(),
                    "required": param.required,
                }),
            );
        }
        Value::Object(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registry_contents() {
        assert_eq!(OPERATIONS.len(), 6);
        assert_eq!(tools().count(), 4);
        assert_eq!(resources().count(), 2);

        assert!(find_tool("create_todo").is_some());
        assert!(find_tool("update_todo").is_some());
        assert!(find_tool("delete_todo").is_some());
        assert!(find_tool("get_todo").is_some());
        assert!(find_resource("list_todos").is_some());
        assert!(find_resource("todo_summary").is_some());
    }

    #[test]
    fn test_kind_separation() {
        // resources are not invocable as tools, and vice versa
        assert!(find_tool("list_todos").is_none());
        assert!(find_tool("todo_summary").is_none());
        assert!(find_resource("create_todo").is_none());
        assert!(find("not_an_operation").is_none());
    }

    #[test]
    fn test_validate_args_accepts_valid_payloads() {
        let create = find_tool("create_todo").unwrap();
        assert!(create.validate_args(&json!({"title": "Learn X"})).is_ok());
        assert!(create
            .validate_args(&json!({"title": "Learn X", "description": "soon"}))
            .is_ok());

        let update = find_tool("update_todo").unwrap();
        assert!(update.validate_args(&json!({"id": 1})).is_ok());
        assert!(update
            .validate_args(&json!({"id": 1, "completed": false}))
            .is_ok());
    }

    #[test]
    fn test_validate_args_missing_required() {
        let create = find_tool("create_todo").unwrap();
        let err = create.validate_args(&json!({})).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("title"));

        // explicit null counts as absent
        let err = create.validate_args(&json!({"title": null})).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_validate_args_wrong_type() {
        let get = find_tool("get_todo").unwrap();
        let err = get.validate_args(&json!({"id": "one"})).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("integer"));

        // negative ids never identify a todo
        assert!(get.validate_args(&json!({"id": -3})).is_err());
    }

    #[test]
    fn test_validate_args_rejects_unknown_and_non_object() {
        let delete = find_tool("delete_todo").unwrap();
        let err = delete
            .validate_args(&json!({"id": 1, "force": true}))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("force"));

        assert!(delete.validate_args(&json!([1])).is_err());
    }

    #[test]
    fn test_parameters_json_shape() {
        let create = find_tool("create_todo").unwrap();
        let schema = create.parameters_json();
        assert_eq!(schema["title"]["type"], "string");
        assert_eq!(schema["title"]["required"], true);
        assert_eq!(schema["description"]["required"], false);

        let list = find_resource("list_todos").unwrap();
        assert_eq!(list.parameters_json(), json!({}));
    }
}
