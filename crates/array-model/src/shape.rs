//! Shape checks for raw JSON values.
//!
//! Datasets must be arrays and records must be objects. These helpers unwrap
//! the inner container on success, or return a [`ModelError::TypeMismatch`]
//! that names the offending parameter.

use serde_json::{Map, Value};

use crate::error::{ModelError, Result};

/// Human-readable name of a value's shape, used in error messages.
pub fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Unwrap `value` as an array, or fail naming the parameter `name`.
pub fn require_array(value: Value, name: &str) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(mismatch(&other, name, "array")),
    }
}

/// Unwrap `value` as an object, or fail naming the parameter `name`.
pub fn require_object(value: Value, name: &str) -> Result<Map<String, Value>> {
    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(mismatch(&other, name, "object")),
    }
}

fn mismatch(value: &Value, name: &str, expected: &'static str) -> ModelError {
    ModelError::TypeMismatch {
        name: name.to_string(),
        expected,
        actual: shape_name(value),
    }
}
