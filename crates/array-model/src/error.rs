//! Error types for model binding and record construction.

use thiserror::Error;

/// Errors that can occur while binding a dataset or building model instances.
///
/// A lookup that finds nothing is not an error; see [`crate::ArrayModel::get`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A value did not have the shape a parameter requires.
    #[error("{name} requires {expected} but got {actual}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// The model has no dataset of a supported shape to enumerate.
    #[error("{model} has no supported data source (found {source_shape})")]
    UnsupportedSource {
        model: &'static str,
        source_shape: &'static str,
    },

    /// A writer panicked while holding the model's binding lock.
    #[error("binding lock poisoned for model {model}")]
    LockPoisoned { model: &'static str },
}

/// Convenience type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_mismatch_names_parameter_and_shapes() {
        let err = ModelError::TypeMismatch {
            name: "data".into(),
            expected: "array",
            actual: "object",
        };
        assert_eq!(err.to_string(), "data requires array but got object");
    }

    #[test]
    fn unsupported_source_names_model() {
        let err = ModelError::UnsupportedSource {
            model: "Users",
            source_shape: "unbound",
        };
        assert_eq!(
            err.to_string(),
            "Users has no supported data source (found unbound)"
        );
    }
}
