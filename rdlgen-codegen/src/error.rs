//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading error.
    #[error("schema error: {0}")]
    Schema(#[from] rdlgen_schema::SchemaError),

    /// IO error, including writes rejected by the output sink.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Type reference missing from the registry.
    #[error("cannot find type '{type_name}'")]
    UnknownType {
        /// Type name.
        type_name: String,
    },

    /// Type whose supertype chain does not reach a base type.
    #[error("type '{type_name}' has no base type")]
    NoBaseType {
        /// Type name.
        type_name: String,
    },

    /// Collection type that nests itself without end.
    #[error("type '{type_name}' nests deeper than {max_depth} levels")]
    RecursiveType {
        /// Type name.
        type_name: String,
        /// Nesting limit that was exceeded.
        max_depth: usize,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates an unknown type error.
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
        }
    }

    /// Returns true if the schema itself is broken (dangling, unclassifiable
    /// or endlessly nested type reference).
    #[must_use]
    pub const fn is_schema_integrity(&self) -> bool {
        matches!(
            self,
            Self::UnknownType { .. } | Self::NoBaseType { .. } | Self::RecursiveType { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_integrity_classification() {
        assert!(CodegenError::unknown_type("Cat").is_schema_integrity());
        assert!(
            CodegenError::RecursiveType {
                type_name: "Loop".to_string(),
                max_depth: 64,
            }
            .is_schema_integrity()
        );
        assert!(!CodegenError::generation("bad package").is_schema_integrity());
    }
}
