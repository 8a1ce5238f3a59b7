//! Custom error types for the application.
//!
//! - [`TreeError`] - Item store integrity failures
//! - [`StorageError`] - localStorage persistence and JSON export
//! - [`ConfigError`] - Site configuration parsing
//!
//! Missing items are not errors: lookups return `Option` or an empty path.

use thiserror::Error;

/// Data-integrity defects in the item store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Two items share an id
    #[error("duplicate item id '{0}'")]
    DuplicateId(String),
    /// An item points at a parent that does not exist
    #[error("item '{id}' references missing parent '{parent}'")]
    DanglingParent { id: String, parent: String },
    /// Following parent links from an item never reaches a root
    #[error("item '{0}' is part of a parent cycle")]
    Cycle(String),
    /// Traversal went deeper than the configured cap
    #[error("tree below '{id}' exceeds maximum depth {max_depth}")]
    DepthExceeded { id: String, max_depth: usize },
}

/// localStorage and export errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available
    #[error("localStorage not available")]
    Unavailable,
    /// Failed to serialize data to JSON
    #[error("failed to serialize data: {0}")]
    Serialize(String),
    /// Stored JSON could not be parsed
    #[error("failed to parse stored data: {0}")]
    Parse(String),
    /// Failed to write to localStorage
    #[error("failed to save to localStorage")]
    Write,
    /// Browser download could not be started
    #[error("failed to export file: {0}")]
    Export(String),
}

/// Site configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = TreeError::DanglingParent {
            id: "job1".to_string(),
            parent: "experience".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "item 'job1' references missing parent 'experience'"
        );
        assert_eq!(
            TreeError::DepthExceeded {
                id: "root".to_string(),
                max_depth: 32
            }
            .to_string(),
            "tree below 'root' exceeds maximum depth 32"
        );
        assert_eq!(StorageError::Write.to_string(), "failed to save to localStorage");
    }
}
