//! Domain-level errors (no external dependencies)

use std::fmt;

use thiserror::Error;

/// Which tree operation failed to resolve a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Resolving the node being moved
    Move,
    /// Resolving the destination of a move
    MoveTo,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Operation::Move => "move",
            Operation::MoveTo => "move to",
            Operation::Delete => "delete",
        };
        f.write_str(verb)
    }
}

/// Domain errors represent namespace rule violations.
/// None of them is fatal: the dispatcher reports and carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Bad path {0}")]
    InvalidPath(String),

    #[error("Bad paths {from}, {to}")]
    InvalidMove { from: String, to: String },

    #[error("Cannot create {path} - {segment} already exists")]
    AlreadyExists { path: String, segment: String },

    #[error("Cannot {operation} {path} - {segment} does not exist")]
    NotFound {
        operation: Operation,
        path: String,
        segment: String,
    },
}

impl DomainError {
    pub(crate) fn not_found(operation: Operation, path: &str, segment: &str) -> Self {
        Self::NotFound {
            operation,
            path: path.to_string(),
            segment: segment.to_string(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_move_target_not_found_when_displayed_then_reads_move_to() {
        let err = DomainError::not_found(Operation::MoveTo, "a/b", "a");
        assert_eq!(err.to_string(), "Cannot move to a/b - a does not exist");
    }

    #[test]
    fn given_invalid_move_when_displayed_then_lists_both_paths() {
        let err = DomainError::InvalidMove {
            from: "dir1".into(),
            to: "dir1/dir2".into(),
        };
        assert_eq!(err.to_string(), "Bad paths dir1, dir1/dir2");
    }
}
