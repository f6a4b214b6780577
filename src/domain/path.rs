//! Slash-separated namespace paths

use crate::domain::{DomainError, DomainResult};

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// Reject any path with an empty segment.
///
/// Splitting on the separator exposes every bad shape at once: the empty
/// path, a leading or trailing separator, and doubled separators all
/// produce an empty segment.
pub fn validate(path: &str) -> DomainResult<()> {
    if path.split(SEPARATOR).any(str::is_empty) {
        return Err(DomainError::InvalidPath(path.to_string()));
    }
    Ok(())
}

/// Split a validated path into its intermediate segments and its final segment.
pub fn split_last(path: &str) -> (Vec<&str>, &str) {
    match path.rsplit_once(SEPARATOR) {
        Some((parents, last)) => (parents.split(SEPARATOR).collect(), last),
        None => (Vec::new(), path),
    }
}

/// Join a parent path and a child name; an empty parent means the root.
pub fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}{SEPARATOR}{name}")
    }
}
