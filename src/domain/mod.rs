//! Domain layer: the namespace tree and its path rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod node;
pub mod path;
pub mod tree;

pub use error::{DomainError, DomainResult, Operation};
pub use node::Node;
pub use path::SEPARATOR;
pub use tree::{NamespaceTree, ROOT_NAME};
