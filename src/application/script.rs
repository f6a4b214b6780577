//! Reconstruction script: one `CREATE` line per leaf path
//!
//! Replaying the script on an empty tree recreates every leaf and, through
//! intermediate creation, every ancestor of a leaf. Empty directories are
//! recorded because they are leaves themselves.

use crate::application::command::Command;
use crate::domain::NamespaceTree;

/// Commands that rebuild the leaves of `tree`, in leaf path order.
pub fn reconstruction_commands(tree: &NamespaceTree) -> Vec<Command> {
    tree.leaf_paths()
        .into_iter()
        .map(|path| Command::Create { path })
        .collect()
}

/// Render the script text, each line newline-terminated.
pub fn render(tree: &NamespaceTree) -> String {
    reconstruction_commands(tree)
        .iter()
        .map(|command| format!("{command}\n"))
        .collect()
}
