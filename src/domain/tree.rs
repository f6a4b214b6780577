//! The namespace tree and its path-based operations
//!
//! ```text
//! (root)            list()          leaf_paths()
//!   fruits          fruits          fruits/apples/fuji
//!     apples         apples         grains
//!       fuji          fuji          vegetables
//!   grains          grains
//!   vegetables      vegetables
//! ```

use std::fmt;

use tracing::{debug, instrument, warn};

use crate::domain::path::{self, SEPARATOR};
use crate::domain::{DomainError, DomainResult, Node, Operation};

/// Reserved label of the root node. Never emitted, never addressed.
pub const ROOT_NAME: &str = "root";

/// One indentation unit per depth level in `list()` output.
const INDENT: &str = " ";

/// In-memory directory hierarchy rooted at a structural root node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceTree {
    root: Node,
}

impl Default for NamespaceTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceTree {
    pub fn new() -> Self {
        Self {
            root: Node::new(ROOT_NAME),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Look up a node without mutating anything.
    pub fn get(&self, path: &str) -> Option<&Node> {
        path::validate(path).ok()?;
        path.split(SEPARATOR)
            .try_fold(&self.root, |node, segment| node.child(segment))
    }

    /// Create the node at `path`, creating missing intermediate nodes.
    ///
    /// Intermediate nodes created on the way are kept even when the final
    /// segment already exists.
    #[instrument(level = "debug", skip(self))]
    pub fn create(&mut self, path: &str) -> DomainResult<&Node> {
        path::validate(path)?;
        let (parents, name) = path::split_last(path);

        let mut current = &mut self.root;
        for segment in parents {
            current = current.child_or_insert(segment);
        }
        if current.child(name).is_some() {
            return Err(DomainError::AlreadyExists {
                path: path.to_string(),
                segment: name.to_string(),
            });
        }
        debug!("Creating {}", path);
        Ok(&*current.child_or_insert(name))
    }

    /// Re-parent the node at `source` under the node at `target`.
    ///
    /// The move is rejected when `target` starts with `source` as a plain
    /// string, which also rejects siblings sharing a textual prefix
    /// (`dir1` into `dir12`). A child of the same name already under
    /// `target` is replaced.
    #[instrument(level = "debug", skip(self))]
    pub fn move_node(&mut self, source: &str, target: &str) -> DomainResult<()> {
        path::validate(source)?;
        path::validate(target)?;
        if target.starts_with(source) {
            return Err(DomainError::InvalidMove {
                from: source.to_string(),
                to: target.to_string(),
            });
        }

        let (source_parents, source_name) = path::split_last(source);
        let (target_parents, target_name) = path::split_last(target);

        // Resolve everything before mutating so a failure leaves the tree untouched.
        let source_parent = self.resolve(&source_parents, Operation::Move, source)?;
        let target_parent = self.resolve(&target_parents, Operation::MoveTo, target)?;
        if source_parent.child(source_name).is_none() {
            return Err(DomainError::not_found(Operation::Move, source, source_name));
        }
        if target_parent.child(target_name).is_none() {
            return Err(DomainError::not_found(
                Operation::MoveTo,
                target,
                target_name,
            ));
        }

        let node = self.detach(&source_parents, source_name, Operation::Move, source)?;
        let target_segments: Vec<&str> = target.split(SEPARATOR).collect();
        let destination = self.resolve_mut(&target_segments, Operation::MoveTo, target)?;
        if let Some(replaced) = destination.adopt(node) {
            warn!(
                "Moving {} into {} replaced an existing {}",
                source,
                target,
                replaced.name()
            );
        }
        debug!("Moved {} under {}", source, target);
        Ok(())
    }

    /// Remove the node at `path` together with its subtree and return it.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, path: &str) -> DomainResult<Node> {
        path::validate(path)?;
        let (parents, name) = path::split_last(path);

        let removed = self.detach(&parents, name, Operation::Delete, path)?;
        debug!("Deleted {}", path);
        Ok(removed)
    }

    /// Render the tree in depth-first pre-order, one name per line.
    ///
    /// Siblings appear in ascending name order; each depth level below the
    /// root adds one space of indentation. The root itself is not printed.
    #[instrument(level = "trace", skip(self))]
    pub fn list(&self) -> String {
        let mut lines = Vec::new();
        // Children go on the stack in descending order so pops come out ascending.
        let mut stack: Vec<(&Node, usize)> = Vec::new();
        stack.extend(self.root.sorted_children().rev().map(|child| (child, 0)));

        while let Some((node, depth)) = stack.pop() {
            lines.push(format!("{}{}", INDENT.repeat(depth), node.name()));
            stack.extend(
                node.sorted_children()
                    .rev()
                    .map(|child| (child, depth + 1)),
            );
        }

        lines.join("\n")
    }

    /// Full paths of every childless node below the root, sorted ascending.
    #[instrument(level = "trace", skip(self))]
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        let mut stack: Vec<(&Node, String)> = self
            .root
            .children()
            .map(|child| (child, child.name().to_string()))
            .collect();

        while let Some((node, node_path)) = stack.pop() {
            if node.is_leaf() {
                leaves.push(node_path);
                continue;
            }
            for child in node.children() {
                stack.push((child, path::join(&node_path, child.name())));
            }
        }

        leaves.sort();
        leaves
    }

    fn resolve(&self, segments: &[&str], operation: Operation, path: &str) -> DomainResult<&Node> {
        let mut current = &self.root;
        for segment in segments {
            current = current
                .child(segment)
                .ok_or_else(|| DomainError::not_found(operation, path, segment))?;
        }
        Ok(current)
    }

    /// Remove `name` from the node at `parents` and hand it back.
    fn detach(
        &mut self,
        parents: &[&str],
        name: &str,
        operation: Operation,
        path: &str,
    ) -> DomainResult<Node> {
        self.resolve_mut(parents, operation, path)?
            .remove_child(name)
            .ok_or_else(|| DomainError::not_found(operation, path, name))
    }

    fn resolve_mut(
        &mut self,
        segments: &[&str],
        operation: Operation,
        path: &str,
    ) -> DomainResult<&mut Node> {
        let mut current = &mut self.root;
        for segment in segments {
            current = current
                .child_mut(segment)
                .ok_or_else(|| DomainError::not_found(operation, path, segment))?;
        }
        Ok(current)
    }
}

impl fmt::Display for NamespaceTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(paths: &[&str]) -> NamespaceTree {
        let mut tree = NamespaceTree::new();
        for path in paths {
            tree.create(path).expect("create");
        }
        tree
    }

    #[test]
    fn given_new_tree_when_listing_then_empty() {
        let tree = NamespaceTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.list(), "");
        assert!(tree.leaf_paths().is_empty());
    }

    #[test]
    fn given_create_when_succeeds_then_returns_new_leaf() {
        let mut tree = NamespaceTree::new();
        let node = tree.create("test").unwrap();
        assert_eq!(node.name(), "test");
        assert!(node.is_leaf());
        assert!(tree.get("test").is_some());
    }

    #[test]
    fn given_nested_create_when_parents_missing_then_creates_intermediates() {
        let tree = tree_with(&["a/b/c"]);
        assert_eq!(tree.list(), "a\n b\n  c");
    }

    #[test]
    fn given_existing_final_segment_when_creating_then_already_exists() {
        let mut tree = tree_with(&["existing/path"]);
        let err = tree.create("existing/path").unwrap_err();
        assert_eq!(
            err,
            DomainError::AlreadyExists {
                path: "existing/path".into(),
                segment: "path".into()
            }
        );
        assert_eq!(err.to_string(), "Cannot create existing/path - path already exists");
    }

    #[test]
    fn given_dir_named_root_when_listing_then_it_is_shown() {
        let tree = tree_with(&["root/inner"]);
        assert_eq!(tree.list(), "root\n inner");
        assert_eq!(tree.leaf_paths(), vec!["root/inner"]);
    }

    #[test]
    fn given_move_into_own_parent_when_moving_then_tree_unchanged() {
        let mut tree = tree_with(&["a/b"]);
        tree.move_node("a/b", "a").unwrap();
        assert_eq!(tree.list(), "a\n b");
    }

    #[test]
    fn given_nested_source_when_moving_then_subtree_travels_with_it() {
        let mut tree = tree_with(&["a/b/c/d", "e"]);
        tree.move_node("a/b/c", "e").unwrap();
        assert_eq!(tree.leaf_paths(), vec!["a/b", "e/c/d"]);
    }

    #[test]
    fn given_name_clash_when_moving_then_replaces_existing_child() {
        let mut tree = tree_with(&["src/x/from_src", "dst/x/from_dst"]);
        tree.move_node("src/x", "dst").unwrap();
        assert_eq!(tree.leaf_paths(), vec!["dst/x/from_src", "src"]);
    }

    #[test]
    fn given_missing_target_when_moving_then_source_untouched() {
        let mut tree = tree_with(&["a/b"]);
        let err = tree.move_node("a/b", "c").unwrap_err();
        assert_eq!(err.to_string(), "Cannot move to c - c does not exist");
        assert!(tree.get("a/b").is_some());
    }

    #[test]
    fn given_delete_when_succeeds_then_returns_subtree() {
        let mut tree = tree_with(&["a/b/c"]);
        let removed = tree.delete("a/b").unwrap();
        assert_eq!(removed.name(), "b");
        assert!(removed.child("c").is_some());
        assert_eq!(tree.leaf_paths(), vec!["a"]);
    }

    #[test]
    fn given_tree_when_displayed_then_matches_list() {
        let tree = tree_with(&["b", "a/c"]);
        assert_eq!(tree.to_string(), tree.list());
    }
}
