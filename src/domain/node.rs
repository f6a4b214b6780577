use std::collections::HashMap;

use itertools::Itertools;

/// One directory in the namespace.
///
/// A node exclusively owns its children. Child order is not stored;
/// callers that need an order ask for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    children: HashMap<String, Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Children in unspecified order.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.values()
    }

    /// Children sorted by name, ascending.
    pub fn sorted_children(&self) -> impl DoubleEndedIterator<Item = &Node> {
        self.children.values().sorted_by(|a, b| a.name.cmp(&b.name))
    }

    pub(crate) fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.get_mut(name)
    }

    /// Descend into `name`, creating an empty node when missing.
    pub(crate) fn child_or_insert(&mut self, name: &str) -> &mut Node {
        self.children
            .entry(name.to_string())
            .or_insert_with(|| Node::new(name))
    }

    /// Adopt `node` under its own name, returning any child it displaced.
    pub(crate) fn adopt(&mut self, node: Node) -> Option<Node> {
        self.children.insert(node.name.clone(), node)
    }

    pub(crate) fn remove_child(&mut self, name: &str) -> Option<Node> {
        self.children.remove(name)
    }
}
