// src/traverse.rs
//! Pre-order tree traversal.

use crate::node::Node;

/// Lazy pre-order walk: the node itself, then each child subtree in source
/// order. Backed by an explicit work stack rather than recursion so that
/// traversal depth is never limited by the call stack.
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

/// Starts a fresh traversal at `root`. Traversals are independent; calling
/// this repeatedly on the same root restarts from the beginning each time.
#[must_use]
pub fn pre_order(root: &Node) -> PreOrder<'_> {
    PreOrder { stack: vec![root] }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed push so the first child is popped first.
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
