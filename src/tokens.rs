// src/tokens.rs
//! Token collection pass.

use crate::node::Node;
use crate::traverse::pre_order;

/// The non-empty literal tokens carried by the tree, in source order.
#[must_use]
pub fn tokens(root: &Node) -> Vec<&str> {
    pre_order(root)
        .filter_map(|n| n.token.as_deref())
        .filter(|t| !t.is_empty())
        .collect()
}
