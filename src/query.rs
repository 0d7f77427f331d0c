// src/query.rs
//! Role-set matching primitives.
//!
//! Everything the calculators know about a node they learn through these
//! four functions. All of them are pure and total: an empty result is a
//! valid answer, never an error. Callers decide what a missing role means.

use crate::node::Node;
use crate::roles::Role;

/// True iff `node` carries every role in `required` and none in `excluded`.
///
/// Short-circuits on the first failing required role. `excluded` may be
/// empty, which reduces this to a plain conjunction check.
#[must_use]
pub fn has_roles(node: &Node, required: &[Role], excluded: &[Role]) -> bool {
    required.iter().all(|r| node.has_role(*r)) && !excluded.iter().any(|r| node.has_role(*r))
}

/// Immediate children satisfying the predicate, in source order.
#[must_use]
pub fn children_matching<'a>(
    node: &'a Node,
    required: &[Role],
    excluded: &[Role],
) -> Vec<&'a Node> {
    node.children
        .iter()
        .filter(|c| has_roles(c, required, excluded))
        .collect()
}

/// All descendants satisfying the predicate, in pre-order discovery order.
/// The start node itself is not a descendant and is never considered.
#[must_use]
pub fn descendants_matching<'a>(
    node: &'a Node,
    required: &[Role],
    excluded: &[Role],
) -> Vec<&'a Node> {
    let mut found = Vec::new();
    let mut stack: Vec<&Node> = node.children.iter().rev().collect();
    while let Some(n) = stack.pop() {
        if has_roles(n, required, excluded) {
            found.push(n);
        }
        stack.extend(n.children.iter().rev());
    }
    found
}

/// Cardinality of [`descendants_matching`] without materializing the list.
#[must_use]
pub fn count_descendants_matching(node: &Node, required: &[Role], excluded: &[Role]) -> usize {
    let mut count = 0;
    let mut stack: Vec<&Node> = node.children.iter().rev().collect();
    while let Some(n) = stack.pop() {
        if has_roles(n, required, excluded) {
            count += 1;
        }
        stack.extend(n.children.iter().rev());
    }
    count
}
