// src/cyclomatic.rs
//! Cyclomatic complexity (McCabe, 1976): one plus the number of decision
//! points in the tree.
//!
//! The counting rules follow the PMD reference implementation
//! (<https://pmd.github.io/>): every node whose role set marks it as a
//! branching statement, a caught exception path, a boolean operator use,
//! or a goto adds one linearly independent path.
//!
//! Boolean short-circuit operators are approximated by counting the
//! boolean-operator nodes themselves rather than reconstructing full
//! boolean-expression trees: the tree format does not distinguish the
//! operands of boolean expressions from other expression nodes. This is an
//! accepted approximation: exact for infix short-circuit languages,
//! under-counting for variadic prefix operators.
//!
//! The walk is not restricted to function declarations. For sources that
//! allow code outside functions the result is the total over the whole
//! tree, not an average per function.

use crate::node::Node;
use crate::query::has_roles;
use crate::roles::Role;
use crate::traverse::pre_order;

/// Complexity of the whole tree rooted at `root`. A single linear pass;
/// any tree yields a well-defined result >= 1.
#[must_use]
pub fn cyclomatic_complexity(root: &Node) -> u64 {
    let mut complexity = 1;
    for node in pre_order(root) {
        if adds_complexity(node) {
            complexity += 1;
        }
    }
    complexity
}

fn adds_complexity(node: &Node) -> bool {
    use Role::{Boolean, Case, Catch, Continue, DoWhile, For, Goto, If, Operator, Statement, Try,
        While};

    const BRANCHING: [Role; 6] = [If, Case, For, While, DoWhile, Continue];

    node.has_role(Statement) && BRANCHING.iter().any(|r| node.has_role(*r))
        || has_roles(node, &[Try, Catch], &[])
        || has_roles(node, &[Operator, Boolean], &[])
        || node.has_role(Goto)
}
