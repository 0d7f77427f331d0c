// src/npath.rs
//! NPath complexity: the number of distinct acyclic execution paths
//! through a function.
//!
//! Reference definition: the PMD `NPathComplexity` rule
//! (<https://pmd.github.io/pmd/pmd_rules_java_design.html#npathcomplexity>).
//! Sequential statements multiply (two independent branch points in a row
//! double each other's path counts), mutually exclusive alternatives add
//! (if/else arms, switch cases, catch clauses). That multiplicative
//! combination is what distinguishes NPath from cyclomatic complexity,
//! which is additive over decision points.
//!
//! Each construct handler looks up its operand children by role. A node
//! can satisfy more than one handler's predicate at once (an `else if` arm
//! carries both `Else` and `If`), so dispatch checks roles in one fixed,
//! documented priority order instead of leaning on set-iteration order:
//! If > While > Switch > DoWhile > For/Iterator > Return > Try, with
//! everything else treated as a plain sequence.
//!
//! Scores grow multiplicatively and can exceed any fixed width on
//! pathological inputs, so all arithmetic saturates instead of wrapping.

use crate::error::{MetricError, Result};
use crate::functions::locate_functions;
use crate::node::Node;
use crate::query::{children_matching, count_descendants_matching};
use crate::roles::Role;
use crate::types::{FunctionComplexity, FunctionFailure, NpathReport};

/// NPath complexity for every function in the tree, in discovery order.
///
/// A malformed construct (missing mandatory child) fails only the function
/// containing it; the failure is recorded and the remaining functions are
/// still computed.
#[must_use]
pub fn npath_complexity(root: &Node) -> NpathReport {
    let mut report = NpathReport::default();
    for function in locate_functions(root) {
        match sequence_complexity(function.body) {
            Ok(complexity) => report.functions.push(FunctionComplexity {
                name: function.name,
                complexity,
            }),
            Err(e) => report.failures.push(FunctionFailure {
                name: function.name,
                reason: e.to_string(),
            }),
        }
    }
    report
}

/// Product of the path counts of each child, in order. The empty product
/// is 1: a body with no qualifying children has exactly one path.
fn sequence_complexity(node: &Node) -> Result<u64> {
    let mut npath: u64 = 1;
    for child in &node.children {
        npath = npath.saturating_mul(dispatch(child)?);
    }
    Ok(npath)
}

fn dispatch(node: &Node) -> Result<u64> {
    if node.has_role(Role::If) {
        visit_if(node)
    } else if node.has_role(Role::While) {
        visit_while(node)
    } else if node.has_role(Role::Switch) {
        visit_switch(node)
    } else if node.has_role(Role::DoWhile) {
        visit_do_while(node)
    } else if node.has_role(Role::For) || node.has_role(Role::Iterator) {
        visit_loop(node)
    } else if node.has_role(Role::Return) {
        Ok(visit_return(node))
    } else if node.has_role(Role::Try) {
        visit_try(node)
    } else {
        // Not a branch point itself; paths flow through its children.
        sequence_complexity(node)
    }
}

/// `(else | 1) * then + bool_op_count(condition) + 1`.
///
/// An `else if` chain recurses through this handler, in either encoding
/// the producer may emit: a single child carrying both `Else` and `If`, or
/// an `Else` child wrapping an `If` node (the wrapped form lands here via
/// the sequence product over the else child's children).
fn visit_if(node: &Node) -> Result<u64> {
    let condition = required_child(node, Role::Condition)?;
    let then = required_child(node, Role::Then)?;

    let mut npath = match children_matching(node, &[Role::Else], &[]).first() {
        None => 1,
        Some(alt) if alt.has_role(Role::If) => visit_if(alt)?,
        Some(alt) => sequence_complexity(alt)?,
    };
    npath = npath.saturating_mul(sequence_complexity(then)?);
    Ok(npath
        .saturating_add(bool_op_count(condition))
        .saturating_add(1))
}

/// `(else | 1) * body + bool_op_count(condition)`. Some source languages
/// attach an else branch to a loop; it multiplies like an if's would.
fn visit_while(node: &Node) -> Result<u64> {
    let condition = required_child(node, Role::Condition)?;
    let body = required_child(node, Role::Body)?;

    let mut npath = match children_matching(node, &[Role::Else], &[]).first() {
        None => 1,
        Some(alt) => sequence_complexity(alt)?,
    };
    npath = npath.saturating_mul(sequence_complexity(body)?);
    Ok(npath.saturating_add(bool_op_count(condition)))
}

/// `body + bool_op_count(condition)`. No else branch exists for this
/// construct, so the base multiplier is always 1.
fn visit_do_while(node: &Node) -> Result<u64> {
    let condition = required_child(node, Role::Condition)?;
    let body = required_child(node, Role::Body)?;

    Ok(sequence_complexity(body)?.saturating_add(bool_op_count(condition)))
}

/// `body + 1`, for both counted `for` loops and foreach-style iteration.
/// The loop's condition terms are deliberately not folded into the score;
/// only the taken/not-taken alternative counts.
fn visit_loop(node: &Node) -> Result<u64> {
    let body = required_child(node, Role::Body)?;
    Ok(sequence_complexity(body)?.saturating_add(1))
}

/// A bare return contributes exactly one path; a return whose expression
/// short-circuits contributes one path per boolean term beyond the first.
fn visit_return(node: &Node) -> u64 {
    match bool_op_count(node) {
        1 => 1,
        n => n - 1,
    }
}

/// `(default | 1) + Σ case`. Case children that also carry `Default` are
/// counted once, as the default alternative.
fn visit_switch(node: &Node) -> Result<u64> {
    let mut npath = match children_matching(node, &[Role::Default], &[]).first() {
        Some(default) => sequence_complexity(default)?,
        None => 1,
    };
    for case in children_matching(node, &[Role::Case], &[Role::Default]) {
        npath = npath.saturating_add(sequence_complexity(case)?);
    }
    Ok(npath)
}

/// `body + Σ catch + (finally | 0)`: the alternatives are mutually
/// exclusive outcomes, so they add.
fn visit_try(node: &Node) -> Result<u64> {
    let body = required_child(node, Role::Body)?;

    let mut npath = sequence_complexity(body)?;
    for catch in children_matching(node, &[Role::Catch], &[]) {
        npath = npath.saturating_add(sequence_complexity(catch)?);
    }
    if let Some(finally) = children_matching(node, &[Role::Finally], &[]).first() {
        npath = npath.saturating_add(sequence_complexity(finally)?);
    }
    Ok(npath)
}

/// The number of independent boolean sub-conditions in a short-circuit
/// expression: one, plus one per boolean AND or OR anywhere in the
/// subtree, since a condition may itself be an arbitrarily nested
/// expression.
fn bool_op_count(node: &Node) -> u64 {
    let ands = count_descendants_matching(node, &[Role::Operator, Role::Boolean, Role::And], &[]);
    let ors = count_descendants_matching(node, &[Role::Operator, Role::Boolean, Role::Or], &[]);
    1 + ands as u64 + ors as u64
}

fn required_child<'a>(node: &'a Node, role: Role) -> Result<&'a Node> {
    children_matching(node, &[role], &[])
        .into_iter()
        .next()
        .ok_or_else(|| MetricError::MalformedTree {
            kind: node.kind.clone(),
            missing: role,
        })
}
