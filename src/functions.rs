// src/functions.rs
//! Locating function bodies to analyze.

use crate::node::Node;
use crate::query::{children_matching, descendants_matching, has_roles};
use crate::roles::Role;

/// Display name used when no enclosing declaration carries a name: the
/// root-as-body case, and declarations whose name child is missing.
pub const NO_NAME: &str = "NoName";

/// A function body paired with its best-effort display name.
#[derive(Debug)]
pub struct LocatedFunction<'a> {
    pub name: String,
    pub body: &'a Node,
}

/// Finds every function in the tree, in pre-order discovery order.
///
/// A root that is itself a `{Function, Body}` node is a single anonymous
/// function. Otherwise each `{Function, Declaration}` descendant yields one
/// entry from its immediate `{Function, Name}` child (token text) and its
/// immediate `{Function, Body}` child. A declaration without a body yields
/// no entry: per-function analysis is best-effort and one unresolved body
/// must not sink the rest of the tree.
#[must_use]
pub fn locate_functions(root: &Node) -> Vec<LocatedFunction<'_>> {
    if has_roles(root, &[Role::Function, Role::Body], &[]) {
        return vec![LocatedFunction {
            name: NO_NAME.to_string(),
            body: root,
        }];
    }

    let mut found = Vec::new();
    for decl in descendants_matching(root, &[Role::Function, Role::Declaration], &[]) {
        let Some(body) = children_matching(decl, &[Role::Function, Role::Body], &[])
            .into_iter()
            .next()
        else {
            continue;
        };

        let name = children_matching(decl, &[Role::Function, Role::Name], &[])
            .into_iter()
            .next()
            .and_then(|n| n.token.clone())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| NO_NAME.to_string());

        found.push(LocatedFunction { name, body });
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::Role::{Body, Declaration, Function, Name, Statement};

    fn declaration(name: Option<&str>, with_body: bool) -> Node {
        let mut children = Vec::new();
        if let Some(n) = name {
            children.push(
                Node::new("FuncName")
                    .with_roles(&[Function, Name])
                    .with_token(n),
            );
        }
        if with_body {
            children.push(Node::new("FuncBody").with_roles(&[Function, Body]).with_children(
                vec![Node::new("stmt").with_roles(&[Statement])],
            ));
        }
        Node::new("FuncDecl")
            .with_roles(&[Function, Declaration])
            .with_children(children)
    }

    #[test]
    fn root_as_body_is_a_single_anonymous_function() {
        let root = Node::new("body").with_roles(&[Function, Body]);
        let found = locate_functions(&root);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, NO_NAME);
        assert!(std::ptr::eq(found[0].body, &root));
    }

    #[test]
    fn declarations_yield_named_entries_in_discovery_order() {
        let root = Node::new("module")
            .with_children(vec![declaration(Some("first"), true), declaration(Some("second"), true)]);
        let names: Vec<_> = locate_functions(&root).into_iter().map(|f| f.name).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn declaration_without_body_is_skipped() {
        let root = Node::new("module")
            .with_children(vec![declaration(Some("headless"), false), declaration(Some("ok"), true)]);
        let names: Vec<_> = locate_functions(&root).into_iter().map(|f| f.name).collect();
        assert_eq!(names, ["ok"]);
    }

    #[test]
    fn declaration_without_name_gets_the_placeholder() {
        let root = Node::new("module").with_children(vec![declaration(None, true)]);
        let found = locate_functions(&root);
        assert_eq!(found[0].name, NO_NAME);
    }

    #[test]
    fn tree_without_functions_yields_nothing() {
        assert!(locate_functions(&Node::new("module")).is_empty());
    }
}
