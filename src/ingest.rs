// src/ingest.rs
//! Loading saved parser responses.
//!
//! The tree producer is a separate service; what this crate consumes is
//! its serialized response: a status, a list of diagnostic messages, and
//! (usually) a tree. Translating the status into error kinds happens here,
//! at the boundary. The metric engine itself never sees a response, only
//! a [`Node`].
//!
//! Policy for degraded responses: an `error` status that still carries a
//! tree is usable input. The tree is returned together with the parser's
//! diagnostics and the caller decides how loudly to surface them. Only a
//! `fatal` status, or an error with nothing to analyze, refuses the file.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{MetricError, Result};
use crate::node::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseStatus {
    Ok,
    Error,
    Fatal,
}

/// The wire shape of a saved parser response.
#[derive(Debug, Deserialize)]
pub struct ParseResponse {
    pub status: ParseStatus,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub tree: Option<Node>,
}

/// A document is either a full response envelope or a bare tree; the
/// `status` field is what tells them apart.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Response(ParseResponse),
    Tree(Node),
}

/// A tree accepted for analysis, with any diagnostics the parser attached.
#[derive(Debug)]
pub struct LoadedTree {
    pub root: Node,
    pub diagnostics: Vec<String>,
}

/// Reads and decodes one saved response (or bare tree) file.
///
/// # Errors
/// I/O errors carry the offending path; parser statuses translate per the
/// module policy; undecodable JSON surfaces as [`MetricError::Json`].
pub fn load_tree(path: &Path) -> Result<LoadedTree> {
    let raw = fs::read_to_string(path).map_err(|source| MetricError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_document(&raw)
}

/// Decodes a response document from a JSON string.
///
/// # Errors
/// Same taxonomy as [`load_tree`], minus I/O.
pub fn parse_document(raw: &str) -> Result<LoadedTree> {
    match serde_json::from_str::<Document>(raw)? {
        Document::Tree(root) => Ok(LoadedTree {
            root,
            diagnostics: Vec::new(),
        }),
        Document::Response(response) => accept(response),
    }
}

fn accept(response: ParseResponse) -> Result<LoadedTree> {
    match response.status {
        ParseStatus::Fatal => Err(MetricError::ParserFatal(response.errors.join("\n"))),
        ParseStatus::Error => match response.tree {
            Some(root) => Ok(LoadedTree {
                root,
                diagnostics: response.errors,
            }),
            None => Err(MetricError::ParserError(response.errors.join("\n"))),
        },
        ParseStatus::Ok => match response.tree {
            Some(root) => Ok(LoadedTree {
                root,
                diagnostics: response.errors,
            }),
            None => Err(MetricError::MissingTree),
        },
    }
}
