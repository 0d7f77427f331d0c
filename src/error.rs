// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::roles::Role;

#[derive(Debug, Error)]
pub enum MetricError {
    /// A construct is missing a role-identified child its handler needs
    /// (e.g. an `If` with no `Then` branch). Fails the computation for the
    /// enclosing function only; sibling functions still produce results.
    #[error("malformed tree: `{kind}` node has no child with role {missing:?}")]
    MalformedTree { kind: String, missing: Role },

    #[error("fatal response from parser: {0}")]
    ParserFatal(String),

    #[error("error response from parser: {0}")]
    ParserError(String),

    #[error("parse response carried no tree")]
    MissingTree,

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MetricError>;

// Allow `?` on std::io::Error when no path is at hand.
impl From<std::io::Error> for MetricError {
    fn from(source: std::io::Error) -> Self {
        MetricError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
