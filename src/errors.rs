use thiserror::Error;

use crate::tree::NodeId;

/// Errors from organization tree operations.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("node {0} does not exist")]
    InvalidNode(NodeId),

    #[error("no employee with title: {0}")]
    UnknownTitle(String),

    #[error("cannot fire the root of the organization")]
    FireRoot,

    #[error("malformed org text at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

pub type TreeResult<T> = Result<T, TreeError>;

/// Errors from bag operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BagError {
    #[error("cannot draw from an empty bag")]
    Empty,
}
