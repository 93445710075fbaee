//! Error types for graph construction, encoding and validation.

use thiserror::Error;

use crate::model::{AttributeClass, AttributeType};

/// Error while defining attributes or adding nodes and edges.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("attr '{title}' defined multiple times")]
    DuplicateAttribute { title: String },

    #[error("{class} attribute '{title}' is not defined")]
    UnknownAttribute { class: AttributeClass, title: String },

    #[error("value for attribute '{title}' has type {found}, expected {expected}")]
    TypeMismatch {
        title: String,
        expected: AttributeType,
        found: &'static str,
    },
}

/// Error while writing a GEXF document.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("zstd compression failed: {0}")]
    CompressionFailed(String),

    #[error("invalid lastmodifieddate: {0}")]
    InvalidDate(#[from] DateParseError),
}

/// Error while parsing a `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DateParseError {
    pub message: String,
}

/// Finding reported by [`crate::validate::validate_graph`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("node id '{id}' is used by more than one node")]
    DuplicateNode { id: String },

    #[error("edge {edge} references missing node '{node}'")]
    DanglingEdge { edge: String, node: String },
}
