// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("duplicate node: {name}")]
    DuplicateNode { name: String },

    #[error("unknown node: {name}")]
    UnknownNode { name: String },

    #[error("malformed line: {line:?}")]
    MalformedLine { line: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
