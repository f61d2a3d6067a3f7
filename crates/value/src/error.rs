use thiserror::Error;

use crate::path::Path;

/// Failure to build a [`RegExp`](crate::RegExp) from a source and flags.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegExpError {
    #[error("Invalid flags supplied to RegExp constructor '{0}'")]
    InvalidFlags(String),

    #[error("Invalid regular expression: /{pattern}/: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Failure to parse JSON text into a [`Value`](crate::Value).
#[derive(Error, Debug)]
#[error("Invalid JSON: {0}")]
pub struct ParseError(#[from] pub serde_json::Error);

/// Rejection of a path-addressed write.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Cannot modify readonly value at '{path}'")]
    Frozen { path: Path },

    #[error("NOT_FOUND: '{path}'")]
    NotFound { path: Path },

    #[error("NOT_CONTAINER: '{path}'")]
    NotContainer { path: Path },

    #[error("OUT_OF_BOUNDS: '{path}'")]
    OutOfBounds { path: Path },

    #[error("EMPTY_PATH")]
    EmptyPath,
}
