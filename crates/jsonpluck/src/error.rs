//! Error types for parsing documents and looking up typed members.

use std::path::PathBuf;

use thiserror::Error;

use crate::kind::NodeKind;

/// Errors that can occur while turning JSON text into a [`crate::Document`].
#[derive(Error, Debug)]
pub enum ParseError {
    /// The input was not valid JSON.
    #[error("JSON parse error: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The source file could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a strict lookup could not produce a value.
///
/// Only [`crate::lookup()`] and [`crate::lookup_pointer`] surface these;
/// the `Option`-returning protocol folds them all into `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The node the lookup started from is not an object.
    #[error("expected an object, found {found}")]
    NotAnObject { found: NodeKind },

    /// No member (or pointer target) with the given name exists.
    #[error("member not found: {key}")]
    MemberNotFound { key: String },

    /// The member exists but cannot be read as the requested type.
    #[error("member {key}: expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: NodeKind,
    },
}

/// Convenience alias for parse results.
pub type Result<T> = std::result::Result<T, ParseError>;
