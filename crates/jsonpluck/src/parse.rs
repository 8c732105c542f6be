//! Parse adapter — JSON text, bytes, streams or files into a [`Document`].
//!
//! Nothing above this module cares how parsing happens; extraction only
//! sees the resulting `serde_json::Value` tree.

use std::fs::File;
use std::io::{BufReader, Read};
use std::ops::Deref;
use std::path::Path;
use std::str::FromStr;

use serde_json::Value;
use tracing::debug;

use crate::error::{ParseError, Result};

/// Size of the read buffer used by [`parse_from_file`].
pub const READ_BUFFER_SIZE: usize = 16 * 1024;

/// An immutable parsed JSON document.
///
/// Owns the whole value tree. Every node handed out by extraction borrows
/// from the document, so no node can outlive it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Wrap an already-built value tree.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// The root node.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Give up the document and take its tree.
    pub fn into_value(self) -> Value {
        self.root
    }
}

impl Deref for Document {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.root
    }
}

impl AsRef<Value> for Document {
    fn as_ref(&self) -> &Value {
        &self.root
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Self::from_value(root)
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_from_text(s)
    }
}

/// Parse a JSON document held in memory.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] if the text is not valid JSON. No partial
/// document is produced.
///
/// # Examples
///
/// ```
/// use jsonpluck::parse_from_text;
///
/// let doc = parse_from_text(r#"{"a":1}"#).unwrap();
/// assert!(doc.is_object());
/// assert!(parse_from_text(r#"{"a":"#).is_err());
/// ```
pub fn parse_from_text(text: &str) -> Result<Document> {
    serde_json::from_str(text)
        .map(Document::from_value)
        .map_err(syntax_error)
}

/// Parse a JSON document from raw bytes (must be UTF-8).
pub fn parse_from_slice(bytes: &[u8]) -> Result<Document> {
    serde_json::from_slice(bytes)
        .map(Document::from_value)
        .map_err(syntax_error)
}

/// Parse a JSON document from any byte stream.
///
/// The reader is consumed as it is handed in; wrap it in a `BufReader` if
/// it is unbuffered.
pub fn parse_from_reader<R: Read>(reader: R) -> Result<Document> {
    serde_json::from_reader(reader)
        .map(Document::from_value)
        .map_err(syntax_error)
}

/// Parse a JSON document from a file.
///
/// The file is streamed through a buffer of [`READ_BUFFER_SIZE`] bytes
/// owned by this call. The handle is closed before returning, whether
/// parsing succeeded or not.
///
/// # Errors
///
/// Returns [`ParseError::Io`] if the file cannot be opened or read, and
/// [`ParseError::Syntax`] if its contents are not valid JSON.
pub fn parse_from_file(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    debug!(path = %path.display(), "parsing JSON file");

    let file = File::open(path).map_err(|source| {
        debug!(path = %path.display(), error = %source, "cannot open JSON file");
        ParseError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
    match serde_json::from_reader(reader) {
        Ok(root) => Ok(Document::from_value(root)),
        Err(err) if err.is_io() => {
            debug!(path = %path.display(), error = %err, "read failed mid-parse");
            Err(ParseError::Io {
                path: path.to_path_buf(),
                source: err.into(),
            })
        }
        Err(err) => Err(syntax_error(err)),
    }
}

fn syntax_error(err: serde_json::Error) -> ParseError {
    debug!(line = err.line(), column = err.column(), error = %err, "JSON parse failed");
    ParseError::Syntax(err)
}
