//! Tree loading
//!
//! The parser lives outside this crate. Trees cross into it as JSON in the shape a
//! Babel-compatible parser emits, either nested as parsed or flattened into an id-indexed
//! table. [TreeLoader] reads both from a file, a string or an already parsed value.
//!
//! ```rust-example
//! let tree = TreeLoader::from_path("sample.json")?.load()?;
//! let tree = TreeLoader::from_string(r#"{"type":"Program","body":[]}"#).load()?;
//! ```
//!
//! Only the document as a whole can fail to load. Problems inside it are absorbed: an
//! unknown `type` loads as [Node::Unknown](crate::estree::Node::Unknown), a missing or
//! ill-typed field loads as absent, and a flat reference that is dangling or used twice
//! loads as absent with a warning.

mod decode;
mod stream;

pub use stream::SnapshotStream;

use crate::estree::SyntaxTree;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read tree: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("top-level value is neither a syntax node nor a flat node table")]
    NotANode,
    #[error("flat node table has no File or Program entry")]
    MissingRoot,
}

enum Source {
    Text(String),
    Value(Value),
}

/// Loads one syntax tree from JSON.
pub struct TreeLoader {
    source: Source,
}

impl TreeLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let text = fs::read_to_string(path)?;
        Ok(TreeLoader {
            source: Source::Text(text),
        })
    }

    pub fn from_string<S: Into<String>>(text: S) -> Self {
        TreeLoader {
            source: Source::Text(text.into()),
        }
    }

    pub fn from_value(value: Value) -> Self {
        TreeLoader {
            source: Source::Value(value),
        }
    }

    /// Decode the tree and link its parents.
    pub fn load(self) -> Result<SyntaxTree, LoaderError> {
        let value = match self.source {
            Source::Text(text) => serde_json::from_str(&text)?,
            Source::Value(value) => value,
        };
        decode::decode(&value)
    }
}
