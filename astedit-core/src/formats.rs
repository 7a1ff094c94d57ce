//! Output formats for rendered trees
//!
//! Every format takes a [SyntaxTree](crate::estree::SyntaxTree) plus the current focus and
//! produces a string:
//!
//!     text       source-like printing of the fragment tree, focus wrapped in `»…«`
//!     tag        XML-like markup of the fragment tree
//!     treeviz    one line per syntax node, with box-drawing connectors
//!     json/yaml  the fragment tree through serde
//!
//! Formats are looked up by name in a [FormatRegistry]. Knobs that users may configure
//! (indentation, label width) travel in [FormatOptions].

pub mod registry;
pub mod serde_formats;
pub mod tag;
pub mod text;
pub mod treeviz;

pub use registry::{FormatError, FormatOptions, FormatRegistry, Formatter};
pub use serde_formats::{JsonFormatter, YamlFormatter};
pub use tag::{to_tag_string, TagFormatter};
pub use text::{layout, to_text, Piece, PieceClass, TextFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
