//! Syntax tree model
//!
//!     The tree is the external, immutable input of the projection: a tagged union over the
//!     grammar's node kinds, as emitted by a Babel-compatible parser. Kind tags and field names
//!     are the wire contract; see [loader](crate::loader) for how JSON becomes a tree.
//!
//! Ownership
//!
//!     Nodes live in an arena owned by [SyntaxTree] and refer to their children by [NodeId].
//!     The tree is strict: every node has at most one parent and there are no cycles. Parent
//!     links are a separate, non-owning table computed by [SyntaxTree::link_parents] after
//!     loading. Rendering never reads them; they exist for upward lookups such as
//!     [SyntaxTree::path_of].
//!
//! Kinds
//!
//!     [Node] has one variant per handled grammar kind plus [Node::Unknown], which keeps the
//!     unrecognized tag verbatim so the renderer can show it. [NodeKind] is the fieldless
//!     enumeration of the handled kinds, used for tag lookup and for totality checks.
//!
//! Fields
//!
//!     Child fields are either a single optional node or a [NodeList]. A list slot may be empty
//!     (array elisions such as `[, a]`). [Node::fields] exposes the child fields by their
//!     grammar names so that focus paths can be resolved without knowing every payload type.

pub mod elements;
pub mod fields;
pub mod kind;
pub mod label;
pub mod node;
pub mod tree;

pub use elements::*;
pub use fields::FieldRef;
pub use kind::{NodeCategory, NodeKind};
pub use node::Node;
pub use tree::{NodeId, SyntaxTree};

/// Sequence-valued child field. Slots may be empty (array holes).
pub type NodeList = Vec<Option<NodeId>>;
