//! Focus Navigator
//!
//!     Focus is data kept outside both the tree and the rendered fragments: a [FocusPath] of
//!     field accessors from the root to the focused node. Navigation is a pure function of
//!     (tree, path, direction) to a new path; the renderer compares each node's own path
//!     against the focus to decide what is highlighted.
//!
//! Moves
//!
//!     Up      drop the last segment (the root stays put)
//!     Down    append the node's primary field, at the first present index for lists
//!     Next    step forward within the nearest list-valued segment
//!     Prev    step backward within the nearest list-valued segment
//!
//!     Sideways moves truncate any segments below the list they step in, skip array holes
//!     and never wrap around. A path that does not resolve against the tree is returned
//!     unchanged, whatever the direction.
//!
//! See [navigator::move_focus] for the moves and [navigator::FocusState] for the stateful
//! wrapper used by interactive front ends.

pub mod navigator;
pub mod path;

pub use navigator::{move_focus, Direction, FocusState};
pub use path::{FocusPath, ParsePathError, PathSegment};
