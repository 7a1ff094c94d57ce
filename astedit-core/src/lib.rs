//! # astedit-core
//!
//! Projection of a parsed JavaScript syntax tree onto nested display fragments,
//! plus a focus cursor that moves over the same tree.
//!
//! File Layout
//!
//! src/
//!   ├── estree       Arena-backed syntax tree: node kinds, field reflection, parent links
//!   ├── loader       Transport boundary: JSON trees (nested or flat) into a `SyntaxTree`
//!   ├── render       Node Renderer: total dispatch from node kind to `Fragment`
//!   ├── navigation   Focus Navigator: `FocusPath` and the Up/Down/Next/Prev moves
//!   ├── formats      Serializers for fragment trees and outlines (text, tag, treeviz, json, yaml)
//!   └── testing      Tree factories shared by unit and integration tests
//!
//! The parser itself is not part of this crate: trees arrive already parsed, in
//! the shape produced by a Babel-compatible parser. Every part of the pipeline is
//! fail-soft: unknown kinds render as a visible placeholder, malformed focus
//! paths leave the focus where it was, and absent fields render as nothing.
//!
//! Rendering and loading recurse once per tree level with no explicit depth
//! bound, so pathologically deep trees are limited by the thread's stack size.

pub mod estree;
pub mod formats;
pub mod loader;
pub mod navigation;
pub mod render;
pub mod testing;

pub use estree::{FieldRef, Node, NodeId, NodeKind, SyntaxTree};
pub use loader::{LoaderError, SnapshotStream, TreeLoader};
pub use navigation::{move_focus, Direction, FocusPath, FocusState, PathSegment};
pub use render::{render, Fragment, Renderer};
