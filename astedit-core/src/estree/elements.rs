//! Node payloads
//!
//! One struct per distinct field shape. Several kinds share a payload when the grammar gives
//! them the same fields (e.g. `BinaryExpression`, `LogicalExpression` and
//! `AssignmentExpression` all carry an [Operation]); the [Node](super::Node) variant carries
//! the kind.
//!
//! Required grammar fields are still `Option<NodeId>`: a missing field is a defect of the
//! producer, and the renderer treats it as absent rather than failing.

pub mod classes;
pub mod expressions;
pub mod functions;
pub mod literals;
pub mod modules;
pub mod patterns;
pub mod statements;

pub use classes::*;
pub use expressions::*;
pub use functions::*;
pub use literals::*;
pub use modules::*;
pub use patterns::*;
pub use statements::*;
