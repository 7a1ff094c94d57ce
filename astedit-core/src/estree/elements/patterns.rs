//! Pattern payloads
//!
//! `ObjectPattern`, `ArrayPattern` and the rest kinds reuse
//! [ObjectMembers](super::ObjectMembers), [ArrayElements](super::ArrayElements) and
//! [Spread](super::Spread).

use super::super::NodeId;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssignmentPattern {
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}
