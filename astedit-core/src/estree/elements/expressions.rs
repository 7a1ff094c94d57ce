//! Expression payloads

use super::functions::MethodKind;
use super::super::{NodeId, NodeList};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct YieldExpression {
    pub argument: Option<NodeId>,
    pub delegate: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AwaitExpression {
    pub argument: Option<NodeId>,
}

/// Payload of `ArrayExpression` and `ArrayPattern`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayElements {
    pub elements: NodeList,
}

/// Payload of `ObjectExpression` and `ObjectPattern`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectMembers {
    pub properties: NodeList,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectProperty {
    pub key: Option<NodeId>,
    pub value: Option<NodeId>,
    pub computed: bool,
    pub shorthand: bool,
    pub decorators: NodeList,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectMethod {
    pub kind: MethodKind,
    pub key: Option<NodeId>,
    pub params: NodeList,
    pub body: Option<NodeId>,
    pub computed: bool,
    pub generator: bool,
    pub is_async: bool,
    pub decorators: NodeList,
}

/// Payload of `UnaryExpression` and `UpdateExpression`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnaryOperation {
    pub operator: String,
    pub prefix: bool,
    pub argument: Option<NodeId>,
}

/// Payload of `BinaryExpression`, `LogicalExpression` and `AssignmentExpression`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Operation {
    pub operator: String,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

/// Payload of `SpreadElement`, `SpreadProperty`, `RestElement` and `RestProperty`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Spread {
    pub argument: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemberExpression {
    pub object: Option<NodeId>,
    pub property: Option<NodeId>,
    /// `obj[key]` when true, `obj.key` when false.
    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BindExpression {
    pub object: Option<NodeId>,
    pub callee: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConditionalExpression {
    pub test: Option<NodeId>,
    pub consequent: Option<NodeId>,
    pub alternate: Option<NodeId>,
}

/// Payload of `CallExpression` and `NewExpression`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Call {
    pub callee: Option<NodeId>,
    pub arguments: NodeList,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SequenceExpression {
    pub expressions: NodeList,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DoExpression {
    pub body: Option<NodeId>,
}
