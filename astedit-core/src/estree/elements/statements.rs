//! Statement payloads

use super::super::{NodeId, NodeList};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpressionStatement {
    pub expression: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatement {
    pub directives: NodeList,
    pub body: NodeList,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WithStatement {
    pub object: Option<NodeId>,
    pub body: Option<NodeId>,
}

/// Payload of `ReturnStatement` and `ThrowStatement`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArgumentStatement {
    pub argument: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabeledStatement {
    pub label: Option<NodeId>,
    pub body: Option<NodeId>,
}

/// Payload of `BreakStatement` and `ContinueStatement`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JumpStatement {
    pub label: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IfStatement {
    pub test: Option<NodeId>,
    pub consequent: Option<NodeId>,
    pub alternate: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SwitchStatement {
    pub discriminant: Option<NodeId>,
    pub cases: NodeList,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SwitchCase {
    /// `None` for the `default:` case.
    pub test: Option<NodeId>,
    pub consequent: NodeList,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TryStatement {
    pub block: Option<NodeId>,
    pub handler: Option<NodeId>,
    pub finalizer: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatchClause {
    /// `None` for an optional catch binding (`catch { }`).
    pub param: Option<NodeId>,
    pub body: Option<NodeId>,
}

/// Payload of `WhileStatement` and `DoWhileStatement`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoopStatement {
    pub test: Option<NodeId>,
    pub body: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForStatement {
    pub init: Option<NodeId>,
    pub test: Option<NodeId>,
    pub update: Option<NodeId>,
    pub body: Option<NodeId>,
}

/// Payload of `ForInStatement` and `ForOfStatement`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForEachStatement {
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub body: Option<NodeId>,
    /// `for await (... of ...)`; always false for `for ... in`.
    pub is_await: bool,
}
