//! Class payloads

use super::functions::MethodKind;
use super::super::{NodeId, NodeList};

/// Shared shape of `ClassDeclaration` and `ClassExpression`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Class {
    pub decorators: NodeList,
    pub id: Option<NodeId>,
    pub super_class: Option<NodeId>,
    pub body: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassBody {
    pub body: NodeList,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassMethod {
    pub kind: MethodKind,
    pub key: Option<NodeId>,
    pub params: NodeList,
    pub body: Option<NodeId>,
    pub computed: bool,
    pub is_static: bool,
    pub generator: bool,
    pub is_async: bool,
    pub decorators: NodeList,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassProperty {
    pub key: Option<NodeId>,
    pub value: Option<NodeId>,
    pub computed: bool,
    pub is_static: bool,
    pub decorators: NodeList,
}
