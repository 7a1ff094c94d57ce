//! Function-like payloads and declarations

use super::super::{NodeId, NodeList};

/// Shared shape of `FunctionDeclaration` and `FunctionExpression`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Function {
    pub id: Option<NodeId>,
    pub params: NodeList,
    pub body: Option<NodeId>,
    pub generator: bool,
    pub is_async: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrowFunction {
    pub params: NodeList,
    /// A block statement, or an expression for concise bodies.
    pub body: Option<NodeId>,
    pub is_async: bool,
}

/// `var`, `let` or `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeclarationKind {
    #[default]
    Var,
    Let,
    Const,
}

impl DeclarationKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "let" => DeclarationKind::Let,
            "const" => DeclarationKind::Const,
            _ => DeclarationKind::Var,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Var => "var",
            DeclarationKind::Let => "let",
            DeclarationKind::Const => "const",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariableDeclaration {
    pub kind: DeclarationKind,
    pub declarations: NodeList,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariableDeclarator {
    pub id: Option<NodeId>,
    pub init: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Decorator {
    pub expression: Option<NodeId>,
}

/// Kind of an object or class method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MethodKind {
    #[default]
    Method,
    Get,
    Set,
    Constructor,
}

impl MethodKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "get" => MethodKind::Get,
            "set" => MethodKind::Set,
            "constructor" => MethodKind::Constructor,
            _ => MethodKind::Method,
        }
    }

    /// Accessor keyword shown before the key, if any.
    pub fn accessor_keyword(&self) -> Option<&'static str> {
        match self {
            MethodKind::Get => Some("get"),
            MethodKind::Set => Some("set"),
            MethodKind::Method | MethodKind::Constructor => None,
        }
    }
}
