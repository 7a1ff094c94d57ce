//! Import and export payloads

use super::super::{NodeId, NodeList};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportDeclaration {
    pub specifiers: NodeList,
    pub source: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportSpecifier {
    pub imported: Option<NodeId>,
    pub local: Option<NodeId>,
}

/// Payload of `ImportDefaultSpecifier` and `ImportNamespaceSpecifier`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocalSpecifier {
    pub local: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExportNamedDeclaration {
    pub declaration: Option<NodeId>,
    pub specifiers: NodeList,
    pub source: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExportSpecifier {
    pub local: Option<NodeId>,
    pub exported: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExportDefaultDeclaration {
    pub declaration: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExportAllDeclaration {
    pub source: Option<NodeId>,
}
