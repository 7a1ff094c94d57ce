//! Roots, identifiers and literals

use super::super::{NodeId, NodeList};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct File {
    pub program: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub directives: NodeList,
    pub body: NodeList,
    /// `script` or `module`
    pub source_type: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegExpLiteral {
    pub pattern: String,
    pub flags: String,
}

/// Payload of `StringLiteral` and `DirectiveLiteral`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringLiteral {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BooleanLiteral {
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumericLiteral {
    pub value: f64,
    /// Source spelling (`extra.raw`) when the parser recorded it.
    pub raw: Option<String>,
}

impl NumericLiteral {
    /// Text shown for the literal: the source spelling if known, else the value.
    pub fn display(&self) -> String {
        match &self.raw {
            Some(raw) => raw.clone(),
            None => self.value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Directive {
    pub value: Option<NodeId>,
}
