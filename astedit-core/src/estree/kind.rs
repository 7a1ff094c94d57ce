//! Node kind enumeration
//!
//! [NodeKind] lists every grammar kind the renderer handles explicitly. Kinds outside this
//! list still load (as [Node::Unknown](super::Node::Unknown)) and still render, through the
//! placeholder rule.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Broad grouping of kinds, used by outline icons and by tests that sample per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    Root,
    Literal,
    Statement,
    Declaration,
    Expression,
    Pattern,
    Class,
    Module,
}

macro_rules! node_kinds {
    ($($variant:ident => $category:ident),+ $(,)?) => {
        /// Every grammar kind with a dedicated rendering rule.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeKind {
            $($variant),+
        }

        impl NodeKind {
            /// All handled kinds, in grammar order.
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$variant),+];

            /// The wire tag of this kind (the `type` field of a node).
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(NodeKind::$variant => stringify!($variant)),+
                }
            }

            pub fn category(&self) -> NodeCategory {
                match self {
                    $(NodeKind::$variant => NodeCategory::$category),+
                }
            }
        }
    };
}

node_kinds! {
    File => Root,
    Program => Root,
    Identifier => Expression,
    // Literals
    RegExpLiteral => Literal,
    NullLiteral => Literal,
    StringLiteral => Literal,
    BooleanLiteral => Literal,
    NumericLiteral => Literal,
    Directive => Statement,
    DirectiveLiteral => Literal,
    // Statements
    ExpressionStatement => Statement,
    BlockStatement => Statement,
    EmptyStatement => Statement,
    DebuggerStatement => Statement,
    WithStatement => Statement,
    ReturnStatement => Statement,
    LabeledStatement => Statement,
    BreakStatement => Statement,
    ContinueStatement => Statement,
    IfStatement => Statement,
    SwitchStatement => Statement,
    SwitchCase => Statement,
    ThrowStatement => Statement,
    TryStatement => Statement,
    CatchClause => Statement,
    WhileStatement => Statement,
    DoWhileStatement => Statement,
    ForStatement => Statement,
    ForInStatement => Statement,
    ForOfStatement => Statement,
    // Declarations
    FunctionDeclaration => Declaration,
    VariableDeclaration => Declaration,
    VariableDeclarator => Declaration,
    ClassDeclaration => Declaration,
    Decorator => Declaration,
    // Expressions
    Super => Expression,
    Import => Expression,
    ThisExpression => Expression,
    ArrowFunctionExpression => Expression,
    YieldExpression => Expression,
    AwaitExpression => Expression,
    ArrayExpression => Expression,
    ObjectExpression => Expression,
    ObjectProperty => Expression,
    ObjectMethod => Expression,
    FunctionExpression => Expression,
    UnaryExpression => Expression,
    UpdateExpression => Expression,
    BinaryExpression => Expression,
    AssignmentExpression => Expression,
    LogicalExpression => Expression,
    SpreadElement => Expression,
    SpreadProperty => Expression,
    MemberExpression => Expression,
    BindExpression => Expression,
    ConditionalExpression => Expression,
    CallExpression => Expression,
    NewExpression => Expression,
    SequenceExpression => Expression,
    DoExpression => Expression,
    ClassExpression => Expression,
    // Patterns
    ObjectPattern => Pattern,
    ArrayPattern => Pattern,
    RestElement => Pattern,
    RestProperty => Pattern,
    AssignmentPattern => Pattern,
    // Classes
    ClassBody => Class,
    ClassMethod => Class,
    ClassProperty => Class,
    // Modules
    ImportDeclaration => Module,
    ImportSpecifier => Module,
    ImportDefaultSpecifier => Module,
    ImportNamespaceSpecifier => Module,
    ExportNamedDeclaration => Module,
    ExportSpecifier => Module,
    ExportDefaultDeclaration => Module,
    ExportAllDeclaration => Module,
}

static BY_TAG: Lazy<HashMap<&'static str, NodeKind>> =
    Lazy::new(|| NodeKind::ALL.iter().map(|k| (k.as_str(), *k)).collect());

impl NodeKind {
    /// Look up a kind by its wire tag. Returns `None` for tags without a rule.
    pub fn from_tag(tag: &str) -> Option<NodeKind> {
        BY_TAG.get(tag).copied()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
