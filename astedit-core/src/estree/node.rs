//! The node sum type
//!
//! One variant per handled grammar kind. Kinds that share a shape share a payload struct
//! (`ReturnStatement` and `ThrowStatement` both carry an [ArgumentStatement], for example),
//! but remain distinct variants so that dispatch stays a plain exhaustive `match`.

use super::elements::*;
use super::fields::FieldRef;
use super::kind::NodeKind;
use super::NodeList;
use super::tree::NodeId;

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    File(File),
    Program(Program),
    Identifier(Identifier),

    RegExpLiteral(RegExpLiteral),
    NullLiteral,
    StringLiteral(StringLiteral),
    BooleanLiteral(BooleanLiteral),
    NumericLiteral(NumericLiteral),
    Directive(Directive),
    DirectiveLiteral(StringLiteral),

    ExpressionStatement(ExpressionStatement),
    BlockStatement(BlockStatement),
    EmptyStatement,
    DebuggerStatement,
    WithStatement(WithStatement),
    ReturnStatement(ArgumentStatement),
    LabeledStatement(LabeledStatement),
    BreakStatement(JumpStatement),
    ContinueStatement(JumpStatement),
    IfStatement(IfStatement),
    SwitchStatement(SwitchStatement),
    SwitchCase(SwitchCase),
    ThrowStatement(ArgumentStatement),
    TryStatement(TryStatement),
    CatchClause(CatchClause),
    WhileStatement(LoopStatement),
    DoWhileStatement(LoopStatement),
    ForStatement(ForStatement),
    ForInStatement(ForEachStatement),
    ForOfStatement(ForEachStatement),

    FunctionDeclaration(Function),
    VariableDeclaration(VariableDeclaration),
    VariableDeclarator(VariableDeclarator),
    ClassDeclaration(Class),
    Decorator(Decorator),

    Super,
    Import,
    ThisExpression,
    ArrowFunctionExpression(ArrowFunction),
    YieldExpression(YieldExpression),
    AwaitExpression(AwaitExpression),
    ArrayExpression(ArrayElements),
    ObjectExpression(ObjectMembers),
    ObjectProperty(ObjectProperty),
    ObjectMethod(ObjectMethod),
    FunctionExpression(Function),
    UnaryExpression(UnaryOperation),
    UpdateExpression(UnaryOperation),
    BinaryExpression(Operation),
    AssignmentExpression(Operation),
    LogicalExpression(Operation),
    SpreadElement(Spread),
    SpreadProperty(Spread),
    MemberExpression(MemberExpression),
    BindExpression(BindExpression),
    ConditionalExpression(ConditionalExpression),
    CallExpression(Call),
    NewExpression(Call),
    SequenceExpression(SequenceExpression),
    DoExpression(DoExpression),
    ClassExpression(Class),

    ObjectPattern(ObjectMembers),
    ArrayPattern(ArrayElements),
    RestElement(Spread),
    RestProperty(Spread),
    AssignmentPattern(AssignmentPattern),

    ClassBody(ClassBody),
    ClassMethod(ClassMethod),
    ClassProperty(ClassProperty),

    ImportDeclaration(ImportDeclaration),
    ImportSpecifier(ImportSpecifier),
    ImportDefaultSpecifier(LocalSpecifier),
    ImportNamespaceSpecifier(LocalSpecifier),
    ExportNamedDeclaration(ExportNamedDeclaration),
    ExportSpecifier(ExportSpecifier),
    ExportDefaultDeclaration(ExportDefaultDeclaration),
    ExportAllDeclaration(ExportAllDeclaration),

    /// A node whose tag has no rendering rule. The tag is kept verbatim.
    Unknown { kind: String },
}

fn one(name: &'static str, child: Option<NodeId>) -> (&'static str, FieldRef<'static>) {
    (name, FieldRef::Node(child))
}

fn many<'a>(name: &'static str, children: &'a NodeList) -> (&'static str, FieldRef<'a>) {
    (name, FieldRef::List(children))
}

impl Node {
    /// The wire tag of this node. For unknown nodes, the unrecognized tag.
    pub fn kind(&self) -> &str {
        match self.node_kind() {
            Some(kind) => kind.as_str(),
            None => match self {
                Node::Unknown { kind } => kind,
                _ => "",
            },
        }
    }

    /// The handled kind, or `None` for [Node::Unknown].
    pub fn node_kind(&self) -> Option<NodeKind> {
        use NodeKind as K;
        let kind = match self {
            Node::File(_) => K::File,
            Node::Program(_) => K::Program,
            Node::Identifier(_) => K::Identifier,
            Node::RegExpLiteral(_) => K::RegExpLiteral,
            Node::NullLiteral => K::NullLiteral,
            Node::StringLiteral(_) => K::StringLiteral,
            Node::BooleanLiteral(_) => K::BooleanLiteral,
            Node::NumericLiteral(_) => K::NumericLiteral,
            Node::Directive(_) => K::Directive,
            Node::DirectiveLiteral(_) => K::DirectiveLiteral,
            Node::ExpressionStatement(_) => K::ExpressionStatement,
            Node::BlockStatement(_) => K::BlockStatement,
            Node::EmptyStatement => K::EmptyStatement,
            Node::DebuggerStatement => K::DebuggerStatement,
            Node::WithStatement(_) => K::WithStatement,
            Node::ReturnStatement(_) => K::ReturnStatement,
            Node::LabeledStatement(_) => K::LabeledStatement,
            Node::BreakStatement(_) => K::BreakStatement,
            Node::ContinueStatement(_) => K::ContinueStatement,
            Node::IfStatement(_) => K::IfStatement,
            Node::SwitchStatement(_) => K::SwitchStatement,
            Node::SwitchCase(_) => K::SwitchCase,
            Node::ThrowStatement(_) => K::ThrowStatement,
            Node::TryStatement(_) => K::TryStatement,
            Node::CatchClause(_) => K::CatchClause,
            Node::WhileStatement(_) => K::WhileStatement,
            Node::DoWhileStatement(_) => K::DoWhileStatement,
            Node::ForStatement(_) => K::ForStatement,
            Node::ForInStatement(_) => K::ForInStatement,
            Node::ForOfStatement(_) => K::ForOfStatement,
            Node::FunctionDeclaration(_) => K::FunctionDeclaration,
            Node::VariableDeclaration(_) => K::VariableDeclaration,
            Node::VariableDeclarator(_) => K::VariableDeclarator,
            Node::ClassDeclaration(_) => K::ClassDeclaration,
            Node::Decorator(_) => K::Decorator,
            Node::Super => K::Super,
            Node::Import => K::Import,
            Node::ThisExpression => K::ThisExpression,
            Node::ArrowFunctionExpression(_) => K::ArrowFunctionExpression,
            Node::YieldExpression(_) => K::YieldExpression,
            Node::AwaitExpression(_) => K::AwaitExpression,
            Node::ArrayExpression(_) => K::ArrayExpression,
            Node::ObjectExpression(_) => K::ObjectExpression,
            Node::ObjectProperty(_) => K::ObjectProperty,
            Node::ObjectMethod(_) => K::ObjectMethod,
            Node::FunctionExpression(_) => K::FunctionExpression,
            Node::UnaryExpression(_) => K::UnaryExpression,
            Node::UpdateExpression(_) => K::UpdateExpression,
            Node::BinaryExpression(_) => K::BinaryExpression,
            Node::AssignmentExpression(_) => K::AssignmentExpression,
            Node::LogicalExpression(_) => K::LogicalExpression,
            Node::SpreadElement(_) => K::SpreadElement,
            Node::SpreadProperty(_) => K::SpreadProperty,
            Node::MemberExpression(_) => K::MemberExpression,
            Node::BindExpression(_) => K::BindExpression,
            Node::ConditionalExpression(_) => K::ConditionalExpression,
            Node::CallExpression(_) => K::CallExpression,
            Node::NewExpression(_) => K::NewExpression,
            Node::SequenceExpression(_) => K::SequenceExpression,
            Node::DoExpression(_) => K::DoExpression,
            Node::ClassExpression(_) => K::ClassExpression,
            Node::ObjectPattern(_) => K::ObjectPattern,
            Node::ArrayPattern(_) => K::ArrayPattern,
            Node::RestElement(_) => K::RestElement,
            Node::RestProperty(_) => K::RestProperty,
            Node::AssignmentPattern(_) => K::AssignmentPattern,
            Node::ClassBody(_) => K::ClassBody,
            Node::ClassMethod(_) => K::ClassMethod,
            Node::ClassProperty(_) => K::ClassProperty,
            Node::ImportDeclaration(_) => K::ImportDeclaration,
            Node::ImportSpecifier(_) => K::ImportSpecifier,
            Node::ImportDefaultSpecifier(_) => K::ImportDefaultSpecifier,
            Node::ImportNamespaceSpecifier(_) => K::ImportNamespaceSpecifier,
            Node::ExportNamedDeclaration(_) => K::ExportNamedDeclaration,
            Node::ExportSpecifier(_) => K::ExportSpecifier,
            Node::ExportDefaultDeclaration(_) => K::ExportDefaultDeclaration,
            Node::ExportAllDeclaration(_) => K::ExportAllDeclaration,
            Node::Unknown { .. } => return None,
        };
        Some(kind)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Node::Unknown { .. })
    }

    /// Child fields in grammar order, by grammar name.
    ///
    /// These names are the ones focus paths use. Leaf kinds return an empty list.
    pub fn fields(&self) -> Vec<(&'static str, FieldRef<'_>)> {
        match self {
            Node::File(n) => vec![one("program", n.program)],
            Node::Program(n) => vec![many("directives", &n.directives), many("body", &n.body)],
            Node::Directive(n) => vec![one("value", n.value)],
            Node::ExpressionStatement(n) => vec![one("expression", n.expression)],
            Node::BlockStatement(n) => {
                vec![many("directives", &n.directives), many("body", &n.body)]
            }
            Node::WithStatement(n) => vec![one("object", n.object), one("body", n.body)],
            Node::ReturnStatement(n) | Node::ThrowStatement(n) => {
                vec![one("argument", n.argument)]
            }
            Node::LabeledStatement(n) => vec![one("label", n.label), one("body", n.body)],
            Node::BreakStatement(n) | Node::ContinueStatement(n) => vec![one("label", n.label)],
            Node::IfStatement(n) => vec![
                one("test", n.test),
                one("consequent", n.consequent),
                one("alternate", n.alternate),
            ],
            Node::SwitchStatement(n) => {
                vec![one("discriminant", n.discriminant), many("cases", &n.cases)]
            }
            Node::SwitchCase(n) => vec![one("test", n.test), many("consequent", &n.consequent)],
            Node::TryStatement(n) => vec![
                one("block", n.block),
                one("handler", n.handler),
                one("finalizer", n.finalizer),
            ],
            Node::CatchClause(n) => vec![one("param", n.param), one("body", n.body)],
            Node::WhileStatement(n) => vec![one("test", n.test), one("body", n.body)],
            Node::DoWhileStatement(n) => vec![one("body", n.body), one("test", n.test)],
            Node::ForStatement(n) => vec![
                one("init", n.init),
                one("test", n.test),
                one("update", n.update),
                one("body", n.body),
            ],
            Node::ForInStatement(n) | Node::ForOfStatement(n) => vec![
                one("left", n.left),
                one("right", n.right),
                one("body", n.body),
            ],
            Node::FunctionDeclaration(n) | Node::FunctionExpression(n) => vec![
                one("id", n.id),
                many("params", &n.params),
                one("body", n.body),
            ],
            Node::VariableDeclaration(n) => vec![many("declarations", &n.declarations)],
            Node::VariableDeclarator(n) => vec![one("id", n.id), one("init", n.init)],
            Node::ClassDeclaration(n) | Node::ClassExpression(n) => vec![
                many("decorators", &n.decorators),
                one("id", n.id),
                one("superClass", n.super_class),
                one("body", n.body),
            ],
            Node::Decorator(n) => vec![one("expression", n.expression)],
            Node::ArrowFunctionExpression(n) => {
                vec![many("params", &n.params), one("body", n.body)]
            }
            Node::YieldExpression(n) => vec![one("argument", n.argument)],
            Node::AwaitExpression(n) => vec![one("argument", n.argument)],
            Node::ArrayExpression(n) | Node::ArrayPattern(n) => {
                vec![many("elements", &n.elements)]
            }
            Node::ObjectExpression(n) | Node::ObjectPattern(n) => {
                vec![many("properties", &n.properties)]
            }
            Node::ObjectProperty(n) => vec![
                many("decorators", &n.decorators),
                one("key", n.key),
                one("value", n.value),
            ],
            Node::ObjectMethod(n) => vec![
                many("decorators", &n.decorators),
                one("key", n.key),
                many("params", &n.params),
                one("body", n.body),
            ],
            Node::UnaryExpression(n) | Node::UpdateExpression(n) => {
                vec![one("argument", n.argument)]
            }
            Node::BinaryExpression(n) | Node::AssignmentExpression(n) | Node::LogicalExpression(n) => {
                vec![one("left", n.left), one("right", n.right)]
            }
            Node::SpreadElement(n)
            | Node::SpreadProperty(n)
            | Node::RestElement(n)
            | Node::RestProperty(n) => vec![one("argument", n.argument)],
            Node::MemberExpression(n) => vec![one("object", n.object), one("property", n.property)],
            Node::BindExpression(n) => vec![one("object", n.object), one("callee", n.callee)],
            Node::ConditionalExpression(n) => vec![
                one("test", n.test),
                one("consequent", n.consequent),
                one("alternate", n.alternate),
            ],
            Node::CallExpression(n) | Node::NewExpression(n) => {
                vec![one("callee", n.callee), many("arguments", &n.arguments)]
            }
            Node::SequenceExpression(n) => vec![many("expressions", &n.expressions)],
            Node::DoExpression(n) => vec![one("body", n.body)],
            Node::AssignmentPattern(n) => vec![one("left", n.left), one("right", n.right)],
            Node::ClassBody(n) => vec![many("body", &n.body)],
            Node::ClassMethod(n) => vec![
                many("decorators", &n.decorators),
                one("key", n.key),
                many("params", &n.params),
                one("body", n.body),
            ],
            Node::ClassProperty(n) => vec![
                many("decorators", &n.decorators),
                one("key", n.key),
                one("value", n.value),
            ],
            Node::ImportDeclaration(n) => {
                vec![many("specifiers", &n.specifiers), one("source", n.source)]
            }
            Node::ImportSpecifier(n) => vec![one("imported", n.imported), one("local", n.local)],
            Node::ImportDefaultSpecifier(n) | Node::ImportNamespaceSpecifier(n) => {
                vec![one("local", n.local)]
            }
            Node::ExportNamedDeclaration(n) => vec![
                one("declaration", n.declaration),
                many("specifiers", &n.specifiers),
                one("source", n.source),
            ],
            Node::ExportSpecifier(n) => vec![one("local", n.local), one("exported", n.exported)],
            Node::ExportDefaultDeclaration(n) => vec![one("declaration", n.declaration)],
            Node::ExportAllDeclaration(n) => vec![one("source", n.source)],
            Node::Identifier(_)
            | Node::RegExpLiteral(_)
            | Node::NullLiteral
            | Node::StringLiteral(_)
            | Node::BooleanLiteral(_)
            | Node::NumericLiteral(_)
            | Node::DirectiveLiteral(_)
            | Node::EmptyStatement
            | Node::DebuggerStatement
            | Node::Super
            | Node::Import
            | Node::ThisExpression
            | Node::Unknown { .. } => Vec::new(),
        }
    }

    /// Look up a child field by grammar name.
    pub fn field(&self, name: &str) -> Option<FieldRef<'_>> {
        self.fields()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// The field Down navigation descends into.
    ///
    /// `IfStatement` descends into its `test`, like the other test-first constructs
    /// (`while`, conditional expressions). Switches descend into their cases and cases into
    /// their statements; arrow functions into their `body`. Leaf kinds and unknown nodes
    /// have none.
    pub fn primary_field(&self) -> Option<&'static str> {
        let field = match self {
            Node::File(_) => "program",
            Node::Program(_) | Node::BlockStatement(_) | Node::ClassBody(_) => "body",
            Node::Directive(_) => "value",
            Node::ExpressionStatement(_) => "expression",
            Node::WithStatement(_) => "object",
            Node::ReturnStatement(_)
            | Node::ThrowStatement(_)
            | Node::YieldExpression(_)
            | Node::AwaitExpression(_)
            | Node::SpreadElement(_)
            | Node::SpreadProperty(_)
            | Node::RestElement(_)
            | Node::RestProperty(_)
            | Node::UnaryExpression(_)
            | Node::UpdateExpression(_) => "argument",
            Node::LabeledStatement(_) | Node::BreakStatement(_) | Node::ContinueStatement(_) => {
                "label"
            }
            Node::IfStatement(_) | Node::WhileStatement(_) | Node::ConditionalExpression(_) => {
                "test"
            }
            Node::SwitchStatement(_) => "cases",
            Node::SwitchCase(_) => "consequent",
            Node::TryStatement(_) => "block",
            Node::CatchClause(_) => "param",
            Node::DoWhileStatement(_)
            | Node::DoExpression(_)
            | Node::ArrowFunctionExpression(_) => "body",
            Node::ForStatement(_) => "init",
            Node::ForInStatement(_) | Node::ForOfStatement(_) => "left",
            Node::FunctionDeclaration(_)
            | Node::FunctionExpression(_)
            | Node::ClassDeclaration(_)
            | Node::ClassExpression(_)
            | Node::VariableDeclarator(_) => "id",
            Node::VariableDeclaration(_) => "declarations",
            Node::Decorator(_) => "expression",
            Node::ArrayExpression(_) | Node::ArrayPattern(_) => "elements",
            Node::ObjectExpression(_) | Node::ObjectPattern(_) => "properties",
            Node::ObjectProperty(_)
            | Node::ObjectMethod(_)
            | Node::ClassMethod(_)
            | Node::ClassProperty(_) => "key",
            Node::BinaryExpression(_)
            | Node::AssignmentExpression(_)
            | Node::LogicalExpression(_)
            | Node::AssignmentPattern(_) => "left",
            Node::MemberExpression(_) | Node::BindExpression(_) => "object",
            Node::CallExpression(_) | Node::NewExpression(_) => "callee",
            Node::SequenceExpression(_) => "expressions",
            Node::ImportDeclaration(_) => "specifiers",
            Node::ImportSpecifier(_) => "imported",
            Node::ImportDefaultSpecifier(_) | Node::ImportNamespaceSpecifier(_) => "local",
            Node::ExportNamedDeclaration(_) | Node::ExportDefaultDeclaration(_) => "declaration",
            Node::ExportSpecifier(_) => "local",
            Node::ExportAllDeclaration(_) => "source",
            Node::Identifier(_)
            | Node::RegExpLiteral(_)
            | Node::NullLiteral
            | Node::StringLiteral(_)
            | Node::BooleanLiteral(_)
            | Node::NumericLiteral(_)
            | Node::DirectiveLiteral(_)
            | Node::EmptyStatement
            | Node::DebuggerStatement
            | Node::Super
            | Node::Import
            | Node::ThisExpression
            | Node::Unknown { .. } => return None,
        };
        Some(field)
    }
}
