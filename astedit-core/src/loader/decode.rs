//! JSON to arena decoding, for both the nested and the flat shape

use super::LoaderError;
use crate::estree::*;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

pub(super) fn decode(value: &Value) -> Result<SyntaxTree, LoaderError> {
    let object = value.as_object().ok_or(LoaderError::NotANode)?;
    if object.contains_key("type") {
        let mut decoder = Decoder::new(None);
        let root = decoder.node(value).ok_or(LoaderError::NotANode)?;
        return Ok(SyntaxTree::new(decoder.nodes, root));
    }

    let table = flat_table(object)?;
    let root_key = find_root(&table).ok_or(LoaderError::MissingRoot)?;
    let mut decoder = Decoder::new(Some(&table));
    decoder.consumed.insert(root_key);
    let root = decoder.node(table[&root_key]).ok_or(LoaderError::MissingRoot)?;
    Ok(SyntaxTree::new(decoder.nodes, root))
}

/// Keys of a flat table are node ids; anything else means this is not a node document.
fn flat_table(object: &Map<String, Value>) -> Result<HashMap<u64, &Value>, LoaderError> {
    if object.is_empty() {
        return Err(LoaderError::NotANode);
    }
    object
        .iter()
        .map(|(key, value)| key.parse::<u64>().map(|id| (id, value)))
        .collect::<Result<_, _>>()
        .map_err(|_| LoaderError::NotANode)
}

/// The `File` entry if there is one, else the `Program` entry. Lowest id wins ties.
fn find_root(table: &HashMap<u64, &Value>) -> Option<u64> {
    let with_tag = |tag: &str| {
        table
            .iter()
            .filter(|(_, value)| value.get("type").and_then(Value::as_str) == Some(tag))
            .map(|(id, _)| *id)
            .min()
    };
    with_tag("File").or_else(|| with_tag("Program"))
}

struct Decoder<'v> {
    nodes: Vec<Node>,
    table: Option<&'v HashMap<u64, &'v Value>>,
    consumed: HashSet<u64>,
}

impl<'v> Decoder<'v> {
    fn new(table: Option<&'v HashMap<u64, &'v Value>>) -> Self {
        Decoder {
            nodes: Vec::new(),
            table,
            consumed: HashSet::new(),
        }
    }

    /// A child reference: an inline node object, or in the flat shape an id into the table.
    fn reference(&mut self, value: &'v Value) -> Option<NodeId> {
        match value {
            Value::Object(_) => self.node(value),
            Value::Number(number) => {
                let table = self.table?;
                let key = number.as_u64()?;
                let Some(target) = table.get(&key) else {
                    tracing::warn!(id = key, "dangling node reference, loading as absent");
                    return None;
                };
                if !self.consumed.insert(key) {
                    tracing::warn!(id = key, "node referenced twice, loading repeat as absent");
                    return None;
                }
                self.node(target)
            }
            _ => None,
        }
    }

    fn one(&mut self, object: &'v Map<String, Value>, field: &str) -> Option<NodeId> {
        object.get(field).and_then(|value| self.reference(value))
    }

    fn many(&mut self, object: &'v Map<String, Value>, field: &str) -> NodeList {
        match object.get(field) {
            Some(Value::Array(items)) => items.iter().map(|item| self.reference(item)).collect(),
            _ => Vec::new(),
        }
    }

    /// Decode one node object. Ids are handed out in pre-order.
    fn node(&mut self, value: &'v Value) -> Option<NodeId> {
        let object = value.as_object()?;
        let Some(tag) = object.get("type").and_then(Value::as_str) else {
            tracing::warn!("object without a type tag in a node field, loading as absent");
            return None;
        };
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::EmptyStatement);
        let node = match NodeKind::from_tag(tag) {
            Some(kind) => self.payload(kind, object),
            None => {
                tracing::debug!(kind = tag, "no rule for node kind");
                Node::Unknown {
                    kind: tag.to_string(),
                }
            }
        };
        self.nodes[id.0] = node;
        Some(id)
    }

    fn payload(&mut self, kind: NodeKind, o: &'v Map<String, Value>) -> Node {
        use NodeKind as K;
        match kind {
            K::File => Node::File(File {
                program: self.one(o, "program"),
            }),
            K::Program => Node::Program(Program {
                directives: self.many(o, "directives"),
                body: self.many(o, "body"),
                source_type: string(o, "sourceType"),
            }),
            K::Identifier => Node::Identifier(Identifier {
                name: string(o, "name"),
            }),
            K::RegExpLiteral => Node::RegExpLiteral(RegExpLiteral {
                pattern: string(o, "pattern"),
                flags: string(o, "flags"),
            }),
            K::NullLiteral => Node::NullLiteral,
            K::StringLiteral => Node::StringLiteral(StringLiteral {
                value: string(o, "value"),
            }),
            K::BooleanLiteral => Node::BooleanLiteral(BooleanLiteral {
                value: flag(o, "value"),
            }),
            K::NumericLiteral => Node::NumericLiteral(NumericLiteral {
                value: o.get("value").and_then(Value::as_f64).unwrap_or_default(),
                raw: o
                    .get("extra")
                    .and_then(|extra| extra.get("raw"))
                    .and_then(Value::as_str)
                    .map(str::to_string),
            }),
            K::Directive => Node::Directive(Directive {
                value: self.one(o, "value"),
            }),
            K::DirectiveLiteral => Node::DirectiveLiteral(StringLiteral {
                value: string(o, "value"),
            }),

            K::ExpressionStatement => Node::ExpressionStatement(ExpressionStatement {
                expression: self.one(o, "expression"),
            }),
            K::BlockStatement => Node::BlockStatement(BlockStatement {
                directives: self.many(o, "directives"),
                body: self.many(o, "body"),
            }),
            K::EmptyStatement => Node::EmptyStatement,
            K::DebuggerStatement => Node::DebuggerStatement,
            K::WithStatement => Node::WithStatement(WithStatement {
                object: self.one(o, "object"),
                body: self.one(o, "body"),
            }),
            K::ReturnStatement => Node::ReturnStatement(self.argument_statement(o)),
            K::ThrowStatement => Node::ThrowStatement(self.argument_statement(o)),
            K::LabeledStatement => Node::LabeledStatement(LabeledStatement {
                label: self.one(o, "label"),
                body: self.one(o, "body"),
            }),
            K::BreakStatement => Node::BreakStatement(JumpStatement {
                label: self.one(o, "label"),
            }),
            K::ContinueStatement => Node::ContinueStatement(JumpStatement {
                label: self.one(o, "label"),
            }),
            K::IfStatement => Node::IfStatement(IfStatement {
                test: self.one(o, "test"),
                consequent: self.one(o, "consequent"),
                alternate: self.one(o, "alternate"),
            }),
            K::SwitchStatement => Node::SwitchStatement(SwitchStatement {
                discriminant: self.one(o, "discriminant"),
                cases: self.many(o, "cases"),
            }),
            K::SwitchCase => Node::SwitchCase(SwitchCase {
                test: self.one(o, "test"),
                consequent: self.many(o, "consequent"),
            }),
            K::TryStatement => Node::TryStatement(TryStatement {
                block: self.one(o, "block"),
                handler: self.one(o, "handler"),
                finalizer: self.one(o, "finalizer"),
            }),
            K::CatchClause => Node::CatchClause(CatchClause {
                param: self.one(o, "param"),
                body: self.one(o, "body"),
            }),
            K::WhileStatement => Node::WhileStatement(self.loop_statement(o)),
            K::DoWhileStatement => Node::DoWhileStatement(self.loop_statement(o)),
            K::ForStatement => Node::ForStatement(ForStatement {
                init: self.one(o, "init"),
                test: self.one(o, "test"),
                update: self.one(o, "update"),
                body: self.one(o, "body"),
            }),
            K::ForInStatement => Node::ForInStatement(self.for_each(o)),
            K::ForOfStatement => Node::ForOfStatement(self.for_each(o)),

            K::FunctionDeclaration => Node::FunctionDeclaration(self.function(o)),
            K::VariableDeclaration => Node::VariableDeclaration(VariableDeclaration {
                kind: DeclarationKind::from_tag(&string(o, "kind")),
                declarations: self.many(o, "declarations"),
            }),
            K::VariableDeclarator => Node::VariableDeclarator(VariableDeclarator {
                id: self.one(o, "id"),
                init: self.one(o, "init"),
            }),
            K::ClassDeclaration => Node::ClassDeclaration(self.class(o)),
            K::Decorator => Node::Decorator(Decorator {
                expression: self.one(o, "expression"),
            }),

            K::Super => Node::Super,
            K::Import => Node::Import,
            K::ThisExpression => Node::ThisExpression,
            K::ArrowFunctionExpression => Node::ArrowFunctionExpression(ArrowFunction {
                params: self.many(o, "params"),
                body: self.one(o, "body"),
                is_async: flag(o, "async"),
            }),
            K::YieldExpression => Node::YieldExpression(YieldExpression {
                argument: self.one(o, "argument"),
                delegate: flag(o, "delegate"),
            }),
            K::AwaitExpression => Node::AwaitExpression(AwaitExpression {
                argument: self.one(o, "argument"),
            }),
            K::ArrayExpression => Node::ArrayExpression(ArrayElements {
                elements: self.many(o, "elements"),
            }),
            K::ObjectExpression => Node::ObjectExpression(ObjectMembers {
                properties: self.many(o, "properties"),
            }),
            K::ObjectProperty => Node::ObjectProperty(ObjectProperty {
                decorators: self.many(o, "decorators"),
                key: self.one(o, "key"),
                value: self.one(o, "value"),
                computed: flag(o, "computed"),
                shorthand: flag(o, "shorthand"),
            }),
            K::ObjectMethod => Node::ObjectMethod(ObjectMethod {
                kind: MethodKind::from_tag(&string(o, "kind")),
                decorators: self.many(o, "decorators"),
                key: self.one(o, "key"),
                params: self.many(o, "params"),
                body: self.one(o, "body"),
                computed: flag(o, "computed"),
                generator: flag(o, "generator"),
                is_async: flag(o, "async"),
            }),
            K::FunctionExpression => Node::FunctionExpression(self.function(o)),
            K::UnaryExpression => Node::UnaryExpression(self.unary(o)),
            K::UpdateExpression => Node::UpdateExpression(self.unary(o)),
            K::BinaryExpression => Node::BinaryExpression(self.operation(o)),
            K::AssignmentExpression => Node::AssignmentExpression(self.operation(o)),
            K::LogicalExpression => Node::LogicalExpression(self.operation(o)),
            K::SpreadElement => Node::SpreadElement(self.spread(o)),
            K::SpreadProperty => Node::SpreadProperty(self.spread(o)),
            K::MemberExpression => Node::MemberExpression(MemberExpression {
                object: self.one(o, "object"),
                property: self.one(o, "property"),
                computed: flag(o, "computed"),
            }),
            K::BindExpression => Node::BindExpression(BindExpression {
                object: self.one(o, "object"),
                callee: self.one(o, "callee"),
            }),
            K::ConditionalExpression => Node::ConditionalExpression(ConditionalExpression {
                test: self.one(o, "test"),
                consequent: self.one(o, "consequent"),
                alternate: self.one(o, "alternate"),
            }),
            K::CallExpression => Node::CallExpression(self.call(o)),
            K::NewExpression => Node::NewExpression(self.call(o)),
            K::SequenceExpression => Node::SequenceExpression(SequenceExpression {
                expressions: self.many(o, "expressions"),
            }),
            K::DoExpression => Node::DoExpression(DoExpression {
                body: self.one(o, "body"),
            }),
            K::ClassExpression => Node::ClassExpression(self.class(o)),

            K::ObjectPattern => Node::ObjectPattern(ObjectMembers {
                properties: self.many(o, "properties"),
            }),
            K::ArrayPattern => Node::ArrayPattern(ArrayElements {
                elements: self.many(o, "elements"),
            }),
            K::RestElement => Node::RestElement(self.spread(o)),
            K::RestProperty => Node::RestProperty(self.spread(o)),
            K::AssignmentPattern => Node::AssignmentPattern(AssignmentPattern {
                left: self.one(o, "left"),
                right: self.one(o, "right"),
            }),

            K::ClassBody => Node::ClassBody(ClassBody {
                body: self.many(o, "body"),
            }),
            K::ClassMethod => Node::ClassMethod(ClassMethod {
                kind: MethodKind::from_tag(&string(o, "kind")),
                decorators: self.many(o, "decorators"),
                key: self.one(o, "key"),
                params: self.many(o, "params"),
                body: self.one(o, "body"),
                computed: flag(o, "computed"),
                is_static: flag(o, "static"),
                generator: flag(o, "generator"),
                is_async: flag(o, "async"),
            }),
            K::ClassProperty => Node::ClassProperty(ClassProperty {
                decorators: self.many(o, "decorators"),
                key: self.one(o, "key"),
                value: self.one(o, "value"),
                computed: flag(o, "computed"),
                is_static: flag(o, "static"),
            }),

            K::ImportDeclaration => Node::ImportDeclaration(ImportDeclaration {
                specifiers: self.many(o, "specifiers"),
                source: self.one(o, "source"),
            }),
            K::ImportSpecifier => Node::ImportSpecifier(ImportSpecifier {
                imported: self.one(o, "imported"),
                local: self.one(o, "local"),
            }),
            K::ImportDefaultSpecifier => Node::ImportDefaultSpecifier(LocalSpecifier {
                local: self.one(o, "local"),
            }),
            K::ImportNamespaceSpecifier => Node::ImportNamespaceSpecifier(LocalSpecifier {
                local: self.one(o, "local"),
            }),
            K::ExportNamedDeclaration => Node::ExportNamedDeclaration(ExportNamedDeclaration {
                declaration: self.one(o, "declaration"),
                specifiers: self.many(o, "specifiers"),
                source: self.one(o, "source"),
            }),
            K::ExportSpecifier => Node::ExportSpecifier(ExportSpecifier {
                local: self.one(o, "local"),
                exported: self.one(o, "exported"),
            }),
            K::ExportDefaultDeclaration => Node::ExportDefaultDeclaration(ExportDefaultDeclaration {
                declaration: self.one(o, "declaration"),
            }),
            K::ExportAllDeclaration => Node::ExportAllDeclaration(ExportAllDeclaration {
                source: self.one(o, "source"),
            }),
        }
    }

    fn argument_statement(&mut self, o: &'v Map<String, Value>) -> ArgumentStatement {
        ArgumentStatement {
            argument: self.one(o, "argument"),
        }
    }

    fn loop_statement(&mut self, o: &'v Map<String, Value>) -> LoopStatement {
        LoopStatement {
            test: self.one(o, "test"),
            body: self.one(o, "body"),
        }
    }

    fn for_each(&mut self, o: &'v Map<String, Value>) -> ForEachStatement {
        ForEachStatement {
            left: self.one(o, "left"),
            right: self.one(o, "right"),
            body: self.one(o, "body"),
            is_await: flag(o, "await"),
        }
    }

    fn function(&mut self, o: &'v Map<String, Value>) -> Function {
        Function {
            id: self.one(o, "id"),
            params: self.many(o, "params"),
            body: self.one(o, "body"),
            generator: flag(o, "generator"),
            is_async: flag(o, "async"),
        }
    }

    fn class(&mut self, o: &'v Map<String, Value>) -> Class {
        Class {
            decorators: self.many(o, "decorators"),
            id: self.one(o, "id"),
            super_class: self.one(o, "superClass"),
            body: self.one(o, "body"),
        }
    }

    fn unary(&mut self, o: &'v Map<String, Value>) -> UnaryOperation {
        UnaryOperation {
            operator: string(o, "operator"),
            prefix: o.get("prefix").and_then(Value::as_bool).unwrap_or(true),
            argument: self.one(o, "argument"),
        }
    }

    fn operation(&mut self, o: &'v Map<String, Value>) -> Operation {
        Operation {
            operator: string(o, "operator"),
            left: self.one(o, "left"),
            right: self.one(o, "right"),
        }
    }

    fn spread(&mut self, o: &'v Map<String, Value>) -> Spread {
        Spread {
            argument: self.one(o, "argument"),
        }
    }

    fn call(&mut self, o: &'v Map<String, Value>) -> Call {
        Call {
            callee: self.one(o, "callee"),
            arguments: self.many(o, "arguments"),
        }
    }
}

fn string(o: &Map<String, Value>, field: &str) -> String {
    o.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn flag(o: &Map<String, Value>, field: &str) -> bool {
    o.get(field).and_then(Value::as_bool).unwrap_or(false)
}
