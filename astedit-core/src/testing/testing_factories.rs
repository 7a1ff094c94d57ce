//! Tree factories
//!
//! [TreeBuilder] pushes nodes into an arena bottom-up: children first, then the parent that
//! references their ids. [TreeBuilder::finish] picks the root and links parents.

use crate::estree::*;

#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add any node.
    pub fn add(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn finish(self, root: NodeId) -> SyntaxTree {
        SyntaxTree::new(self.nodes, root)
    }

    pub fn file(&mut self, program: NodeId) -> NodeId {
        self.add(Node::File(File {
            program: Some(program),
        }))
    }

    pub fn program(&mut self, body: Vec<NodeId>) -> NodeId {
        self.add(Node::Program(Program {
            directives: Vec::new(),
            body: some(body),
            source_type: "script".to_string(),
        }))
    }

    pub fn ident(&mut self, name: &str) -> NodeId {
        self.add(Node::Identifier(Identifier {
            name: name.to_string(),
        }))
    }

    pub fn number(&mut self, value: f64) -> NodeId {
        self.add(Node::NumericLiteral(NumericLiteral { value, raw: None }))
    }

    pub fn string(&mut self, value: &str) -> NodeId {
        self.add(Node::StringLiteral(StringLiteral {
            value: value.to_string(),
        }))
    }

    pub fn boolean(&mut self, value: bool) -> NodeId {
        self.add(Node::BooleanLiteral(BooleanLiteral { value }))
    }

    pub fn expr_stmt(&mut self, expression: NodeId) -> NodeId {
        self.add(Node::ExpressionStatement(ExpressionStatement {
            expression: Some(expression),
        }))
    }

    pub fn block(&mut self, body: Vec<NodeId>) -> NodeId {
        self.add(Node::BlockStatement(BlockStatement {
            directives: Vec::new(),
            body: some(body),
        }))
    }

    pub fn ret(&mut self, argument: Option<NodeId>) -> NodeId {
        self.add(Node::ReturnStatement(ArgumentStatement { argument }))
    }

    pub fn if_stmt(&mut self, test: NodeId, consequent: NodeId, alternate: Option<NodeId>) -> NodeId {
        self.add(Node::IfStatement(IfStatement {
            test: Some(test),
            consequent: Some(consequent),
            alternate,
        }))
    }

    pub fn binary(&mut self, operator: &str, left: NodeId, right: NodeId) -> NodeId {
        self.add(Node::BinaryExpression(operation(operator, left, right)))
    }

    pub fn logical(&mut self, operator: &str, left: NodeId, right: NodeId) -> NodeId {
        self.add(Node::LogicalExpression(operation(operator, left, right)))
    }

    pub fn assign(&mut self, operator: &str, left: NodeId, right: NodeId) -> NodeId {
        self.add(Node::AssignmentExpression(operation(operator, left, right)))
    }

    pub fn unary(&mut self, operator: &str, argument: NodeId) -> NodeId {
        self.add(Node::UnaryExpression(UnaryOperation {
            operator: operator.to_string(),
            prefix: true,
            argument: Some(argument),
        }))
    }

    pub fn member(&mut self, object: NodeId, property: NodeId, computed: bool) -> NodeId {
        self.add(Node::MemberExpression(MemberExpression {
            object: Some(object),
            property: Some(property),
            computed,
        }))
    }

    pub fn call(&mut self, callee: NodeId, arguments: Vec<NodeId>) -> NodeId {
        self.add(Node::CallExpression(Call {
            callee: Some(callee),
            arguments: some(arguments),
        }))
    }

    /// An array literal; `None` entries are holes.
    pub fn array(&mut self, elements: Vec<Option<NodeId>>) -> NodeId {
        self.add(Node::ArrayExpression(ArrayElements { elements }))
    }

    pub fn object(&mut self, properties: Vec<NodeId>) -> NodeId {
        self.add(Node::ObjectExpression(ObjectMembers {
            properties: some(properties),
        }))
    }

    pub fn property(&mut self, key: NodeId, value: NodeId) -> NodeId {
        self.add(Node::ObjectProperty(ObjectProperty {
            key: Some(key),
            value: Some(value),
            ..ObjectProperty::default()
        }))
    }

    pub fn var(&mut self, kind: DeclarationKind, id: NodeId, init: Option<NodeId>) -> NodeId {
        let declarator = self.add(Node::VariableDeclarator(VariableDeclarator {
            id: Some(id),
            init,
        }));
        self.add(Node::VariableDeclaration(VariableDeclaration {
            kind,
            declarations: vec![Some(declarator)],
        }))
    }

    pub fn function(&mut self, name: Option<&str>, params: Vec<NodeId>, body: Vec<NodeId>) -> NodeId {
        let id = name.map(|name| self.ident(name));
        let body = self.block(body);
        self.add(Node::FunctionDeclaration(Function {
            id,
            params: some(params),
            body: Some(body),
            ..Function::default()
        }))
    }

    pub fn unknown(&mut self, kind: &str) -> NodeId {
        self.add(Node::Unknown {
            kind: kind.to_string(),
        })
    }
}

fn some(ids: Vec<NodeId>) -> NodeList {
    ids.into_iter().map(Some).collect()
}

fn operation(operator: &str, left: NodeId, right: NodeId) -> Operation {
    Operation {
        operator: operator.to_string(),
        left: Some(left),
        right: Some(right),
    }
}
