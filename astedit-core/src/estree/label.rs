//! One-line node descriptions for outline views

use super::elements::{Identifier, MethodKind};
use super::node::Node;
use super::tree::{NodeId, SyntaxTree};

impl SyntaxTree {
    /// Short detail shown next to a node's kind in outlines: the name, operator, literal
    /// value or declaration kind that tells sibling nodes apart. Empty when the kind alone
    /// says everything.
    pub fn display_label(&self, id: NodeId) -> String {
        let Some(node) = self.get(id) else {
            return String::new();
        };
        match node {
            Node::Identifier(Identifier { name }) => name.clone(),
            Node::StringLiteral(lit) | Node::DirectiveLiteral(lit) => format!("{:?}", lit.value),
            Node::NumericLiteral(lit) => lit.display(),
            Node::BooleanLiteral(lit) => lit.value.to_string(),
            Node::NullLiteral => "null".to_string(),
            Node::RegExpLiteral(re) => format!("/{}/{}", re.pattern, re.flags),
            Node::Program(program) => program.source_type.clone(),
            Node::VariableDeclaration(decl) => decl.kind.as_str().to_string(),
            Node::VariableDeclarator(decl) => self.name_of(decl.id),
            Node::FunctionDeclaration(function) | Node::FunctionExpression(function) => {
                let mut label = self.name_of(function.id);
                if function.is_async {
                    label.insert_str(0, "async ");
                }
                if function.generator {
                    label.push('*');
                }
                label.trim().to_string()
            }
            Node::ClassDeclaration(class) | Node::ClassExpression(class) => self.name_of(class.id),
            Node::ObjectMethod(method) => method_label(method.kind, self.name_of(method.key)),
            Node::ClassMethod(method) => {
                let label = method_label(method.kind, self.name_of(method.key));
                if method.is_static {
                    format!("static {}", label)
                } else {
                    label
                }
            }
            Node::ObjectProperty(prop) => self.name_of(prop.key),
            Node::ClassProperty(prop) => self.name_of(prop.key),
            Node::UnaryExpression(op) | Node::UpdateExpression(op) => op.operator.clone(),
            Node::BinaryExpression(op)
            | Node::AssignmentExpression(op)
            | Node::LogicalExpression(op) => op.operator.clone(),
            Node::MemberExpression(member) => {
                let property = self.name_of(member.property);
                if member.computed {
                    format!("[{}]", property)
                } else {
                    format!(".{}", property)
                }
            }
            Node::CallExpression(call) | Node::NewExpression(call) => self.name_of(call.callee),
            Node::LabeledStatement(stmt) => self.name_of(stmt.label),
            Node::BreakStatement(stmt) | Node::ContinueStatement(stmt) => self.name_of(stmt.label),
            Node::ImportDeclaration(import) => self.name_of(import.source),
            Node::ExportAllDeclaration(export) => self.name_of(export.source),
            Node::SwitchCase(case) if case.test.is_none() => "default".to_string(),
            _ => String::new(),
        }
    }

    /// Identifier name or literal text of an optional child, empty otherwise.
    fn name_of(&self, id: Option<NodeId>) -> String {
        match id.and_then(|id| self.get(id)) {
            Some(Node::Identifier(ident)) => ident.name.clone(),
            Some(Node::StringLiteral(lit)) => format!("{:?}", lit.value),
            Some(Node::NumericLiteral(lit)) => lit.display(),
            _ => String::new(),
        }
    }
}

fn method_label(kind: MethodKind, name: String) -> String {
    match kind.accessor_keyword() {
        Some(keyword) => format!("{} {}", keyword, name),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::TreeBuilder;

    #[test]
    fn test_labels() {
        let mut b = TreeBuilder::new();
        let a = b.ident("a");
        let one = b.number(1.0);
        let sum = b.binary("+", a, one);
        let text = b.string("hi");
        let obj = b.ident("obj");
        let key = b.ident("key");
        let member = b.member(obj, key, false);
        let program = b.program(vec![]);
        let tree = b.finish(program);

        assert_eq!(tree.display_label(a), "a");
        assert_eq!(tree.display_label(one), "1");
        assert_eq!(tree.display_label(sum), "+");
        assert_eq!(tree.display_label(text), "\"hi\"");
        assert_eq!(tree.display_label(member), ".key");
        assert_eq!(tree.display_label(program), "script");
    }

    #[test]
    fn test_unknown_nodes_have_no_label() {
        let mut b = TreeBuilder::new();
        let novel = b.unknown("JSXElement");
        let tree = b.finish(novel);
        assert_eq!(tree.display_label(novel), "");
    }
}
