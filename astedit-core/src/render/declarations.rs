//! Declaration table and rules

use super::dispatch::{keyword, punct, Emitter};
use super::fragment::{Fragment, Layout};
use crate::estree::{Decorator, Function, Node, NodeId, NodeList, VariableDeclaration, VariableDeclarator};

impl<'t> Emitter<'t> {
    /// Declaration table: function, variable and class declarations.
    pub(super) fn declaration(&mut self, id: NodeId) -> Option<Fragment> {
        let tree = self.tree;
        let fragment = match tree.get(id)? {
            Node::FunctionDeclaration(n) => self.function(id, n, Layout::Block),
            Node::VariableDeclaration(n) => self.variable_declaration(id, n, false),
            Node::VariableDeclarator(n) => self.declarator(id, n),
            Node::ClassDeclaration(n) => self.class(id, n, Layout::Block),
            other => {
                tracing::debug!(kind = other.kind(), "not a declaration, using main table");
                return self.emit(id);
            }
        };
        Some(fragment)
    }

    /// Function declarations and expressions: `async function* name(params) body`.
    pub(super) fn function(&mut self, id: NodeId, n: &Function, layout: Layout) -> Fragment {
        let mut parts = Vec::new();
        if n.is_async {
            parts.push(keyword("async"));
        }
        parts.push(keyword("function"));
        if n.generator {
            parts.push(punct("*"));
        }
        parts.extend(self.child("id", n.id, Self::emit));
        self.params(&n.params, &mut parts);
        parts.extend(self.child("body", n.body, Self::emit));
        self.wrap(id, layout, parts)
    }

    /// `kind a = 1, b`. In a loop head the declaration is inline and has no `;`.
    pub(super) fn variable_declaration(&mut self, id: NodeId, n: &VariableDeclaration, in_head: bool) -> Fragment {
        let mut parts = vec![keyword(n.kind.as_str())];
        parts.push(self.comma_list("declarations", &n.declarations, Self::declaration));
        if in_head {
            self.wrap(id, Layout::Inline, parts)
        } else {
            parts.push(punct(";"));
            self.wrap(id, Layout::Block, parts)
        }
    }

    fn declarator(&mut self, id: NodeId, n: &VariableDeclarator) -> Fragment {
        let mut parts: Vec<Fragment> = self.child("id", n.id, Self::pattern).into_iter().collect();
        if let Some(init) = self.child("init", n.init, Self::emit) {
            parts.push(punct("="));
            parts.push(init);
        }
        self.wrap(id, Layout::Inline, parts)
    }

    pub(super) fn decorator(&mut self, id: NodeId, n: &Decorator) -> Fragment {
        let mut parts = vec![punct("@")];
        parts.extend(self.child("expression", n.expression, Self::emit));
        self.wrap(id, Layout::Block, parts)
    }

    /// Decorators of a class, property or method, each on its own line.
    pub(super) fn decorators(&mut self, decorators: &NodeList, out: &mut Vec<Fragment>) {
        out.extend(self.each("decorators", decorators, Self::emit));
    }
}

#[cfg(test)]
mod tests {
    use crate::estree::*;
    use crate::render::{render, Layout};
    use crate::testing::{assert_leaf_texts, TreeBuilder};

    #[test]
    fn test_function_modifier_order() {
        let mut b = TreeBuilder::new();
        let name = b.ident("gen");
        let a = b.ident("a");
        let body = b.block(vec![]);
        let f = b.add(Node::FunctionDeclaration(Function {
            id: Some(name),
            params: vec![Some(a)],
            body: Some(body),
            generator: true,
            is_async: true,
        }));
        let tree = b.finish(f);
        let fragment = render(&tree, Some(f)).unwrap();
        assert_leaf_texts(
            &fragment,
            &["async", "function", "*", "gen", "(", "a", ")", "{", "}"],
        );
        assert_eq!(fragment.as_composite().unwrap().layout, Layout::Block);
    }

    #[test]
    fn test_anonymous_function_expression() {
        let mut b = TreeBuilder::new();
        let body = b.block(vec![]);
        let f = b.add(Node::FunctionExpression(Function {
            body: Some(body),
            ..Function::default()
        }));
        let tree = b.finish(f);
        assert_leaf_texts(&render(&tree, Some(f)).unwrap(), &["function", "(", ")", "{", "}"]);
    }

    #[test]
    fn test_variable_declaration_lists_declarators() {
        let mut b = TreeBuilder::new();
        let x = b.ident("x");
        let one = b.number(1.0);
        let first = b.add(Node::VariableDeclarator(VariableDeclarator {
            id: Some(x),
            init: Some(one),
        }));
        let y = b.ident("y");
        let second = b.add(Node::VariableDeclarator(VariableDeclarator {
            id: Some(y),
            init: None,
        }));
        let decl = b.add(Node::VariableDeclaration(VariableDeclaration {
            kind: DeclarationKind::Let,
            declarations: vec![Some(first), Some(second)],
        }));
        let tree = b.finish(decl);
        assert_leaf_texts(
            &render(&tree, Some(decl)).unwrap(),
            &["let", "x", "=", "1", ",", "y", ";"],
        );
    }
}
