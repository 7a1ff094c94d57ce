//! Expression rules and the object-member table
//!
//! Operators are rendered exactly where the tree puts them. No parentheses are inserted for
//! precedence, so `(a + b) * c` parsed and rendered back reads `a + b * c`.

use super::dispatch::{bracket, keyword, operator, punct, Emitter, Table};
use super::fragment::{Fragment, Layout};
use crate::estree::*;

impl<'t> Emitter<'t> {
    pub(super) fn arrow_function(&mut self, id: NodeId, n: &ArrowFunction) -> Fragment {
        let mut parts = Vec::new();
        if n.is_async {
            parts.push(keyword("async"));
        }
        self.params(&n.params, &mut parts);
        parts.push(punct("=>"));
        parts.extend(self.child("body", n.body, Self::emit));
        self.wrap(id, Layout::Inline, parts)
    }

    pub(super) fn yield_expression(&mut self, id: NodeId, n: &YieldExpression) -> Fragment {
        let mut parts = vec![keyword("yield")];
        if n.delegate {
            parts.push(punct("*"));
        }
        parts.extend(self.child("argument", n.argument, Self::emit));
        self.wrap(id, Layout::Inline, parts)
    }

    pub(super) fn await_expression(&mut self, id: NodeId, n: &AwaitExpression) -> Fragment {
        let mut parts = vec![keyword("await")];
        parts.extend(self.child("argument", n.argument, Self::emit));
        self.wrap(id, Layout::Inline, parts)
    }

    /// Array literals and array patterns, elements through `table`.
    pub(super) fn array(&mut self, id: NodeId, n: &ArrayElements, table: Table<'t>) -> Fragment {
        let elements = self.comma_list("elements", &n.elements, table);
        self.wrap(id, Layout::Inline, vec![bracket("["), elements, bracket("]")])
    }

    /// Object literals and object patterns.
    pub(super) fn object(&mut self, id: NodeId, n: &ObjectMembers) -> Fragment {
        let properties = self.comma_list("properties", &n.properties, Self::object_member);
        self.wrap(id, Layout::Inline, vec![bracket("{"), properties, bracket("}")])
    }

    /// Object-member table: properties, methods and spreads.
    pub(super) fn object_member(&mut self, id: NodeId) -> Option<Fragment> {
        let tree = self.tree;
        let fragment = match tree.get(id)? {
            Node::ObjectProperty(n) => self.object_property(id, n),
            Node::ObjectMethod(n) => self.object_method(id, n),
            Node::SpreadElement(n) | Node::SpreadProperty(n) => self.spread(id, n, Self::emit),
            Node::RestElement(n) | Node::RestProperty(n) => self.spread(id, n, Self::pattern),
            other => {
                tracing::debug!(kind = other.kind(), "not an object member, using main table");
                return self.emit(id);
            }
        };
        Some(fragment)
    }

    /// `key: value`, `[key]: value`, or just `key` when shorthand.
    fn object_property(&mut self, id: NodeId, n: &ObjectProperty) -> Fragment {
        let mut parts = Vec::new();
        self.decorators(&n.decorators, &mut parts);
        if n.shorthand {
            match self.child("value", n.value, Self::emit) {
                Some(value) if !self.is_plain_identifier(n.value) => parts.push(value),
                _ => self.key(n.key, n.computed, &mut parts),
            }
        } else {
            self.key(n.key, n.computed, &mut parts);
            parts.push(punct(":"));
            parts.extend(self.child("value", n.value, Self::emit));
        }
        self.wrap(id, Layout::Inline, parts)
    }

    /// `async *get key(params) body`; the accessor keyword only for getters and setters.
    fn object_method(&mut self, id: NodeId, n: &ObjectMethod) -> Fragment {
        let mut parts = Vec::new();
        self.decorators(&n.decorators, &mut parts);
        if n.is_async {
            parts.push(keyword("async"));
        }
        if n.generator {
            parts.push(punct("*"));
        }
        if let Some(accessor) = n.kind.accessor_keyword() {
            parts.push(keyword(accessor));
        }
        self.key(n.key, n.computed, &mut parts);
        self.params(&n.params, &mut parts);
        parts.extend(self.child("body", n.body, Self::emit));
        self.wrap(id, Layout::Inline, parts)
    }

    /// Unary and update expressions, operator before or after the argument.
    pub(super) fn unary(&mut self, id: NodeId, n: &UnaryOperation) -> Fragment {
        let argument = self.child("argument", n.argument, Self::emit);
        let parts = if n.prefix {
            std::iter::once(operator(&n.operator)).chain(argument).collect()
        } else {
            argument.into_iter().chain(std::iter::once(operator(&n.operator))).collect()
        };
        self.wrap(id, Layout::Inline, parts)
    }

    /// Binary, logical and assignment expressions: left, operator, right.
    pub(super) fn operation(&mut self, id: NodeId, n: &Operation) -> Fragment {
        let mut parts: Vec<Fragment> = self.child("left", n.left, Self::emit).into_iter().collect();
        parts.push(operator(&n.operator));
        parts.extend(self.child("right", n.right, Self::emit));
        self.wrap(id, Layout::Inline, parts)
    }

    /// `...argument`, for spreads and rests.
    pub(super) fn spread(&mut self, id: NodeId, n: &Spread, table: Table<'t>) -> Fragment {
        let mut parts = vec![punct("...")];
        parts.extend(self.child("argument", n.argument, table));
        self.wrap(id, Layout::Inline, parts)
    }

    pub(super) fn member(&mut self, id: NodeId, n: &MemberExpression) -> Fragment {
        let mut parts: Vec<Fragment> = self.child("object", n.object, Self::emit).into_iter().collect();
        let property = self.child("property", n.property, Self::emit);
        if n.computed {
            parts.push(bracket("["));
            parts.extend(property);
            parts.push(bracket("]"));
        } else {
            parts.push(punct("."));
            parts.extend(property);
        }
        self.wrap(id, Layout::Inline, parts)
    }

    pub(super) fn bind(&mut self, id: NodeId, n: &BindExpression) -> Fragment {
        let mut parts: Vec<Fragment> = self.child("object", n.object, Self::emit).into_iter().collect();
        parts.push(punct("::"));
        parts.extend(self.child("callee", n.callee, Self::emit));
        self.wrap(id, Layout::Inline, parts)
    }

    pub(super) fn conditional(&mut self, id: NodeId, n: &ConditionalExpression) -> Fragment {
        let mut parts: Vec<Fragment> = self.child("test", n.test, Self::emit).into_iter().collect();
        parts.push(punct("?"));
        parts.extend(self.child("consequent", n.consequent, Self::emit));
        parts.push(punct(":"));
        parts.extend(self.child("alternate", n.alternate, Self::emit));
        self.wrap(id, Layout::Inline, parts)
    }

    /// Calls, and `new` calls when `word` is given.
    pub(super) fn call(&mut self, id: NodeId, word: Option<&'static str>, n: &Call) -> Fragment {
        let mut parts: Vec<Fragment> = word.map(keyword).into_iter().collect();
        parts.extend(self.child("callee", n.callee, Self::emit));
        parts.push(bracket("("));
        parts.push(self.comma_list("arguments", &n.arguments, Self::emit));
        parts.push(bracket(")"));
        self.wrap(id, Layout::Inline, parts)
    }

    pub(super) fn do_expression(&mut self, id: NodeId, n: &DoExpression) -> Fragment {
        let mut parts = vec![keyword("do")];
        parts.extend(self.child("body", n.body, Self::emit));
        self.wrap(id, Layout::Inline, parts)
    }

    fn is_plain_identifier(&self, id: Option<NodeId>) -> bool {
        self.identifier_name(id).is_some()
    }
}
