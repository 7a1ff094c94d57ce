//! Class rules and the class-member table

use super::dispatch::{bracket, keyword, punct, Emitter};
use super::fragment::{Fragment, Layout};
use crate::estree::{Class, ClassBody, ClassMethod, ClassProperty, Node, NodeId};

impl<'t> Emitter<'t> {
    /// Class declarations and expressions: decorators, `class Name extends Base { ... }`.
    pub(super) fn class(&mut self, id: NodeId, n: &Class, layout: Layout) -> Fragment {
        let mut parts = Vec::new();
        self.decorators(&n.decorators, &mut parts);
        parts.push(keyword("class"));
        parts.extend(self.child("id", n.id, Self::emit));
        if let Some(base) = self.child("superClass", n.super_class, Self::emit) {
            parts.push(keyword("extends"));
            parts.push(base);
        }
        parts.extend(self.child("body", n.body, Self::emit));
        self.wrap(id, layout, parts)
    }

    pub(super) fn class_body(&mut self, id: NodeId, n: &ClassBody) -> Fragment {
        let members = self.each("body", &n.body, Self::class_member);
        self.wrap(
            id,
            Layout::Inline,
            vec![bracket("{"), Fragment::group(Layout::Block, members), bracket("}")],
        )
    }

    /// Class-member table: methods and properties.
    pub(super) fn class_member(&mut self, id: NodeId) -> Option<Fragment> {
        let tree = self.tree;
        let fragment = match tree.get(id)? {
            Node::ClassMethod(n) => self.class_method(id, n),
            Node::ClassProperty(n) => self.class_property(id, n),
            other => {
                tracing::debug!(kind = other.kind(), "not a class member, using main table");
                return self.emit(id);
            }
        };
        Some(fragment)
    }

    fn class_method(&mut self, id: NodeId, n: &ClassMethod) -> Fragment {
        let mut parts = Vec::new();
        self.decorators(&n.decorators, &mut parts);
        if n.is_static {
            parts.push(keyword("static"));
        }
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
        self.wrap(id, Layout::Block, parts)
    }

    /// `static key = value;`
    fn class_property(&mut self, id: NodeId, n: &ClassProperty) -> Fragment {
        let mut parts = Vec::new();
        self.decorators(&n.decorators, &mut parts);
        if n.is_static {
            parts.push(keyword("static"));
        }
        self.key(n.key, n.computed, &mut parts);
        if let Some(value) = self.child("value", n.value, Self::emit) {
            parts.push(punct("="));
            parts.push(value);
        }
        parts.push(punct(";"));
        self.wrap(id, Layout::Block, parts)
    }
}

#[cfg(test)]
mod tests {
    use crate::estree::*;
    use crate::render::render;
    use crate::testing::{assert_leaf_texts, leaf_texts, TreeBuilder};

    #[test]
    fn test_class_with_members() {
        let mut b = TreeBuilder::new();
        let ctor_key = b.ident("constructor");
        let ctor_body = b.block(vec![]);
        let ctor = b.add(Node::ClassMethod(ClassMethod {
            kind: MethodKind::Constructor,
            key: Some(ctor_key),
            body: Some(ctor_body),
            ..ClassMethod::default()
        }));
        let getter_key = b.ident("size");
        let getter_body = b.block(vec![]);
        let getter = b.add(Node::ClassMethod(ClassMethod {
            kind: MethodKind::Get,
            key: Some(getter_key),
            body: Some(getter_body),
            is_static: true,
            ..ClassMethod::default()
        }));
        let prop_key = b.ident("count");
        let zero = b.number(0.0);
        let prop = b.add(Node::ClassProperty(ClassProperty {
            key: Some(prop_key),
            value: Some(zero),
            ..ClassProperty::default()
        }));
        let body = b.add(Node::ClassBody(ClassBody {
            body: vec![Some(ctor), Some(getter), Some(prop)],
        }));
        let name = b.ident("Stack");
        let base = b.ident("Base");
        let class = b.add(Node::ClassDeclaration(Class {
            decorators: Vec::new(),
            id: Some(name),
            super_class: Some(base),
            body: Some(body),
        }));
        let tree = b.finish(class);
        assert_eq!(
            leaf_texts(&render(&tree, Some(class)).unwrap()).join(" "),
            "class Stack extends Base { constructor ( ) { } static get size ( ) { } count = 0 ; }"
        );
    }

    #[test]
    fn test_computed_class_key() {
        let mut b = TreeBuilder::new();
        let key = b.ident("sym");
        let prop = b.add(Node::ClassProperty(ClassProperty {
            key: Some(key),
            computed: true,
            ..ClassProperty::default()
        }));
        let tree = b.finish(prop);
        assert_leaf_texts(&render(&tree, Some(prop)).unwrap(), &["[", "sym", "]", ";"]);
    }
}
