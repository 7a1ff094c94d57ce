//! Identifier, literal and directive rules

use super::dispatch::{keyword, punct, Emitter};
use super::fragment::{Fragment, Layout, TextClass};
use crate::estree::{
    BooleanLiteral, Directive, Identifier, NodeId, NumericLiteral, RegExpLiteral, StringLiteral,
};

impl<'t> Emitter<'t> {
    pub(super) fn identifier(&self, id: NodeId, n: &Identifier) -> Fragment {
        self.wrap(
            id,
            Layout::Inline,
            vec![Fragment::text(n.name.clone(), TextClass::Identifier)],
        )
    }

    pub(super) fn regexp(&mut self, id: NodeId, n: &RegExpLiteral) -> Fragment {
        let mut parts = vec![
            punct("/"),
            Fragment::text(n.pattern.clone(), TextClass::Literal),
            punct("/"),
        ];
        if !n.flags.is_empty() {
            parts.push(Fragment::text(n.flags.clone(), TextClass::Literal));
        }
        self.wrap(id, Layout::Inline, parts)
    }

    /// String and directive literals, single quoted.
    pub(super) fn string(&mut self, id: NodeId, n: &StringLiteral) -> Fragment {
        let quoted = format!("'{}'", n.value.replace('\'', "\\'"));
        self.wrap(id, Layout::Inline, vec![Fragment::text(quoted, TextClass::Literal)])
    }

    pub(super) fn boolean(&mut self, id: NodeId, n: &BooleanLiteral) -> Fragment {
        let word = if n.value { "true" } else { "false" };
        self.wrap(id, Layout::Inline, vec![keyword(word)])
    }

    pub(super) fn number(&mut self, id: NodeId, n: &NumericLiteral) -> Fragment {
        self.wrap(id, Layout::Inline, vec![Fragment::text(n.display(), TextClass::Literal)])
    }

    pub(super) fn directive(&mut self, id: NodeId, n: &Directive) -> Fragment {
        let mut parts: Vec<Fragment> = self.child("value", n.value, Self::emit).into_iter().collect();
        parts.push(punct(";"));
        self.wrap(id, Layout::Block, parts)
    }
}

#[cfg(test)]
mod tests {
    use crate::estree::{Directive, Node, RegExpLiteral, StringLiteral};
    use crate::render::{render, Layout};
    use crate::testing::{assert_leaf_texts, TreeBuilder};

    #[test]
    fn test_literals() {
        let mut b = TreeBuilder::new();
        let s = b.string("it's");
        let t = b.boolean(true);
        let n = b.number(0.5);
        let null = b.add(Node::NullLiteral);
        let re = b.add(Node::RegExpLiteral(RegExpLiteral {
            pattern: "a+".to_string(),
            flags: "gi".to_string(),
        }));
        let tree = b.finish(s);

        assert_leaf_texts(&render(&tree, Some(s)).unwrap(), &["'it\\'s'"]);
        assert_leaf_texts(&render(&tree, Some(t)).unwrap(), &["true"]);
        assert_leaf_texts(&render(&tree, Some(n)).unwrap(), &["0.5"]);
        assert_leaf_texts(&render(&tree, Some(null)).unwrap(), &["null"]);
        assert_leaf_texts(&render(&tree, Some(re)).unwrap(), &["/", "a+", "/", "gi"]);
    }

    #[test]
    fn test_directive_is_a_block_line() {
        let mut b = TreeBuilder::new();
        let value = b.add(Node::DirectiveLiteral(StringLiteral {
            value: "use strict".to_string(),
        }));
        let directive = b.add(Node::Directive(Directive { value: Some(value) }));
        let tree = b.finish(directive);
        let fragment = render(&tree, Some(directive)).unwrap();
        assert_leaf_texts(&fragment, &["'use strict'", ";"]);
        assert_eq!(fragment.as_composite().unwrap().layout, Layout::Block);
    }
}
