//! Pattern table
//!
//! Binding positions (parameters, declarator ids, catch params, rest arguments) render their
//! node through this table.

use super::dispatch::{punct, Emitter};
use super::fragment::{Fragment, Layout};
use crate::estree::{AssignmentPattern, Node, NodeId};

impl<'t> Emitter<'t> {
    pub(super) fn pattern(&mut self, id: NodeId) -> Option<Fragment> {
        let tree = self.tree;
        let fragment = match tree.get(id)? {
            Node::Identifier(n) => self.identifier(id, n),
            Node::ObjectPattern(n) => self.object(id, n),
            Node::ArrayPattern(n) => self.array(id, n, Self::pattern),
            Node::RestElement(n) | Node::RestProperty(n) => self.spread(id, n, Self::pattern),
            Node::AssignmentPattern(n) => self.assignment_pattern(id, n),
            other => {
                tracing::debug!(kind = other.kind(), "not a pattern, using main table");
                return self.emit(id);
            }
        };
        Some(fragment)
    }

    /// `left = default`.
    fn assignment_pattern(&mut self, id: NodeId, n: &AssignmentPattern) -> Fragment {
        let mut parts: Vec<Fragment> = self.child("left", n.left, Self::pattern).into_iter().collect();
        parts.push(punct("="));
        parts.extend(self.child("right", n.right, Self::emit));
        self.wrap(id, Layout::Inline, parts)
    }
}
