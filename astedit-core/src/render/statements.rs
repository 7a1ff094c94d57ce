//! Statement rules
//!
//! Statements are block composites: each starts its own line. A block statement is itself
//! inline (its braces sit on the line of whatever introduces it) and nests its body in an
//! anonymous block group.

use super::dispatch::{bracket, keyword, punct, Emitter};
use super::fragment::{Fragment, Layout};
use crate::estree::*;

impl<'t> Emitter<'t> {
    pub(super) fn expression_statement(&mut self, id: NodeId, n: &ExpressionStatement) -> Fragment {
        let mut parts: Vec<Fragment> = self.child("expression", n.expression, Self::emit).into_iter().collect();
        parts.push(punct(";"));
        self.wrap(id, Layout::Block, parts)
    }

    pub(super) fn block_statement(&mut self, id: NodeId, n: &BlockStatement) -> Fragment {
        let mut body = self.each("directives", &n.directives, Self::emit);
        body.extend(self.each("body", &n.body, Self::emit));
        self.wrap(
            id,
            Layout::Inline,
            vec![bracket("{"), Fragment::group(Layout::Block, body), bracket("}")],
        )
    }

    pub(super) fn with_statement(&mut self, id: NodeId, n: &WithStatement) -> Fragment {
        let mut parts = vec![keyword("with"), bracket("(")];
        parts.extend(self.child("object", n.object, Self::emit));
        parts.push(bracket(")"));
        parts.extend(self.child("body", n.body, Self::emit));
        self.wrap(id, Layout::Block, parts)
    }

    /// `return` and `throw`.
    pub(super) fn argument_statement(&mut self, id: NodeId, word: &'static str, n: &ArgumentStatement) -> Fragment {
        let mut parts = vec![keyword(word)];
        parts.extend(self.child("argument", n.argument, Self::emit));
        parts.push(punct(";"));
        self.wrap(id, Layout::Block, parts)
    }

    pub(super) fn labeled_statement(&mut self, id: NodeId, n: &LabeledStatement) -> Fragment {
        let mut parts: Vec<Fragment> = self.child("label", n.label, Self::emit).into_iter().collect();
        parts.push(punct(":"));
        parts.extend(self.child("body", n.body, Self::emit));
        self.wrap(id, Layout::Block, parts)
    }

    /// `break` and `continue`.
    pub(super) fn jump_statement(&mut self, id: NodeId, word: &'static str, n: &JumpStatement) -> Fragment {
        let mut parts = vec![keyword(word)];
        parts.extend(self.child("label", n.label, Self::emit));
        parts.push(punct(";"));
        self.wrap(id, Layout::Block, parts)
    }

    pub(super) fn if_statement(&mut self, id: NodeId, n: &IfStatement) -> Fragment {
        let mut parts = vec![keyword("if"), bracket("(")];
        parts.extend(self.child("test", n.test, Self::emit));
        parts.push(bracket(")"));
        parts.extend(self.child("consequent", n.consequent, Self::emit));
        if let Some(alternate) = self.child("alternate", n.alternate, Self::emit) {
            parts.push(keyword("else"));
            parts.push(alternate);
        }
        self.wrap(id, Layout::Block, parts)
    }

    pub(super) fn switch_statement(&mut self, id: NodeId, n: &SwitchStatement) -> Fragment {
        let mut parts = vec![keyword("switch"), bracket("(")];
        parts.extend(self.child("discriminant", n.discriminant, Self::emit));
        parts.push(bracket(")"));
        parts.push(bracket("{"));
        parts.push(Fragment::group(Layout::Block, self.each("cases", &n.cases, Self::emit)));
        parts.push(bracket("}"));
        self.wrap(id, Layout::Block, parts)
    }

    pub(super) fn switch_case(&mut self, id: NodeId, n: &SwitchCase) -> Fragment {
        let mut parts = Vec::new();
        match self.child("test", n.test, Self::emit) {
            Some(test) => {
                parts.push(keyword("case"));
                parts.push(test);
            }
            None => parts.push(keyword("default")),
        }
        parts.push(punct(":"));
        parts.push(Fragment::group(
            Layout::Block,
            self.each("consequent", &n.consequent, Self::emit),
        ));
        self.wrap(id, Layout::Block, parts)
    }

    pub(super) fn try_statement(&mut self, id: NodeId, n: &TryStatement) -> Fragment {
        let mut parts = vec![keyword("try")];
        parts.extend(self.child("block", n.block, Self::emit));
        parts.extend(self.child("handler", n.handler, Self::emit));
        if let Some(finalizer) = self.child("finalizer", n.finalizer, Self::emit) {
            parts.push(keyword("finally"));
            parts.push(finalizer);
        }
        self.wrap(id, Layout::Block, parts)
    }

    /// `catch (param) { }`, or `catch { }` for an optional binding.
    pub(super) fn catch_clause(&mut self, id: NodeId, n: &CatchClause) -> Fragment {
        let mut parts = vec![keyword("catch")];
        if let Some(param) = self.child("param", n.param, Self::pattern) {
            parts.push(bracket("("));
            parts.push(param);
            parts.push(bracket(")"));
        }
        parts.extend(self.child("body", n.body, Self::emit));
        self.wrap(id, Layout::Inline, parts)
    }

    pub(super) fn while_statement(&mut self, id: NodeId, n: &LoopStatement) -> Fragment {
        let mut parts = vec![keyword("while"), bracket("(")];
        parts.extend(self.child("test", n.test, Self::emit));
        parts.push(bracket(")"));
        parts.extend(self.child("body", n.body, Self::emit));
        self.wrap(id, Layout::Block, parts)
    }

    pub(super) fn do_while_statement(&mut self, id: NodeId, n: &LoopStatement) -> Fragment {
        let mut parts = vec![keyword("do")];
        parts.extend(self.child("body", n.body, Self::emit));
        parts.push(keyword("while"));
        parts.push(bracket("("));
        parts.extend(self.child("test", n.test, Self::emit));
        parts.push(bracket(")"));
        parts.push(punct(";"));
        self.wrap(id, Layout::Block, parts)
    }

    pub(super) fn for_statement(&mut self, id: NodeId, n: &ForStatement) -> Fragment {
        let mut parts = vec![keyword("for"), bracket("(")];
        parts.extend(self.child("init", n.init, Self::loop_head));
        parts.push(punct(";"));
        parts.extend(self.child("test", n.test, Self::emit));
        parts.push(punct(";"));
        parts.extend(self.child("update", n.update, Self::emit));
        parts.push(bracket(")"));
        parts.extend(self.child("body", n.body, Self::emit));
        self.wrap(id, Layout::Block, parts)
    }

    /// `for (left in right)` and `for [await] (left of right)`.
    pub(super) fn for_each_statement(&mut self, id: NodeId, word: &'static str, n: &ForEachStatement) -> Fragment {
        let mut parts = vec![keyword("for")];
        if n.is_await {
            parts.push(keyword("await"));
        }
        parts.push(bracket("("));
        parts.extend(self.child("left", n.left, Self::loop_head));
        parts.push(keyword(word));
        parts.extend(self.child("right", n.right, Self::emit));
        parts.push(bracket(")"));
        parts.extend(self.child("body", n.body, Self::emit));
        self.wrap(id, Layout::Block, parts)
    }

    /// Loop heads hold a declaration inline, without its terminating `;`.
    fn loop_head(&mut self, id: NodeId) -> Option<Fragment> {
        let tree = self.tree;
        match tree.get(id)? {
            Node::VariableDeclaration(n) => Some(self.variable_declaration(id, n, true)),
            _ => self.emit(id),
        }
    }
}
