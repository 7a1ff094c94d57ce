//! Main dispatch table and the shared fragment builders

use super::fragment::{Composite, Fragment, Layout, NodeMeta, TextClass, TokenKind};
use crate::estree::{Node, NodeId, NodeList, SyntaxTree};
use crate::navigation::{FocusPath, PathSegment};
use std::borrow::Cow;

/// A rendering rule that can be handed a child node: the main table or a sibling table.
pub(super) type Table<'t> = fn(&mut Emitter<'t>, NodeId) -> Option<Fragment>;

pub(super) fn keyword(text: impl Into<Cow<'static, str>>) -> Fragment {
    Fragment::token(TokenKind::Keyword, text)
}

pub(super) fn punct(text: &'static str) -> Fragment {
    Fragment::token(TokenKind::Punctuation, text)
}

pub(super) fn bracket(text: &'static str) -> Fragment {
    Fragment::token(TokenKind::Bracket, text)
}

/// Operator token. Word operators (`typeof`, `in`, ...) are keywords.
pub(super) fn operator(text: &str) -> Fragment {
    let kind = if text.chars().all(|c| c.is_ascii_alphabetic()) {
        TokenKind::Keyword
    } else {
        TokenKind::Operator
    };
    Fragment::token(kind, text.to_string())
}

/// Walks a tree emitting fragments, tracking the path of the node being rendered.
pub(crate) struct Emitter<'t> {
    pub(super) tree: &'t SyntaxTree,
    focus: Option<&'t FocusPath>,
    path: FocusPath,
}

impl<'t> Emitter<'t> {
    pub(crate) fn new(tree: &'t SyntaxTree, focus: Option<&'t FocusPath>, base: FocusPath) -> Self {
        Emitter { tree, focus, path: base }
    }

    /// The main table. Every variant has an arm; kinds that belong to a sibling table are
    /// forwarded to it.
    pub(crate) fn emit(&mut self, id: NodeId) -> Option<Fragment> {
        let tree = self.tree;
        let node = tree.get(id)?;
        let fragment = match node {
            Node::File(n) => {
                let children = self.child("program", n.program, Self::emit);
                self.wrap(id, Layout::Block, children.into_iter().collect())
            }
            Node::Program(n) => {
                let mut children = self.each("directives", &n.directives, Self::emit);
                children.extend(self.each("body", &n.body, Self::emit));
                self.wrap(id, Layout::Block, children)
            }
            Node::Identifier(n) => self.identifier(id, n),

            Node::RegExpLiteral(n) => self.regexp(id, n),
            Node::NullLiteral => self.wrap(id, Layout::Inline, vec![keyword("null")]),
            Node::StringLiteral(n) | Node::DirectiveLiteral(n) => self.string(id, n),
            Node::BooleanLiteral(n) => self.boolean(id, n),
            Node::NumericLiteral(n) => self.number(id, n),
            Node::Directive(n) => self.directive(id, n),

            Node::ExpressionStatement(n) => self.expression_statement(id, n),
            Node::BlockStatement(n) => self.block_statement(id, n),
            Node::EmptyStatement => self.wrap(id, Layout::Block, vec![punct(";")]),
            Node::DebuggerStatement => {
                self.wrap(id, Layout::Block, vec![keyword("debugger"), punct(";")])
            }
            Node::WithStatement(n) => self.with_statement(id, n),
            Node::ReturnStatement(n) => self.argument_statement(id, "return", n),
            Node::ThrowStatement(n) => self.argument_statement(id, "throw", n),
            Node::LabeledStatement(n) => self.labeled_statement(id, n),
            Node::BreakStatement(n) => self.jump_statement(id, "break", n),
            Node::ContinueStatement(n) => self.jump_statement(id, "continue", n),
            Node::IfStatement(n) => self.if_statement(id, n),
            Node::SwitchStatement(n) => self.switch_statement(id, n),
            Node::SwitchCase(n) => self.switch_case(id, n),
            Node::TryStatement(n) => self.try_statement(id, n),
            Node::CatchClause(n) => self.catch_clause(id, n),
            Node::WhileStatement(n) => self.while_statement(id, n),
            Node::DoWhileStatement(n) => self.do_while_statement(id, n),
            Node::ForStatement(n) => self.for_statement(id, n),
            Node::ForInStatement(n) => self.for_each_statement(id, "in", n),
            Node::ForOfStatement(n) => self.for_each_statement(id, "of", n),

            Node::FunctionDeclaration(_)
            | Node::VariableDeclaration(_)
            | Node::VariableDeclarator(_)
            | Node::ClassDeclaration(_) => return self.declaration(id),
            Node::Decorator(n) => self.decorator(id, n),

            Node::Super => self.wrap(id, Layout::Inline, vec![keyword("super")]),
            Node::Import => self.wrap(id, Layout::Inline, vec![keyword("import")]),
            Node::ThisExpression => self.wrap(id, Layout::Inline, vec![keyword("this")]),
            Node::ArrowFunctionExpression(n) => self.arrow_function(id, n),
            Node::YieldExpression(n) => self.yield_expression(id, n),
            Node::AwaitExpression(n) => self.await_expression(id, n),
            Node::ArrayExpression(n) => self.array(id, n, Self::emit),
            Node::ObjectExpression(n) => self.object(id, n),
            Node::ObjectProperty(_) | Node::ObjectMethod(_) => return self.object_member(id),
            Node::FunctionExpression(n) => self.function(id, n, Layout::Inline),
            Node::UnaryExpression(n) | Node::UpdateExpression(n) => self.unary(id, n),
            Node::BinaryExpression(n)
            | Node::AssignmentExpression(n)
            | Node::LogicalExpression(n) => self.operation(id, n),
            Node::SpreadElement(n) | Node::SpreadProperty(n) => self.spread(id, n, Self::emit),
            Node::MemberExpression(n) => self.member(id, n),
            Node::BindExpression(n) => self.bind(id, n),
            Node::ConditionalExpression(n) => self.conditional(id, n),
            Node::CallExpression(n) => self.call(id, None, n),
            Node::NewExpression(n) => self.call(id, Some("new"), n),
            Node::SequenceExpression(n) => {
                let list = self.comma_list("expressions", &n.expressions, Self::emit);
                self.wrap(id, Layout::Inline, vec![list])
            }
            Node::DoExpression(n) => self.do_expression(id, n),
            Node::ClassExpression(n) => self.class(id, n, Layout::Inline),

            Node::ObjectPattern(_)
            | Node::ArrayPattern(_)
            | Node::RestElement(_)
            | Node::RestProperty(_)
            | Node::AssignmentPattern(_) => return self.pattern(id),

            Node::ClassBody(n) => self.class_body(id, n),
            Node::ClassMethod(_) | Node::ClassProperty(_) => return self.class_member(id),

            Node::ImportDeclaration(_)
            | Node::ImportSpecifier(_)
            | Node::ImportDefaultSpecifier(_)
            | Node::ImportNamespaceSpecifier(_)
            | Node::ExportNamedDeclaration(_)
            | Node::ExportSpecifier(_)
            | Node::ExportDefaultDeclaration(_)
            | Node::ExportAllDeclaration(_) => return self.module(id),

            Node::Unknown { kind } => self.unknown(id, kind),
        };
        Some(fragment)
    }

    /// Placeholder for a node without a rule, carrying its tag verbatim.
    fn unknown(&self, id: NodeId, kind: &str) -> Fragment {
        self.wrap(
            id,
            Layout::Inline,
            vec![Fragment::text(format!("[UNKNOWN: {}]", kind), TextClass::Unknown)],
        )
    }

    /// Wrap the parts of node `id` into its composite, stamped with the current path.
    pub(super) fn wrap(&self, id: NodeId, layout: Layout, children: Vec<Fragment>) -> Fragment {
        let kind = self
            .tree
            .get(id)
            .map(|node| node.kind().to_string())
            .unwrap_or_default();
        Fragment::Composite(Composite {
            layout,
            node: Some(NodeMeta {
                id,
                kind,
                focused: self.focus == Some(&self.path),
                path: self.path.clone(),
            }),
            children,
        })
    }

    /// Render a single-valued field through `table`.
    pub(super) fn child(
        &mut self,
        field: &'static str,
        id: Option<NodeId>,
        table: Table<'t>,
    ) -> Option<Fragment> {
        let id = id?;
        self.path.push(PathSegment::field(field));
        let fragment = table(self, id);
        self.path.pop();
        fragment
    }

    fn item(&mut self, field: &'static str, index: usize, id: NodeId, table: Table<'t>) -> Option<Fragment> {
        self.path.push(PathSegment::indexed(field, index));
        let fragment = table(self, id);
        self.path.pop();
        fragment
    }

    /// Render a list field element by element, in order. Holes produce nothing.
    pub(super) fn each(&mut self, field: &'static str, list: &NodeList, table: Table<'t>) -> Vec<Fragment> {
        list.iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.and_then(|id| self.item(field, i, id, table)))
            .collect()
    }

    /// Render a list field as a comma separated inline group. Holes keep their slot.
    pub(super) fn comma_list(&mut self, field: &'static str, list: &NodeList, table: Table<'t>) -> Fragment {
        self.comma_list_of(field, list, 0..list.len(), table)
    }

    /// Like [Self::comma_list], over a subset of the indices of `list`.
    pub(super) fn comma_list_of(
        &mut self,
        field: &'static str,
        list: &NodeList,
        indices: impl IntoIterator<Item = usize>,
        table: Table<'t>,
    ) -> Fragment {
        let mut children = Vec::new();
        for (n, i) in indices.into_iter().enumerate() {
            if n > 0 {
                children.push(punct(","));
            }
            let rendered = list
                .get(i)
                .copied()
                .flatten()
                .and_then(|id| self.item(field, i, id, table));
            children.push(rendered.unwrap_or_else(Fragment::hole));
        }
        Fragment::group(Layout::Inline, children)
    }

    /// `[` key `]` for computed keys, the bare key otherwise.
    pub(super) fn key(&mut self, key: Option<NodeId>, computed: bool, out: &mut Vec<Fragment>) {
        let rendered = self.child("key", key, Self::emit);
        if computed {
            out.push(bracket("["));
            out.extend(rendered);
            out.push(bracket("]"));
        } else {
            out.extend(rendered);
        }
    }

    /// `(` params `)`, rendering each parameter as a pattern.
    pub(super) fn params(&mut self, params: &NodeList, out: &mut Vec<Fragment>) {
        out.push(bracket("("));
        out.push(self.comma_list("params", params, Self::pattern));
        out.push(bracket(")"));
    }

    /// Name of an identifier node, for comparisons between sibling fields.
    pub(super) fn identifier_name(&self, id: Option<NodeId>) -> Option<&'t str> {
        match self.tree.get(id?)? {
            Node::Identifier(ident) => Some(ident.name.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use crate::testing::{assert_leaf_texts, TreeBuilder};

    #[test]
    fn test_operator_token_kinds() {
        assert_eq!(
            operator("typeof"),
            Fragment::token(TokenKind::Keyword, "typeof")
        );
        assert_eq!(operator("==="), Fragment::token(TokenKind::Operator, "==="));
        assert_eq!(
            operator("instanceof"),
            Fragment::token(TokenKind::Keyword, "instanceof")
        );
    }

    #[test]
    fn test_unknown_placeholder_carries_tag() {
        let mut b = TreeBuilder::new();
        let novel = b.unknown("TotallyNovelNodeType");
        let tree = b.finish(novel);
        let fragment = render(&tree, Some(novel)).unwrap();
        assert!(fragment.is_unknown());
        assert_leaf_texts(&fragment, &["[UNKNOWN: TotallyNovelNodeType]"]);
        assert_eq!(fragment.meta().unwrap().kind, "TotallyNovelNodeType");
    }

    #[test]
    fn test_comma_list_keeps_holes() {
        let mut b = TreeBuilder::new();
        let a = b.ident("a");
        let c = b.ident("c");
        let array = b.array(vec![Some(a), None, Some(c)]);
        let tree = b.finish(array);
        let fragment = render(&tree, Some(array)).unwrap();
        assert_leaf_texts(&fragment, &["[", "a", ",", ",", "c", "]"]);

        let list = &fragment.as_composite().unwrap().children[1];
        let slots = &list.as_composite().unwrap().children;
        assert_eq!(slots.len(), 5);
        assert_eq!(slots[2], Fragment::hole());
    }

    #[test]
    fn test_word_operator_in_binary() {
        let mut b = TreeBuilder::new();
        let key = b.string("k");
        let obj = b.ident("o");
        let test = b.binary("in", key, obj);
        let tree = b.finish(test);
        let fragment = render(&tree, Some(test)).unwrap();
        let children = &fragment.as_composite().unwrap().children;
        assert_eq!(children[1], Fragment::token(TokenKind::Keyword, "in"));
    }
}
