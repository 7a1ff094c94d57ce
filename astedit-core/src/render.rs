//! Node Renderer
//!
//!     Projects a syntax tree onto a tree of [Fragment]s. The projection is total: every node
//!     produces a fragment, and a node whose kind has no rule produces a visible
//!     `[UNKNOWN: <tag>]` placeholder instead of being dropped. An absent child produces no
//!     fragment at all, which is how optional fields (an `if` without `else`) disappear.
//!
//! Dispatch
//!
//!     The main table in `dispatch` matches every [Node](crate::estree::Node) variant. Some
//!     fields only ever hold nodes of one family, and those are rendered through sibling
//!     tables that mirror the main one:
//!
//!         declarations    function, variable and class declarations (export bodies)
//!         patterns        identifiers, object/array/rest/assignment patterns (params, bindings)
//!         modules         import and export clauses and specifiers
//!         object members  properties, methods and spreads of object literals and patterns
//!         class members   methods and properties of class bodies
//!
//!     Each sibling table ends with its own fallback arm: a node outside its family is logged
//!     at debug level and handed to the main table, which can render anything.
//!
//! Focus
//!
//!     Each node composite carries its [FocusPath](crate::navigation::FocusPath). When the
//!     renderer is given a focus, the composite whose path equals it is marked `focused`.
//!     Nothing in the tree is mutated, so rendering twice yields equal fragments.

mod classes;
mod declarations;
mod dispatch;
mod expressions;
pub mod fragment;
mod literals;
mod modules;
mod patterns;
mod statements;

pub use fragment::{Composite, Fragment, Layout, NodeMeta, TextClass, TextRun, Token, TokenKind};

use crate::estree::{NodeId, SyntaxTree};
use crate::navigation::FocusPath;
use dispatch::Emitter;

/// Renders nodes of one tree, optionally marking a focused node.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'t> {
    tree: &'t SyntaxTree,
    focus: Option<&'t FocusPath>,
}

impl<'t> Renderer<'t> {
    pub fn new(tree: &'t SyntaxTree) -> Self {
        Renderer { tree, focus: None }
    }

    pub fn with_focus(mut self, focus: &'t FocusPath) -> Self {
        self.focus = Some(focus);
        self
    }

    /// Render a node and everything below it. `None` renders as `None`.
    ///
    /// Paths recorded in the output are absolute: rendering a subtree still labels its nodes
    /// with their paths from the tree root. A node the root cannot reach has no such path;
    /// its paths start at the node itself and nothing in it is marked focused.
    pub fn render(&self, id: Option<NodeId>) -> Option<Fragment> {
        let id = id?;
        match self.tree.path_of(id) {
            Some(base) => Emitter::new(self.tree, self.focus, base).emit(id),
            None => Emitter::new(self.tree, None, FocusPath::root()).emit(id),
        }
    }

    pub fn render_root(&self) -> Option<Fragment> {
        self.render(Some(self.tree.root()))
    }
}

/// Render a node without focus.
pub fn render(tree: &SyntaxTree, id: Option<NodeId>) -> Option<Fragment> {
    Renderer::new(tree).render(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TreeBuilder;

    #[test]
    fn test_detached_nodes_are_never_focused() {
        let mut b = TreeBuilder::new();
        let x = b.ident("x");
        let stmt = b.expr_stmt(x);
        let program = b.program(vec![stmt]);
        let stray = b.ident("stray");
        let tree = b.finish(program);
        assert_eq!(tree.path_of(stray), None);

        let root = FocusPath::root();
        let renderer = Renderer::new(&tree).with_focus(&root);
        let fragment = renderer.render(Some(stray)).unwrap();
        assert!(fragment.find_focused().is_none());
        assert!(renderer.render_root().unwrap().meta().unwrap().focused);
    }
}
