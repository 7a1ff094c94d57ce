//! Data model for the viewer
//!
//! The Model struct holds the pure application state:
//! - The current syntax tree and the focus path into it
//! - Expanded/collapsed state of outline rows
//!
//! Nothing here knows about the terminal, so the model can be tested on its own.

use astedit_core::estree::NodeCategory;
use astedit_core::{Direction, FocusPath, FocusState, NodeId, PathSegment, SyntaxTree};
use std::collections::HashSet;

/// Which viewer currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Rendered code has focus
    #[default]
    CodeViewer,
    /// Syntax outline has focus
    OutlineViewer,
}

impl Focus {
    /// Toggle focus to the other viewer
    pub fn toggle(&self) -> Focus {
        match self {
            Focus::CodeViewer => Focus::OutlineViewer,
            Focus::OutlineViewer => Focus::CodeViewer,
        }
    }
}

/// One row of the flattened syntax outline.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub node_id: NodeId,
    /// Depth in the tree (for indentation)
    pub depth: usize,
    /// The field this node sits in; `None` for the root.
    pub segment: Option<PathSegment>,
    pub kind: String,
    pub category: Option<NodeCategory>,
    pub label: String,
    pub is_expanded: bool,
    pub has_children: bool,
}

#[derive(Debug, Clone)]
pub struct Model {
    state: FocusState,
    /// Which outline rows are expanded (rest are collapsed)
    expanded_nodes: HashSet<NodeId>,
}

impl Default for Model {
    fn default() -> Self {
        Model::new(SyntaxTree::default())
    }
}

impl Model {
    /// Create a model focused on the root, with the whole outline expanded.
    pub fn new(tree: SyntaxTree) -> Self {
        let mut model = Model {
            state: FocusState::new(tree),
            expanded_nodes: HashSet::new(),
        };
        model.expand_all_nodes();
        model
    }

    fn expand_all_nodes(&mut self) {
        let ids: Vec<NodeId> = self.state.tree().walk().map(|(id, _)| id).collect();
        self.expanded_nodes.extend(ids);
    }

    pub fn tree(&self) -> &SyntaxTree {
        self.state.tree()
    }

    pub fn path(&self) -> &FocusPath {
        self.state.path()
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.state.focused()
    }

    /// Swap in a new tree. Focus returns to the root and every row is expanded again,
    /// since node ids from the old tree mean nothing in the new one.
    pub fn replace_tree(&mut self, tree: SyntaxTree) {
        self.state.replace_tree(tree);
        self.expanded_nodes.clear();
        self.expand_all_nodes();
    }

    /// Apply a navigation move. Returns whether the focus changed.
    pub fn apply(&mut self, direction: Direction) -> bool {
        let moved = self.state.apply(direction);
        if moved {
            self.reveal_focus();
        }
        moved
    }

    /// Focus an outline row.
    pub fn focus_node(&mut self, node_id: NodeId) -> bool {
        let focused = self.state.focus_node(node_id);
        if focused {
            self.reveal_focus();
        }
        focused
    }

    pub fn toggle_node_expansion(&mut self, node_id: NodeId) {
        if !self.expanded_nodes.remove(&node_id) {
            self.expanded_nodes.insert(node_id);
        }
    }

    pub fn is_node_expanded(&self, node_id: NodeId) -> bool {
        node_id == self.tree().root() || self.expanded_nodes.contains(&node_id)
    }

    pub fn expand_nodes(&mut self, node_ids: &[NodeId]) {
        self.expanded_nodes.extend(node_ids.iter().copied());
    }

    #[allow(dead_code)]
    pub fn collapse_node(&mut self, node_id: NodeId) {
        self.expanded_nodes.remove(&node_id);
    }

    /// Ancestors of a node, root first, not including the node itself.
    pub fn ancestors(&self, node_id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = node_id;
        while let Some(parent) = self.tree().parent(current) {
            ancestors.push(parent);
            current = parent;
        }
        ancestors.reverse();
        ancestors
    }

    /// Keep the focused row visible in the outline.
    fn reveal_focus(&mut self) {
        if let Some(focused) = self.focused() {
            let ancestors = self.ancestors(focused);
            self.expand_nodes(&ancestors);
        }
    }

    /// Depth-first flattening of the tree, skipping the children of collapsed rows.
    pub fn flattened_outline(&self) -> Vec<OutlineEntry> {
        let mut entries = Vec::new();
        let mut seen = vec![false; self.tree().len()];
        self.flatten_recursive(self.tree().root(), None, 0, &mut seen, &mut entries);
        entries
    }

    fn flatten_recursive(
        &self,
        node_id: NodeId,
        segment: Option<PathSegment>,
        depth: usize,
        seen: &mut [bool],
        entries: &mut Vec<OutlineEntry>,
    ) {
        let Some(node) = self.tree().get(node_id) else {
            return;
        };
        match seen.get_mut(node_id.0) {
            Some(flag) if !*flag => *flag = true,
            _ => return,
        }

        let children = self.tree().child_segments(node_id);
        let is_expanded = self.is_node_expanded(node_id);
        entries.push(OutlineEntry {
            node_id,
            depth,
            segment,
            kind: node.kind().to_string(),
            category: node.node_kind().map(|kind| kind.category()),
            label: self.tree().display_label(node_id),
            is_expanded,
            has_children: !children.is_empty(),
        });

        if is_expanded {
            for (segment, child) in children {
                self.flatten_recursive(child, Some(segment), depth + 1, seen, entries);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astedit_core::TreeLoader;

    // a; f(b, c);
    fn sample() -> SyntaxTree {
        TreeLoader::from_string(
            r#"{"type":"Program","sourceType":"module","body":[
                {"type":"ExpressionStatement","expression":{"type":"Identifier","name":"a"}},
                {"type":"ExpressionStatement","expression":{"type":"CallExpression",
                    "callee":{"type":"Identifier","name":"f"},
                    "arguments":[{"type":"Identifier","name":"b"},{"type":"Identifier","name":"c"}]}}
            ]}"#,
        )
        .load()
        .unwrap()
    }

    fn path(raw: &str) -> FocusPath {
        raw.parse().unwrap()
    }

    #[test]
    fn test_focus_toggle() {
        assert_eq!(Focus::CodeViewer.toggle(), Focus::OutlineViewer);
        assert_eq!(Focus::OutlineViewer.toggle(), Focus::CodeViewer);
    }

    #[test]
    fn test_outline_starts_expanded() {
        let model = Model::new(sample());
        let outline = model.flattened_outline();
        assert_eq!(outline.len(), model.tree().len());
        assert_eq!(outline[0].kind, "Program");
        assert_eq!(outline[0].segment, None);
        assert_eq!(outline[0].label, "module");
        assert_eq!(outline[1].segment.as_ref().unwrap().to_string(), "body[0]");
        assert_eq!(outline[2].depth, 2);
        assert!(outline.iter().all(|entry| entry.is_expanded));
    }

    #[test]
    fn test_collapsed_rows_hide_children() {
        let mut model = Model::new(sample());
        let call_statement = model.tree().resolve(&path("body[1]")).unwrap();

        model.collapse_node(call_statement);
        let outline = model.flattened_outline();
        assert_eq!(outline.len(), 4);
        let last = outline.last().unwrap();
        assert_eq!(last.node_id, call_statement);
        assert!(last.has_children);
        assert!(!last.is_expanded);

        model.toggle_node_expansion(call_statement);
        assert_eq!(model.flattened_outline().len(), model.tree().len());
    }

    #[test]
    fn test_root_is_always_expanded() {
        let mut model = Model::new(sample());
        let root = model.tree().root();
        model.collapse_node(root);
        assert!(model.is_node_expanded(root));
    }

    #[test]
    fn test_moves_reveal_the_focus() {
        let mut model = Model::new(sample());
        let call_statement = model.tree().resolve(&path("body[1]")).unwrap();
        model.collapse_node(call_statement);

        assert!(model.apply(Direction::Down));
        assert!(model.apply(Direction::Next));
        assert!(model.apply(Direction::Down));
        assert_eq!(model.path(), &path("body[1].expression"));
        assert!(model.is_node_expanded(call_statement));
    }

    #[test]
    fn test_ancestors_are_root_first() {
        let model = Model::new(sample());
        let argument = model.tree().resolve(&path("body[1].expression.arguments[1]")).unwrap();
        let kinds: Vec<&str> = model
            .ancestors(argument)
            .into_iter()
            .map(|id| model.tree().get(id).unwrap().kind())
            .collect();
        assert_eq!(kinds, vec!["Program", "ExpressionStatement", "CallExpression"]);
    }

    #[test]
    fn test_focus_node_by_outline_row() {
        let mut model = Model::new(sample());
        let argument = model.tree().resolve(&path("body[1].expression.arguments[0]")).unwrap();
        assert!(model.focus_node(argument));
        assert_eq!(model.path(), &path("body[1].expression.arguments[0]"));
    }

    #[test]
    fn test_replace_tree_resets_focus_and_expansion() {
        let mut model = Model::new(sample());
        model.apply(Direction::Down);
        let first = model.focused().unwrap();
        model.collapse_node(first);

        model.replace_tree(sample());
        assert!(model.path().is_root());
        assert!(model.is_node_expanded(first));
    }
}
