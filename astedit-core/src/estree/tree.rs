//! Arena-backed syntax tree

use super::elements::Program;
use super::fields::FieldRef;
use super::node::Node;
use crate::navigation::{FocusPath, PathSegment};
use serde::Serialize;
use std::fmt;

/// Index of a node in its [SyntaxTree]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An immutable syntax tree: the node arena, its root and the parent table.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
    parents: Vec<Option<NodeId>>,
    root: NodeId,
}

impl SyntaxTree {
    /// Build a tree from an arena and compute its parent table.
    pub fn new(nodes: Vec<Node>, root: NodeId) -> Self {
        let mut tree = SyntaxTree {
            parents: vec![None; nodes.len()],
            nodes,
            root,
        };
        tree.link_parents();
        tree
    }

    /// Recompute parent links from the child fields.
    ///
    /// Only nodes reachable from the root get a parent. A node referenced from two places keeps
    /// the first parent found in pre-order.
    pub fn link_parents(&mut self) {
        self.parents = vec![None; self.nodes.len()];
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            match seen.get_mut(id.0) {
                Some(flag) if !*flag => *flag = true,
                _ => continue,
            }
            let children = self.children(id);
            for child in children.iter().rev() {
                if let Some(false) = seen.get(child.0) {
                    if self.parents[child.0].is_none() {
                        self.parents[child.0] = Some(id);
                    }
                    stack.push(*child);
                }
            }
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id.0).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Present children of a node, in field order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        match self.get(id) {
            Some(node) => node
                .fields()
                .iter()
                .flat_map(|(_, field)| field.ids())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Present children paired with the path segment that leads to each, in field order.
    pub fn child_segments(&self, id: NodeId) -> Vec<(PathSegment, NodeId)> {
        let Some(node) = self.get(id) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for (name, field) in node.fields() {
            match field {
                FieldRef::Node(Some(child)) => out.push((PathSegment::field(name), child)),
                FieldRef::Node(None) => {}
                FieldRef::List(list) => out.extend(list.iter().enumerate().filter_map(|(i, slot)| {
                    slot.map(|child| (PathSegment::indexed(name, i), child))
                })),
            }
        }
        out
    }

    /// Follow a focus path from the root. Any mismatch (unknown field, index on a single
    /// field, missing index on a list, out of range, hole) yields `None`.
    pub fn resolve(&self, path: &FocusPath) -> Option<NodeId> {
        let mut current = self.root;
        self.get(current)?;
        for segment in path.segments() {
            let field = self.get(current)?.field(&segment.field)?;
            current = field.at(segment.index)?;
            self.get(current)?;
        }
        Some(current)
    }

    /// The path from the root to `id`, reconstructed from the parent table.
    pub fn path_of(&self, id: NodeId) -> Option<FocusPath> {
        self.get(id)?;
        let mut segments = Vec::new();
        let mut child = id;
        while child != self.root {
            let parent = self.parent(child)?;
            segments.push(self.segment_to(parent, child)?);
            child = parent;
        }
        segments.reverse();
        Some(FocusPath::from_segments(segments))
    }

    fn segment_to(&self, parent: NodeId, child: NodeId) -> Option<PathSegment> {
        self.get(parent)?
            .fields()
            .into_iter()
            .find_map(|(name, field)| match field {
                FieldRef::Node(Some(id)) if id == child => Some(PathSegment::field(name)),
                FieldRef::List(items) => items
                    .iter()
                    .position(|slot| *slot == Some(child))
                    .map(|i| PathSegment::indexed(name, i)),
                _ => None,
            })
    }

    /// Pre-order traversal from the root, yielding each node with its depth.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: vec![(self.root, 0)],
            seen: vec![false; self.nodes.len()],
        }
    }
}

impl Default for SyntaxTree {
    /// A tree holding a single empty script `Program`.
    fn default() -> Self {
        SyntaxTree::new(
            vec![Node::Program(Program {
                source_type: "script".to_string(),
                ..Program::default()
            })],
            NodeId(0),
        )
    }
}

/// Iterator returned by [SyntaxTree::walk].
pub struct Walk<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<(NodeId, usize)>,
    seen: Vec<bool>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, depth)) = self.stack.pop() {
            match self.seen.get_mut(id.0) {
                Some(flag) if !*flag => *flag = true,
                _ => continue,
            }
            for child in self.tree.children(id).into_iter().rev() {
                self.stack.push((child, depth + 1));
            }
            return Some((id, depth));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TreeBuilder;

    // a + b; f(x, y);
    fn sample() -> (SyntaxTree, Vec<NodeId>) {
        let mut b = TreeBuilder::new();
        let a = b.ident("a");
        let bb = b.ident("b");
        let sum = b.binary("+", a, bb);
        let s1 = b.expr_stmt(sum);
        let f = b.ident("f");
        let x = b.ident("x");
        let y = b.ident("y");
        let call = b.call(f, vec![x, y]);
        let s2 = b.expr_stmt(call);
        let program = b.program(vec![s1, s2]);
        (b.finish(program), vec![program, s1, sum, a, bb, s2, call, f, x, y])
    }

    #[test]
    fn test_parents_are_linked() {
        let (tree, ids) = sample();
        let [program, s1, sum, a, ..] = ids[..] else {
            unreachable!()
        };
        assert_eq!(tree.parent(program), None);
        assert_eq!(tree.parent(s1), Some(program));
        assert_eq!(tree.parent(sum), Some(s1));
        assert_eq!(tree.parent(a), Some(sum));
    }

    #[test]
    fn test_resolve_and_path_of_agree() {
        let (tree, ids) = sample();
        for id in ids {
            let path = tree.path_of(id).unwrap();
            assert_eq!(tree.resolve(&path), Some(id), "path {}", path);
        }
    }

    #[test]
    fn test_resolve_rejects_malformed_paths() {
        let (tree, _) = sample();
        for raw in [
            "body[5]",
            "body",
            "body[0].expression[0]",
            "nothing",
            "body[1].expression.arguments[2]",
        ] {
            let path: FocusPath = raw.parse().unwrap();
            assert_eq!(tree.resolve(&path), None, "{} should not resolve", raw);
        }
    }

    #[test]
    fn test_path_display() {
        let (tree, ids) = sample();
        let y = ids[9];
        assert_eq!(
            tree.path_of(y).unwrap().to_string(),
            "body[1].expression.arguments[1]"
        );
        assert_eq!(tree.path_of(tree.root()).unwrap().to_string(), "<root>");
    }

    #[test]
    fn test_walk_is_preorder() {
        let (tree, ids) = sample();
        let order: Vec<NodeId> = tree.walk().map(|(id, _)| id).collect();
        assert_eq!(order, ids);
        let depths: Vec<usize> = tree.walk().map(|(_, depth)| depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 3, 3, 1, 2, 3, 3, 3]);
    }

    #[test]
    fn test_default_tree_is_empty_program() {
        let tree = SyntaxTree::default();
        assert_eq!(tree.len(), 1);
        assert!(matches!(tree.get(tree.root()), Some(Node::Program(_))));
        assert!(tree.children(tree.root()).is_empty());
    }
}
