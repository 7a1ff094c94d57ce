//! Navigation moves and focus state

use super::path::{FocusPath, PathSegment};
use crate::estree::{FieldRef, NodeId, SyntaxTree};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Next,
    Prev,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Next => "next",
            Direction::Prev => "prev",
        })
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "h" => Ok(Direction::Up),
            "down" | "l" => Ok(Direction::Down),
            "next" | "j" => Ok(Direction::Next),
            "prev" | "k" => Ok(Direction::Prev),
            other => Err(format!(
                "unknown direction '{}' (expected up, down, next or prev)",
                other
            )),
        }
    }
}

/// Compute the path reached from `path` by one move. Never fails: any move that has no
/// target, and any path that does not resolve, returns `path` unchanged.
pub fn move_focus(tree: &SyntaxTree, path: &FocusPath, direction: Direction) -> FocusPath {
    let Some(current) = tree.resolve(path) else {
        return path.clone();
    };
    let target = match direction {
        Direction::Up => Some(path.parent()),
        Direction::Down => descend(tree, current, path),
        Direction::Next => sidestep(tree, path, true),
        Direction::Prev => sidestep(tree, path, false),
    };
    target.unwrap_or_else(|| path.clone())
}

/// Down follows the primary field. An absent single-valued primary (an anonymous function's
/// `id`, a `default:` case's `test`) gives way to the first present child, so the rest of
/// the node stays reachable. An empty primary list still stops the move.
fn descend(tree: &SyntaxTree, current: NodeId, path: &FocusPath) -> Option<FocusPath> {
    let node = tree.get(current)?;
    let name = node.primary_field()?;
    match node.field(name)? {
        FieldRef::Node(Some(_)) => Some(path.child(PathSegment::field(name))),
        FieldRef::Node(None) => {
            let (segment, _) = tree.child_segments(current).into_iter().next()?;
            Some(path.child(segment))
        }
        list @ FieldRef::List(_) => {
            let index = list.next_present(0, true)?;
            Some(path.child(PathSegment::indexed(name, index)))
        }
    }
}

fn sidestep(tree: &SyntaxTree, path: &FocusPath, forward: bool) -> Option<FocusPath> {
    let segments = path.segments();
    let position = segments.iter().rposition(|s| s.index.is_some())?;
    let segment = &segments[position];
    let index = segment.index?;

    let owner = tree.resolve(&FocusPath::from_segments(segments[..position].to_vec()))?;
    let field = tree.get(owner)?.field(&segment.field)?;
    let target = if forward {
        field.next_present(index + 1, true)?
    } else {
        field.next_present(index.checked_sub(1)?, false)?
    };
    Some(path.reindexed(position + 1, target))
}

/// The current tree and the focus path into it.
///
/// Each new tree replaces the previous one wholesale and puts the focus back on the root.
#[derive(Debug, Clone, Default)]
pub struct FocusState {
    tree: SyntaxTree,
    path: FocusPath,
}

impl FocusState {
    pub fn new(tree: SyntaxTree) -> Self {
        FocusState {
            tree,
            path: FocusPath::root(),
        }
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn path(&self) -> &FocusPath {
        &self.path
    }

    /// The focused node. Always resolves, since only resolvable paths are kept.
    pub fn focused(&self) -> Option<NodeId> {
        self.tree.resolve(&self.path)
    }

    pub fn replace_tree(&mut self, tree: SyntaxTree) {
        self.tree = tree;
        self.path = FocusPath::root();
    }

    /// Apply one move. Returns whether the focus changed.
    pub fn apply(&mut self, direction: Direction) -> bool {
        let next = move_focus(&self.tree, &self.path, direction);
        let changed = next != self.path;
        self.path = next;
        changed
    }

    /// Focus an explicit path if it resolves. Returns whether it was accepted.
    pub fn set_path(&mut self, path: FocusPath) -> bool {
        if self.tree.resolve(&path).is_some() {
            self.path = path;
            true
        } else {
            false
        }
    }

    /// Focus a node by id, if it is reachable from the root.
    pub fn focus_node(&mut self, id: NodeId) -> bool {
        match self.tree.path_of(id) {
            Some(path) => self.set_path(path),
            None => false,
        }
    }
}
