//! Reflective access to child fields
//!
//! Payload structs are typed, but focus paths name fields by their grammar names. [FieldRef]
//! is the common view both shapes of child field reduce to, so path resolution and tree walks
//! can step through any node without matching on its payload.

use super::tree::NodeId;

/// One child field of a node, borrowed from its payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRef<'a> {
    /// A single optional child.
    Node(Option<NodeId>),
    /// A sequence of children. Empty slots are array holes.
    List(&'a [Option<NodeId>]),
}

impl<'a> FieldRef<'a> {
    pub fn is_list(&self) -> bool {
        matches!(self, FieldRef::List(_))
    }

    /// The child at `index`, which must be `None` for single fields and in range for lists.
    /// Holes resolve to `None`.
    pub fn at(&self, index: Option<usize>) -> Option<NodeId> {
        match (self, index) {
            (FieldRef::Node(child), None) => *child,
            (FieldRef::List(items), Some(i)) => items.get(i).copied().flatten(),
            _ => None,
        }
    }

    /// Present children in field order, skipping holes.
    pub fn ids(&self) -> Vec<NodeId> {
        match self {
            FieldRef::Node(child) => child.iter().copied().collect(),
            FieldRef::List(items) => items.iter().filter_map(|slot| *slot).collect(),
        }
    }

    /// Index of the first non-hole slot at or after `from`, stepping forward or backward.
    pub fn next_present(&self, from: usize, forward: bool) -> Option<usize> {
        let FieldRef::List(items) = self else {
            return None;
        };
        if forward {
            (from..items.len()).find(|i| items[*i].is_some())
        } else {
            (0..=from.min(items.len().checked_sub(1)?))
                .rev()
                .find(|i| items[*i].is_some())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_matches_shape() {
        let single = FieldRef::Node(Some(NodeId(3)));
        assert_eq!(single.at(None), Some(NodeId(3)));
        assert_eq!(single.at(Some(0)), None);

        let items = [Some(NodeId(1)), None, Some(NodeId(2))];
        let list = FieldRef::List(&items);
        assert_eq!(list.at(Some(0)), Some(NodeId(1)));
        assert_eq!(list.at(Some(1)), None);
        assert_eq!(list.at(Some(7)), None);
        assert_eq!(list.at(None), None);
    }

    #[test]
    fn test_ids_skip_holes() {
        let items = [None, Some(NodeId(4)), None, Some(NodeId(5))];
        assert_eq!(FieldRef::List(&items).ids(), vec![NodeId(4), NodeId(5)]);
        assert!(FieldRef::Node(None).ids().is_empty());
    }

    #[test]
    fn test_next_present() {
        let items = [None, Some(NodeId(4)), None, Some(NodeId(5))];
        let list = FieldRef::List(&items);
        assert_eq!(list.next_present(0, true), Some(1));
        assert_eq!(list.next_present(2, true), Some(3));
        assert_eq!(list.next_present(4, true), None);
        assert_eq!(list.next_present(2, false), Some(1));
        assert_eq!(list.next_present(0, false), None);
        assert_eq!(FieldRef::List(&[]).next_present(0, false), None);
    }
}
