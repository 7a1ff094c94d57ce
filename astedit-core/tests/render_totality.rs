//! Every handled kind renders, and every unhandled kind renders as a placeholder
//!
//! A node of each kind is loaded from its bare tag (`{"type": "IfStatement"}`), so all of its
//! fields are absent: the rules must cope with that as well as with full nodes.

use astedit_core::estree::{Node, NodeCategory, NodeKind};
use astedit_core::{render, FocusPath, Renderer, TreeLoader};
use rstest::rstest;
use serde_json::json;

#[test]
fn test_every_kind_renders_from_a_bare_tag() {
    for kind in NodeKind::ALL {
        let tree = TreeLoader::from_value(json!({ "type": kind.as_str() }))
            .load()
            .unwrap_or_else(|err| panic!("{} failed to load: {}", kind, err));
        let node = tree.get(tree.root()).unwrap();
        assert_eq!(node.node_kind(), Some(*kind), "{} loaded as {:?}", kind, node);

        let fragment = render(&tree, Some(tree.root()))
            .unwrap_or_else(|| panic!("{} rendered nothing", kind));
        assert!(!fragment.is_unknown(), "{} rendered as unknown", kind);

        let meta = fragment.meta().unwrap();
        assert_eq!(meta.kind, kind.as_str());
        assert_eq!(meta.path, FocusPath::root());
    }
}

#[test]
fn test_every_kind_round_trips_its_tag() {
    for kind in NodeKind::ALL {
        assert_eq!(NodeKind::from_tag(kind.as_str()), Some(*kind));
    }
}

#[test]
fn test_every_category_is_populated() {
    for category in [
        NodeCategory::Root,
        NodeCategory::Literal,
        NodeCategory::Statement,
        NodeCategory::Declaration,
        NodeCategory::Expression,
        NodeCategory::Pattern,
        NodeCategory::Class,
        NodeCategory::Module,
    ] {
        assert!(
            NodeKind::ALL.iter().any(|kind| kind.category() == category),
            "{:?} has no kinds",
            category
        );
    }
}

#[rstest(
    tag,
    case("TotallyNovelNodeType"),
    case("TemplateLiteral"),
    case("JSXElement"),
    case("TSTypeAnnotation"),
    case("OptionalMemberExpression"),
    case("")
)]
fn test_unhandled_tags_render_placeholder(tag: &str) {
    let tree = TreeLoader::from_value(json!({ "type": tag, "extra": { "raw": "x" } }))
        .load()
        .unwrap();
    assert!(matches!(tree.get(tree.root()), Some(Node::Unknown { .. })));

    let fragment = Renderer::new(&tree).render_root().unwrap();
    assert!(fragment.is_unknown());
    assert_eq!(
        fragment.leaves()[0].leaf_text(),
        format!("[UNKNOWN: {}]", tag)
    );
}
