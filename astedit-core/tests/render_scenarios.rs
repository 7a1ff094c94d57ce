//! End-to-end scenarios: JSON in, fragments and printed text out
//!
//! Each test loads a tree the way the binaries do (through `TreeLoader`) and checks the
//! rendered fragments by their visible text, their node metadata or the printed formats.

use astedit_core::formats::{FormatRegistry, TextFormatter};
use astedit_core::formats::Formatter;
use astedit_core::render::{Layout, TextClass};
use astedit_core::testing::{assert_leaf_texts, fixture_path, leaf_texts};
use astedit_core::{render, FocusPath, Fragment, Renderer, SyntaxTree, TreeLoader};

fn load(json: &str) -> SyntaxTree {
    TreeLoader::from_string(json).load().unwrap()
}

fn render_root(tree: &SyntaxTree) -> Fragment {
    render(tree, Some(tree.root())).unwrap()
}

#[test]
fn test_empty_program() {
    let tree = load(r#"{"type":"Program","body":[]}"#);
    let fragment = render_root(&tree);
    let composite = fragment.as_composite().unwrap();

    assert_eq!(composite.node.as_ref().unwrap().kind, "Program");
    assert_eq!(composite.layout, Layout::Block);
    assert!(composite.children.is_empty());
}

#[test]
fn test_binary_expression() {
    let tree = load(
        r#"{"type":"BinaryExpression","operator":"+",
            "left":{"type":"Identifier","name":"a"},
            "right":{"type":"Identifier","name":"b"}}"#,
    );
    let fragment = render_root(&tree);
    assert_leaf_texts(&fragment, &["a", "+", "b"]);

    let children = &fragment.as_composite().unwrap().children;
    assert_eq!(children.len(), 3);
    assert_eq!(children[0].meta().unwrap().path.to_string(), "left");
    assert_eq!(children[2].meta().unwrap().path.to_string(), "right");
}

#[test]
fn test_member_access() {
    let computed = load(
        r#"{"type":"MemberExpression","computed":true,
            "object":{"type":"Identifier","name":"obj"},
            "property":{"type":"Identifier","name":"key"}}"#,
    );
    assert_leaf_texts(&render_root(&computed), &["obj", "[", "key", "]"]);

    let dotted = load(
        r#"{"type":"MemberExpression","computed":false,
            "object":{"type":"Identifier","name":"obj"},
            "property":{"type":"Identifier","name":"key"}}"#,
    );
    assert_leaf_texts(&render_root(&dotted), &["obj", ".", "key"]);
}

#[test]
fn test_unknown_kind_is_visible() {
    let tree = load(r#"{"type":"TotallyNovelNodeType","whatever":[1,2,3]}"#);
    let fragment = render_root(&tree);

    assert!(fragment.is_unknown());
    assert_eq!(fragment.meta().unwrap().kind, "TotallyNovelNodeType");
    match &fragment.as_composite().unwrap().children[0] {
        Fragment::Text(run) => {
            assert!(run.text.contains("TotallyNovelNodeType"));
            assert_eq!(run.class, TextClass::Unknown);
        }
        other => panic!("expected placeholder text, got {:?}", other),
    }
}

#[test]
fn test_unknown_kind_inside_known_parent() {
    let tree = load(
        r#"{"type":"Program","body":[
            {"type":"ExpressionStatement","expression":{"type":"JSXElement","children":[]}},
            {"type":"ExpressionStatement","expression":{"type":"Identifier","name":"after"}}
        ]}"#,
    );
    assert_eq!(
        leaf_texts(&render_root(&tree)),
        vec!["[UNKNOWN: JSXElement]", ";", "after", ";"]
    );
}

#[test]
fn test_absent_render_is_absent() {
    let tree = load(r#"{"type":"Program","body":[]}"#);
    assert_eq!(render(&tree, None), None);
    assert_eq!(Renderer::new(&tree).render(None), None);
}

#[test]
fn test_render_is_idempotent_on_fixture() {
    let tree = TreeLoader::from_path(fixture_path("counter.json"))
        .unwrap()
        .load()
        .unwrap();
    let focus: FocusPath = "program.body[1].declaration".parse().unwrap();
    let renderer = Renderer::new(&tree).with_focus(&focus);
    assert_eq!(renderer.render_root(), renderer.render_root());
}

#[test]
fn test_fixture_prints_as_source() {
    let tree = TreeLoader::from_path(fixture_path("counter.json"))
        .unwrap()
        .load()
        .unwrap();
    let focus: FocusPath = "program.body[1].declaration.body.body[1].test".parse().unwrap();
    let text = TextFormatter::default().serialize(&tree, &focus).unwrap();
    assert_eq!(
        text,
        concat!(
            "'use strict';\n",
            "import React, { useState as useLocal } from 'react';\n",
            "export default function Counter(props) {\n",
            "  const [count, setCount] = useLocal(0);\n",
            "  if (»count > 10«) {\n",
            "    return null;\n",
            "  } else {\n",
            "    setCount(count + 1);\n",
            "  }\n",
            "  return [UNKNOWN: TemplateLiteral];\n",
            "}\n",
        )
    );
}

#[test]
fn test_flat_fixture_matches_nested_shape() {
    let flat = TreeLoader::from_path(fixture_path("flat.json"))
        .unwrap()
        .load()
        .unwrap();
    let nested = load(
        r#"{"type":"File","program":{"type":"Program","sourceType":"script","directives":[],"body":[
            {"type":"ExpressionStatement","expression":{"type":"BinaryExpression","operator":"+",
                "left":{"type":"Identifier","name":"a"},"right":{"type":"Identifier","name":"b"}}},
            {"type":"ExpressionStatement","expression":{"type":"MemberExpression","computed":true,
                "object":{"type":"Identifier","name":"obj"},"property":{"type":"Identifier","name":"key"}}}
        ]}}"#,
    );
    assert_eq!(render_root(&flat), render_root(&nested));
    assert_eq!(
        leaf_texts(&render_root(&flat)),
        vec!["a", "+", "b", ";", "obj", "[", "key", "]", ";"]
    );
}

#[test]
fn test_every_format_prints_the_fixture() {
    let tree = TreeLoader::from_path(fixture_path("counter.json"))
        .unwrap()
        .load()
        .unwrap();
    let registry = FormatRegistry::with_defaults();
    let focus = FocusPath::root();
    for name in registry.list_formats() {
        let out = registry.serialize(&tree, &focus, &name).unwrap();
        assert!(out.contains("Counter"), "{} output lacks the function name", name);
    }
}
