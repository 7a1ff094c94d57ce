//! Focus navigation over loaded trees, and focus carried through snapshot streams

use astedit_core::testing::fixture_path;
use astedit_core::{move_focus, Direction, FocusPath, FocusState, SnapshotStream, SyntaxTree, TreeLoader};
use rstest::rstest;
use std::collections::{HashSet, VecDeque};
use std::fs::File;
use std::io::BufReader;

fn path(raw: &str) -> FocusPath {
    raw.parse().unwrap()
}

fn two_statements() -> SyntaxTree {
    TreeLoader::from_string(
        r#"{"type":"Program","body":[
            {"type":"ExpressionStatement","expression":{"type":"Identifier","name":"a"}},
            {"type":"ExpressionStatement","expression":{"type":"Identifier","name":"b"}}
        ]}"#,
    )
    .load()
    .unwrap()
}

#[test]
fn test_round_trip_down_next_up() {
    let tree = two_statements();
    let root = FocusPath::root();

    let first = move_focus(&tree, &root, Direction::Down);
    assert_eq!(first, path("body[0]"));
    let second = move_focus(&tree, &first, Direction::Next);
    assert_eq!(second, path("body[1]"));
    assert_eq!(move_focus(&tree, &second, Direction::Up), root);
}

#[test]
fn test_boundaries_leave_focus_alone() {
    let tree = two_statements();
    let root = FocusPath::root();

    assert_eq!(move_focus(&tree, &root, Direction::Up), root);
    assert_eq!(move_focus(&tree, &path("body[1]"), Direction::Next), path("body[1]"));
    assert_eq!(move_focus(&tree, &path("body[0]"), Direction::Prev), path("body[0]"));

    let empty = TreeLoader::from_string(r#"{"type":"Program","body":[]}"#)
        .load()
        .unwrap();
    assert_eq!(move_focus(&empty, &root, Direction::Down), root);
}

#[rstest(
    raw,
    case("body[7]"),
    case("body"),
    case("body[0].nothing"),
    case("program.body[0]")
)]
fn test_unresolvable_paths_are_kept(raw: &str) {
    let tree = two_statements();
    for direction in [Direction::Up, Direction::Down, Direction::Next, Direction::Prev] {
        assert_eq!(move_focus(&tree, &path(raw), direction), path(raw));
    }
}

#[test]
fn test_walk_into_the_fixture() {
    let tree = TreeLoader::from_path(fixture_path("counter.json"))
        .unwrap()
        .load()
        .unwrap();
    let mut state = FocusState::new(tree);
    let moves = [
        Direction::Down, // File → program
        Direction::Down, // Program → body[0]
        Direction::Next, // → body[1], the export
        Direction::Down, // → declaration
        Direction::Down, // FunctionDeclaration → id
    ];
    for direction in moves {
        assert!(state.apply(direction), "{} did not move from {}", direction, state.path());
    }
    assert_eq!(state.path(), &path("program.body[1].declaration.id"));
    assert_eq!(state.tree().display_label(state.focused().unwrap()), "Counter");

    // Next steps within the nearest list, program.body, where the export is last.
    assert!(!state.apply(Direction::Next));
    assert!(state.apply(Direction::Up));
    assert_eq!(state.path(), &path("program.body[1].declaration"));
}

#[test]
fn test_stream_snapshots_reset_focus() {
    let reader = BufReader::new(File::open(fixture_path("stream.ndjson")).unwrap());
    let mut state = FocusState::default();

    let mut labels = Vec::new();
    for snapshot in SnapshotStream::spawn(reader) {
        state.replace_tree(snapshot.unwrap());
        assert!(state.path().is_root());
        while state.apply(Direction::Down) {}
        labels.push(state.tree().display_label(state.focused().unwrap()));
        while state.apply(Direction::Next) {}
        while state.apply(Direction::Down) {}
        labels.push(state.tree().display_label(state.focused().unwrap()));
    }
    // Empty program: Down goes nowhere and the root's label is its source type.
    assert_eq!(labels, vec!["script", "script", "first", "first", "first", "second"]);
}

/// Every path reachable from `start` by any sequence of moves.
fn reachable(tree: &SyntaxTree, start: FocusPath) -> HashSet<FocusPath> {
    let mut seen = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for direction in [Direction::Up, Direction::Down, Direction::Next, Direction::Prev] {
            let next = move_focus(tree, &current, direction);
            if seen.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }
    seen
}

fn program(statement: &str) -> SyntaxTree {
    TreeLoader::from_string(&format!(r#"{{"type":"Program","body":[{}]}}"#, statement))
        .load()
        .unwrap()
}

#[rstest(
    statement,
    start,
    target,
    // export { a };
    case(
        r#"{"type":"ExportNamedDeclaration","declaration":null,"source":null,"specifiers":[
            {"type":"ExportSpecifier","local":{"type":"Identifier","name":"a"},
             "exported":{"type":"Identifier","name":"a"}}]}"#,
        "<root>",
        "body[0].specifiers[0].local"
    ),
    // (function () { x; });
    case(
        r#"{"type":"ExpressionStatement","expression":{"type":"FunctionExpression","id":null,
            "params":[],"body":{"type":"BlockStatement","body":[
                {"type":"ExpressionStatement","expression":{"type":"Identifier","name":"x"}}]}}}"#,
        "<root>",
        "body[0].expression.body.body[0].expression"
    ),
    // switch (k) { default: y; }
    case(
        r#"{"type":"SwitchStatement","discriminant":{"type":"Identifier","name":"k"},"cases":[
            {"type":"SwitchCase","test":null,"consequent":[
                {"type":"ExpressionStatement","expression":{"type":"Identifier","name":"y"}}]}]}"#,
        "<root>",
        "body[0].cases[0].consequent[0].expression"
    ),
    // () => x;
    case(
        r#"{"type":"ExpressionStatement","expression":{"type":"ArrowFunctionExpression",
            "params":[],"body":{"type":"Identifier","name":"x"}}}"#,
        "<root>",
        "body[0].expression.body"
    ),
    // for (;;) { z; }
    case(
        r#"{"type":"ForStatement","init":null,"test":null,"update":null,"body":{
            "type":"BlockStatement","body":[
                {"type":"ExpressionStatement","expression":{"type":"Identifier","name":"z"}}]}}"#,
        "<root>",
        "body[0].body.body[0].expression"
    ),
    // (class { m() {} });
    case(
        r#"{"type":"ExpressionStatement","expression":{"type":"ClassExpression","id":null,
            "superClass":null,"body":{"type":"ClassBody","body":[
                {"type":"ClassMethod","kind":"method","key":{"type":"Identifier","name":"m"},
                 "params":[],"body":{"type":"BlockStatement","body":[]}}]}}}"#,
        "<root>",
        "body[0].expression.body.body[0].key"
    ),
    // try {} catch { w; }
    case(
        r#"{"type":"TryStatement","block":{"type":"BlockStatement","body":[]},"finalizer":null,
            "handler":{"type":"CatchClause","param":null,"body":{"type":"BlockStatement","body":[
                {"type":"ExpressionStatement","expression":{"type":"Identifier","name":"w"}}]}}}"#,
        "body[0].handler",
        "body[0].handler.body.body[0].expression"
    )
)]
fn test_absent_primary_fields_do_not_hide_children(statement: &str, start: &str, target: &str) {
    let tree = program(statement);
    let start = path(start);
    assert!(tree.resolve(&start).is_some(), "{} does not resolve", start);
    let seen = reachable(&tree, start);
    assert!(seen.contains(&path(target)), "{} unreachable, saw {:?}", target, seen);
}

#[test]
fn test_empty_primary_list_still_stops_down() {
    // switch (k) { case 1: }
    let tree = program(
        r#"{"type":"SwitchStatement","discriminant":{"type":"Identifier","name":"k"},"cases":[
            {"type":"SwitchCase","test":{"type":"NumericLiteral","value":1},"consequent":[]}]}"#,
    );
    let case = path("body[0].cases[0]");
    assert_eq!(move_focus(&tree, &case, Direction::Down), case);
}
