//! Treeviz formatter for syntax trees
//!
//! One line per syntax node, structure encoded by box-drawing connectors. Each line shows the
//! field the node sits in, an icon for the node's category, its kind and a short label
//! (truncated to the configured width):
//!
//!     ⧉ Program script
//!     ├─ body[0] ≔ FunctionDeclaration main
//!     │  ├─ id ◇ Identifier main
//!     │  └─ body ¶ BlockStatement
//!     └─ body[1] ¶ ExpressionStatement
//!        └─ expression ◇ CallExpression main
//!
//! Icons
//!     Root: ⧉
//!     Statement: ¶
//!     Declaration: ≔
//!     Expression: ◇
//!     Literal: ◦
//!     Pattern: ⊡
//!     Class: ◆
//!     Module: ⇄
//!     Unknown kinds: ∅
//!
//! The focused node's line is wrapped in `»…«`, like in the text format.

use super::registry::{FormatError, Formatter};
use crate::estree::{NodeCategory, NodeId, SyntaxTree};
use crate::navigation::FocusPath;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}

pub fn get_icon(category: Option<NodeCategory>) -> &'static str {
    match category {
        Some(NodeCategory::Root) => "⧉",
        Some(NodeCategory::Statement) => "¶",
        Some(NodeCategory::Declaration) => "≔",
        Some(NodeCategory::Expression) => "◇",
        Some(NodeCategory::Literal) => "◦",
        Some(NodeCategory::Pattern) => "⊡",
        Some(NodeCategory::Class) => "◆",
        Some(NodeCategory::Module) => "⇄",
        None => "∅",
    }
}

struct Treeviz<'t> {
    tree: &'t SyntaxTree,
    focused: Option<NodeId>,
    label_width: usize,
    seen: Vec<bool>,
    output: String,
}

impl<'t> Treeviz<'t> {
    /// `icon Kind label`, focus-marked.
    fn describe(&self, id: NodeId) -> String {
        let Some(node) = self.tree.get(id) else {
            return String::new();
        };
        let icon = get_icon(node.node_kind().map(|kind| kind.category()));
        let label = truncate(&self.tree.display_label(id), self.label_width);
        let mut line = format!("{} {}", icon, node.kind());
        if !label.is_empty() {
            line.push(' ');
            line.push_str(&label);
        }
        if self.focused == Some(id) {
            line = format!("»{}«", line);
        }
        line
    }

    /// Marks `id` visited; false when it was already printed.
    fn visit(&mut self, id: NodeId) -> bool {
        match self.seen.get_mut(id.0) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    fn format_root(&mut self, id: NodeId) {
        if !self.visit(id) {
            return;
        }
        let line = self.describe(id);
        self.output.push_str(&line);
        self.output.push('\n');
        self.format_children(id, "");
    }

    fn format_children(&mut self, id: NodeId, prefix: &str) {
        let children = self.tree.child_segments(id);
        let count = children.len();
        for (i, (segment, child)) in children.into_iter().enumerate() {
            if !self.visit(child) {
                continue;
            }
            let is_last = i + 1 == count;
            let connector = if is_last { "└─" } else { "├─" };
            let line = self.describe(child);
            self.output
                .push_str(&format!("{}{} {} {}\n", prefix, connector, segment, line));
            let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
            self.format_children(child, &child_prefix);
        }
    }
}

/// Outline of `tree` with `focus` marked. Labels are cut after `label_width` characters.
pub fn to_treeviz_str(tree: &SyntaxTree, focus: &FocusPath, label_width: usize) -> String {
    let mut treeviz = Treeviz {
        tree,
        focused: tree.resolve(focus),
        label_width,
        seen: vec![false; tree.len()],
        output: String::new(),
    };
    treeviz.format_root(tree.root());
    treeviz.output
}

/// The `treeviz` format.
pub struct TreevizFormatter {
    label_width: usize,
}

impl TreevizFormatter {
    pub fn new(label_width: usize) -> Self {
        TreevizFormatter { label_width }
    }
}

impl Default for TreevizFormatter {
    fn default() -> Self {
        TreevizFormatter::new(30)
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, tree: &SyntaxTree, focus: &FocusPath) -> Result<String, FormatError> {
        Ok(to_treeviz_str(tree, focus, self.label_width))
    }

    fn description(&self) -> &str {
        "Syntax outline with box-drawing connectors and category icons"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TreeBuilder;

    // function main() {} main();
    fn sample() -> SyntaxTree {
        let mut b = TreeBuilder::new();
        let main = b.function(Some("main"), vec![], vec![]);
        let callee = b.ident("main");
        let call = b.call(callee, vec![]);
        let stmt = b.expr_stmt(call);
        let program = b.program(vec![main, stmt]);
        b.finish(program)
    }

    #[test]
    fn test_outline_shape() {
        let tree = sample();
        let expected = concat!(
            "⧉ Program script\n",
            "├─ body[0] ≔ FunctionDeclaration main\n",
            "│  ├─ id ◇ Identifier main\n",
            "│  └─ body ¶ BlockStatement\n",
            "└─ body[1] ¶ ExpressionStatement\n",
            "   └─ expression ◇ CallExpression main\n",
            "      └─ callee ◇ Identifier main\n",
        );
        let unfocused: FocusPath = "nowhere[9]".parse().unwrap();
        assert_eq!(to_treeviz_str(&tree, &unfocused, 30), expected);
    }

    #[test]
    fn test_focus_marker() {
        let tree = sample();
        let out = TreevizFormatter::default()
            .serialize(&tree, &"body[1].expression".parse().unwrap())
            .unwrap();
        assert!(
            out.contains("   └─ expression »◇ CallExpression main«\n"),
            "{}",
            out
        );
        assert_eq!(out.matches('»').count(), 1);
    }

    #[test]
    fn test_label_truncation() {
        let mut b = TreeBuilder::new();
        let s = b.string("a rather long string value");
        let tree = b.finish(s);
        let out = to_treeviz_str(&tree, &FocusPath::root(), 8);
        assert_eq!(out, "»◦ StringLiteral \"a rathe…«\n");
    }

    #[test]
    fn test_unknown_icon() {
        let mut b = TreeBuilder::new();
        let novel = b.unknown("JSXElement");
        let tree = b.finish(novel);
        assert_eq!(to_treeviz_str(&tree, &FocusPath::root(), 30), "»∅ JSXElement«\n");
    }
}
