//! Render fragments
//!
//! The renderer's output: a tree of text runs, tokens and composites. A composite that stands
//! for a syntax node carries [NodeMeta]; anonymous composites group parts of a node (a comma
//! separated list, a statement body) and carry none.

use crate::estree::NodeId;
use crate::navigation::FocusPath;
use serde::Serialize;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Fragment {
    Text(TextRun),
    Token(Token),
    Composite(Composite),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextClass {
    Plain,
    Identifier,
    Literal,
    /// The marker text of an unrecognized node.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    pub text: String,
    pub class: TextClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Keyword,
    Operator,
    Punctuation,
    Bracket,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Cow<'static, str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Inline,
    Block,
}

/// Identity of the syntax node a composite renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeMeta {
    pub id: NodeId,
    pub kind: String,
    /// Path from the root. Also the stable key for list reconciliation.
    pub path: FocusPath,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Composite {
    pub layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeMeta>,
    pub children: Vec<Fragment>,
}

impl Fragment {
    pub fn token(kind: TokenKind, text: impl Into<Cow<'static, str>>) -> Fragment {
        Fragment::Token(Token {
            kind,
            text: text.into(),
        })
    }

    pub fn text(text: impl Into<String>, class: TextClass) -> Fragment {
        Fragment::Text(TextRun {
            text: text.into(),
            class,
        })
    }

    /// An anonymous composite grouping `children`.
    pub fn group(layout: Layout, children: Vec<Fragment>) -> Fragment {
        Fragment::Composite(Composite {
            layout,
            node: None,
            children,
        })
    }

    /// The empty slot left by an array hole.
    pub fn hole() -> Fragment {
        Fragment::group(Layout::Inline, Vec::new())
    }

    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Fragment::Composite(composite) => Some(composite),
            _ => None,
        }
    }

    pub fn meta(&self) -> Option<&NodeMeta> {
        self.as_composite().and_then(|c| c.node.as_ref())
    }

    /// Visible text of a leaf. Composites have none.
    pub fn leaf_text(&self) -> &str {
        match self {
            Fragment::Text(run) => &run.text,
            Fragment::Token(token) => &token.text,
            Fragment::Composite(_) => "",
        }
    }

    /// Leaves in display order.
    pub fn leaves(&self) -> Vec<&Fragment> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Fragment>) {
        match self {
            Fragment::Composite(composite) => {
                for child in &composite.children {
                    child.collect_leaves(out);
                }
            }
            leaf => out.push(leaf),
        }
    }

    /// The first node composite marked focused, in pre-order.
    pub fn find_focused(&self) -> Option<&Fragment> {
        let composite = self.as_composite()?;
        if composite.node.as_ref().is_some_and(|meta| meta.focused) {
            return Some(self);
        }
        composite.children.iter().find_map(|child| child.find_focused())
    }

    /// Whether this is the placeholder for an unrecognized node kind.
    pub fn is_unknown(&self) -> bool {
        match self.as_composite() {
            Some(composite) => matches!(
                composite.children.as_slice(),
                [Fragment::Text(TextRun {
                    class: TextClass::Unknown,
                    ..
                })]
            ),
            None => false,
        }
    }

    /// Every node composite in pre-order.
    pub fn nodes(&self) -> Vec<&NodeMeta> {
        let mut out = Vec::new();
        self.collect_nodes(&mut out);
        out
    }

    fn collect_nodes<'a>(&'a self, out: &mut Vec<&'a NodeMeta>) {
        if let Fragment::Composite(composite) = self {
            if let Some(meta) = &composite.node {
                out.push(meta);
            }
            for child in &composite.children {
                child.collect_nodes(out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Fragment {
        Fragment::group(
            Layout::Inline,
            vec![
                Fragment::text("a", TextClass::Identifier),
                Fragment::group(Layout::Inline, vec![Fragment::token(TokenKind::Operator, "+")]),
                Fragment::hole(),
                Fragment::text("b", TextClass::Identifier),
            ],
        )
    }

    #[test]
    fn test_leaves_flatten_in_order() {
        let fragment = sample();
        let texts: Vec<&str> = fragment.leaves().iter().map(|leaf| leaf.leaf_text()).collect();
        assert_eq!(texts, vec!["a", "+", "b"]);
    }

    #[test]
    fn test_unknown_detection() {
        let placeholder = Fragment::group(
            Layout::Inline,
            vec![Fragment::text("[UNKNOWN: X]", TextClass::Unknown)],
        );
        assert!(placeholder.is_unknown());
        assert!(!sample().is_unknown());
        assert!(!Fragment::text("[UNKNOWN: X]", TextClass::Unknown).is_unknown());
    }

    #[test]
    fn test_json_shape() {
        let fragment = Fragment::token(TokenKind::Bracket, "(");
        let json = serde_json::to_value(&fragment).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "token", "kind": "bracket", "text": "("})
        );
    }
}
