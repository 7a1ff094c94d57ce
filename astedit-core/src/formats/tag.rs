//! XML-like tag serialization of fragment trees
//!
//! ## Format
//!
//! - Node composite → `<node kind=".." path=".." layout="..">`, plus `focused="true"` on the
//!   focused node
//! - Anonymous group → `<group layout="..">`
//! - Token → tag named after its kind (`<keyword>`, `<operator>`, `<punctuation>`, `<bracket>`)
//! - Text run → tag named after its class (`<identifier>`, `<literal>`, `<text>`, `<unknown>`)
//!
//! ## Example
//!
//! ```text
//! <fragment>
//!   <node kind="ExpressionStatement" path="body[0]" layout="block">
//!     <node kind="Identifier" path="body[0].expression" layout="inline">
//!       <identifier>a</identifier>
//!     </node>
//!     <punctuation>;</punctuation>
//!   </node>
//! </fragment>
//! ```

use super::registry::{FormatError, Formatter};
use crate::estree::SyntaxTree;
use crate::navigation::FocusPath;
use crate::render::{Fragment, Layout, Renderer, TextClass, TokenKind};

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn push_line(&mut self, s: &str) {
        for _ in 0..self.indent_level {
            self.output.push_str("  ");
        }
        self.output.push_str(s);
        self.output.push('\n');
    }

    fn serialize_fragment(&mut self, fragment: &Fragment) {
        match fragment {
            Fragment::Token(token) => {
                let tag = token_tag(token.kind);
                self.push_line(&format!("<{tag}>{}</{tag}>", escape_xml(&token.text)));
            }
            Fragment::Text(run) => {
                let tag = text_tag(run.class);
                self.push_line(&format!("<{tag}>{}</{tag}>", escape_xml(&run.text)));
            }
            Fragment::Composite(composite) => {
                let layout = match composite.layout {
                    Layout::Inline => "inline",
                    Layout::Block => "block",
                };
                let (tag, open) = match &composite.node {
                    Some(meta) => {
                        let mut open = format!(
                            "node kind=\"{}\" path=\"{}\" layout=\"{}\"",
                            escape_xml(&meta.kind),
                            escape_xml(&meta.path.to_string()),
                            layout
                        );
                        if meta.focused {
                            open.push_str(" focused=\"true\"");
                        }
                        ("node", open)
                    }
                    None => ("group", format!("group layout=\"{}\"", layout)),
                };
                if composite.children.is_empty() {
                    self.push_line(&format!("<{open}/>"));
                    return;
                }
                self.push_line(&format!("<{open}>"));
                self.indent_level += 1;
                for child in &composite.children {
                    self.serialize_fragment(child);
                }
                self.indent_level -= 1;
                self.push_line(&format!("</{tag}>"));
            }
        }
    }
}

fn token_tag(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Keyword => "keyword",
        TokenKind::Operator => "operator",
        TokenKind::Punctuation => "punctuation",
        TokenKind::Bracket => "bracket",
    }
}

fn text_tag(class: TextClass) -> &'static str {
    match class {
        TextClass::Plain => "text",
        TextClass::Identifier => "identifier",
        TextClass::Literal => "literal",
        TextClass::Unknown => "unknown",
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

/// Serialize a fragment tree, wrapped in a `<fragment>` root tag.
pub fn to_tag_string(fragment: &Fragment) -> String {
    let mut serializer = TagSerializer::new();
    serializer.push_line("<fragment>");
    serializer.indent_level = 1;
    serializer.serialize_fragment(fragment);
    serializer.indent_level = 0;
    serializer.output.push_str("</fragment>");
    serializer.output
}

/// The `tag` format.
pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, tree: &SyntaxTree, focus: &FocusPath) -> Result<String, FormatError> {
        match Renderer::new(tree).with_focus(focus).render_root() {
            Some(fragment) => Ok(to_tag_string(&fragment)),
            None => Ok("<fragment>\n</fragment>".to_string()),
        }
    }

    fn description(&self) -> &str {
        "XML-like markup of the rendered fragments"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TreeBuilder;

    fn statement_tree() -> SyntaxTree {
        let mut b = TreeBuilder::new();
        let a = b.ident("a");
        let s = b.string("<b>");
        let sum = b.binary("+", a, s);
        let stmt = b.expr_stmt(sum);
        let program = b.program(vec![stmt]);
        b.finish(program)
    }

    #[test]
    fn test_serialize_statement() {
        let tree = statement_tree();
        let out = TagFormatter
            .serialize(&tree, &"body[0].expression".parse().unwrap())
            .unwrap();
        let expected = r#"<fragment>
  <node kind="Program" path="&lt;root&gt;" layout="block">
    <node kind="ExpressionStatement" path="body[0]" layout="block">
      <node kind="BinaryExpression" path="body[0].expression" layout="inline" focused="true">
        <node kind="Identifier" path="body[0].expression.left" layout="inline">
          <identifier>a</identifier>
        </node>
        <operator>+</operator>
        <node kind="StringLiteral" path="body[0].expression.right" layout="inline">
          <literal>&apos;&lt;b&gt;&apos;</literal>
        </node>
      </node>
      <punctuation>;</punctuation>
    </node>
  </node>
</fragment>"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn test_empty_groups_self_close() {
        let mut b = TreeBuilder::new();
        let array = b.array(vec![None]);
        let tree = b.finish(array);
        let out = TagFormatter.serialize(&tree, &FocusPath::root()).unwrap();
        assert!(out.contains("<group layout=\"inline\">\n"), "{}", out);
        assert!(out.contains("  <group layout=\"inline\"/>\n"), "{}", out);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b && c"), "a &lt; b &amp;&amp; c");
    }
}
