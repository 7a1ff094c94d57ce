//! Source-like text printing of fragment trees
//!
//! The printer walks the fragment tree once, joining leaves with single spaces and breaking
//! lines at block composites:
//!
//!     - a block composite starts on a fresh line and ends its line
//!     - an anonymous block group (a statement body) indents its contents one level
//!     - punctuation hugs its neighbours: no space before `,` `;` `)` `]` `.`, none after
//!       `(` `[` `.` `...`, and calls or indexing attach to the callee
//!     - prefix and postfix operators attach to their operand, regular expressions print
//!       as one word
//!
//! The focused node is wrapped in `»` and `«`. The output is a reading aid, not a code
//! formatter: parentheses that the tree does not record are not restored.

use super::registry::{FormatError, Formatter};
use crate::estree::SyntaxTree;
use crate::navigation::FocusPath;
use crate::render::{Composite, Fragment, Layout, Renderer, TextClass, TokenKind};

pub const FOCUS_OPEN: &str = "»";
pub const FOCUS_CLOSE: &str = "«";

/// What a printed piece of a line stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceClass {
    Indent,
    Space,
    Token(TokenKind),
    Text(TextClass),
    FocusOpen,
    FocusClose,
}

/// One run of a printed line. Concatenating the pieces of a line gives its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece<'f> {
    pub text: &'f str,
    pub class: PieceClass,
}

impl Piece<'_> {
    fn is_content(&self) -> bool {
        !matches!(self.class, PieceClass::Indent | PieceClass::Space)
            && !self.text.trim().is_empty()
    }
}

/// Lay a fragment tree out as lines of classified pieces, focus markers included.
pub fn layout<'f>(fragment: &'f Fragment, indent_string: &'f str) -> Vec<Vec<Piece<'f>>> {
    let mut printer = Printer::new(indent_string);
    printer.fragment(fragment);
    printer.flush();
    printer.lines
}

/// Print a fragment tree as text, one indentation level being `indent_string`.
pub fn to_text(fragment: &Fragment, indent_string: &str) -> String {
    let mut out = String::new();
    for line in layout(fragment, indent_string) {
        for piece in line {
            out.push_str(piece.text);
        }
        out.push('\n');
    }
    out
}

#[derive(Debug, Clone, Copy)]
struct Prev<'f> {
    text: &'f str,
    is_text: bool,
}

struct Printer<'f> {
    indent_string: &'f str,
    lines: Vec<Vec<Piece<'f>>>,
    line: Vec<Piece<'f>>,
    depth: usize,
    prev: Option<Prev<'f>>,
    /// Suppress the space before the next leaf.
    glue: bool,
    /// The focused node has started but printed nothing yet.
    focus_pending: bool,
    /// Kinds of the enclosing node composites, innermost last.
    owners: Vec<&'f str>,
}

impl<'f> Printer<'f> {
    fn new(indent_string: &'f str) -> Self {
        Printer {
            indent_string,
            lines: Vec::new(),
            line: Vec::new(),
            depth: 0,
            prev: None,
            glue: false,
            focus_pending: false,
            owners: Vec::new(),
        }
    }

    fn fragment(&mut self, fragment: &'f Fragment) {
        match fragment {
            Fragment::Composite(composite) => self.composite(composite),
            Fragment::Text(run) => self.leaf(&run.text, PieceClass::Text(run.class)),
            Fragment::Token(token) => self.leaf(&token.text, PieceClass::Token(token.kind)),
        }
    }

    fn composite(&mut self, composite: &'f Composite) {
        // Holes and empty bodies print nothing, not even a line break.
        if composite.node.is_none() && composite.children.is_empty() {
            return;
        }
        let block = composite.layout == Layout::Block;
        let indents = block && composite.node.is_none();
        let focused = composite.node.as_ref().is_some_and(|meta| meta.focused);
        let kind = composite.node.as_ref().map(|meta| meta.kind.as_str());
        let tight = matches!(kind, Some("UnaryExpression" | "UpdateExpression"));
        let solid = kind == Some("RegExpLiteral");

        if block {
            self.flush();
        }
        if indents {
            self.depth += 1;
        }
        if focused {
            self.focus_pending = true;
        }
        if let Some(meta) = &composite.node {
            self.owners.push(&meta.kind);
        }

        for (i, child) in composite.children.iter().enumerate() {
            let attached = tight
                && matches!(child, Fragment::Token(token) if token.kind == TokenKind::Operator);
            if (attached || solid) && i > 0 {
                self.glue = true;
            }
            self.fragment(child);
            if attached && i == 0 {
                self.glue = true;
            }
        }

        if composite.node.is_some() {
            self.owners.pop();
        }
        if focused {
            self.close_focus();
        }
        if indents {
            self.depth -= 1;
        }
        if block {
            self.flush();
        }
    }

    fn leaf(&mut self, text: &'f str, class: PieceClass) {
        if text.is_empty() {
            return;
        }
        self.separate(text);
        if self.focus_pending {
            self.focus_pending = false;
            self.push(FOCUS_OPEN, PieceClass::FocusOpen);
        }
        self.push(text, class);
        self.prev = Some(Prev {
            text,
            is_text: matches!(class, PieceClass::Text(_)),
        });
        self.glue = false;
    }

    fn push(&mut self, text: &'f str, class: PieceClass) {
        self.line.push(Piece { text, class });
    }

    /// Start the line, or put a space before `next` when it needs one.
    fn separate(&mut self, next: &str) {
        if self.line.is_empty() {
            for _ in 0..self.depth {
                self.push(self.indent_string, PieceClass::Indent);
            }
        } else if self.needs_space(next) {
            self.push(" ", PieceClass::Space);
        }
    }

    fn needs_space(&self, next: &str) -> bool {
        let Some(prev) = self.prev else {
            return false;
        };
        if self.glue {
            return false;
        }
        if matches!(next, "," | ";" | ")" | "]" | "." | "?." | "::") {
            return false;
        }
        if next == ":" && self.owners.last() != Some(&"ConditionalExpression") {
            return false;
        }
        if matches!(prev.text, "(" | "[" | "." | "?." | "::" | "..." | "@") {
            return false;
        }
        let attaches = prev.is_text || matches!(prev.text, ")" | "]" | "this" | "super");
        !(matches!(next, "(" | "[") && attaches)
    }

    fn close_focus(&mut self) {
        if self.focus_pending {
            // The focused node printed nothing; show where it is anyway.
            self.focus_pending = false;
            self.separate("»«");
            self.push(FOCUS_OPEN, PieceClass::FocusOpen);
            self.push(FOCUS_CLOSE, PieceClass::FocusClose);
            return;
        }
        let close = Piece {
            text: FOCUS_CLOSE,
            class: PieceClass::FocusClose,
        };
        match self.lines.last_mut() {
            Some(last) if self.line.is_empty() => last.push(close),
            _ => self.line.push(close),
        }
    }

    fn flush(&mut self) {
        let mut line = std::mem::take(&mut self.line);
        while line
            .last()
            .is_some_and(|piece| matches!(piece.class, PieceClass::Indent | PieceClass::Space))
        {
            line.pop();
        }
        if line.iter().any(Piece::is_content) {
            self.lines.push(line);
        }
        self.prev = None;
        self.glue = false;
    }
}

/// The `text` format.
pub struct TextFormatter {
    indent_string: String,
}

impl TextFormatter {
    pub fn new(indent_string: impl Into<String>) -> Self {
        TextFormatter {
            indent_string: indent_string.into(),
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        TextFormatter::new("  ")
    }
}

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, tree: &SyntaxTree, focus: &FocusPath) -> Result<String, FormatError> {
        let rendered = Renderer::new(tree).with_focus(focus).render_root();
        Ok(rendered
            .map(|fragment| to_text(&fragment, &self.indent_string))
            .unwrap_or_default())
    }

    fn description(&self) -> &str {
        "Source-like text with the focused node marked"
    }
}
