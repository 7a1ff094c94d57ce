//! Code viewer - the rendered fragment tree as source-like text
//!
//! Lines come from the same layout as the `text` format. Instead of the `»…«` markers the
//! focused node is highlighted, and each piece is coloured by what it is: keywords,
//! operators, literals and unknown placeholders all look different.

use super::model::Model;
use super::viewer::{key_direction, scroll_offset, Viewer, ViewerEvent};
use astedit_core::formats::{layout, PieceClass};
use astedit_core::render::{TextClass, TokenKind};
use astedit_core::{Direction, Renderer};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

fn piece_style(class: PieceClass) -> Style {
    match class {
        PieceClass::Token(TokenKind::Keyword) => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        PieceClass::Token(TokenKind::Operator) => Style::default().fg(Color::Yellow),
        PieceClass::Token(TokenKind::Punctuation | TokenKind::Bracket) => {
            Style::default().fg(Color::Gray)
        }
        PieceClass::Text(TextClass::Literal) => Style::default().fg(Color::Green),
        PieceClass::Text(TextClass::Identifier) => Style::default().fg(Color::Cyan),
        PieceClass::Text(TextClass::Unknown) => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::ITALIC),
        _ => Style::default(),
    }
}

fn focus_style() -> Style {
    Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD)
}

#[derive(Debug, Default)]
pub struct CodeViewer {
    indent_string: String,
}

impl CodeViewer {
    pub fn new(indent_string: String) -> Self {
        CodeViewer { indent_string }
    }

    /// Styled lines for the model's tree, and the line the focus starts on.
    pub fn lines(&self, model: &Model) -> (Vec<Line<'static>>, Option<usize>) {
        let Some(fragment) = Renderer::new(model.tree())
            .with_focus(model.path())
            .render_root()
        else {
            return (Vec::new(), None);
        };

        let mut lines = Vec::new();
        let mut focus_row = None;
        let mut in_focus = false;
        for (row, pieces) in layout(&fragment, &self.indent_string).iter().enumerate() {
            let mut spans = Vec::new();
            let mut pieces = pieces.iter().peekable();
            while let Some(piece) = pieces.next() {
                match piece.class {
                    PieceClass::FocusOpen => {
                        focus_row.get_or_insert(row);
                        let empty = pieces
                            .peek()
                            .is_some_and(|next| next.class == PieceClass::FocusClose);
                        if empty {
                            // Nothing to highlight; keep the markers so the focus stays visible.
                            pieces.next();
                            spans.push(Span::styled("»«", focus_style()));
                        } else {
                            in_focus = true;
                        }
                    }
                    PieceClass::FocusClose => in_focus = false,
                    PieceClass::Indent => spans.push(Span::raw(piece.text.to_string())),
                    class => {
                        let mut style = piece_style(class);
                        if in_focus {
                            style = style.patch(focus_style());
                        }
                        spans.push(Span::styled(piece.text.to_string(), style));
                    }
                }
            }
            lines.push(Line::from(spans));
        }
        (lines, focus_row)
    }
}

impl Viewer for CodeViewer {
    fn render(&self, frame: &mut Frame, area: Rect, model: &Model) {
        let (lines, focus_row) = self.lines(model);
        let offset = focus_row.map_or(0, |row| scroll_offset(row, area.height));
        let paragraph = Paragraph::new(lines).scroll((offset, 0));
        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent, _model: &Model) -> Option<ViewerEvent> {
        let direction = match key.code {
            KeyCode::Down => Some(Direction::Next),
            KeyCode::Up => Some(Direction::Prev),
            code => key_direction(code),
        };
        Some(direction.map_or(ViewerEvent::NoChange, ViewerEvent::Move))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astedit_core::TreeLoader;

    fn model(json: &str) -> Model {
        Model::new(TreeLoader::from_string(json).load().unwrap())
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_lines_match_source_text() {
        let model = model(
            r#"{"type":"Program","body":[
                {"type":"IfStatement","test":{"type":"Identifier","name":"ready"},
                 "consequent":{"type":"BlockStatement","body":[
                    {"type":"ReturnStatement","argument":{"type":"NumericLiteral","value":1}}]}}
            ]}"#,
        );
        let (lines, focus_row) = CodeViewer::new("  ".to_string()).lines(&model);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["if (ready) {", "  return 1;", "}"]);
        assert_eq!(focus_row, Some(0));
    }

    #[test]
    fn test_focused_node_is_highlighted() {
        let mut model = model(
            r#"{"type":"Program","body":[
                {"type":"ExpressionStatement","expression":{"type":"BinaryExpression","operator":"+",
                    "left":{"type":"Identifier","name":"a"},"right":{"type":"StringLiteral","value":"b"}}}
            ]}"#,
        );
        model.apply(Direction::Down);
        model.apply(Direction::Down);
        model.apply(Direction::Down);
        assert_eq!(model.path().to_string(), "body[0].expression.left");

        let (lines, _) = CodeViewer::default().lines(&model);
        let spans = &lines[0].spans;
        let a = spans.iter().find(|span| span.content == "a").unwrap();
        assert_eq!(a.style.bg, Some(Color::Blue));
        let plus = spans.iter().find(|span| span.content == "+").unwrap();
        assert_eq!(plus.style.bg, None);
        assert_eq!(plus.style.fg, Some(Color::Yellow));
        let literal = spans.iter().find(|span| span.content == "'b'").unwrap();
        assert_eq!(literal.style.fg, Some(Color::Green));
    }

    #[test]
    fn test_unknown_placeholder_is_marked() {
        let model = model(r#"{"type":"Program","body":[{"type":"ExpressionStatement","expression":{"type":"JSXElement"}}]}"#);
        let (lines, _) = CodeViewer::default().lines(&model);
        let placeholder = lines[0]
            .spans
            .iter()
            .find(|span| span.content == "[UNKNOWN: JSXElement]")
            .unwrap();
        assert_eq!(placeholder.style.fg, Some(Color::Red));
    }

    #[test]
    fn test_empty_focus_keeps_markers() {
        let model = model(r#"{"type":"Program","body":[]}"#);
        let (lines, focus_row) = CodeViewer::default().lines(&model);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "»«");
        assert_eq!(focus_row, Some(0));
    }

    #[test]
    fn test_keys_become_moves() {
        let model = Model::default();
        let mut viewer = CodeViewer::default();
        let key = |code| KeyEvent::new(code, crossterm::event::KeyModifiers::empty());
        assert_eq!(
            viewer.handle_key(key(KeyCode::Down), &model),
            Some(ViewerEvent::Move(Direction::Next))
        );
        assert_eq!(
            viewer.handle_key(key(KeyCode::Char('h')), &model),
            Some(ViewerEvent::Move(Direction::Up))
        );
        assert_eq!(
            viewer.handle_key(key(KeyCode::Char('z')), &model),
            Some(ViewerEvent::NoChange)
        );
    }
}
