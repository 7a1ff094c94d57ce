//! Outline viewer - the syntax tree as an indented list of nodes
//!
//! One row per visible node: the field it sits in, a category icon, its kind and label.
//! `↑`/`↓` walk the visible rows, `Enter`/`Space` expand or collapse the focused row, and the
//! structural moves (`h` `j` `k` `l`, `←` `→`) work here as in the code viewer.

use super::model::{Model, OutlineEntry};
use super::viewer::{key_direction, scroll_offset, Viewer, ViewerEvent};
use astedit_core::formats::treeviz::get_icon;
use astedit_core::NodeId;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

#[derive(Debug, Default)]
pub struct OutlineViewer;

impl OutlineViewer {
    pub fn new() -> Self {
        OutlineViewer
    }

    /// The visible row after (or before) the focused one.
    fn neighbour(&self, model: &Model, forward: bool) -> Option<NodeId> {
        let outline = model.flattened_outline();
        let focused = model.focused()?;
        let index = outline.iter().position(|entry| entry.node_id == focused)?;
        let target = if forward {
            index.checked_add(1)?
        } else {
            index.checked_sub(1)?
        };
        outline.get(target).map(|entry| entry.node_id)
    }
}

/// `segment icon Kind label`, cut to `width` characters.
fn row_text(entry: &OutlineEntry, width: usize) -> String {
    let mut text = "  ".repeat(entry.depth);
    if let Some(segment) = &entry.segment {
        text.push_str(&segment.to_string());
        text.push(' ');
    }
    text.push_str(get_icon(entry.category));
    text.push(' ');
    text.push_str(&entry.kind);
    if !entry.label.is_empty() {
        text.push(' ');
        text.push_str(&entry.label);
    }
    if text.chars().count() > width {
        text = text.chars().take(width).collect();
    }
    text
}

impl Viewer for OutlineViewer {
    fn render(&self, frame: &mut Frame, area: Rect, model: &Model) {
        let outline = model.flattened_outline();
        let focused = model.focused();

        let lines: Vec<Line> = outline
            .iter()
            .map(|entry| {
                let text = row_text(entry, area.width as usize);
                let is_collapsed = !entry.is_expanded && entry.has_children;
                if Some(entry.node_id) == focused {
                    let text_color = if is_collapsed {
                        Color::Gray
                    } else {
                        Color::White
                    };
                    Line::from(text).style(
                        Style::default()
                            .bg(Color::Blue)
                            .fg(text_color)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if is_collapsed {
                    Line::from(text)
                        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM))
                } else if entry.category.is_none() {
                    Line::from(text).style(Style::default().fg(Color::Red))
                } else {
                    Line::from(text)
                }
            })
            .collect();

        let focus_row = outline
            .iter()
            .position(|entry| Some(entry.node_id) == focused);
        let offset = focus_row.map_or(0, |row| scroll_offset(row, area.height));
        frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
    }

    fn handle_key(&mut self, key: KeyEvent, model: &Model) -> Option<ViewerEvent> {
        let event = match key.code {
            KeyCode::Down => self.neighbour(model, true).map(ViewerEvent::SelectNode),
            KeyCode::Up => self.neighbour(model, false).map(ViewerEvent::SelectNode),
            KeyCode::Enter | KeyCode::Char(' ') => {
                model.focused().map(ViewerEvent::ToggleNodeExpansion)
            }
            code => key_direction(code).map(ViewerEvent::Move),
        };
        Some(event.unwrap_or(ViewerEvent::NoChange))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astedit_core::TreeLoader;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn model() -> Model {
        Model::new(
            TreeLoader::from_string(
                r#"{"type":"Program","sourceType":"script","body":[
                    {"type":"ExpressionStatement","expression":{"type":"Identifier","name":"first"}},
                    {"type":"ExpressionStatement","expression":{"type":"JSXElement"}}
                ]}"#,
            )
            .load()
            .unwrap(),
        )
    }

    fn rows(viewer: &OutlineViewer, model: &Model, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                viewer.render(frame, area, model);
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| {
                let mut line = String::new();
                for x in 0..width {
                    if let Some(cell) = buffer.cell((x, y)) {
                        line.push_str(cell.symbol());
                    }
                }
                line.trim_end().to_string()
            })
            .collect()
    }

    #[test]
    fn test_rows_show_segment_kind_and_label() {
        let rows = rows(&OutlineViewer::new(), &model(), 50, 6);
        assert_eq!(rows[0], "⧉ Program script");
        assert_eq!(rows[1], "  body[0] ¶ ExpressionStatement");
        assert_eq!(rows[2], "    expression ◇ Identifier first");
        assert_eq!(rows[4], "    expression ∅ JSXElement");
    }

    #[test]
    fn test_rows_are_cut_to_width() {
        for row in rows(&OutlineViewer::new(), &model(), 12, 6) {
            assert!(row.chars().count() <= 12, "{:?} is too wide", row);
        }
    }

    #[test]
    fn test_arrows_walk_visible_rows() {
        let mut model = model();
        let mut viewer = OutlineViewer::new();
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::empty());

        let Some(ViewerEvent::SelectNode(id)) = viewer.handle_key(down, &model) else {
            panic!("expected a row selection");
        };
        assert!(model.focus_node(id));
        assert_eq!(model.path().to_string(), "body[0]");

        let Some(ViewerEvent::SelectNode(id)) = viewer.handle_key(down, &model) else {
            panic!("expected a row selection");
        };
        assert!(model.focus_node(id));
        assert_eq!(model.path().to_string(), "body[0].expression");

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::empty());
        model.focus_node(model.tree().root());
        assert_eq!(viewer.handle_key(up, &model), Some(ViewerEvent::NoChange));
    }

    #[test]
    fn test_enter_toggles_focused_row() {
        let model = model();
        let mut viewer = OutlineViewer::new();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::empty());
        assert_eq!(
            viewer.handle_key(enter, &model),
            Some(ViewerEvent::ToggleNodeExpansion(model.tree().root()))
        );
    }
}
