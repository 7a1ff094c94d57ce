//! UI rendering logic
//!
//! Layout structure:
//! - Title bar (1 line, fixed)
//! - Middle section (responsive height):
//!   - Outline viewer (configured width)
//!   - Code viewer (remaining space)
//! - Status line (1 line, fixed)

use super::app::App;
use super::model::Focus;
use super::viewer::Viewer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 50;
/// Height of the status line
const STATUS_LINE_HEIGHT: u16 = 1;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App, input_name: &str) {
    let size = frame.area();

    if size.width < MIN_TERMINAL_WIDTH {
        render_error_too_narrow(frame, size);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(STATUS_LINE_HEIGHT),
        ])
        .split(size);

    render_title_bar(frame, chunks[0], input_name);
    render_middle_section(frame, chunks[1], app);
    render_status_line(frame, chunks[2], app);
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too narrow: {} < {} chars",
        area.width, MIN_TERMINAL_WIDTH
    );
    let paragraph =
        Paragraph::new(msg).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect, input_name: &str) {
    let title = format!("astedit:: {}", input_name);
    let paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_middle_section(frame: &mut Frame, area: Rect, app: &App) {
    // The code pane keeps at least half of the width.
    let outline_width = app.outline_width.min(area.width / 2);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(outline_width), Constraint::Min(1)])
        .split(area);

    render_pane(frame, chunks[0], "Outline", app.focus == Focus::OutlineViewer, |f, a| {
        app.outline_viewer.render(f, a, &app.model)
    });
    render_pane(frame, chunks[1], "Code", app.focus == Focus::CodeViewer, |f, a| {
        app.code_viewer.render(f, a, &app.model)
    });
}

fn render_pane(
    frame: &mut Frame,
    area: Rect,
    name: &str,
    has_focus: bool,
    content: impl FnOnce(&mut Frame, Rect),
) {
    let focus_indicator = if has_focus { " [FOCUSED]" } else { "" };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{}{}", name, focus_indicator));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);
    content(frame, inner_area);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let label = Style::default().fg(Color::Yellow);
    let mut spans = vec![
        Span::styled("Focus: ", label),
        Span::raw(app.model.path().to_string()),
    ];

    if let Some(node) = app.model.focused().and_then(|id| app.model.tree().get(id)) {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Node: ", label));
        spans.push(Span::raw(node.kind().to_string()));
    }

    if let Some(status) = &app.status {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            status.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_height_constant() {
        assert_eq!(STATUS_LINE_HEIGHT, 1);
    }

    #[test]
    fn test_min_terminal_width() {
        assert_eq!(MIN_TERMINAL_WIDTH, 50);
    }
}
