//! Viewer trait, input sources and the terminal event loop

use super::app::App;
use super::model::Model;
use super::ui;
use astedit_config::AsteditConfig;
use astedit_core::{Direction, LoaderError, NodeId, SnapshotStream, TreeLoader};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// What a viewer asks the app to do after handling a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    /// Move the focus through the tree
    Move(Direction),
    /// Focus a node picked from the outline
    SelectNode(NodeId),
    /// Expand or collapse an outline row
    ToggleNodeExpansion(NodeId),
    NoChange,
}

/// A pane of the UI
pub trait Viewer {
    fn render(&self, frame: &mut Frame, area: Rect, model: &Model);
    fn handle_key(&mut self, key: KeyEvent, model: &Model) -> Option<ViewerEvent>;
}

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
    #[error("{0}")]
    Load(#[from] LoaderError),
}

/// Where trees come from.
pub enum Input {
    /// A single JSON tree, reloadable with `r`.
    File(PathBuf),
    /// Newline-delimited snapshots; each one replaces the tree.
    Stream { name: String, stream: SnapshotStream },
}

impl Input {
    pub fn stdin() -> Input {
        Input::Stream {
            name: "<stdin>".to_string(),
            stream: SnapshotStream::stdin(),
        }
    }

    pub fn follow(path: PathBuf) -> io::Result<Input> {
        let reader = BufReader::new(File::open(&path)?);
        Ok(Input::Stream {
            name: path.display().to_string(),
            stream: SnapshotStream::spawn(reader),
        })
    }

    fn name(&self) -> String {
        match self {
            Input::File(path) => path.display().to_string(),
            Input::Stream { name, .. } => name.clone(),
        }
    }
}

/// The structural move bound to a key, in both panes: `h`/`←` up, `l`/`→` down,
/// `j` next, `k` prev.
pub fn key_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left => Some(Direction::Up),
        KeyCode::Right => Some(Direction::Down),
        KeyCode::Char(c @ ('h' | 'j' | 'k' | 'l')) => c.to_string().parse().ok(),
        _ => None,
    }
}

/// First row to show so that `row` stays on screen, roughly centred once it would
/// otherwise fall off the bottom.
pub fn scroll_offset(row: usize, height: u16) -> u16 {
    let height = usize::from(height);
    if row < height {
        0
    } else {
        u16::try_from(row - height / 2).unwrap_or(u16::MAX)
    }
}

/// Run the viewer until the user quits.
pub fn run_viewer(input: Input, config: &AsteditConfig) -> Result<(), ViewerError> {
    let name = input.name();
    let (model, source, stream) = match input {
        Input::File(path) => {
            let tree = TreeLoader::from_path(&path)?.load()?;
            (Model::new(tree), Some(path), None)
        }
        Input::Stream { stream, .. } => (Model::default(), None, Some(stream)),
    };
    let mut app = App::new(model, config);
    if let Some(path) = source {
        app = app.with_source(path);
    }
    tracing::info!(input = %name, "starting viewer");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.viewer.tick_rate_ms);
    let result = run_app(&mut terminal, &mut app, stream.as_ref(), &name, tick_rate);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    stream: Option<&SnapshotStream>,
    name: &str,
    tick_rate: Duration,
) -> Result<(), ViewerError> {
    loop {
        if let Some(tree) = stream.and_then(SnapshotStream::try_latest) {
            app.on_snapshot(tree);
        }

        terminal.draw(|frame| ui::render(frame, app, name))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vim_keys_map_to_moves() {
        assert_eq!(key_direction(KeyCode::Char('h')), Some(Direction::Up));
        assert_eq!(key_direction(KeyCode::Char('l')), Some(Direction::Down));
        assert_eq!(key_direction(KeyCode::Char('j')), Some(Direction::Next));
        assert_eq!(key_direction(KeyCode::Char('k')), Some(Direction::Prev));
        assert_eq!(key_direction(KeyCode::Left), Some(Direction::Up));
        assert_eq!(key_direction(KeyCode::Right), Some(Direction::Down));
        assert_eq!(key_direction(KeyCode::Char('x')), None);
        assert_eq!(key_direction(KeyCode::Tab), None);
    }

    #[test]
    fn test_scroll_keeps_row_visible() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 5);
        assert_eq!(scroll_offset(40, 10), 35);
        assert_eq!(scroll_offset(3, 0), 3);
    }
}
