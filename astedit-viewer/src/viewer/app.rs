//! Application state and key dispatch
//!
//! App owns the model and both panes. Global keys (quit, pane switch, reload) are handled
//! here; everything else goes to the pane with keyboard focus, whose [ViewerEvent] is then
//! applied to the model.

use super::codeviewer::CodeViewer;
use super::model::{Focus, Model};
use super::outlineviewer::OutlineViewer;
use super::viewer::{Viewer, ViewerEvent};
use astedit_config::AsteditConfig;
use astedit_core::{SyntaxTree, TreeLoader};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

pub struct App {
    pub model: Model,
    pub focus: Focus,
    pub code_viewer: CodeViewer,
    pub outline_viewer: OutlineViewer,
    pub outline_width: u16,
    pub should_quit: bool,
    /// One-line message for the status bar.
    pub status: Option<String>,
    /// File to reread on `r`; streams and in-memory trees have none.
    source: Option<PathBuf>,
    snapshots: usize,
}

impl App {
    pub fn new(model: Model, config: &AsteditConfig) -> Self {
        let focus = if config.viewer.start_in_outline {
            Focus::OutlineViewer
        } else {
            Focus::CodeViewer
        };
        App {
            model,
            focus,
            code_viewer: CodeViewer::new(config.formats.text.indent_string.clone()),
            outline_viewer: OutlineViewer::new(),
            outline_width: config.viewer.outline_width,
            should_quit: false,
            status: None,
            source: None,
            snapshots: 0,
        }
    }

    pub fn with_source(mut self, path: PathBuf) -> Self {
        self.source = Some(path);
        self
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ViewerEvent {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return ViewerEvent::NoChange;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return ViewerEvent::NoChange;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                return ViewerEvent::NoChange;
            }
            KeyCode::Char('r') => {
                self.reload();
                return ViewerEvent::NoChange;
            }
            _ => {}
        }

        let event = match self.focus {
            Focus::CodeViewer => self.code_viewer.handle_key(key, &self.model),
            Focus::OutlineViewer => self.outline_viewer.handle_key(key, &self.model),
        }
        .unwrap_or(ViewerEvent::NoChange);
        self.apply(event);
        event
    }

    fn apply(&mut self, event: ViewerEvent) {
        match event {
            ViewerEvent::Move(direction) => {
                if self.model.apply(direction) {
                    self.status = None;
                } else {
                    self.status = Some(format!("cannot move {} from here", direction));
                }
            }
            ViewerEvent::SelectNode(node_id) => {
                self.model.focus_node(node_id);
                self.status = None;
            }
            ViewerEvent::ToggleNodeExpansion(node_id) => {
                self.model.toggle_node_expansion(node_id);
            }
            ViewerEvent::NoChange => {}
        }
    }

    /// Reread the source file. A file that no longer loads leaves the current tree in place.
    pub fn reload(&mut self) {
        let Some(path) = &self.source else {
            self.status = Some("nothing to reload".to_string());
            return;
        };
        match TreeLoader::from_path(path).and_then(TreeLoader::load) {
            Ok(tree) => {
                tracing::info!(path = %path.display(), nodes = tree.len(), "reloaded");
                self.model.replace_tree(tree);
                self.status = Some("reloaded".to_string());
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "reload failed");
                self.status = Some(format!("reload failed: {}", err));
            }
        }
    }

    /// A new snapshot replaces the tree wholesale and puts the focus back on the root.
    pub fn on_snapshot(&mut self, tree: SyntaxTree) {
        self.snapshots += 1;
        self.model.replace_tree(tree);
        self.status = Some(format!("snapshot {}", self.snapshots));
    }
}
