//! Snapshot streams
//!
//! A parsing process can feed trees continuously, one JSON document per line. Lines are read
//! and decoded on a background thread and handed over a channel. Each snapshot replaces the
//! previous one wholesale; nothing is diffed.

use super::{LoaderError, TreeLoader};
use crate::estree::SyntaxTree;
use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

pub struct SnapshotStream {
    receiver: Receiver<Result<SyntaxTree, LoaderError>>,
}

impl SnapshotStream {
    /// Start reading newline-delimited JSON trees from `reader`.
    ///
    /// The reader thread ends at end of input, on a read error, or once the stream is dropped.
    pub fn spawn<R>(reader: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            for (number, line) in reader.lines().enumerate() {
                let snapshot = match line {
                    Ok(line) if line.trim().is_empty() => continue,
                    Ok(line) => TreeLoader::from_string(line).load(),
                    Err(err) => {
                        let _ = sender.send(Err(LoaderError::Io(err)));
                        break;
                    }
                };
                if let Ok(tree) = &snapshot {
                    tracing::info!(line = number + 1, nodes = tree.len(), "snapshot received");
                }
                if sender.send(snapshot).is_err() {
                    break;
                }
            }
            tracing::debug!("snapshot input closed");
        });
        SnapshotStream { receiver }
    }

    /// Snapshots from standard input.
    pub fn stdin() -> Self {
        Self::spawn(std::io::BufReader::new(std::io::stdin()))
    }

    /// Drain everything that has arrived and return the newest valid tree, if any.
    /// Snapshots that failed to decode are logged and skipped.
    pub fn try_latest(&self) -> Option<SyntaxTree> {
        let mut latest = None;
        loop {
            match self.receiver.try_recv() {
                Ok(Ok(tree)) => latest = Some(tree),
                Ok(Err(err)) => tracing::warn!(error = %err, "discarding snapshot"),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return latest,
            }
        }
    }
}

impl Iterator for SnapshotStream {
    type Item = Result<SyntaxTree, LoaderError>;

    /// Block until the next snapshot arrives. `None` once the input is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        self.receiver.recv().ok()
    }
}
