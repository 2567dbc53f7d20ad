use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum WatcherError {
    #[error("Failed to create watcher: {0}")]
    CreateError(#[from] notify::Error),

    #[error("Cannot watch {0}")]
    InvalidPath(PathBuf),
}

pub type WatcherResult<T> = Result<T, WatcherError>;

/// Watches a single file.
///
/// The parent directory is watched rather than the file itself, so editors
/// that save by writing a new file and renaming it over the old one are
/// still picked up.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<notify::Result<Event>>,
    file_name: PathBuf,
}

impl FileWatcher {
    pub fn new(path: &Path) -> WatcherResult<Self> {
        let file_name = path
            .file_name()
            .map(PathBuf::from)
            .ok_or_else(|| WatcherError::InvalidPath(path.to_path_buf()))?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            file_name,
        })
    }

    /// Block until the watched file changes. `None` once the watcher is gone.
    pub fn next_change(&self) -> Option<Event> {
        loop {
            match self.receiver.recv() {
                Ok(Ok(event)) if self.concerns_file(&event) => return Some(event),
                Ok(Ok(_)) => continue,
                Ok(Err(e)) => warn!(error = %e, "File watch error"),
                Err(_) => return None,
            }
        }
    }

    /// Like [`FileWatcher::next_change`] but gives up after `timeout`
    pub fn next_change_timeout(&self, timeout: Duration) -> Option<Event> {
        loop {
            match self.receiver.recv_timeout(timeout) {
                Ok(Ok(event)) if self.concerns_file(&event) => return Some(event),
                Ok(Ok(_)) => continue,
                Ok(Err(e)) => warn!(error = %e, "File watch error"),
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => return None,
            }
        }
    }

    /// Discard events already queued (one save often fires several)
    pub fn drain(&self) -> usize {
        self.receiver.try_iter().count()
    }

    fn concerns_file(&self, event: &Event) -> bool {
        event
            .paths
            .iter()
            .any(|path| path.file_name() == Some(self.file_name.as_os_str()))
    }
}
