//! Writer session: one process run saving plots under one time bucket.

use std::path::Path;

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{COMMENT_NAME, DEFAULT_CONTAINER_FILE, TAG_NAME};
use crate::plot::Plot;
use crate::storage::{Container, NamespaceId, OpenMode, StorageError};

/// Errors that can occur in a writer session.
#[derive(Error, Debug)]
pub enum WriterError {
    /// Storage-related errors.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Plot serialization error.
    #[error("Plot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for writer operations.
pub type WriterResult<T> = std::result::Result<T, WriterError>;

/// Derives the namespace key for a session started at `now`.
///
/// Minutes and below are zeroed, so every save within the same hour lands
/// in the same bucket. The format sorts chronologically and contains no
/// characters that are awkward in file paths.
pub(crate) fn bucket_key(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d_%H-00-00").to_string()
}

/// Append-mode session against a container file.
///
/// Opening a writer resolves (or lazily creates) the namespace for the
/// current time bucket; `save`, `comment`, and `tag` all write into that
/// namespace. `close` consumes the writer, so a released session cannot be
/// written to.
///
/// Failing to open the container is fatal and surfaced immediately; there
/// is no retry.
pub struct PlotWriter {
    container: Container,
    namespace: NamespaceId,
    key: String,
}

impl PlotWriter {
    /// Opens `path` in append mode, creating the container if needed.
    pub fn open(path: impl AsRef<Path>) -> WriterResult<Self> {
        let container = Container::open(path, OpenMode::Append)?;
        Self::start_session(container, Local::now())
    }

    /// Opens the default container file in the working directory.
    pub fn open_default() -> WriterResult<Self> {
        Self::open(DEFAULT_CONTAINER_FILE)
    }

    fn start_session(container: Container, now: DateTime<Local>) -> WriterResult<Self> {
        let key = bucket_key(now);
        let namespace = container.ensure_namespace(&key)?;
        info!(%key, "opened writer session");
        Ok(Self { container, namespace, key })
    }

    /// The namespace key this session writes under.
    pub fn namespace_key(&self) -> &str {
        &self.key
    }

    /// Saves `plot` under its own intrinsic name.
    ///
    /// Saving the same name again appends a revision; readers see the
    /// newest one.
    pub fn save(&mut self, plot: &Plot) -> WriterResult<()> {
        let name = plot.name.clone();
        self.save_as(plot, &name)
    }

    /// Saves `plot` under an explicit object name.
    pub fn save_as(&mut self, plot: &Plot, name: &str) -> WriterResult<()> {
        let payload = serde_json::to_string(plot)?;
        let cycle = self.container.write_object(self.namespace, name, &payload)?;
        debug!(name, cycle, "saved plot");
        Ok(())
    }

    /// Writes or overwrites this session's comment.
    pub fn comment(&mut self, text: &str) -> WriterResult<()> {
        self.container.write_object(self.namespace, COMMENT_NAME, text)?;
        Ok(())
    }

    /// Writes or overwrites this session's tag.
    ///
    /// An empty message still marks the session as tagged; readers
    /// distinguish "tag present" from "tag has text".
    pub fn tag(&mut self, message: &str) -> WriterResult<()> {
        self.container.write_object(self.namespace, TAG_NAME, message)?;
        Ok(())
    }

    /// Releases the container file.
    ///
    /// Valid even if nothing was ever saved; an empty namespace is a
    /// legitimate session.
    pub fn close(self) -> WriterResult<()> {
        self.container.close()?;
        Ok(())
    }
}
