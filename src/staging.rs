//! Staging store for generated summary documents
//!
//! Generated files live under a single staging directory, keyed by their
//! UUID filename. A file is served at most once: the download path streams
//! it to the caller's sink and deletes it after the stream drains. Files
//! that are never downloaded stay behind; no sweeper runs here.

use crate::error::Result;
use std::path::{Component, Path, PathBuf};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Content type and suggested download name for a served file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Always `application/pdf`
    pub content_type: &'static str,
    /// Suggested attachment filename (`bukti-potong-pajak-<id>`)
    pub file_name: String,
}

/// Filesystem staging area for generated documents.
#[derive(Debug, Clone)]
pub struct StagingStore {
    dir: PathBuf,
}

impl StagingStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The staging directory this store reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve an identifier to its staging path.
    ///
    /// Identifiers must be a single bare filename segment; anything carrying
    /// a separator or traversal component resolves to nothing, so a hostile
    /// identifier can never reach outside the staging directory.
    fn entry_path(&self, file_name: &str) -> Option<PathBuf> {
        if file_name.is_empty() {
            return None;
        }
        let mut components = Path::new(file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Some(self.dir.join(file_name)),
            _ => None,
        }
    }

    /// Whether a staged file exists for this identifier.
    pub fn exists(&self, file_name: &str) -> bool {
        self.entry_path(file_name)
            .is_some_and(|path| path.is_file())
    }

    /// Stream a staged file into `sink`, then delete it.
    ///
    /// Returns `Ok(None)` when no file exists for the identifier - including
    /// the case where a concurrent serve consumed it first. On a hit, the
    /// bytes are copied into the sink with backpressure; once the copy
    /// future resolves (drained or aborted by the sink) the file is removed,
    /// exactly once and best-effort, before any I/O error is propagated.
    pub async fn serve<W>(&self, file_name: &str, sink: &mut W) -> Result<Option<Download>>
    where
        W: AsyncWrite + Unpin,
    {
        let Some(path) = self.entry_path(file_name) else {
            return Ok(None);
        };

        let mut file = match tokio::fs::File::open(&path).await {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let copied = tokio::io::copy(&mut file, sink).await;

        // The deletion side effect fires after the stream is drained,
        // whether the copy succeeded or the client aborted. Non-blocking
        // here; the sync remove below is for hosts outside the runtime.
        drop(file);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(file = %file_name, error = %e, "failed to remove staged file");
            }
        }

        let bytes = copied?;
        sink.flush().await?;

        tracing::debug!(file = %file_name, bytes, "served staged document");

        Ok(Some(Download {
            content_type: "application/pdf",
            file_name: format!("bukti-potong-pajak-{}", file_name),
        }))
    }

    /// Delete a staged file. Idempotent: a missing file is a no-op, and
    /// other failures are logged and swallowed - cleanup must not disturb
    /// data already delivered to the client.
    pub fn remove(&self, file_name: &str) {
        let Some(path) = self.entry_path(file_name) else {
            return;
        };
        match std::fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(file = %file_name, error = %e, "failed to remove staged file");
            }
        }
    }
}
