use std::path::PathBuf;

use anyhow::Context as _;

use crate::foundation::error::{FilterBoothError, FilterBoothResult};

/// Destination for finished downloads.
///
/// `save` receives the suggested file name and the encoded bytes, and returns a human-readable
/// location for the saved file.
pub trait DownloadSink {
    /// Store `bytes` under `file_name`.
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> FilterBoothResult<String>;
}

/// Writes downloads into a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    overwrite: bool,
}

impl DirectorySink {
    /// Sink writing into `dir`, which is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            overwrite: true,
        }
    }

    /// Refuse to replace existing files.
    pub fn no_overwrite(mut self) -> Self {
        self.overwrite = false;
        self
    }
}

impl DownloadSink for DirectorySink {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> FilterBoothResult<String> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            return Err(FilterBoothError::validation(format!(
                "invalid download file name '{file_name}'"
            )));
        }
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create download dir '{}'", self.dir.display()))?;

        let path = self.dir.join(file_name);
        if !self.overwrite && path.exists() {
            return Err(FilterBoothError::validation(format!(
                "'{}' already exists",
                path.display()
            )));
        }
        std::fs::write(&path, bytes).with_context(|| format!("write '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "download saved");
        Ok(path.display().to_string())
    }
}

/// A download captured by [`InMemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Suggested file name.
    pub file_name: String,
    /// Encoded file contents.
    pub bytes: Vec<u8>,
}

/// In-memory sink for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySink {
    /// Downloads in the order they were saved.
    pub downloads: Vec<Download>,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent download.
    pub fn last(&self) -> Option<&Download> {
        self.downloads.last()
    }
}

impl DownloadSink for InMemorySink {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> FilterBoothResult<String> {
        self.downloads.push(Download {
            file_name: file_name.to_owned(),
            bytes: bytes.to_vec(),
        });
        Ok(format!("memory:{file_name}"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/sink.rs"]
mod tests;
