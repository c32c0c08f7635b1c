//! Persisted configuration file source

use crate::error::Result;
use crate::source::Source;
use stackcfg_store::Repository;
use std::path::PathBuf;

/// Reads a JSON, YAML or TOML file as a configuration source.
///
/// A missing file is an error unless the source was built with
/// [`FileSource::optional`].
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    required: bool,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    /// A source that reads as empty when the file does not exist.
    pub fn optional(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: false,
        }
    }
}

impl Source for FileSource {
    fn read(&self) -> Result<Repository> {
        if !self.required && !self.path.is_file() {
            tracing::debug!(path = ?self.path, "No configuration file found, skipping");
            return Ok(Repository::new());
        }
        Ok(Repository::load(&self.path)?)
    }
}
