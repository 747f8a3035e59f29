use crate::constants::LIBRARY_FILE;
use crate::models::SavedRequest;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Flat-file store of saved requests
///
/// The file holds a JSON array. It is re-read on every load and rewritten
/// in full on every save; there is no locking or atomic replace.
#[derive(Clone, Debug)]
pub struct RequestLibrary {
    path: PathBuf,
}

impl RequestLibrary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RequestLibrary { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every saved request; a missing or unreadable file is an empty library
    pub fn load_all(&self) -> Vec<SavedRequest> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "Library not readable");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<SavedRequest>>(&content) {
            Ok(requests) => requests,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "Library not parseable");
                Vec::new()
            }
        }
    }

    /// Overwrite the file with the full sequence
    pub fn save_all(&self, requests: &[SavedRequest]) -> Result<()> {
        let content = serde_json::to_string_pretty(requests)?;
        fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    /// Append one entry to whatever is currently on disk
    pub fn append(&self, request: SavedRequest) -> Result<()> {
        let mut requests = self.load_all();
        requests.push(request);
        self.save_all(&requests)
    }
}

impl Default for RequestLibrary {
    fn default() -> Self {
        Self::new(LIBRARY_FILE)
    }
}
