//! Plain-text allowed-list store.
//!
//! One SSID per line, no header, no escaping. The file is rewritten as a
//! whole on every save.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::AllowedEntry;
use crate::error::{Error, Result};
use crate::ports::AllowedListRepository;

/// File name used when no path is configured.
pub const DEFAULT_FILE_NAME: &str = "allowed_ssids.txt";

/// File-backed store for the allowed SSIDs.
pub struct AllowedListStore {
    path: PathBuf,
}

impl AllowedListStore {
    /// Create a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Turn file contents into entries: trimmed, blank lines and repeats dropped.
fn parse_entries(content: &str) -> Vec<AllowedEntry> {
    let mut seen = HashSet::new();
    content
        .lines()
        .map(str::trim)
        .filter(|ssid| !ssid.is_empty())
        .filter(|ssid| seen.insert(ssid.to_string()))
        .map(AllowedEntry::new)
        .collect()
}

fn render_entries(entries: &[AllowedEntry]) -> String {
    entries.iter().map(|e| format!("{}\n", e.ssid)).collect()
}

impl AllowedListRepository for AllowedListStore {
    async fn load(&self) -> Result<Vec<AllowedEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            Error::Persistence(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        Ok(parse_entries(&content))
    }

    async fn save(&self, entries: &[AllowedEntry]) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                fs::create_dir_all(dir).await.map_err(|e| {
                    Error::Persistence(format!("Failed to create {}: {}", dir.display(), e))
                })?;
            }
        }

        // Write to a temp file then rename so a crash never leaves half a list
        let temp_path = self.path.with_extension("txt.tmp");

        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            Error::Persistence(format!("Failed to create {}: {}", temp_path.display(), e))
        })?;

        file.write_all(render_entries(entries).as_bytes())
            .await
            .map_err(|e| Error::Persistence(format!("Failed to write allowed list: {}", e)))?;

        file.sync_all()
            .await
            .map_err(|e| Error::Persistence(format!("Failed to sync allowed list: {}", e)))?;

        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            Error::Persistence(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}
