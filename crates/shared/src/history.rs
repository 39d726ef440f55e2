//! Continue-watching list.
//!
//! A small most-recent-first list keyed by anime slug, persisted as a JSON
//! array in a single file. Entries are upserted by slug and the list is capped.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default number of entries kept
pub const DEFAULT_CAPACITY: usize = 20;

/// One stored continue-watching entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueWatchingItem {
    pub anime_slug: String,
    pub anime_title: String,
    pub episode_slug: String,
    pub episode_title: String,
    pub thumbnail: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

/// Entry to record; the timestamp is stamped on insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewContinueWatchingItem {
    pub anime_slug: String,
    pub anime_title: String,
    pub episode_slug: String,
    pub episode_title: String,
    pub thumbnail: String,
    pub progress: Option<f64>,
}

impl NewContinueWatchingItem {
    fn stamp(self, timestamp: i64) -> ContinueWatchingItem {
        ContinueWatchingItem {
            anime_slug: self.anime_slug,
            anime_title: self.anime_title,
            episode_slug: self.episode_slug,
            episode_title: self.episode_title,
            thumbnail: self.thumbnail,
            timestamp,
            progress: self.progress,
        }
    }
}

/// File-backed continue-watching store
pub struct ContinueWatchingStore {
    path: PathBuf,
    capacity: usize,
}

impl ContinueWatchingStore {
    /// Create a store backed by `path`, keeping at most `capacity` entries
    pub fn new(path: impl AsRef<Path>, capacity: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            capacity,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored entries, most recent first.
    ///
    /// A missing or unreadable file yields an empty list.
    pub fn list(&self) -> Vec<ContinueWatchingItem> {
        if !self.path.exists() {
            return Vec::new();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read continue-watching list");
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(items) => items,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Corrupt continue-watching list, ignoring");
                Vec::new()
            }
        }
    }

    /// Record an entry, stamping it with the current time
    pub fn add(&self, item: NewContinueWatchingItem) -> Result<()> {
        self.add_at(item, Utc::now().timestamp_millis())
    }

    /// Record an entry with an explicit timestamp.
    ///
    /// An existing entry for the same anime is replaced in place; a new one is
    /// inserted at the front. The list is then truncated to the capacity.
    pub fn add_at(&self, item: NewContinueWatchingItem, timestamp: i64) -> Result<()> {
        let mut items = self.list();
        let entry = item.stamp(timestamp);

        match items.iter().position(|i| i.anime_slug == entry.anime_slug) {
            Some(index) => {
                debug!(anime_slug = %entry.anime_slug, index, "Updating continue-watching entry");
                items[index] = entry;
            }
            None => {
                debug!(anime_slug = %entry.anime_slug, "Adding continue-watching entry");
                items.insert(0, entry);
            }
        }

        items.truncate(self.capacity);
        self.write(&items)
    }

    /// Remove the entry for an anime, if any
    pub fn remove(&self, anime_slug: &str) -> Result<()> {
        let mut items = self.list();
        items.retain(|i| i.anime_slug != anime_slug);
        self.write(&items)
    }

    /// Delete the whole list
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).with_context(|| {
                format!("Failed to remove continue-watching file: {}", self.path.display())
            })?;
            info!("Continue-watching list cleared");
        }
        Ok(())
    }

    fn write(&self, items: &[ContinueWatchingItem]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(items)
            .context("Failed to serialize continue-watching list")?;

        std::fs::write(&self.path, content).with_context(|| {
            format!("Failed to write continue-watching file: {}", self.path.display())
        })?;

        Ok(())
    }
}
