//! Offline copy of the menu sheet
//!
//! Every successful fetch is stored on disk. When the network is unavailable
//! the last stored copy is served instead, so the menu still renders offline.

use crate::error::{MenuError, Result};
use crate::source::MenuSource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Metadata stored next to a cached sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheMeta {
    pub source: String,
    pub fetched_at: DateTime<Utc>,
    pub bytes: usize,
}

/// Directory holding cached sheet copies, one per source
pub struct OfflineCache {
    cache_dir: PathBuf,
}

impl OfflineCache {
    /// Create a cache rooted at `cache_dir`, creating the directory if needed
    pub fn new(cache_dir: &Path) -> Self {
        if let Err(e) = std::fs::create_dir_all(cache_dir) {
            log::warn!("Failed to create offline cache directory: {}", e);
        } else {
            log::debug!("Offline cache directory: {:?}", cache_dir);
        }

        Self {
            cache_dir: cache_dir.to_path_buf(),
        }
    }

    /// Default location: ~/.cache/pour_over_menu
    pub fn default_dir() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pour_over_menu")
    }

    fn sheet_path(&self, source: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.csv", cache_key(source)))
    }

    fn meta_path(&self, source: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", cache_key(source)))
    }

    pub fn contains(&self, source: &str) -> bool {
        self.sheet_path(source).exists()
    }

    /// Cached sheet text for a source
    pub fn get(&self, source: &str) -> Option<String> {
        match std::fs::read_to_string(self.sheet_path(source)) {
            Ok(text) => {
                log::debug!("Offline cache hit for {}", source);
                Some(text)
            }
            Err(_) => None,
        }
    }

    pub fn get_meta(&self, source: &str) -> Option<CacheMeta> {
        let json = std::fs::read_to_string(self.meta_path(source)).ok()?;
        match serde_json::from_str(&json) {
            Ok(meta) => Some(meta),
            Err(e) => {
                log::warn!("Failed to parse cache metadata for {}: {}", source, e);
                None
            }
        }
    }

    /// Store a fresh copy of a sheet. Write failures are logged, not returned.
    pub fn insert(&self, source: &str, text: &str) {
        if let Err(e) = self.try_insert(source, text) {
            log::warn!("Failed to cache sheet from {}: {}", source, e);
        } else {
            log::debug!("Cached {} bytes from {}", text.len(), source);
        }
    }

    fn try_insert(&self, source: &str, text: &str) -> Result<()> {
        std::fs::write(self.sheet_path(source), text)?;
        let meta = CacheMeta {
            source: source.to_string(),
            fetched_at: Utc::now(),
            bytes: text.len(),
        };
        std::fs::write(self.meta_path(source), serde_json::to_string_pretty(&meta)?)?;
        Ok(())
    }
}

/// Readable part of a cache file name
const KEY_PREFIX_LEN: usize = 48;

/// File-name-safe key for a source location: a readable prefix plus a
/// digest of the full location, so distinct sources never share files
fn cache_key(source: &str) -> String {
    let prefix: String = source
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .take(KEY_PREFIX_LEN)
        .collect();

    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    let digest = hex::encode(&hasher.finalize()[..8]);

    if prefix.is_empty() {
        format!("sheet_{}", digest)
    } else {
        format!("{}_{}", prefix, digest)
    }
}

/// A source that falls back to the offline cache when the live fetch fails
pub struct CachedSource<S> {
    inner: S,
    cache: OfflineCache,
}

impl<S: MenuSource + Sync> CachedSource<S> {
    pub fn new(inner: S, cache: OfflineCache) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &OfflineCache {
        &self.cache
    }
}

impl<S: MenuSource + Sync> MenuSource for CachedSource<S> {
    fn describe(&self) -> String {
        self.inner.describe()
    }

    async fn fetch_text(&self) -> Result<String> {
        let key = self.inner.describe();

        match self.inner.fetch_text().await {
            Ok(text) => {
                self.cache.insert(&key, &text);
                Ok(text)
            }
            Err(e) => {
                let Some(text) = self.cache.get(&key) else {
                    return Err(e);
                };
                match self.cache.get_meta(&key) {
                    Some(meta) => log::warn!(
                        "Fetch from {} failed ({}), serving offline copy from {}",
                        key,
                        e,
                        meta.fetched_at
                    ),
                    None => log::warn!("Fetch from {} failed ({}), serving offline copy", key, e),
                }
                Ok(text)
            }
        }
    }
}

/// Serve only what the cache holds, without touching the network
pub fn cached_only(cache: &OfflineCache, source: &str) -> Result<String> {
    cache
        .get(source)
        .ok_or_else(|| MenuError::Cache(format!("no offline copy for {}", source)))
}
