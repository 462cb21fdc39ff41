//! Durable query cache.
//!
//! Maps normalized query text to a previously resolved (intent, params)
//! pair so repeated queries skip the model entirely. The whole cache lives
//! in memory and is rewritten to a JSON object file on every insert; the
//! file is written to a temp path and renamed so a concurrent reader never
//! observes a torn file.
//!
//! Cache I/O is never fatal: an unreadable file at startup yields an empty
//! cache, and a failed persist still leaves the in-memory entry usable for
//! the current process.

use std::collections::HashMap;
use std::path::PathBuf;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::intent::{Intent, Params};

type Entries = HashMap<String, (Intent, Params)>;

pub struct QueryCache {
    path: PathBuf,
    entries: Mutex<Entries>,
}

impl QueryCache {
    /// Load the cache from disk, starting empty when the file is missing
    /// or unreadable.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<Entries>(&bytes) {
                Ok(entries) => {
                    debug!(count = entries.len(), path = %path.display(), "Query cache loaded");
                    entries
                }
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "Query cache file corrupt, starting empty");
                    Entries::new()
                }
            },
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Query cache file not found, starting empty");
                Entries::new()
            }
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// Look up a normalized query.
    pub async fn get(&self, normalized: &str) -> Option<(Intent, Params)> {
        self.entries.lock().await.get(normalized).cloned()
    }

    /// Insert an entry and rewrite the backing file.
    ///
    /// The mutex is held across the read-modify-persist cycle so concurrent
    /// writers cannot interleave. A persist failure is logged and swallowed;
    /// the in-memory entry stays valid for this process run.
    pub async fn put(&self, normalized: String, intent: Intent, params: Params) {
        let mut entries = self.entries.lock().await;
        entries.insert(normalized, (intent, params));

        if let Err(e) = self.persist(&entries).await {
            warn!(error = %e, path = %self.path.display(), "Failed to persist query cache");
        }
    }

    /// Number of cached queries.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    async fn persist(&self, entries: &Entries) -> anyhow::Result<()> {
        let bytes = serde_json::to_vec(entries)?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &bytes).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: serde_json::Value) -> Params {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = QueryCache::load(dir.path().join("query_cache.json")).await;

        assert_eq!(cache.len().await, 0);
        assert!(cache.get("top gainers").await.is_none());
    }

    #[tokio::test]
    async fn put_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("query_cache.json");

        let cache = QueryCache::load(&path).await;
        cache
            .put(
                "show me top gainers today".to_string(),
                Intent::TopGainers,
                params(json!({"period": "day"})),
            )
            .await;

        let reloaded = QueryCache::load(&path).await;
        let (intent, p) = reloaded.get("show me top gainers today").await.unwrap();
        assert_eq!(intent, Intent::TopGainers);
        assert_eq!(p.get("period"), Some(&json!("day")));
    }

    #[tokio::test]
    async fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("query_cache.json");
        std::fs::write(&path, b"{not json").unwrap();

        let cache = QueryCache::load(&path).await;
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn persist_failure_keeps_in_memory_entry() {
        // Point the cache at a directory that does not exist so the rename fails.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("query_cache.json");

        let cache = QueryCache::load(&path).await;
        cache
            .put("gm".to_string(), Intent::Greeting, Params::new())
            .await;

        let (intent, _) = cache.get("gm").await.unwrap();
        assert_eq!(intent, Intent::Greeting);
    }
}
