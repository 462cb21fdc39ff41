//! File-backed append-only queue for token alerts.
//!
//! One JSON object per line; enqueue appends under a lock, dequeue drains
//! the whole file and truncates it. A missing file just means an empty
//! queue.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::warn;

use super::types::TokenAlert;

/// A queued alert with its enqueue timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedTokenAlert {
    #[serde(flatten)]
    pub alert: TokenAlert,
    /// ISO-8601 UTC enqueue time.
    pub timestamp: String,
}

pub struct FileQueue {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileQueue {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Append one alert, stamped with the current UTC time.
    pub async fn enqueue(&self, alert: TokenAlert) -> Result<()> {
        let entry = QueuedTokenAlert {
            alert,
            timestamp: Utc::now().to_rfc3339(),
        };
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let _guard = self.lock.lock().await;

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open queue file {}", self.path.display()))?;

        file.write_all(line.as_bytes())
            .await
            .context("Failed to append to queue file")?;
        file.flush().await.context("Failed to flush queue file")?;

        Ok(())
    }

    /// Drain all queued entries and truncate the file.
    ///
    /// Lines that fail to parse are skipped with a warning rather than
    /// poisoning the whole drain.
    pub async fn dequeue_all(&self) -> Result<Vec<QueuedTokenAlert>> {
        let _guard = self.lock.lock().await;

        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read queue file {}", self.path.display())
                })
            }
        };

        let entries = contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match serde_json::from_str(line) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "Skipping malformed queue entry");
                    None
                }
            })
            .collect();

        tokio::fs::write(&self.path, b"")
            .await
            .context("Failed to truncate queue file")?;

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(symbol: &str) -> TokenAlert {
        TokenAlert {
            chain: 1,
            amount: 1000,
            token_name: "Pepe".to_string(),
            token_address: "0xabc".to_string(),
            token_symbol: symbol.to_string(),
            fdv: 1_000_000.0,
        }
    }

    #[tokio::test]
    async fn dequeue_on_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let queue = FileQueue::new(dir.path().join("alpha_queue.jsonl"));

        assert!(queue.dequeue_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn enqueue_then_drain_preserves_order_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let queue = FileQueue::new(dir.path().join("alpha_queue.jsonl"));

        queue.enqueue(alert("pepe")).await.unwrap();
        queue.enqueue(alert("doge")).await.unwrap();

        let drained = queue.dequeue_all().await.unwrap();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].alert.token_symbol, "pepe");
        assert_eq!(drained[1].alert.token_symbol, "doge");
        assert!(!drained[0].timestamp.is_empty());

        assert!(queue.dequeue_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha_queue.jsonl");
        let queue = FileQueue::new(&path);

        queue.enqueue(alert("pepe")).await.unwrap();
        {
            use std::io::Write;
            let mut file = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
            writeln!(file, "{{broken").unwrap();
        }
        queue.enqueue(alert("doge")).await.unwrap();

        let drained = queue.dequeue_all().await.unwrap();
        assert_eq!(drained.len(), 2);
    }
}
