//! # veritas-bench
//!
//! Append-only JSON-lines benchmark store. One serialized
//! [`BenchmarkRecord`] per line; records are never mutated after append.
//!
//! In-process writers serialize through a single mutex, giving
//! at-least-once durability within one process. Concurrent writers from
//! other processes are NOT guarded — a known limitation carried over from
//! the original design, not solved here.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::warn;

use veritas_core::errors::{VeritasError, VeritasResult};
use veritas_core::models::BenchmarkRecord;
use veritas_core::traits::BenchmarkStore;

/// File-backed JSON-lines implementation of [`BenchmarkStore`].
pub struct JsonlStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlStore {
    /// Open a store at `path`. The file is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_err(err: impl std::fmt::Display) -> VeritasError {
        VeritasError::Storage {
            reason: err.to_string(),
        }
    }
}

#[async_trait]
impl BenchmarkStore for JsonlStore {
    async fn append(&self, record: &BenchmarkRecord) -> VeritasResult<()> {
        let mut line = serde_json::to_string(record).map_err(Self::storage_err)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(Self::storage_err)?;
        file.write_all(line.as_bytes())
            .await
            .map_err(Self::storage_err)?;
        file.flush().await.map_err(Self::storage_err)?;
        Ok(())
    }

    async fn history(&self) -> VeritasResult<Vec<BenchmarkRecord>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            // No store file yet means no history, not an error.
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(Self::storage_err(err)),
        };

        let mut records = Vec::new();
        for (lineno, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<BenchmarkRecord>(line) {
                Ok(record) => records.push(record),
                Err(err) => {
                    // A torn or corrupt line must not poison the history.
                    warn!(lineno = lineno + 1, error = %err, "skipping corrupt benchmark line");
                }
            }
        }
        Ok(records)
    }
}
