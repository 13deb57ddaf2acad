//! Candidate snapshot on disk.
//!
//! The snapshot is a JSON array of loosely-typed candidate records written
//! by the upstream résumé pipeline. It is re-read on every request so that
//! a refreshed file is picked up without a restart.

use std::path::{Path, PathBuf};

use hiresift_core::{candidates_from_value, Candidate, MatchError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read candidate snapshot {path}: {message}")]
    Io { path: String, message: String },

    #[error("Candidate snapshot is not valid JSON: {0}")]
    Parse(String),

    #[error(transparent)]
    Invalid(#[from] MatchError),
}

/// Read-only JSON candidate store.
#[derive(Debug, Clone)]
pub struct CandidateStore {
    path: PathBuf,
}

impl CandidateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current snapshot. A missing file is an empty pool.
    pub async fn load(&self) -> Result<Vec<Candidate>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Candidate snapshot missing, pool is empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.path.display().to_string(),
                    message: e.to_string(),
                })
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::Parse(e.to_string()))?;
        let candidates = candidates_from_value(value)?;
        debug!(count = candidates.len(), "Loaded candidate snapshot");
        Ok(candidates)
    }
}
