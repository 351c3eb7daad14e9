use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Subscription;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to write snapshot: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize record set: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Single named slot holding the full serialized record set. Every save
/// replaces the previous snapshot wholesale; there is no incremental path.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the last snapshot. A missing file, an unreadable file, or a
    /// malformed payload all degrade to an empty record set with a warning;
    /// startup never fails on snapshot state.
    pub fn load(&self) -> Vec<Subscription> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Snapshot unreadable, starting with an empty record set"
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Snapshot payload malformed, starting with an empty record set"
                );
                Vec::new()
            }
        }
    }

    /// Serialize the full record set and replace the snapshot file.
    pub fn save(&self, records: &[Subscription]) -> Result<(), SnapshotError> {
        let payload = serde_json::to_vec_pretty(records)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}
