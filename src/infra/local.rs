use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::error::LoadError;
use crate::services::trip_source::TripSource;

/// Reads trip logs from a directory on disk.
///
/// A missing `<file>` falls back to `<file>.gz`.
pub struct LocalDirSource {
    root: PathBuf,
}

impl LocalDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl TripSource for LocalDirSource {
    async fn fetch(&self, file_name: &str) -> Result<Option<Vec<u8>>, LoadError> {
        for candidate in [file_name.to_string(), format!("{file_name}.gz")] {
            let path = self.root.join(&candidate);
            match tokio::fs::read(&path).await {
                Ok(bytes) => {
                    debug!(path = %path.display(), bytes = bytes.len(), "Read trip file");
                    return Ok(Some(bytes));
                }
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(None)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
