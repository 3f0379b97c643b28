//! Trait for the storage a city's trip log is read from.

use crate::error::LoadError;

/// Raw access to trip log files by name.
///
/// Implementations only move bytes; decoding happens in the loader so every
/// source gets the same gzip handling and parsing.
#[async_trait::async_trait]
pub trait TripSource: Send + Sync {
    /// Returns the contents of `file_name`, or `None` when the source has no
    /// such file.
    async fn fetch(&self, file_name: &str) -> Result<Option<Vec<u8>>, LoadError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}
