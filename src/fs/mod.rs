mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::{EntryMetadata, FsEntry};

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// List the entries of `dir` in no particular order.
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;

    /// Stat `path`, following symlinks.
    async fn metadata(&self, path: &Path) -> Result<EntryMetadata>;
}
