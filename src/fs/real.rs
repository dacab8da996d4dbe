use anyhow::Result;
use async_trait::async_trait;
use std::fs::{FileType, Metadata};
use std::path::Path;
use tokio::task;

use crate::models::{EntryKind, EntryMetadata, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut entries = Vec::new();
            for entry in std::fs::read_dir(&dir)?.filter_map(|e| e.ok()) {
                let file_type = match entry.file_type() {
                    Ok(file_type) => file_type,
                    Err(_) => continue,
                };

                entries.push(FsEntry {
                    path: entry.path(),
                    name: entry.file_name().to_string_lossy().into_owned(),
                    kind: kind_of(file_type),
                });
            }
            Ok(entries)
        })
        .await?
    }

    async fn metadata(&self, path: &Path) -> Result<EntryMetadata> {
        let path = path.to_path_buf();
        task::spawn_blocking(move || {
            let metadata = std::fs::metadata(&path)?;
            Ok(EntryMetadata {
                kind: kind_of(metadata.file_type()),
                len: metadata.len(),
                mode: mode_of(&metadata),
            })
        })
        .await?
    }
}

fn kind_of(file_type: FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

#[cfg(unix)]
fn mode_of(metadata: &Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    Some(metadata.permissions().mode())
}

#[cfg(not(unix))]
fn mode_of(_metadata: &Metadata) -> Option<u32> {
    None
}
