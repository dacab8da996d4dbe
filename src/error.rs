use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a render before any traversal happens.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
