use std::path::Path;

pub mod config;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;

pub use config::{OutputFormat, TreeConfig};
pub use crate::core::filter::{DEFAULT_IGNORE, IgnoreFilter, IgnorePattern};
pub use crate::core::generator::{TreeGenerator, normalize_output_path, render};
pub use crate::core::size::format_size;
pub use crate::core::walk::{Walk, walk_dir};
pub use error::TreeError;
pub use models::{Node, Stats};

/// Name shown for the root of a tree.
pub fn root_display_name(root_path: &Path) -> String {
    if root_path == Path::new(".") {
        return ".".to_owned();
    }

    root_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root_path.as_os_str().to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_names() {
        assert_eq!(root_display_name(Path::new(".")), ".");
        assert_eq!(root_display_name(Path::new("/tmp/project")), "project");
        assert_eq!(root_display_name(Path::new("project/")), "project");
        assert_eq!(root_display_name(Path::new("/")), "/");
    }
}
