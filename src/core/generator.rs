use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::config::{OutputFormat, TreeConfig};
use crate::core::render::{render_html, render_json, write_markdown, write_text};
use crate::core::walk::{Walk, walk_dir};
use crate::error::TreeError;
use crate::fs::{FileSystem, RealFileSystem};
use crate::models::{EntryKind, Stats};
use crate::root_display_name;

/// Renders directory trees in one configured format.
///
/// Each render walks the filesystem once. [`TreeGenerator::stats`] keeps a
/// running total over every render made with this generator until
/// [`TreeGenerator::reset_stats`] is called; `render_to_file` returns the
/// counters of that single run.
pub struct TreeGenerator<F: FileSystem = RealFileSystem> {
    fs: F,
    config: TreeConfig,
    format: OutputFormat,
    stats: Stats,
}

impl TreeGenerator<RealFileSystem> {
    pub fn new(config: TreeConfig, format: OutputFormat) -> Self {
        Self::with_fs(RealFileSystem, config, format)
    }
}

impl<F: FileSystem> TreeGenerator<F> {
    pub fn with_fs(fs: F, config: TreeConfig, format: OutputFormat) -> Self {
        Self {
            fs,
            config,
            format,
            stats: Stats::default(),
        }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Totals accumulated across all renders since creation or the last reset.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = Stats::default();
    }

    pub async fn render_to_string(&mut self, root: &Path) -> Result<String> {
        let walk = self.walk(root).await?;
        render(&walk, self.format)
    }

    /// Render `root` into `output`, fixing its extension to match the format.
    /// Returns the counters of this run.
    pub async fn render_to_file(&mut self, root: &Path, output: &Path) -> Result<Stats> {
        let target = normalize_output_path(output, self.format);
        if target != output {
            info!(path = %target.display(), "Adjusted output filename");
        }

        let walk = self.walk(root).await?;
        let rendered = render(&walk, self.format)?;

        tokio::fs::write(&target, rendered)
            .await
            .with_context(|| format!("Failed to write {}", target.display()))?;

        info!(path = %target.display(), "Tree successfully generated");
        Ok(walk.stats)
    }

    async fn walk(&mut self, root: &Path) -> Result<Walk> {
        let metadata = self
            .fs
            .metadata(root)
            .await
            .map_err(|_| TreeError::RootNotFound(root.to_path_buf()))?;
        if metadata.kind != EntryKind::Directory {
            return Err(TreeError::NotADirectory(root.to_path_buf()).into());
        }

        info!(root = %root.display(), "Generating tree");
        let walk = walk_dir(&self.fs, root, &root_display_name(root), &self.config).await;
        self.stats.merge(&walk.stats);
        Ok(walk)
    }
}

/// Render a finished walk in `format`.
pub fn render(walk: &Walk, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => {
            let mut out = Vec::new();
            write_text(&mut out, &walk.root)?;
            String::from_utf8(out)?
        }
        OutputFormat::Markdown => {
            let mut out = Vec::new();
            write_markdown(&mut out, &walk.root)?;
            String::from_utf8(out)?
        }
        OutputFormat::Json => render_json(&walk.root)?,
        OutputFormat::Html => render_html(&walk.root, &walk.stats)?,
    };
    Ok(rendered)
}

/// Give `path` the format's extension, replacing a missing or different one.
pub fn normalize_output_path(path: &Path, format: OutputFormat) -> PathBuf {
    let extension = format.extension();
    if path.extension().is_some_and(|ext| ext == extension) {
        path.to_path_buf()
    } else {
        path.with_extension(extension)
    }
}
