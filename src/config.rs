use std::collections::BTreeSet;

use clap::ValueEnum;

/// Options controlling what a walk includes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Deepest directory level that is listed (root is 0). `None` is unlimited.
    pub max_depth: Option<usize>,
    /// Include entries whose names start with `.`.
    pub show_hidden: bool,
    /// Drop everything that is not a directory.
    pub dirs_only: bool,
    /// Annotate files with their size.
    pub show_size: bool,
    /// Annotate entries with their permission bits.
    pub show_permissions: bool,
    /// Extra ignore patterns, merged with the built-in defaults.
    pub ignore_patterns: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Html,
    Json,
}

impl OutputFormat {
    /// Canonical file extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Markdown => "md",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}
