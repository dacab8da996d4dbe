use clap::Parser;
use std::path::PathBuf;

use dirtree::{OutputFormat, TreeConfig};

#[derive(Parser, Debug)]
#[command(name = "dirtree", version)]
#[command(about = "Generate visual directory tree structures", long_about = None)]
pub struct Cli {
    /// Source directory (defaults to current directory)
    pub directory: Option<PathBuf>,

    /// Output file; the tree goes to stdout when omitted
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Maximum depth to traverse (0 lists only the root)
    #[arg(short = 'd', long)]
    pub max_depth: Option<usize>,

    /// Show hidden files and directories
    #[arg(short = 'a', long)]
    pub show_hidden: bool,

    /// Show directories only
    #[arg(long)]
    pub dirs_only: bool,

    /// Show file sizes
    #[arg(short = 's', long)]
    pub show_size: bool,

    /// Show permission bits (Unix-like systems)
    #[arg(short = 'p', long)]
    pub show_permissions: bool,

    /// Pattern to ignore: a name, `*suffix` or `prefix*` (repeatable)
    #[arg(short = 'i', long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn tree_config(&self) -> TreeConfig {
        TreeConfig {
            max_depth: self.max_depth,
            show_hidden: self.show_hidden,
            dirs_only: self.dirs_only,
            show_size: self.show_size,
            show_permissions: self.show_permissions,
            ignore_patterns: self.ignore.iter().cloned().collect(),
        }
    }
}
