mod entry;
mod stats;
mod tree;

pub use entry::{EntryKind, EntryMetadata, FsEntry};
pub use stats::Stats;
pub use tree::Node;
