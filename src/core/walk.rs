use std::path::Path;

use tracing::debug;

use crate::config::TreeConfig;
use crate::core::filter::IgnoreFilter;
use crate::fs::FileSystem;
use crate::models::{EntryKind, FsEntry, Node, Stats};

/// Output of one traversal: the tree and the counters collected for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    pub root: Node,
    pub stats: Stats,
}

/// A directory whose entries are still being visited.
struct PendingDir {
    name: String,
    mode: Option<u32>,
    depth: usize,
    entries: std::vec::IntoIter<FsEntry>,
    children: Vec<Node>,
}

impl PendingDir {
    fn into_node(self) -> Node {
        let mut children = self.children;
        children.sort_by(|a, b| a.order_key().cmp(&b.order_key()));
        Node::Directory {
            name: self.name,
            mode: self.mode,
            children,
        }
    }
}

/// Walk `root` depth-first and build its tree.
///
/// Directories are visited with an explicit stack, so nesting depth is not
/// limited by the call stack. A directory that cannot be listed becomes a
/// [`Node::Error`] and the walk carries on with its siblings.
pub async fn walk_dir<F: FileSystem>(
    fs: &F,
    root: &Path,
    root_name: &str,
    config: &TreeConfig,
) -> Walk {
    let filter = IgnoreFilter::new(
        config.ignore_patterns.iter().map(String::as_str),
        config.show_hidden,
    );
    let mut stats = Stats::default();

    let entries = match list_dir(fs, root, &filter, config, &mut stats).await {
        Ok(entries) => entries,
        Err(message) => {
            return Walk {
                root: Node::Error {
                    name: root_name.to_owned(),
                    message,
                },
                stats,
            };
        }
    };

    let mut root_dir = PendingDir {
        name: root_name.to_owned(),
        mode: None,
        depth: 0,
        entries: entries.into_iter(),
        children: Vec::new(),
    };
    let mut stack: Vec<PendingDir> = Vec::new();

    loop {
        let top = current(&mut stack, &mut root_dir);
        let depth = top.depth;

        let Some(entry) = top.entries.next() else {
            match stack.pop() {
                Some(done) => {
                    let node = done.into_node();
                    current(&mut stack, &mut root_dir).children.push(node);
                    continue;
                }
                None => {
                    return Walk {
                        root: root_dir.into_node(),
                        stats,
                    };
                }
            }
        };

        if entry.kind == EntryKind::Directory {
            stats.dirs += 1;
            let mode = permissions(fs, &entry.path, config).await;

            if !within_depth(config.max_depth, depth + 1) {
                debug!(path = %entry.path.display(), "Depth limit reached");
                current(&mut stack, &mut root_dir)
                    .children
                    .push(Node::Directory {
                        name: entry.name,
                        mode,
                        children: Vec::new(),
                    });
                continue;
            }

            match list_dir(fs, &entry.path, &filter, config, &mut stats).await {
                Ok(entries) => stack.push(PendingDir {
                    name: entry.name,
                    mode,
                    depth: depth + 1,
                    entries: entries.into_iter(),
                    children: Vec::new(),
                }),
                Err(message) => current(&mut stack, &mut root_dir)
                    .children
                    .push(Node::Error {
                        name: entry.name,
                        message,
                    }),
            }
        } else {
            stats.files += 1;
            let size = if config.show_size {
                fs.metadata(&entry.path).await.ok().map(|m| m.len)
            } else {
                None
            };
            let mode = permissions(fs, &entry.path, config).await;

            current(&mut stack, &mut root_dir)
                .children
                .push(Node::File {
                    name: entry.name,
                    size,
                    mode,
                });
        }
    }
}

fn current<'a>(stack: &'a mut [PendingDir], root: &'a mut PendingDir) -> &'a mut PendingDir {
    match stack.last_mut() {
        Some(top) => top,
        None => root,
    }
}

fn within_depth(max_depth: Option<usize>, depth: usize) -> bool {
    max_depth.is_none_or(|max| depth <= max)
}

/// List `dir`, drop ignored entries and sort the rest directories-first.
/// Symlinks pointing at directories are reported as directories.
/// A failed listing is counted and returned as its message.
async fn list_dir<F: FileSystem>(
    fs: &F,
    dir: &Path,
    filter: &IgnoreFilter,
    config: &TreeConfig,
    stats: &mut Stats,
) -> Result<Vec<FsEntry>, String> {
    let entries = match fs.read_dir(dir).await {
        Ok(entries) => entries,
        Err(err) => {
            stats.errors += 1;
            let message = err.to_string();
            debug!(path = %dir.display(), error = %message, "Cannot read directory");
            return Err(message);
        }
    };

    let total = entries.len();
    let mut kept: Vec<FsEntry> = Vec::with_capacity(total);
    for mut entry in entries {
        if filter.should_ignore(&entry.name) {
            continue;
        }
        if entry.kind == EntryKind::Symlink && links_to_dir(fs, &entry.path).await {
            entry.kind = EntryKind::Directory;
        }
        if config.dirs_only && entry.kind != EntryKind::Directory {
            continue;
        }
        kept.push(entry);
    }
    stats.skipped += total - kept.len();

    kept.sort_by(|a, b| {
        let key_a = (a.kind != EntryKind::Directory, a.name.to_lowercase());
        let key_b = (b.kind != EntryKind::Directory, b.name.to_lowercase());
        key_a.cmp(&key_b).then_with(|| a.name.cmp(&b.name))
    });

    Ok(kept)
}

/// Links are followed: a symlink to a directory is walked like one.
/// Dangling links stay leaves.
async fn links_to_dir<F: FileSystem>(fs: &F, path: &Path) -> bool {
    fs.metadata(path)
        .await
        .is_ok_and(|m| m.kind == EntryKind::Directory)
}

async fn permissions<F: FileSystem>(fs: &F, path: &Path, config: &TreeConfig) -> Option<u32> {
    if !config.show_permissions {
        return None;
    }
    fs.metadata(path).await.ok().and_then(|m| m.mode)
}
