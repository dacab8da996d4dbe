/// One entry of a generated tree.
///
/// `Directory` children are kept in display order: directories first, then
/// files and failed directories, each group sorted case-insensitively by name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node {
    Directory {
        name: String,
        mode: Option<u32>,
        children: Vec<Node>,
    },
    File {
        name: String,
        size: Option<u64>,
        mode: Option<u32>,
    },
    /// A directory whose listing failed.
    Error { name: String, message: String },
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Directory { name, .. } | Node::File { name, .. } | Node::Error { name, .. } => {
                name
            }
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Directory { children, .. } => children,
            Node::File { .. } | Node::Error { .. } => &[],
        }
    }

    pub fn mode(&self) -> Option<u32> {
        match self {
            Node::Directory { mode, .. } | Node::File { mode, .. } => *mode,
            Node::Error { .. } => None,
        }
    }

    /// Sort key used for sibling ordering.
    pub(crate) fn order_key(&self) -> (u8, String, &str) {
        let group = if self.is_dir() { 0 } else { 1 };
        (group, self.name().to_lowercase(), self.name())
    }
}
