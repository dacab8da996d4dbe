mod html;
mod json;
mod markdown;
mod text;

pub use html::render_html;
pub use json::{JsonNode, render_json};
pub use markdown::write_markdown;
pub use text::write_text;

use crate::core::size::format_size;
use crate::models::Node;

/// Size and permission suffix for a node, with a leading space, or empty.
pub(crate) fn annotation(node: &Node) -> String {
    let mut parts = Vec::new();

    if let Node::File {
        size: Some(size), ..
    } = node
    {
        parts.push(format!("({})", format_size(*size)));
    }

    if let Some(mode) = node.mode() {
        parts.push(format!("[{:03o}]", mode & 0o777));
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!(" {}", parts.join(" "))
    }
}
