use serde::Serialize;

use crate::models::{Node, Stats};

use super::JsonNode;

const VIEWER_TEMPLATE: &str = include_str!("viewer.html");
const TITLE_SLOT: &str = "{{title}}";
const DATA_SLOT: &str = "{{tree_data}}";

#[derive(Serialize)]
struct ViewerPayload<'a> {
    #[serde(flatten)]
    tree: JsonNode<'a>,
    stats: ViewerStats<'a>,
}

#[derive(Serialize)]
struct ViewerStats<'a> {
    dirs: usize,
    files: usize,
    root: &'a str,
}

/// Build the standalone HTML viewer for `root`.
///
/// The page itself is a fixed template; only the title and the embedded JSON
/// payload change between runs.
pub fn render_html(root: &Node, stats: &Stats) -> serde_json::Result<String> {
    let payload = ViewerPayload {
        tree: JsonNode::from(root),
        stats: ViewerStats {
            dirs: stats.dirs,
            files: stats.files,
            root: root.name(),
        },
    };
    let data = escape_script(&serde_json::to_string_pretty(&payload)?);
    let title = escape_html(root.name());

    let mut html = String::with_capacity(VIEWER_TEMPLATE.len() + data.len());
    match VIEWER_TEMPLATE.split_once(DATA_SLOT) {
        Some((head, tail)) => {
            html.push_str(&head.replace(TITLE_SLOT, &title));
            html.push_str(&data);
            html.push_str(tail);
        }
        None => html.push_str(&VIEWER_TEMPLATE.replace(TITLE_SLOT, &title)),
    }
    Ok(html)
}

/// Keep JSON from closing or re-opening markup inside the `<script>` element.
/// Every `<` only occurs inside string literals, where `\u003c` is equivalent.
fn escape_script(json: &str) -> String {
    json.replace('<', "\\u003c")
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
