use serde::Serialize;

use crate::models::Node;

/// Serialized shape of a [`Node`].
#[derive(Debug, Serialize)]
pub struct JsonNode<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<JsonNode<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

impl<'a> From<&'a Node> for JsonNode<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Directory { name, children, .. } => JsonNode {
                name: name.as_str(),
                kind: "directory",
                children: Some(children.iter().map(JsonNode::from).collect()),
                size: None,
                error: None,
            },
            Node::File { name, size, .. } => JsonNode {
                name: name.as_str(),
                kind: "file",
                children: None,
                size: *size,
                error: None,
            },
            Node::Error { name, message } => JsonNode {
                name: name.as_str(),
                kind: "directory",
                children: None,
                size: None,
                error: Some(message.as_str()),
            },
        }
    }
}

/// Pretty-printed JSON with two-space indentation.
pub fn render_json(root: &Node) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonNode::from(root))
}
