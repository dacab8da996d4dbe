use std::io::{self, Write};

use crate::models::Node;

use super::annotation;

const BRANCH: &str = "├── ";
const CORNER: &str = "└── ";
const PIPE_SPACE: &str = "│   ";
const SPACE: &str = "    ";

/// Write `root` as a box-drawing tree, one entry per line.
pub fn write_text<W: Write>(writer: &mut W, root: &Node) -> io::Result<()> {
    write_line(writer, root)?;
    write_children(writer, root.children(), &[])
}

fn write_children<W: Write>(
    writer: &mut W,
    children: &[Node],
    ancestor_has_more: &[bool],
) -> io::Result<()> {
    for (index, node) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();

        for &has_more in ancestor_has_more {
            let padding = if has_more { PIPE_SPACE } else { SPACE };
            writer.write_all(padding.as_bytes())?;
        }

        let connector = if is_last { CORNER } else { BRANCH };
        writer.write_all(connector.as_bytes())?;
        write_line(writer, node)?;

        if !node.children().is_empty() {
            let mut next_ancestor_has_more = ancestor_has_more.to_vec();
            next_ancestor_has_more.push(!is_last);
            write_children(writer, node.children(), &next_ancestor_has_more)?;
        }
    }

    Ok(())
}

fn write_line<W: Write>(writer: &mut W, node: &Node) -> io::Result<()> {
    writer.write_all(node.name().as_bytes())?;

    match node {
        Node::Error { message, .. } => write!(writer, " [error: {message}]")?,
        _ => writer.write_all(annotation(node).as_bytes())?,
    }

    writer.write_all(b"\n")
}
