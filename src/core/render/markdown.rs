use std::io::{self, Write};

use crate::models::Node;

use super::annotation;

/// Write `root` as a heading followed by a nested bullet list.
pub fn write_markdown<W: Write>(writer: &mut W, root: &Node) -> io::Result<()> {
    writeln!(writer, "# {}", root.name())?;
    writeln!(writer)?;

    if let Node::Error { message, .. } = root {
        return writeln!(writer, "*error: {message}*");
    }

    write_items(writer, root.children(), 0)
}

fn write_items<W: Write>(writer: &mut W, nodes: &[Node], depth: usize) -> io::Result<()> {
    let indent = "  ".repeat(depth);

    for node in nodes {
        match node {
            Node::Directory { name, children, .. } => {
                writeln!(writer, "{indent}- **{name}/**")?;
                write_items(writer, children, depth + 1)?;
            }
            Node::File { name, .. } => {
                writeln!(writer, "{indent}- {name}{}", annotation(node))?;
            }
            Node::Error { name, message } => {
                writeln!(writer, "{indent}- **{name}/** (error: {message})")?;
            }
        }
    }

    Ok(())
}
