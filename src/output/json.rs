//! JSON output formatting

use std::io::Write;

use crate::error::Result;
use crate::tree::DirNode;

/// Encode the tree, pretty-printed with two-space indentation when `indent`
/// is set.
pub fn to_json(node: &DirNode, indent: bool) -> Result<String> {
    let json = if indent {
        serde_json::to_string_pretty(node)?
    } else {
        serde_json::to_string(node)?
    };
    Ok(json)
}

/// Write the tree as JSON.
pub fn write_json<W: Write>(writer: &mut W, node: &DirNode, indent: bool) -> Result<()> {
    if indent {
        serde_json::to_writer_pretty(&mut *writer, node)?;
    } else {
        serde_json::to_writer(&mut *writer, node)?;
    }
    Ok(())
}

/// Print tree node as JSON to stdout.
pub fn print_json(node: &DirNode, indent: bool) -> Result<()> {
    let json = to_json(node, indent)?;
    println!("{}", json);
    Ok(())
}
