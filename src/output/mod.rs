//! Tree output
//!
//! The tree is written either as JSON (to stdout or a `.json` file) or as an
//! HTML report (`.html` file) that renders a collapsible tree in a browser.
//!
//! # Module Structure
//!
//! - `config` - Output configuration and target selection
//! - `json` - JSON encoding
//! - `html` - HTML report

mod config;
mod html;
mod json;

use std::fs::File;
use std::io::{BufWriter, Write};

use tracing::debug;

use crate::error::Result;
use crate::tree::DirNode;

pub use config::{OutputConfig, OutputFormat, OutputTarget};
pub use html::{render_html, write_html};
pub use json::{print_json, to_json, write_json};

/// Write the tree to `target` in the target's format.
pub fn write_tree(node: &DirNode, target: &OutputTarget, config: &OutputConfig) -> Result<()> {
    match target {
        OutputTarget::Stdout => print_json(node, config.indent),
        OutputTarget::File { path, format } => {
            debug!("writing {:?} output to {}", format, path.display());
            let mut writer = BufWriter::new(File::create(path)?);
            match format {
                OutputFormat::Json => write_json(&mut writer, node, config.indent)?,
                OutputFormat::Html => write_html(&mut writer, node)?,
            }
            writer.flush()?;
            Ok(())
        }
    }
}
