//! Output configuration types

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Pretty-print JSON with two-space indentation. HTML reports always
    /// embed compact JSON.
    pub indent: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { indent: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Html,
}

/// Where the rendered tree goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File { path: PathBuf, format: OutputFormat },
}

impl OutputTarget {
    /// Pick the target for an optional output path. The format follows the
    /// file extension, which must be `.json` or `.html` (any case).
    pub fn from_path(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(OutputTarget::Stdout);
        };

        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let format = match ext.as_str() {
            "json" => OutputFormat::Json,
            "html" => OutputFormat::Html,
            _ => return Err(Error::UnsupportedOutput(path.to_path_buf())),
        };

        Ok(OutputTarget::File {
            path: path.to_path_buf(),
            format,
        })
    }

    pub fn format(&self) -> OutputFormat {
        match self {
            OutputTarget::Stdout => OutputFormat::Json,
            OutputTarget::File { format, .. } => *format,
        }
    }
}
