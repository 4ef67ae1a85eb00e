//! dirsize - find the directories that use the most disk space

pub mod error;
pub mod output;
pub mod size;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{OutputConfig, OutputFormat, OutputTarget, print_json, to_json, write_tree};
pub use size::Size;
pub use tree::{DirNode, Scan, ScanConfig, TreeBuilder};
