//! Configuration types for tree building

use crate::size::Size;

/// Configuration for a directory size scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directories whose aggregate size is below this are folded into their
    /// parent's total but left out of the tree.
    pub min_size: Size,
    /// Sort entries by name before visiting them. Without this, entries are
    /// visited in whatever order the filesystem returns them.
    pub sort: bool,
}

impl ScanConfig {
    pub fn new(min_size: Size) -> Self {
        Self {
            min_size,
            ..Default::default()
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_size: Size::default(),
            sort: false,
        }
    }
}
