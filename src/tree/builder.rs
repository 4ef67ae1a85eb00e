//! TreeBuilder - aggregates directory sizes into a filtered, collapsed tree

use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, warn};

use crate::size::Size;

use super::config::ScanConfig;
use super::node::{DirNode, join_clean};

/// Result of a scan: the tree plus every directory that could not be read.
///
/// Unreadable directories appear in the tree as empty nodes of size zero,
/// exactly like genuinely empty ones. `unreadable` is the only place the
/// difference shows up.
#[derive(Debug, Clone)]
pub struct Scan {
    pub root: DirNode,
    pub unreadable: Vec<PathBuf>,
}

impl Scan {
    pub fn is_complete(&self) -> bool {
        self.unreadable.is_empty()
    }
}

/// Depth-first, single-threaded directory size walker.
pub struct TreeBuilder {
    config: ScanConfig,
}

impl TreeBuilder {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Build the size tree rooted at `root`. Never fails: directories that
    /// cannot be read count as empty.
    ///
    /// The root follows the collapsing rule like every other node. When
    /// exactly one of its subdirectories meets the threshold, the returned
    /// node *is* that subdirectory (display path `<root>/<child>`) and its
    /// `size` is the child's aggregate, not the total of the whole scan.
    pub fn build(&self, root: &Path) -> DirNode {
        self.scan(root).root
    }

    /// Like [`TreeBuilder::build`], but also reports which directories could
    /// not be read.
    pub fn scan(&self, root: &Path) -> Scan {
        let sort = self.config.sort;
        self.scan_with(root, &|path: &Path| read_entries(path, sort))
    }

    fn scan_with<R>(&self, root: &Path, read: &R) -> Scan
    where
        R: Fn(&Path) -> io::Result<Vec<DirEntry>>,
    {
        let started = Instant::now();
        debug!(
            "scanning {} (min size {})",
            root.display(),
            self.config.min_size
        );

        let mut unreadable = Vec::new();
        let (_, root_node) =
            self.visit(root.to_path_buf(), root.to_path_buf(), read, &mut unreadable);

        debug!(
            "scanned {} in {}: {} nodes kept, {} unreadable",
            root.display(),
            humantime::format_duration(started.elapsed()),
            root_node.node_count(),
            unreadable.len()
        );

        Scan {
            root: root_node,
            unreadable,
        }
    }

    /// Returns the directory's true aggregate size alongside its node. The
    /// node's own `size` can be smaller once it has collapsed into a child,
    /// so parents must add the aggregate, not `node.size`.
    fn visit<R>(
        &self,
        full_path: PathBuf,
        path: PathBuf,
        read: &R,
        unreadable: &mut Vec<PathBuf>,
    ) -> (Size, DirNode)
    where
        R: Fn(&Path) -> io::Result<Vec<DirEntry>>,
    {
        let entries = match read(&full_path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("cannot read {}: {}", full_path.display(), e);
                unreadable.push(full_path.clone());
                return (Size::ZERO, DirNode::empty(full_path, path));
            }
        };

        let mut total = Size::ZERO;
        let mut sub_dirs = Vec::new();

        for entry in entries {
            // DirEntry::file_type does not follow symlinks
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    debug!("skipping {}: {}", entry.path().display(), e);
                    continue;
                }
            };

            if file_type.is_dir() {
                let name = entry.file_name();
                let (child_total, child) = self.visit(
                    join_clean(&full_path, &name),
                    PathBuf::from(&name),
                    read,
                    unreadable,
                );
                total += child_total;
                if child_total >= self.config.min_size {
                    sub_dirs.push(child);
                }
            } else if file_type.is_file() {
                match entry.metadata() {
                    Ok(meta) => total += Size(meta.len()),
                    Err(e) => debug!("cannot stat {}: {}", entry.path().display(), e),
                }
            }
        }

        (total, DirNode::collapsed(full_path, path, total, sub_dirs))
    }
}

/// Read all entries of a directory, failing if any entry cannot be listed.
/// The `ReadDir` handle is closed before this returns.
fn read_entries(path: &Path, sort: bool) -> io::Result<Vec<DirEntry>> {
    let mut entries = fs::read_dir(path)?.collect::<io::Result<Vec<_>>>()?;
    if sort {
        entries.sort_by_key(|e| e.file_name());
    }
    Ok(entries)
}
