//! Directory nodes of the size tree

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::{Serialize, Serializer};

use crate::size::Size;

/// One directory in the filtered output tree.
///
/// `size` always counts every regular file below `full_path`, including
/// files inside subdirectories that were too small to be kept in
/// `sub_dirs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirNode {
    #[serde(serialize_with = "lossy_path")]
    pub full_path: PathBuf,
    /// Display path. Holds several joined segments after chain collapsing.
    #[serde(serialize_with = "lossy_path")]
    pub path: PathBuf,
    pub size: Size,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_dirs: Vec<DirNode>,
}

impl DirNode {
    /// A node with no size and no children.
    pub fn empty(full_path: impl Into<PathBuf>, path: impl Into<PathBuf>) -> Self {
        Self {
            full_path: full_path.into(),
            path: path.into(),
            size: Size::ZERO,
            sub_dirs: Vec::new(),
        }
    }

    /// Assemble a node from its already-filtered children, collapsing it into
    /// its only child when exactly one survived.
    ///
    /// The collapsed node takes over the child's `full_path`, `size` and
    /// `sub_dirs`; only the display path keeps this node's segment. Children
    /// arrive already collapsed, so one step here keeps the whole chain
    /// collapsed.
    pub fn collapsed(
        full_path: PathBuf,
        path: PathBuf,
        size: Size,
        mut sub_dirs: Vec<DirNode>,
    ) -> Self {
        if sub_dirs.len() == 1 {
            if let Some(only) = sub_dirs.pop() {
                return Self {
                    path: join_clean(&path, &only.path),
                    ..only
                };
            }
        }
        Self {
            full_path,
            path,
            size,
            sub_dirs,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.sub_dirs.is_empty()
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.sub_dirs.iter().map(DirNode::node_count).sum::<usize>()
    }

    /// Find a direct child by its display path.
    pub fn child(&self, path: impl AsRef<Path>) -> Option<&DirNode> {
        let path = path.as_ref();
        self.sub_dirs.iter().find(|c| c.path == path)
    }
}

/// Join two paths and clean the result lexically: `.` segments are dropped
/// and `..` folds into the preceding segment, without touching the
/// filesystem.
pub(crate) fn join_clean(base: &Path, segment: impl AsRef<Path>) -> PathBuf {
    base.join(segment).clean()
}

fn lossy_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}
