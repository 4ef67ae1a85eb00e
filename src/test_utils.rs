//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// Files are filled with zero bytes of the requested length so that sizes
/// are exact. The tree is removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file of `len` bytes.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, len: usize) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, vec![0u8; len]).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Build `width` sibling directories per level, `depth` levels deep,
    /// each holding one file of `file_len` bytes.
    pub fn add_fanout(&self, prefix: &str, width: usize, depth: usize, file_len: usize) {
        if depth == 0 {
            return;
        }
        for i in 0..width {
            let dir = format!("{}/d{}", prefix, i);
            self.add_file(&format!("{}/f.bin", dir), file_len);
            self.add_fanout(&dir, width, depth - 1, file_len);
        }
    }

    /// Remove all permissions from a directory.
    ///
    /// Returns false when the directory is still readable afterwards (for
    /// example when running as root), in which case permission tests
    /// should be skipped.
    #[cfg(unix)]
    pub fn lock_dir(&self, path: &str) -> bool {
        use std::os::unix::fs::PermissionsExt;

        let full_path = self.dir.path().join(path);
        fs::set_permissions(&full_path, fs::Permissions::from_mode(0o000))
            .expect("Failed to set permissions");
        fs::read_dir(&full_path).is_err()
    }

    /// Restore normal permissions on a directory locked with `lock_dir`.
    #[cfg(unix)]
    pub fn unlock_dir(&self, path: &str) {
        use std::os::unix::fs::PermissionsExt;

        let full_path = self.dir.path().join(path);
        fs::set_permissions(&full_path, fs::Permissions::from_mode(0o755))
            .expect("Failed to restore permissions");
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
