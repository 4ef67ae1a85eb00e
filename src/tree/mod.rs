//! Directory size tree
//!
//! `TreeBuilder` walks a directory depth-first, sums the size of every regular
//! file, drops subdirectories below the configured threshold and collapses
//! chains of single-child directories into one node with a joined path.

mod builder;
mod config;
mod node;

pub use builder::{Scan, TreeBuilder};
pub use config::ScanConfig;
pub use node::DirNode;
