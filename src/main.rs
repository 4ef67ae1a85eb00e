//! CLI entry point for dirsize

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use dirsize::{Error, OutputConfig, OutputTarget, ScanConfig, Size, TreeBuilder, write_tree};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dirsize")]
#[command(about = "Show which directories use the most disk space")]
#[command(version)]
struct Args {
    /// The root directory
    #[arg(short, long)]
    path: String,

    /// The minimum size per directory, e.g. 500MiB, 2GB, 10kib
    #[arg(short, long, default_value = "500MiB")]
    size: String,

    /// The output file (.json or .html). Writes JSON to stdout when not specified
    #[arg(short, long)]
    out: Option<String>,

    /// Indent the JSON output
    #[arg(short, long)]
    indent: bool,

    /// Visit directory entries in name order for reproducible output
    #[arg(long)]
    sort: bool,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// The scan itself treats a missing root like any unreadable directory, so
/// reject it up front.
fn validate_root(path: &Path) -> dirsize::Result<()> {
    let meta = std::fs::metadata(path).map_err(|source| Error::InvalidRoot {
        path: path.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(Error::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

fn run(args: &Args) -> dirsize::Result<()> {
    let root = PathBuf::from(args.path.trim());
    validate_root(&root)?;

    let out = args
        .out
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from);
    let target = OutputTarget::from_path(out.as_deref())?;

    let scan_config = ScanConfig {
        min_size: Size::parse(&args.size),
        sort: args.sort,
    };
    let output_config = OutputConfig {
        indent: args.indent,
    };

    let scan = TreeBuilder::new(scan_config).scan(&root);
    if !scan.is_complete() {
        warn!(
            "{} directories could not be read and were counted as empty",
            scan.unreadable.len()
        );
    }

    write_tree(&scan.root, &target, &output_config)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("dirsize: {}", e);
        process::exit(1);
    }
}
