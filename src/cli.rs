//! Command-line interface definitions.
//!
//! Running without a subcommand audits the project. The `scan` subcommand
//! only lists the files an audit would read.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ios_image_audit::ScanFilter;
use std::path::PathBuf;

/// Report missing, unreferenced and duplicate image assets in iOS projects.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub audit: AuditArgs,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List files that would be scanned without processing them.
    Scan {
        #[command(flatten)]
        scan: ScanArgs,
    },
}

#[derive(Debug, clap::Args)]
pub struct AuditArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Emit JSON instead of human-readable output.
    #[arg(long)]
    pub json: bool,

    /// Print additional diagnostics to stderr, also alongside `--json`.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, clap::Args)]
pub struct ScanArgs {
    /// Project root to scan.
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Glob patterns for directories/files to exclude (e.g., "Pods", "Vendor/*").
    /// By default, entries starting with `.` are excluded.
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// Disable default exclusion of `.` prefixed entries.
    #[arg(long)]
    pub no_default_excludes: bool,
}

impl ScanArgs {
    pub fn filter(&self) -> Result<ScanFilter> {
        ScanFilter::new(&self.exclude, !self.no_default_excludes)
    }
}
