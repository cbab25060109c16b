//! ios-image-audit: report image asset problems in iOS projects.
//!
//! Scans a project tree for `.png` files and for image names referenced from
//! code, Interface Builder documents and property lists, then prints one line
//! per problem found. Findings are advisory; the exit code is non-zero only
//! when the tree cannot be read.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Args, AuditArgs, Commands, ScanArgs};
use colored::Colorize;
use ios_image_audit::scanner::{self, SourceKind};
use ios_image_audit::{AuditResult, audit};

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Commands::Scan { scan }) => cmd_scan(&scan),
        None => cmd_audit(&args.audit),
    }
}

fn cmd_audit(args: &AuditArgs) -> Result<()> {
    let filter = args.scan.filter()?;
    let result = audit(&args.scan.root, &filter)?;

    if args.verbose {
        print_diagnostics(&result);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_findings(&result, args.verbose);
    }

    Ok(())
}

fn cmd_scan(args: &ScanArgs) -> Result<()> {
    let filter = args.filter()?;
    let images = scanner::collect_image_files(&args.root, &filter)?;

    println!("Would scan {} image files:", images.len());
    for file in &images {
        println!("  {}", file.display());
    }

    for kind in SourceKind::ALL {
        let files = scanner::collect_source_files(&args.root, kind, &filter)?;
        println!(
            "Would scan {} {} files:",
            files.len(),
            kind.extensions().join("/")
        );
        for file in &files {
            println!("  {}", file.display());
        }
    }

    Ok(())
}

fn print_diagnostics(result: &AuditResult) {
    let d = &result.diagnostics;
    eprintln!(
        "{} Images: {} files in {} bundles",
        "info:".blue().bold(),
        d.image_files,
        d.bundles
    );
    eprintln!(
        "{} Sources: {} files, {} references",
        "info:".blue().bold(),
        d.source_files_scanned,
        d.references
    );
}

fn print_findings(result: &AuditResult, verbose: bool) {
    for finding in &result.findings {
        println!("{}", finding);
    }

    if verbose {
        if result.findings.is_empty() {
            eprintln!("{} No image problems found", "ok:".green().bold());
        } else {
            eprintln!(
                "{} {} finding(s)",
                "Found".yellow().bold(),
                result.findings.len()
            );
        }
    }
}
