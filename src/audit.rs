//! The full audit pipeline: collect, group, check.
//!
//! Image files are registered first so each record's representative name is
//! an actual file. References are then scanned per [`SourceKind`] in a fixed
//! order.

use crate::registry::ImageRegistry;
use crate::report::{Finding, check_all};
use crate::scanner::{self, ScanFilter, SourceKind};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// Summary statistics from an audit run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    pub image_files: usize,
    pub source_files_scanned: usize,
    pub references: usize,
    pub bundles: usize,
    pub findings: usize,
}

/// Complete audit results.
#[derive(Debug, Serialize)]
pub struct AuditResult {
    pub findings: Vec<Finding>,
    pub diagnostics: Diagnostics,
}

/// Walks `root` and builds the image registry.
///
/// Returns the registry along with diagnostics whose `findings` count is
/// still zero.
pub fn collect(root: &Path, filter: &ScanFilter) -> Result<(ImageRegistry, Diagnostics)> {
    let mut registry = ImageRegistry::new();
    let mut diagnostics = Diagnostics::default();

    for file in scanner::collect_image_files(root, filter)? {
        registry.add_file(&file);
        diagnostics.image_files += 1;
    }

    for kind in SourceKind::ALL {
        for file in scanner::collect_source_files(root, kind, filter)? {
            diagnostics.source_files_scanned += 1;
            for reference in scanner::extract_references(root, &file, kind)? {
                registry.add_reference(&reference);
                diagnostics.references += 1;
            }
        }
    }

    diagnostics.bundles = registry.len();
    Ok((registry, diagnostics))
}

/// Audits the project under `root`.
pub fn audit(root: &Path, filter: &ScanFilter) -> Result<AuditResult> {
    let (registry, mut diagnostics) = collect(root, filter)?;
    let findings = check_all(&registry);
    diagnostics.findings = findings.len();

    Ok(AuditResult {
        findings,
        diagnostics,
    })
}
