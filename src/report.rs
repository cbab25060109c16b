//! Image checks and their findings.
//!
//! Each record is run through four independent check groups. Inside a group
//! only the first failing check is reported:
//!
//! 1. missing image files, else missing references
//! 2. missing Retina version, else missing non-Retina version
//! 3. missing iPhone version, else missing iPad version
//! 4. potentially duplicate files

use crate::image::ImageRecord;
use crate::registry::ImageRegistry;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A single problem with one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    MissingImageFiles {
        bundle_name: String,
        references: Vec<PathBuf>,
    },
    MissingReferences {
        image: String,
    },
    MissingRetina {
        image: String,
    },
    MissingNonRetina {
        image: String,
    },
    MissingIphoneVersion {
        image: String,
    },
    MissingIpadVersion {
        image: String,
    },
    DuplicateFiles {
        files: Vec<String>,
    },
}

impl Finding {
    /// Short label used as the line prefix.
    pub fn label(&self) -> &'static str {
        match self {
            Finding::MissingImageFiles { .. } => "Missing image files",
            Finding::MissingReferences { .. } => "Missing references",
            Finding::MissingRetina { .. } => "Missing Retina version",
            Finding::MissingNonRetina { .. } => "Missing non-Retina version",
            Finding::MissingIphoneVersion { .. } => "Missing iPhone version",
            Finding::MissingIpadVersion { .. } => "Missing iPad version",
            Finding::DuplicateFiles { .. } => "Potentially duplicate files",
        }
    }

    /// Everything after the label.
    pub fn subject(&self) -> String {
        match self {
            Finding::MissingImageFiles {
                bundle_name,
                references,
            } => {
                let references: Vec<_> = references
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect();
                format!("{} (references: {})", bundle_name, references.join(", "))
            }
            Finding::MissingReferences { image }
            | Finding::MissingRetina { image }
            | Finding::MissingNonRetina { image }
            | Finding::MissingIphoneVersion { image }
            | Finding::MissingIpadVersion { image } => image.clone(),
            Finding::DuplicateFiles { files } => files.join(", "),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.subject())
    }
}

/// Runs every check group against one record.
pub fn check_image(record: &ImageRecord) -> Vec<Finding> {
    let mut findings = Vec::new();
    let image = || record.display_name().to_string();

    if record.missing_image_files() {
        findings.push(Finding::MissingImageFiles {
            bundle_name: record.bundle_name().to_string(),
            references: record.references().to_vec(),
        });
    } else if record.missing_references() {
        findings.push(Finding::MissingReferences { image: image() });
    }

    if record.missing_retina() {
        findings.push(Finding::MissingRetina { image: image() });
    } else if record.missing_non_retina() {
        findings.push(Finding::MissingNonRetina { image: image() });
    }

    if record.missing_iphone_versions() {
        findings.push(Finding::MissingIphoneVersion { image: image() });
    } else if record.missing_ipad_versions() {
        findings.push(Finding::MissingIpadVersion { image: image() });
    }

    if record.duplicate_files() {
        findings.push(Finding::DuplicateFiles {
            files: record.image_files().to_vec(),
        });
    }

    findings
}

/// Checks every image in registry order.
pub fn check_all(registry: &ImageRegistry) -> Vec<Finding> {
    registry.iter().flat_map(check_image).collect()
}

/// Renders findings as plain text, one per line.
pub fn render_text(findings: &[Finding]) -> String {
    findings
        .iter()
        .map(|finding| format!("{}\n", finding))
        .collect()
}
