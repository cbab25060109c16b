//! A single logical image: every file and reference sharing one bundle name.

use crate::bundle_name::{basename, is_ipad_specific, is_iphone_specific, is_retina};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Files and references grouped under one bundle name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    bundle_name: String,
    image_files: Vec<String>,
    references: Vec<PathBuf>,
}

impl ImageRecord {
    pub fn new(bundle_name: impl Into<String>) -> Self {
        Self {
            bundle_name: bundle_name.into(),
            image_files: Vec::new(),
            references: Vec::new(),
        }
    }

    pub fn bundle_name(&self) -> &str {
        &self.bundle_name
    }

    /// Raw image paths in discovery order. Duplicates are kept.
    pub fn image_files(&self) -> &[String] {
        &self.image_files
    }

    /// Source files that mention this image, in scan order.
    pub fn references(&self) -> &[PathBuf] {
        &self.references
    }

    pub fn add_file(&mut self, path: impl Into<String>) {
        self.image_files.push(path.into());
    }

    pub fn add_reference(&mut self, source: &Path) {
        self.references.push(source.to_path_buf());
    }

    /// The first discovered file, used when naming the image in output.
    pub fn representative_name(&self) -> Option<&str> {
        self.image_files.first().map(String::as_str)
    }

    /// Representative file name, falling back to the bundle name.
    pub fn display_name(&self) -> &str {
        self.representative_name().unwrap_or(&self.bundle_name)
    }

    pub fn missing_image_files(&self) -> bool {
        self.image_files.is_empty()
    }

    pub fn missing_references(&self) -> bool {
        self.references.is_empty()
    }

    pub fn missing_retina(&self) -> bool {
        !self.missing_image_files() && !self.image_files.iter().any(|f| is_retina(f))
    }

    pub fn missing_non_retina(&self) -> bool {
        !self.missing_image_files() && self.image_files.iter().all(|f| is_retina(f))
    }

    /// Only `~ipad` variants exist.
    pub fn missing_iphone_versions(&self) -> bool {
        !self.missing_image_files() && self.image_files.iter().all(|f| is_ipad_specific(f))
    }

    /// Only `~iphone` variants exist.
    pub fn missing_ipad_versions(&self) -> bool {
        !self.missing_image_files() && self.image_files.iter().all(|f| is_iphone_specific(f))
    }

    /// Two or more files share a basename, regardless of directory.
    pub fn duplicate_files(&self) -> bool {
        let mut seen = HashSet::new();
        self.image_files
            .iter()
            .any(|file| !seen.insert(basename(file)))
    }
}
