//! Image registry keyed by bundle name.
//!
//! Records are kept in the order their bundle name was first seen, so the
//! report lists images in discovery order. Creation is explicit through
//! [`ImageRegistry::upsert`]; lookups through [`ImageRegistry::get`] never
//! create records.

use crate::bundle_name::bundle_name;
use crate::image::ImageRecord;
use crate::scanner::ImageReference;
use indexmap::IndexMap;
use std::path::Path;

#[derive(Debug, Default)]
pub struct ImageRegistry {
    images: IndexMap<String, ImageRecord>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record for `raw`'s bundle name, creating it if needed.
    pub fn upsert(&mut self, raw: &str) -> &mut ImageRecord {
        let name = bundle_name(raw);
        self.images
            .entry(name.clone())
            .or_insert_with(|| ImageRecord::new(name))
    }

    /// Looks up a record by its canonical bundle name.
    pub fn get(&self, bundle_name: &str) -> Option<&ImageRecord> {
        self.images.get(bundle_name)
    }

    /// Registers an image file found on disk.
    pub fn add_file(&mut self, path: &Path) {
        let raw = path.to_string_lossy().into_owned();
        self.upsert(&raw).add_file(raw.as_str());
    }

    /// Registers a textual reference found in a source file.
    pub fn add_reference(&mut self, reference: &ImageReference) {
        self.upsert(&reference.name).add_reference(&reference.file);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRecord> {
        self.images.values()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::SourceKind;
    use std::path::PathBuf;

    fn reference(name: &str, file: &str) -> ImageReference {
        ImageReference {
            name: name.to_string(),
            file: PathBuf::from(file),
            kind: SourceKind::ObjectiveC,
        }
    }

    #[test]
    fn upsert_creates_once() {
        let mut registry = ImageRegistry::new();
        registry.upsert("icon.png");
        registry.upsert("Images/icon@2x.png");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("icon").unwrap().bundle_name(), "icon");
    }

    #[test]
    fn get_does_not_create() {
        let registry = ImageRegistry::new();
        assert!(registry.get("icon").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn groups_files_by_bundle_name() {
        let mut registry = ImageRegistry::new();
        registry.add_file(Path::new("Images/logo.png"));
        registry.add_file(Path::new("Images/logo@2x.png"));
        registry.add_file(Path::new("Images/logo~ipad.png"));
        let logo = registry.get("logo").unwrap();
        assert_eq!(
            logo.image_files(),
            &["Images/logo.png", "Images/logo@2x.png", "Images/logo~ipad.png"]
        );
    }

    #[test]
    fn keeps_repeated_files() {
        let mut registry = ImageRegistry::new();
        registry.add_file(Path::new("a/icon.png"));
        registry.add_file(Path::new("a/icon.png"));
        assert_eq!(registry.get("icon").unwrap().image_files().len(), 2);
    }

    #[test]
    fn reference_without_file_creates_record() {
        let mut registry = ImageRegistry::new();
        registry.add_reference(&reference("ghost", "View.m"));
        let ghost = registry.get("ghost").unwrap();
        assert!(ghost.missing_image_files());
        assert_eq!(ghost.references(), &[PathBuf::from("View.m")]);
    }

    #[test]
    fn iterates_in_first_seen_order() {
        let mut registry = ImageRegistry::new();
        registry.add_file(Path::new("zebra.png"));
        registry.add_file(Path::new("apple.png"));
        registry.add_reference(&reference("mango", "A.m"));
        registry.add_reference(&reference("zebra", "B.m"));
        let names: Vec<_> = registry.iter().map(|r| r.bundle_name()).collect();
        assert_eq!(names, vec!["zebra", "apple", "mango"]);
    }
}
