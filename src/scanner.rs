//! Project tree scanner.
//!
//! Recursively walks the project root to collect `.png` files and the source
//! files that may mention them. Entries whose names start with `.` are skipped
//! below the root, along with anything matching a user-supplied exclude glob.
//! Source files are searched with plain regular expressions; quoting and
//! escapes are not interpreted.

use crate::text::decode_source;
use anyhow::{Context, Result};
use glob::Pattern;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use walkdir::{DirEntry, WalkDir};

/// Image files are matched case-sensitively, like a shell `*.png` glob.
pub const IMAGE_EXTENSION: &str = ".png";

/// Kinds of source file that can reference an image by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// `[UIImage imageNamed:@"name"]`
    ObjectiveC,
    /// `UIImage(named: "name")`
    Swift,
    /// Interface Builder documents, which name images as `foo.png` attributes.
    Interface,
    /// Property lists, which name images as `<string>foo.png</string>` values.
    PropertyList,
}

impl SourceKind {
    /// Scan order for reference collection.
    pub const ALL: [SourceKind; 4] = [
        SourceKind::ObjectiveC,
        SourceKind::Swift,
        SourceKind::Interface,
        SourceKind::PropertyList,
    ];

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            SourceKind::ObjectiveC => &[".m", ".mm"],
            SourceKind::Swift => &[".swift"],
            SourceKind::Interface => &[".xib", ".storyboard"],
            SourceKind::PropertyList => &[".plist"],
        }
    }

    fn pattern(self) -> &'static Regex {
        static OBJC: OnceLock<Regex> = OnceLock::new();
        static SWIFT: OnceLock<Regex> = OnceLock::new();
        static INTERFACE: OnceLock<Regex> = OnceLock::new();
        static PLIST: OnceLock<Regex> = OnceLock::new();

        match self {
            SourceKind::ObjectiveC => OBJC.get_or_init(|| {
                Regex::new(r#"imageNamed:@"([^"]+)""#).expect("invalid imageNamed regex")
            }),
            SourceKind::Swift => SWIFT.get_or_init(|| {
                Regex::new(r#"UIImage\(named:\s*"([^"]+)""#).expect("invalid UIImage regex")
            }),
            SourceKind::Interface => INTERFACE
                .get_or_init(|| Regex::new(r#"(?i)[^"]+\.png"#).expect("invalid interface regex")),
            SourceKind::PropertyList => PLIST
                .get_or_init(|| Regex::new(r"(?i)[^>]+\.png").expect("invalid plist regex")),
        }
    }

    /// Returns every image name mentioned in `source`, in order of appearance.
    ///
    /// Code patterns yield the quoted literal; document patterns yield the
    /// whole matched run, which may still carry a directory prefix.
    pub fn extract_names(self, source: &str) -> Vec<String> {
        self.pattern()
            .captures_iter(source)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn matches_file(self, name: &str) -> bool {
        self.extensions().iter().any(|ext| name.ends_with(ext))
    }
}

/// An image name found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageReference {
    /// Name as written in the source, before canonicalisation.
    pub name: String,
    /// Source file containing the reference.
    pub file: PathBuf,
    pub kind: SourceKind,
}

/// Decides which directory entries the walk skips.
#[derive(Debug, Clone)]
pub struct ScanFilter {
    excludes: Vec<Pattern>,
    default_excludes: bool,
}

impl Default for ScanFilter {
    fn default() -> Self {
        Self {
            excludes: Vec::new(),
            default_excludes: true,
        }
    }
}

impl ScanFilter {
    /// Builds a filter from glob patterns such as `Pods` or `Vendor/**`.
    ///
    /// Patterns are matched against both the entry's file name and its path
    /// relative to the scan root.
    pub fn new(excludes: &[String], default_excludes: bool) -> Result<Self> {
        let excludes = excludes
            .iter()
            .map(|raw| {
                Pattern::new(raw).with_context(|| format!("Invalid exclude pattern '{}'", raw))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            excludes,
            default_excludes,
        })
    }

    fn is_excluded(&self, root: &Path, entry: &DirEntry) -> bool {
        // The root is always scanned, even when given as `.` or a dot-directory.
        if entry.depth() == 0 {
            return false;
        }

        let name = entry.file_name().to_string_lossy();
        if self.default_excludes && name.starts_with('.') {
            return true;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        self.excludes
            .iter()
            .any(|pattern| pattern.matches(&name) || pattern.matches_path(relative))
    }
}

/// Collects every `.png` file under `root`, as paths relative to `root`.
pub fn collect_image_files(root: &Path, filter: &ScanFilter) -> Result<Vec<PathBuf>> {
    let files = walk_files(root, filter, |name| name.ends_with(IMAGE_EXTENSION))?;
    Ok(files
        .into_iter()
        .map(|path| relative_to(root, &path))
        .collect())
}

/// Collects every source file of `kind` under `root`.
///
/// Returned paths include the root so they can be read directly.
pub fn collect_source_files(
    root: &Path,
    kind: SourceKind,
    filter: &ScanFilter,
) -> Result<Vec<PathBuf>> {
    walk_files(root, filter, |name| kind.matches_file(name))
}

fn walk_files(
    root: &Path,
    filter: &ScanFilter,
    wanted: impl Fn(&str) -> bool,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !filter.is_excluded(root, e))
    {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        // Links are not followed while walking, so a link loop cannot abort the
        // run; a link that resolves to a file still counts as one.
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if is_file && wanted(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Reads `file` and extracts the image names it mentions.
///
/// The recorded source path is `file` relative to `root`.
pub fn extract_references(
    root: &Path,
    file: &Path,
    kind: SourceKind,
) -> Result<Vec<ImageReference>> {
    let bytes =
        std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let source = decode_source(&bytes);
    let display = relative_to(root, file);

    Ok(kind
        .extract_names(&source)
        .into_iter()
        .map(|name| ImageReference {
            name,
            file: display.clone(),
            kind,
        })
        .collect())
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
