//! Canonical bundle names.
//!
//! iOS resolves `imageNamed:` lookups against a bundle name that ignores the
//! `@2x` resolution marker, the `~ipad`/`~iphone` device qualifier and the
//! `.png` extension. Files and references are grouped by that name.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

fn suffix_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?i)(@2x)?(~[a-z]+)?\.png$").expect("invalid suffix regex"))
}

fn ipad_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)~ipad(\.png)?$").expect("invalid ipad regex"))
}

fn iphone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)~iphone(\.png)?$").expect("invalid iphone regex"))
}

/// Maps a raw file path or referenced image name to its bundle name.
///
/// Takes the basename and strips a trailing `(@2x)?(~qualifier)?.png` suffix.
/// Markers are only removed together with the extension, so a bare name such
/// as `logo` comes back unchanged.
pub fn bundle_name(raw: &str) -> String {
    let base = basename(raw);
    suffix_pattern().replace(base, "").into_owned()
}

/// Returns the final path segment of `raw`, or `raw` itself if it has none.
pub fn basename(raw: &str) -> &str {
    Path::new(raw)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(raw)
}

/// True if the name carries the `@2x` Retina marker anywhere.
pub fn is_retina(name: &str) -> bool {
    name.contains("@2x")
}

/// True if the name ends in an `~ipad` qualifier, with or without `.png`.
pub fn is_ipad_specific(name: &str) -> bool {
    ipad_pattern().is_match(name)
}

/// True if the name ends in an `~iphone` qualifier, with or without `.png`.
pub fn is_iphone_specific(name: &str) -> bool {
    iphone_pattern().is_match(name)
}
