//! ios-image-audit library for checking image assets in iOS projects.
//!
//! The audit runs in three phases:
//!
//! 1. **Scanning**: collect `.png` files and extract image names from
//!    Objective-C, Swift, Interface Builder and property-list sources
//! 2. **Grouping**: register files and references under their bundle name,
//!    the name iOS resolves `imageNamed:` lookups against
//! 3. **Checking**: report missing files, missing references, missing
//!    resolution or device variants, and duplicate files
//!
//! # Example
//!
//! ```no_run
//! use ios_image_audit::{ScanFilter, audit};
//! use std::path::Path;
//!
//! let result = audit(Path::new("."), &ScanFilter::default()).unwrap();
//! for finding in &result.findings {
//!     println!("{}", finding);
//! }
//! ```

pub mod audit;
pub mod bundle_name;
pub mod image;
pub mod registry;
pub mod report;
pub mod scanner;
pub mod text;

// Re-export commonly used types at crate root
pub use audit::{AuditResult, Diagnostics, audit};
pub use image::ImageRecord;
pub use registry::ImageRegistry;
pub use report::Finding;
pub use scanner::{ImageReference, ScanFilter, SourceKind};
