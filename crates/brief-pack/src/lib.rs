//! Packaging pipeline for brief.
//!
//! Turns a directory (or a single file) into one document of extracted
//! signatures:
//!
//! - **scanner**: gitignore-aware discovery of supported source files
//! - **extract**: parallel per-file signature extraction
//! - **tree**: ASCII directory tree of the scanned files
//! - **tokens**: rough token estimate of the rendered output
//! - **format**: XML, Markdown and JSON renderers
//! - **package**: the `Packager` tying the steps together

pub mod extract;
pub mod format;
pub mod package;
pub mod scanner;
pub mod tokens;
pub mod tree;

pub use extract::{FileData, extract_files};
pub use format::{OutputFormat, PackageData};
pub use package::{PackageResult, Packager};
pub use scanner::{FileEntry, ScanOptions, ScanResult, scan};
