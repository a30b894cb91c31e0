//! Parallel per-file signature extraction.

use crate::scanner::FileEntry;
use brief_core::{ImportExport, ParseOptions, Signature};
use brief_parser::Registry;
use rayon::prelude::*;
use serde::Serialize;
use tracing::warn;

/// One scanned file with everything extracted from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileData {
    pub path: String,
    pub language: String,
    pub signatures: Vec<Signature>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<ImportExport>,
    /// Set when the file could not be read or parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    pub size: u64,
}

impl FileData {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Extract every file in `files`, in parallel, keeping input order.
///
/// Failures are recorded on the returned [`FileData`] rather than aborting.
pub fn extract_files(files: &[FileEntry], registry: &Registry, opts: &ParseOptions) -> Vec<FileData> {
    files
        .par_iter()
        .map(|file| extract_file(file, registry, opts))
        .collect()
}

fn extract_file(file: &FileEntry, registry: &Registry, opts: &ParseOptions) -> FileData {
    let mut data = FileData {
        path: file.rel_path.clone(),
        language: file.language.to_string(),
        size: file.size,
        ..FileData::default()
    };

    let source = match std::fs::read(&file.path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            warn!("failed to read {}: {e}", file.rel_path);
            data.error = Some(format!("read failed: {e}"));
            return data;
        }
    };

    match registry.parse(&source, file.language, opts) {
        Ok(result) => {
            data.signatures = result.signatures;
            data.imports = result.imports;
        }
        Err(e) => {
            warn!("failed to parse {}: {e}", file.rel_path);
            data.error = Some(e.to_string());
        }
    }
    data
}
