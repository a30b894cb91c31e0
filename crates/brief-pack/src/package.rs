//! Scan → extract → render.

use crate::extract::extract_files;
use crate::format::{self, OutputFormat, PackageData};
use crate::scanner::{ScanOptions, scan};
use crate::tokens::count_tokens;
use crate::tree::build_tree;
use anyhow::Result;
use brief_core::config::BriefConfig;
use brief_parser::Registry;
use std::path::Path;
use tracing::{debug, info};

/// A rendered document plus run totals.
#[derive(Debug, Clone)]
pub struct PackageResult {
    pub content: String,
    pub format: OutputFormat,
    pub total_files: usize,
    pub total_signatures: usize,
    pub total_size: u64,
    /// `None` when token counting is disabled.
    pub total_tokens: Option<usize>,
    /// Files whose read or parse failed.
    pub error_count: usize,
    pub skipped_count: usize,
}

/// Runs the packaging pipeline for one configuration.
pub struct Packager<'a> {
    config: BriefConfig,
    registry: &'a Registry,
}

impl Packager<'static> {
    /// Packager over the built-in languages.
    pub fn new(config: BriefConfig) -> Self {
        Self::with_registry(config, brief_parser::default_registry())
    }
}

impl<'a> Packager<'a> {
    pub fn with_registry(config: BriefConfig, registry: &'a Registry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &BriefConfig {
        &self.config
    }

    /// Package `root` (a directory or a single source file).
    pub fn package(&self, root: &Path) -> Result<PackageResult> {
        let format: OutputFormat = self.config.output.format.parse()?;
        let opts = self.config.extract.parse_options();

        let scanned = scan(root, &ScanOptions::from(&self.config.scan))?;
        debug!(
            files = scanned.files.len(),
            skipped = scanned.skipped_count,
            "scan complete"
        );

        let files = extract_files(&scanned.files, self.registry, &opts);
        let total_signatures = files.iter().map(|f| f.signatures.len()).sum();
        let error_count = files.iter().filter(|f| !f.is_ok()).count();

        let tree = if self.config.output.tree {
            let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
            build_tree(&paths)
        } else {
            String::new()
        };

        let data = PackageData {
            tree,
            files,
            total_signatures,
            total_size: scanned.total_size,
            include_imports: opts.include_imports,
        };
        let content = format::render(&data, format)?;
        let total_tokens = self
            .config
            .output
            .tokens
            .then(|| count_tokens(&content));

        info!(
            files = data.files.len(),
            signatures = total_signatures,
            errors = error_count,
            "packaged {}",
            root.display()
        );

        Ok(PackageResult {
            content,
            format,
            total_files: data.files.len(),
            total_signatures,
            total_size: data.total_size,
            total_tokens,
            error_count,
            skipped_count: scanned.skipped_count,
        })
    }
}
