//! Source file discovery.

use anyhow::{Context, Result};
use brief_core::config::ScanConfig;
use brief_core::language_for_path;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Per-directory ignore file honoured in addition to `.gitignore`.
pub const BRIEF_IGNORE: &str = ".briefignore";

/// A supported source file found by [`scan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Location on disk.
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-separated.
    pub rel_path: String,
    /// Language tag resolved from the extension.
    pub language: &'static str,
    pub size: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Matched files, sorted by relative path.
    pub files: Vec<FileEntry>,
    pub total_size: u64,
    /// Files seen but not kept (unsupported, filtered, too large).
    pub skipped_count: usize,
}

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub include_hidden: bool,
    pub max_file_size: u64,
    /// Extra ignore file: a bare name is looked up in every directory,
    /// anything else is read as a single gitignore-style file.
    pub ignore_file: Option<String>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::from(&ScanConfig::default())
    }
}

impl From<&ScanConfig> for ScanOptions {
    fn from(config: &ScanConfig) -> Self {
        Self {
            include_hidden: config.include_hidden,
            max_file_size: config.max_file_size,
            ignore_file: Some(config.ignore_file.clone()).filter(|f| !f.is_empty()),
            include: config.include.clone(),
            exclude: config.exclude.clone(),
        }
    }
}

/// Include/exclude glob filter applied to root-relative paths.
struct PathFilter {
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl PathFilter {
    fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        Ok(Self {
            include: build_globset(include).context("invalid --include glob")?,
            exclude: build_globset(exclude).context("invalid --exclude glob")?,
        })
    }

    fn allows(&self, rel_path: &str) -> bool {
        if let Some(ref inc) = self.include
            && !inc.is_match(rel_path)
        {
            return false;
        }
        if let Some(ref exc) = self.exclude
            && exc.is_match(rel_path)
        {
            return false;
        }
        true
    }
}

fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for p in patterns {
        builder.add(Glob::new(p).with_context(|| format!("bad pattern: {p}"))?);
    }
    Ok(Some(builder.build()?))
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.') && name != "." && name != ".."
}

fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Scan `root` (a directory or a single file) for supported source files.
pub fn scan(root: &Path, opts: &ScanOptions) -> Result<ScanResult> {
    let meta =
        std::fs::metadata(root).with_context(|| format!("path not found: {}", root.display()))?;
    let filter = PathFilter::new(&opts.include, &opts.exclude)?;
    let mut result = ScanResult::default();

    if meta.is_file() {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match check_file(root, name, meta.len(), opts, &filter) {
            Some(entry) => {
                result.total_size = entry.size;
                result.files.push(entry);
            }
            None => result.skipped_count = 1,
        }
        return Ok(result);
    }

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(!opts.include_hidden)
        .git_ignore(true)
        .require_git(false)
        .add_custom_ignore_filename(BRIEF_IGNORE)
        .filter_entry(|entry| entry.file_name() != ".git");
    if let Some(ref ignore_file) = opts.ignore_file {
        add_ignore_file(&mut builder, root, ignore_file);
    }

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        let Ok(meta) = entry.metadata() else {
            result.skipped_count += 1;
            continue;
        };
        let rel_path = relative_path(root, path);
        match check_file(path, rel_path, meta.len(), opts, &filter) {
            Some(file) => {
                debug!(path = %file.rel_path, language = file.language, "scanned");
                result.total_size += file.size;
                result.files.push(file);
            }
            None => result.skipped_count += 1,
        }
    }

    result.files.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
    Ok(result)
}

fn add_ignore_file(builder: &mut ignore::WalkBuilder, root: &Path, ignore_file: &str) {
    if ignore_file == ".gitignore" || ignore_file == BRIEF_IGNORE {
        return;
    }
    let candidate = Path::new(ignore_file);
    if candidate.components().count() == 1 && !candidate.is_absolute() {
        let under_root = root.join(candidate);
        if !under_root.is_file() && !candidate.is_file() {
            builder.add_custom_ignore_filename(ignore_file);
            return;
        }
        let path = if under_root.is_file() {
            under_root
        } else {
            candidate.to_path_buf()
        };
        if let Some(err) = builder.add_ignore(&path) {
            warn!("failed to read ignore file {}: {err}", path.display());
        }
        return;
    }
    if !candidate.is_file() {
        warn!("ignore file not found: {ignore_file}");
        return;
    }
    if let Some(err) = builder.add_ignore(candidate) {
        warn!("failed to read ignore file {ignore_file}: {err}");
    }
}

fn check_file(
    path: &Path,
    rel_path: String,
    size: u64,
    opts: &ScanOptions,
    filter: &PathFilter,
) -> Option<FileEntry> {
    let name = path.file_name()?.to_string_lossy();
    if !opts.include_hidden && is_hidden(&name) {
        return None;
    }
    let language = language_for_path(path)?;
    if !filter.allows(&rel_path) {
        return None;
    }
    if size > opts.max_file_size {
        warn!(
            "skipping {rel_path}: {size} bytes exceeds limit of {}",
            opts.max_file_size
        );
        return None;
    }
    Some(FileEntry {
        path: path.to_path_buf(),
        rel_path,
        language,
        size,
    })
}
