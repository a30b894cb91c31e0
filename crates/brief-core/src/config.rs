//! Configuration for scanning, extraction and output.
//!
//! Load order: `.brief/config.toml` → environment variables → defaults.
//! Command-line flags are layered on top by the binary.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::signature::{GoVisibility, ParseOptions};

/// Output formats accepted by `[output] format`.
pub const FORMATS: &[&str] = &["xml", "md", "markdown", "json"];

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BriefConfig {
    pub output: OutputConfig,
    pub extract: ExtractConfig,
    pub scan: ScanConfig,
}

/// Rendering of the packed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// One of `xml`, `md`, `markdown`, `json`.
    pub format: String,
    /// Write to this file instead of stdout.
    pub path: Option<PathBuf>,
    /// Include the directory tree.
    pub tree: bool,
    /// Estimate and report the token count of the output.
    pub tokens: bool,
}

/// What the extraction engine keeps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub include_body: bool,
    pub include_private: bool,
    pub include_imports: bool,
    pub go_visibility: GoVisibility,
}

/// Which files are read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub include_hidden: bool,
    /// Files larger than this many bytes are skipped.
    pub max_file_size: u64,
    /// Extra gitignore-style file honoured next to `.gitignore`.
    pub ignore_file: String,
    /// Glob patterns a relative path must match (any of). Empty means all.
    pub include: Vec<String>,
    /// Glob patterns that drop a relative path.
    pub exclude: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "xml".to_string(),
            path: None,
            tree: true,
            tokens: true,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include_hidden: false,
            max_file_size: 512_000,
            ignore_file: ".gitignore".to_string(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl ExtractConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            include_private: self.include_private,
            include_body: self.include_body,
            include_imports: self.include_imports,
            go_visibility: self.go_visibility,
        }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(var: &str, target: &mut T) {
    if let Ok(v) = std::env::var(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl BriefConfig {
    /// Load config from `.brief/config.toml` in the project root, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(".brief").join("config.toml");

        let mut config: Self = if config_path.is_file() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read {}", config_path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("invalid config in {}", config_path.display()))?
        } else {
            Self::default()
        };

        env_override("BRIEF_FORMAT", &mut config.output.format);
        env_override("BRIEF_MAX_FILE_SIZE", &mut config.scan.max_file_size);
        env_override("BRIEF_INCLUDE_BODY", &mut config.extract.include_body);
        env_override("BRIEF_INCLUDE_PRIVATE", &mut config.extract.include_private);
        env_override("BRIEF_INCLUDE_IMPORTS", &mut config.extract.include_imports);

        config.validate()?;
        Ok(config)
    }

    /// Reject values no later stage can act on.
    pub fn validate(&self) -> Result<()> {
        let format = self.output.format.to_lowercase();
        if !FORMATS.contains(&format.as_str()) {
            anyhow::bail!(
                "invalid format '{}' (expected one of: {})",
                self.output.format,
                FORMATS.join(", ")
            );
        }
        if self.scan.max_file_size == 0 {
            anyhow::bail!("max_file_size must be greater than 0");
        }
        Ok(())
    }
}
