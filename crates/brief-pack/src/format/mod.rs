//! Output renderers.

pub mod json;
pub mod markdown;
pub mod xml;

use crate::extract::FileData;
use anyhow::{Result, bail};
use serde::Serialize;
use std::str::FromStr;

/// Output format of a packaged document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Xml,
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Markdown => "markdown",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "xml" => Ok(Self::Xml),
            "md" | "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => bail!("unsupported format: {other} (expected xml, md, markdown or json)"),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a renderer needs.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageData {
    /// Directory tree, empty when disabled.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tree: String,
    pub files: Vec<FileData>,
    pub total_signatures: usize,
    pub total_size: u64,
    #[serde(skip)]
    pub include_imports: bool,
}

/// Render `data` in the given format.
pub fn render(data: &PackageData, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Xml => Ok(xml::render(data)),
        OutputFormat::Markdown => Ok(markdown::render(data)),
        OutputFormat::Json => json::render(data),
    }
}

/// Placeholder shown in a code block for a file with no signatures.
pub(crate) fn empty_comment(language: &str) -> &'static str {
    match language {
        "python" => "# (empty)",
        _ => "// (empty)",
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::PackageData;
    use crate::extract::FileData;
    use brief_core::{ImportExport, ImportKind, Signature, SignatureKind};

    fn sig(name: &str, kind: SignatureKind, text: &str, doc: &str, language: &str) -> Signature {
        Signature {
            name: name.to_string(),
            kind,
            text: text.to_string(),
            doc: doc.to_string(),
            line: 3,
            end_line: 5,
            language: language.to_string(),
            exported: true,
        }
    }

    pub fn sample() -> PackageData {
        let files = vec![
            FileData {
                path: "cmd/main.go".to_string(),
                language: "go".to_string(),
                signatures: vec![
                    sig(
                        "Less",
                        SignatureKind::Function,
                        "func Less[T any](a, b T) bool",
                        "Less compares a & b.",
                        "go",
                    ),
                    sig("Run", SignatureKind::Function, "func Run() error", "", "go"),
                ],
                imports: vec![ImportExport {
                    kind: ImportKind::Import,
                    path: "import \"fmt\"".to_string(),
                    name: String::new(),
                    line: 3,
                }],
                error: None,
                size: 120,
            },
            FileData {
                path: "lib/empty.py".to_string(),
                language: "python".to_string(),
                size: 10,
                ..FileData::default()
            },
            FileData {
                path: "lib/bad.ts".to_string(),
                language: "typescript".to_string(),
                error: Some("read failed: denied".to_string()),
                ..FileData::default()
            },
        ];
        PackageData {
            tree: "cmd\n└── main.go".to_string(),
            files,
            total_signatures: 2,
            total_size: 130,
            include_imports: true,
        }
    }
}
