//! Extracted declaration records and parse options.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The semantic category of an extracted declaration.
///
/// Grammar node types are mapped onto this vocabulary per language. Node types
/// without a mapping are carried through verbatim in [`SignatureKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SignatureKind {
    Function,
    Method,
    Class,
    Struct,
    Interface,
    Enum,
    Typedef,
    Macro,
    Type,
    Variable,
    Constructor,
    Destructor,
    Namespace,
    Template,
    Record,
    Annotation,
    Field,
    Export,
    /// Raw grammar node type with no entry in the language's kind table.
    Other(String),
}

impl SignatureKind {
    /// Parse a kind word. Unknown words become [`SignatureKind::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "function" => Self::Function,
            "method" => Self::Method,
            "class" => Self::Class,
            "struct" => Self::Struct,
            "interface" => Self::Interface,
            "enum" => Self::Enum,
            "typedef" => Self::Typedef,
            "macro" => Self::Macro,
            "type" => Self::Type,
            "variable" => Self::Variable,
            "constructor" => Self::Constructor,
            "destructor" => Self::Destructor,
            "namespace" => Self::Namespace,
            "template" => Self::Template,
            "record" => Self::Record,
            "annotation" => Self::Annotation,
            "field" => Self::Field,
            "export" => Self::Export,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Function => "function",
            Self::Method => "method",
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Typedef => "typedef",
            Self::Macro => "macro",
            Self::Type => "type",
            Self::Variable => "variable",
            Self::Constructor => "constructor",
            Self::Destructor => "destructor",
            Self::Namespace => "namespace",
            Self::Template => "template",
            Self::Record => "record",
            Self::Annotation => "annotation",
            Self::Field => "field",
            Self::Export => "export",
            Self::Other(raw) => raw,
        }
    }

    /// Kinds whose body starts after a parameter list.
    pub fn is_callable(&self) -> bool {
        matches!(
            self,
            Self::Function | Self::Method | Self::Constructor | Self::Destructor | Self::Export
        )
    }
}

impl From<String> for SignatureKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<SignatureKind> for String {
    fn from(kind: SignatureKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for SignatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    pub name: String,
    pub kind: SignatureKind,
    /// Declaration text, body-free unless bodies were requested.
    pub text: String,
    /// Cleaned text of the nearest preceding comment, or empty.
    pub doc: String,
    /// 1-indexed first line of the full declaration span.
    pub line: usize,
    /// 1-indexed last line of the full declaration span.
    pub end_line: usize,
    pub language: String,
    pub exported: bool,
}

/// Whether an [`ImportExport`] record is an import or an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportKind {
    Import,
    Export,
}

impl ImportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Export => "export",
        }
    }
}

/// One import, include or export statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportExport {
    #[serde(rename = "type")]
    pub kind: ImportKind,
    /// Normalized module path, or the full statement for languages whose
    /// query captures the whole statement.
    pub path: String,
    /// Exported symbol name, when captured separately from a path.
    pub name: String,
    pub line: usize,
}

/// How Go declarations are judged public.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoVisibility {
    /// Exported iff the identifier starts with an uppercase ASCII letter.
    #[default]
    Capitalized,
    /// Every package-level declaration the query captures is public.
    PackageLevel,
}

/// Options for a single parse call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub include_private: bool,
    pub include_body: bool,
    pub include_imports: bool,
    pub go_visibility: GoVisibility,
}
