//! Error types for parsing and registration.

/// Failure of a single [`parse`](crate::parse) call. Terminal for that file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("failed to parse {language} source: {reason}")]
    ParseFailed { language: String, reason: String },
}

/// Which of a language's two queries a [`RegistryError::Query`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryRole {
    Signature,
    Import,
}

impl std::fmt::Display for QueryRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Signature => "signature",
            Self::Import => "import",
        })
    }
}

/// Failure to register a language.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("grammar for {language} is incompatible with the tree-sitter runtime: {source}")]
    Grammar {
        language: String,
        #[source]
        source: tree_sitter::LanguageError,
    },
    #[error("{role} query for {language} failed to compile: {source}")]
    Query {
        language: String,
        role: QueryRole,
        #[source]
        source: tree_sitter::QueryError,
    },
}
