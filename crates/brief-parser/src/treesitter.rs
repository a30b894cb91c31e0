//! Tree-sitter integration.

use crate::error::ParseError;

/// Parse source text and return the tree-sitter tree.
///
/// Error-recovered trees are returned as-is; only a missing tree is an error.
pub fn parse_source(
    tag: &str,
    source: &[u8],
    language: &tree_sitter::Language,
) -> Result<tree_sitter::Tree, ParseError> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(language)
        .map_err(|e| ParseError::ParseFailed {
            language: tag.to_string(),
            reason: e.to_string(),
        })?;
    parser.parse(source, None).ok_or_else(|| ParseError::ParseFailed {
        language: tag.to_string(),
        reason: "parser produced no tree".to_string(),
    })
}
