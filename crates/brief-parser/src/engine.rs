//! Signature extraction over a parsed tree.

use crate::error::ParseError;
use crate::imports;
use crate::languages::map_kind;
use crate::registry::{CaptureRole, CompiledLanguage, Registry};
use crate::treesitter::parse_source;
use brief_core::{ImportExport, ParseOptions, Signature};
use std::collections::HashSet;
use tree_sitter::{Node, StreamingIterator};

/// Everything extracted from one source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    pub language: String,
    pub signatures: Vec<Signature>,
    pub imports: Vec<ImportExport>,
}

/// Node kinds treated as comments when looking for documentation.
const COMMENT_KINDS: &[&str] = &["comment", "line_comment", "block_comment"];

/// Nodes that wrap a declaration; comments sit above the wrapper.
const WRAPPER_KINDS: &[&str] = &["decorated_definition", "export_statement", "template_declaration"];

impl Registry {
    /// Extract signatures (and optionally imports) from `source`.
    pub fn parse(
        &self,
        source: &str,
        tag: &str,
        opts: &ParseOptions,
    ) -> Result<ParseResult, ParseError> {
        let lang = self
            .get(tag)
            .ok_or_else(|| ParseError::UnsupportedLanguage(tag.to_string()))?;
        let tree = parse_source(tag, source.as_bytes(), lang.grammar())?;
        let root = tree.root_node();

        let signatures = extract_signatures(&lang, root, source, tag, opts);
        let imports = if opts.include_imports {
            imports::extract(&lang, root, source)
        } else {
            Vec::new()
        };

        Ok(ParseResult {
            language: tag.to_string(),
            signatures,
            imports,
        })
    }
}

/// Extract with the process-wide default registry.
pub fn parse(source: &str, tag: &str, opts: &ParseOptions) -> Result<ParseResult, ParseError> {
    crate::registry::default_registry().parse(source, tag, opts)
}

/// Tags registered in the default registry.
pub fn languages() -> Vec<String> {
    crate::registry::default_registry().languages()
}

#[derive(Default)]
struct Candidate<'t> {
    name: String,
    text: String,
    doc: Option<String>,
    line: usize,
    end_line: usize,
    decl: Option<Node<'t>>,
    kind_node: Option<Node<'t>>,
}

fn extract_signatures(
    lang: &CompiledLanguage,
    root: Node<'_>,
    source: &str,
    tag: &str,
    opts: &ParseOptions,
) -> Vec<Signature> {
    let def = lang.definition();
    let mut out = Vec::new();
    let mut seen_lines = HashSet::new();
    let mut cursor = tree_sitter::QueryCursor::new();
    let mut matches = cursor.matches(lang.query(), root, source.as_bytes());

    while let Some(m) = matches.next() {
        let mut cand = Candidate::default();
        for cap in m.captures {
            let node = cap.node;
            let text = &source[node.byte_range()];
            match lang.role(cap.index) {
                Some(CaptureRole::Name) => cand.name = text.to_string(),
                Some(CaptureRole::Signature) => {
                    cand.text = text.trim().to_string();
                    cand.line = node.start_position().row + 1;
                    cand.end_line = node.end_position().row + 1;
                    cand.decl = Some(node);
                }
                Some(CaptureRole::Doc) => cand.doc = Some(clean_comment(text)),
                Some(CaptureRole::Kind) => cand.kind_node = Some(node),
                _ => {}
            }
        }

        let Some(node_type) = cand.kind_node.or(cand.decl).map(|n| n.kind()) else {
            continue;
        };
        let kind = map_kind(def.kind_mapping(), node_type);
        let Some(kind) = def.reclassify(node_type, kind, &cand.text) else {
            continue;
        };

        if cand.name.is_empty() || cand.text.is_empty() {
            continue;
        }
        if !seen_lines.insert(cand.line) {
            continue;
        }

        let exported = def.is_exported(&cand.name, &cand.text, opts);
        if !opts.include_private && !exported {
            continue;
        }

        let text = if opts.include_body {
            cand.text
        } else {
            def.strip_body(&cand.text, &kind)
        };
        let doc = cand
            .doc
            .or_else(|| cand.decl.map(|n| preceding_doc(n, source)))
            .unwrap_or_default();

        out.push(Signature {
            name: cand.name,
            kind,
            text,
            doc,
            line: cand.line,
            end_line: cand.end_line,
            language: tag.to_string(),
            exported,
        });
    }

    out
}

fn is_comment(node: &Node<'_>) -> bool {
    COMMENT_KINDS.contains(&node.kind())
}

/// The contiguous comment block directly above a declaration, cleaned.
fn preceding_doc(decl: Node<'_>, source: &str) -> String {
    let mut anchor = decl;
    while let Some(parent) = anchor.parent() {
        if WRAPPER_KINDS.contains(&parent.kind())
            && anchor.prev_named_sibling().is_none_or(|s| !is_comment(&s))
        {
            anchor = parent;
        } else {
            break;
        }
    }

    let mut block = Vec::new();
    let mut next_row = anchor.start_position().row;
    let mut current = anchor.prev_named_sibling();
    while let Some(node) = current {
        if !is_comment(&node) || node.end_position().row + 1 < next_row {
            break;
        }
        // A trailing comment belongs to the code on its own line.
        if node
            .prev_sibling()
            .is_some_and(|p| p.end_position().row == node.start_position().row)
        {
            break;
        }
        block.push(clean_comment(&source[node.byte_range()]));
        next_row = node.start_position().row;
        current = node.prev_named_sibling();
    }

    block.reverse();
    block.retain(|c| !c.is_empty());
    block.join("\n")
}

/// Strip comment markers: `//`, `/* */` (with leading `*` on continuation
/// lines) and `#`.
pub fn clean_comment(text: &str) -> String {
    let text = text.trim();
    if let Some(body) = text.strip_prefix("/*") {
        let body = body.strip_suffix("*/").unwrap_or(body);
        let body = body.trim_start_matches(['*', '!']);
        let lines: Vec<&str> = body
            .lines()
            .map(|l| {
                let l = l.trim();
                l.strip_prefix('*').map_or(l, str::trim_start)
            })
            .collect();
        return lines.join("\n").trim().to_string();
    }
    if text.starts_with("//") {
        return text.trim_start_matches('/').trim_start_matches('!').trim().to_string();
    }
    if text.starts_with('#') {
        return text.trim_start_matches('#').trim().to_string();
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use brief_core::SignatureKind;

    #[test]
    fn test_clean_line_comments() {
        assert_eq!(clean_comment("// Add sums."), "Add sums.");
        assert_eq!(clean_comment("/// doc"), "doc");
        assert_eq!(clean_comment("# note"), "note");
    }

    #[test]
    fn test_clean_block_comments() {
        assert_eq!(clean_comment("/* short */"), "short");
        assert_eq!(
            clean_comment("/**\n * Adds two numbers.\n * @param a first\n */"),
            "Adds two numbers.\n@param a first"
        );
    }

    #[test]
    fn test_signature_kind_for_unmapped_node() {
        let kind = map_kind(&[], "weird_node");
        assert_eq!(kind, SignatureKind::Other("weird_node".to_string()));
    }
}
