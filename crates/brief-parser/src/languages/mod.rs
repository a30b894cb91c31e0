//! Per-language query sets and post-processing rules.
//!
//! Each supported language implements [`LanguageQuery`]: a grammar, the
//! signature and import queries, a node-type → kind table, and the hooks the
//! engine calls for reclassification, visibility and body stripping.

mod c;
mod cpp;
mod go;
mod java;
mod python;
mod typescript;

pub use c::C;
pub use cpp::Cpp;
pub use go::Go;
pub use java::Java;
pub use python::Python;
pub use typescript::TypeScript;

use brief_core::{ParseOptions, SignatureKind};
use std::sync::Arc;

/// Capture names used by every signature query.
pub const CAPTURE_NAME: &str = "name";
pub const CAPTURE_SIGNATURE: &str = "signature";
pub const CAPTURE_DOC: &str = "doc";
pub const CAPTURE_KIND: &str = "kind";

/// Capture names used by import queries.
pub const CAPTURE_IMPORT_PATH: &str = "import_path";
pub const CAPTURE_EXPORT_NAME: &str = "export_name";
pub const CAPTURE_EXPORT_TYPE: &str = "export_type";

pub const SIGNATURE_CAPTURES: &[&str] = &[CAPTURE_NAME, CAPTURE_SIGNATURE, CAPTURE_DOC, CAPTURE_KIND];

/// Everything the engine needs to know about one language.
pub trait LanguageQuery: Send + Sync {
    fn grammar(&self) -> tree_sitter::Language;

    /// Signature query source.
    fn query(&self) -> &str;

    /// Import/export query source, if the language has one.
    fn import_query(&self) -> Option<&str> {
        None
    }

    /// Capture names the signature query binds to roles.
    fn captures(&self) -> &[&str] {
        SIGNATURE_CAPTURES
    }

    /// Grammar node type → kind word. Unlisted node types keep their raw name.
    fn kind_mapping(&self) -> &[(&str, &str)];

    /// Adjust the mapped kind of a candidate. `None` drops the candidate.
    fn reclassify(&self, _node_type: &str, kind: SignatureKind, _text: &str) -> Option<SignatureKind> {
        Some(kind)
    }

    /// Whether a declaration is part of the public surface.
    fn is_exported(&self, name: &str, _text: &str, _opts: &ParseOptions) -> bool {
        !name.is_empty()
    }

    /// Body-free form of a declaration. Kinds without a rule keep their text.
    fn strip_body(&self, text: &str, _kind: &SignatureKind) -> String {
        text.trim().to_string()
    }

    /// Normalize a captured import path.
    fn normalize_import(&self, raw: &str) -> String {
        crate::imports::clean_import_path(raw)
    }
}

/// Look up a node type in a kind table.
pub(crate) fn map_kind(table: &[(&str, &str)], node_type: &str) -> SignatureKind {
    table
        .iter()
        .find(|(node, _)| *node == node_type)
        .map_or_else(|| SignatureKind::from_name(node_type), |(_, kind)| SignatureKind::from_name(kind))
}

/// The built-in language set, keyed by registry tag.
pub fn builtins() -> Vec<(&'static str, Arc<dyn LanguageQuery>)> {
    fn entry(
        tag: &'static str,
        lang: impl LanguageQuery + 'static,
    ) -> (&'static str, Arc<dyn LanguageQuery>) {
        (tag, Arc::new(lang))
    }

    vec![
        entry("go", Go),
        entry("typescript", TypeScript::typescript()),
        entry("javascript", TypeScript::typescript()),
        entry("tsx", TypeScript::tsx()),
        entry("jsx", TypeScript::tsx()),
        entry("python", Python),
        entry("c", C),
        entry("cpp", Cpp),
        entry("java", Java),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_kind_falls_back_to_node_type() {
        let table = &[("function_declaration", "function")];
        assert_eq!(map_kind(table, "function_declaration"), SignatureKind::Function);
        assert_eq!(
            map_kind(table, "preproc_if"),
            SignatureKind::Other("preproc_if".to_string())
        );
    }

    #[test]
    fn test_builtin_queries_compile() {
        for (tag, lang) in builtins() {
            let grammar = lang.grammar();
            if let Err(e) = tree_sitter::Query::new(&grammar, lang.query()) {
                panic!("{tag} signature query: {e}");
            }
            if let Some(src) = lang.import_query()
                && let Err(e) = tree_sitter::Query::new(&grammar, src)
            {
                panic!("{tag} import query: {e}");
            }
        }
    }
}
