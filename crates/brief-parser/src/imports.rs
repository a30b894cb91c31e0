//! Import/export extraction: a second query pass over the same tree.

use crate::registry::{CaptureRole, CompiledLanguage};
use brief_core::{ImportExport, ImportKind};
use std::collections::HashSet;
use tree_sitter::StreamingIterator;

/// Default path normalisation.
///
/// Whole statements (`import …`, `from …`, `#include …`) pass through trimmed;
/// anything else loses surrounding quotes and angle brackets.
pub fn clean_import_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("import ")
        || trimmed.starts_with("from ")
        || trimmed.starts_with("#include")
    {
        return trimmed.to_string();
    }
    trimmed
        .trim_matches(['"', '\'', '`'])
        .trim_matches(['<', '>'])
        .to_string()
}

/// Run the import query, if any, and collect deduplicated records in match order.
pub(crate) fn extract(
    lang: &CompiledLanguage,
    root: tree_sitter::Node<'_>,
    source: &str,
) -> Vec<ImportExport> {
    let Some(query) = lang.import_query() else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut cursor = tree_sitter::QueryCursor::new();
    let mut matches = cursor.matches(query, root, source.as_bytes());

    while let Some(m) = matches.next() {
        let mut kind = ImportKind::Import;
        let mut path = String::new();
        let mut name = String::new();
        let mut line = 0;
        let mut reexport = false;

        for cap in m.captures {
            let text = &source[cap.node.byte_range()];
            match lang.import_role(cap.index) {
                Some(CaptureRole::ImportPath) => {
                    path = lang.definition().normalize_import(text);
                    line = cap.node.start_position().row + 1;
                    kind = ImportKind::Import;
                }
                Some(CaptureRole::ExportName) => {
                    name = text.to_string();
                    line = cap.node.start_position().row + 1;
                    kind = ImportKind::Export;
                }
                Some(CaptureRole::ExportType) => reexport = true,
                _ => {}
            }
        }

        if reexport && !path.is_empty() {
            kind = ImportKind::Export;
        }
        if path.is_empty() && name.is_empty() {
            continue;
        }
        if seen.insert((kind, path.clone(), name.clone())) {
            out.push(ImportExport {
                kind,
                path,
                name,
                line,
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_statements_pass_through() {
        assert_eq!(clean_import_path("  import java.util.List;\n"), "import java.util.List;");
        assert_eq!(clean_import_path("#include <stdio.h>\n"), "#include <stdio.h>");
        assert_eq!(clean_import_path("from . import x"), "from . import x");
    }

    #[test]
    fn test_quotes_and_brackets_stripped() {
        assert_eq!(clean_import_path("\"./util\""), "./util");
        assert_eq!(clean_import_path("'react'"), "react");
        assert_eq!(clean_import_path("<vector>"), "vector");
        assert_eq!(clean_import_path("os.path"), "os.path");
    }
}
