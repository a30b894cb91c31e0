use super::LanguageQuery;
use crate::strip;
use brief_core::SignatureKind;

/// TypeScript and JavaScript. The TSX grammar variant also parses JSX.
pub struct TypeScript {
    tsx: bool,
}

impl TypeScript {
    pub fn typescript() -> Self {
        Self { tsx: false }
    }

    pub fn tsx() -> Self {
        Self { tsx: true }
    }
}

const QUERY: &str = r"
(function_declaration
  name: (identifier) @name) @signature @kind

(export_statement
  (function_declaration
    name: (identifier) @name)) @signature @kind

(lexical_declaration
  (variable_declarator
    name: (identifier) @name
    value: (arrow_function))) @signature @kind

(method_definition
  name: (property_identifier) @name) @signature @kind

(class_declaration
  name: (type_identifier) @name) @signature @kind

(abstract_class_declaration
  name: (type_identifier) @name) @signature @kind

(interface_declaration
  name: (type_identifier) @name) @signature @kind

(type_alias_declaration
  name: (type_identifier) @name) @signature @kind

(enum_declaration
  name: (identifier) @name) @signature @kind
";

const IMPORT_QUERY: &str = r"
(import_statement
  source: (string) @import_path)

(export_statement
  source: (string) @import_path) @export_type

(export_statement
  declaration: (function_declaration
    name: (identifier) @export_name))

(export_statement
  declaration: (class_declaration
    name: (type_identifier) @export_name))

(export_statement
  declaration: (abstract_class_declaration
    name: (type_identifier) @export_name))

(export_statement
  declaration: (interface_declaration
    name: (type_identifier) @export_name))

(export_statement
  declaration: (type_alias_declaration
    name: (type_identifier) @export_name))

(export_statement
  declaration: (enum_declaration
    name: (identifier) @export_name))

(export_statement
  declaration: (lexical_declaration
    (variable_declarator
      name: (identifier) @export_name)))

(export_statement
  (export_clause
    (export_specifier
      name: (identifier) @export_name)))
";

const KINDS: &[(&str, &str)] = &[
    ("function_declaration", "function"),
    ("method_definition", "method"),
    ("class_declaration", "class"),
    ("abstract_class_declaration", "class"),
    ("interface_declaration", "interface"),
    ("type_alias_declaration", "type"),
    ("enum_declaration", "enum"),
    ("arrow_function", "function"),
    ("variable_declaration", "variable"),
    ("variable_declarator", "function"),
    ("lexical_declaration", "function"),
    ("export_statement", "export"),
];

/// Leading words that may precede `const`/`let`/`var` or `function`.
const PREFIX_WORDS: &[&str] = &["export", "default", "declare", "async"];

/// `const f = (…) => …` and friends, as opposed to `function f(…) {…}`.
fn is_arrow_binding(text: &str) -> bool {
    let first = text
        .split_whitespace()
        .find(|w| !PREFIX_WORDS.contains(w));
    matches!(first, Some("const" | "let" | "var"))
}

impl LanguageQuery for TypeScript {
    fn grammar(&self) -> tree_sitter::Language {
        if self.tsx {
            tree_sitter_typescript::LANGUAGE_TSX.into()
        } else {
            tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
        }
    }

    fn query(&self) -> &str {
        QUERY
    }

    fn import_query(&self) -> Option<&str> {
        Some(IMPORT_QUERY)
    }

    fn kind_mapping(&self) -> &[(&str, &str)] {
        KINDS
    }

    fn strip_body(&self, text: &str, kind: &SignatureKind) -> String {
        let text = text.trim();
        match kind {
            SignatureKind::Function | SignatureKind::Method | SignatureKind::Export => {
                if is_arrow_binding(text) {
                    strip::cut_at(text, strip::arrow(text))
                } else {
                    strip::strip_braced(text, true, true)
                }
            }
            SignatureKind::Class => strip::strip_braced(text, true, false),
            SignatureKind::Variable => strip::cut_at(text, strip::arrow(text)),
            _ => text.to_string(),
        }
    }

    /// Module specifiers are plain string literals; never re-prefix them.
    fn normalize_import(&self, raw: &str) -> String {
        raw.trim().trim_matches(['"', '\'', '`']).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_binding_detection() {
        assert!(is_arrow_binding("const f = () => 1"));
        assert!(is_arrow_binding("export const f = async () => 1"));
        assert!(!is_arrow_binding("function f() {}"));
        assert!(!is_arrow_binding("export async function f() {}"));
    }

    #[test]
    fn test_function_returning_function_type_cuts_at_brace() {
        let ts = TypeScript::typescript();
        let text = "function make(): () => void { return () => {}; }";
        assert_eq!(
            ts.strip_body(text, &SignatureKind::Function),
            "function make(): () => void"
        );
    }

    #[test]
    fn test_class_with_heritage() {
        let ts = TypeScript::typescript();
        let text = "class Repo<T extends { id: string }> extends Base implements Store<T> {\n  items: T[] = [];\n}";
        assert_eq!(
            ts.strip_body(text, &SignatureKind::Class),
            "class Repo<T extends { id: string }> extends Base implements Store<T>"
        );
    }

    #[test]
    fn test_interface_kept_whole() {
        let ts = TypeScript::typescript();
        let text = "interface A {\n  x: number;\n}";
        assert_eq!(ts.strip_body(text, &SignatureKind::Interface), text);
    }
}
