use super::LanguageQuery;
use crate::strip;
use brief_core::SignatureKind;

pub struct C;

const QUERY: &str = r"
(function_definition
  declarator: (function_declarator
    declarator: (identifier) @name)) @signature @kind

(function_definition
  declarator: (pointer_declarator
    declarator: (function_declarator
      declarator: (identifier) @name))) @signature @kind

(declaration
  declarator: (function_declarator
    declarator: (identifier) @name)) @signature @kind

(translation_unit
  (declaration
    declarator: (init_declarator
      declarator: (identifier) @name)) @signature @kind)

(struct_specifier
  name: (type_identifier) @name) @signature @kind

(enum_specifier
  name: (type_identifier) @name) @signature @kind

(type_definition
  declarator: (type_identifier) @name) @signature @kind

(preproc_function_def
  name: (identifier) @name) @signature @kind

(preproc_def
  name: (identifier) @name) @signature @kind
";

const IMPORT_QUERY: &str = r"
(preproc_include) @import_path
";

const KINDS: &[(&str, &str)] = &[
    ("function_definition", "function"),
    ("declaration", "function"),
    ("struct_specifier", "struct"),
    ("enum_specifier", "enum"),
    ("type_definition", "typedef"),
    ("preproc_function_def", "macro"),
    ("preproc_def", "macro"),
];

impl LanguageQuery for C {
    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_c::LANGUAGE.into()
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

    /// `declaration` covers both prototypes and variables.
    fn reclassify(&self, node_type: &str, kind: SignatureKind, text: &str) -> Option<SignatureKind> {
        if node_type == "declaration" {
            if text.contains('(') && text.contains(')') {
                return Some(SignatureKind::Function);
            }
            return Some(SignatureKind::Variable);
        }
        Some(kind)
    }

    fn strip_body(&self, text: &str, kind: &SignatureKind) -> String {
        match kind {
            SignatureKind::Function => strip::strip_braced(text, false, true),
            _ => text.trim().to_string(),
        }
    }
}
