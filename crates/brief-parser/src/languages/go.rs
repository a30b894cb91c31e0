use super::LanguageQuery;
use crate::strip;
use crate::visibility::go_exported;
use brief_core::{ParseOptions, SignatureKind};

pub struct Go;

const QUERY: &str = r"
(function_declaration
  name: (identifier) @name) @signature @kind

(method_declaration
  name: (field_identifier) @name) @signature @kind

(type_declaration
  (type_spec
    name: (type_identifier) @name)) @signature @kind

(source_file
  (var_declaration
    (var_spec
      name: (identifier) @name)) @signature @kind)

(source_file
  (const_declaration
    (const_spec
      name: (identifier) @name)) @signature @kind)
";

const IMPORT_QUERY: &str = r"
(import_spec) @import_path
";

const KINDS: &[(&str, &str)] = &[
    ("function_declaration", "function"),
    ("method_declaration", "method"),
    ("type_declaration", "type"),
    ("var_declaration", "variable"),
    ("const_declaration", "variable"),
];

impl LanguageQuery for Go {
    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_go::LANGUAGE.into()
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

    fn is_exported(&self, name: &str, _text: &str, opts: &ParseOptions) -> bool {
        go_exported(name, opts.go_visibility)
    }

    fn strip_body(&self, text: &str, kind: &SignatureKind) -> String {
        match kind {
            SignatureKind::Function | SignatureKind::Method => strip::strip_braced(text, false, true),
            _ => text.trim().to_string(),
        }
    }

    /// Specs are captured without their keyword; put it back.
    fn normalize_import(&self, raw: &str) -> String {
        let spec = raw.trim();
        if spec.starts_with("import ") {
            spec.to_string()
        } else {
            format!("import {spec}")
        }
    }
}
