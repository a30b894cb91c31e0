use super::LanguageQuery;
use crate::strip;
use crate::visibility::java_private;
use brief_core::{ParseOptions, SignatureKind};

pub struct Java;

const QUERY: &str = r"
(class_declaration
  name: (identifier) @name) @signature @kind

(interface_declaration
  name: (identifier) @name) @signature @kind

(method_declaration
  name: (identifier) @name) @signature @kind

(constructor_declaration
  name: (identifier) @name) @signature @kind

(enum_declaration
  name: (identifier) @name) @signature @kind

(annotation_type_declaration
  name: (identifier) @name) @signature @kind

(record_declaration
  name: (identifier) @name) @signature @kind

(field_declaration
  (variable_declarator
    name: (identifier) @name)) @signature @kind
";

const IMPORT_QUERY: &str = r"
(import_declaration) @import_path
";

const KINDS: &[(&str, &str)] = &[
    ("class_declaration", "class"),
    ("interface_declaration", "interface"),
    ("method_declaration", "method"),
    ("constructor_declaration", "constructor"),
    ("enum_declaration", "enum"),
    ("annotation_type_declaration", "annotation"),
    ("record_declaration", "record"),
    ("field_declaration", "field"),
];

impl LanguageQuery for Java {
    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_java::LANGUAGE.into()
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

    /// Instance fields are dropped; static fields become variables.
    fn reclassify(&self, _node_type: &str, kind: SignatureKind, text: &str) -> Option<SignatureKind> {
        if kind == SignatureKind::Field {
            return text.contains("static").then_some(SignatureKind::Variable);
        }
        Some(kind)
    }

    fn is_exported(&self, name: &str, text: &str, _opts: &ParseOptions) -> bool {
        !name.is_empty() && !java_private(text)
    }

    fn strip_body(&self, text: &str, kind: &SignatureKind) -> String {
        let text = text.trim();
        match kind {
            SignatureKind::Method | SignatureKind::Constructor => {
                if text.ends_with(';') {
                    text.to_string()
                } else {
                    strip::strip_braced(text, true, kind.is_callable())
                }
            }
            SignatureKind::Class
            | SignatureKind::Interface
            | SignatureKind::Enum
            | SignatureKind::Annotation
            | SignatureKind::Record => strip::strip_braced(text, true, kind.is_callable()),
            _ => text.to_string(),
        }
    }
}
