use super::LanguageQuery;
use crate::strip;
use brief_core::SignatureKind;

pub struct Python;

const QUERY: &str = r"
(function_definition
  name: (identifier) @name) @signature @kind

(class_definition
  name: (identifier) @name) @signature @kind

(module
  (expression_statement
    (assignment
      left: (identifier) @name)) @signature @kind)
";

const IMPORT_QUERY: &str = r"
(import_statement
  name: (dotted_name) @import_path)

(import_statement
  name: (aliased_import
    name: (dotted_name) @import_path))

(import_from_statement
  module_name: (dotted_name) @import_path)

(import_from_statement
  module_name: (relative_import) @import_path)
";

const KINDS: &[(&str, &str)] = &[
    ("function_definition", "function"),
    ("class_definition", "class"),
    ("expression_statement", "variable"),
    ("assignment", "variable"),
];

/// A `def` whose first parameter is `self` or `cls`.
fn is_method(text: &str) -> bool {
    let (Some(open), Some(close)) = (text.find('('), text.find(')')) else {
        return false;
    };
    if close <= open + 1 {
        return false;
    }
    let params = &text[open + 1..close];
    let first = params.split(',').next().unwrap_or_default();
    let first = first.split(':').next().unwrap_or_default().trim();
    first == "self" || first == "cls"
}

impl LanguageQuery for Python {
    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_python::LANGUAGE.into()
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

    fn reclassify(&self, _node_type: &str, kind: SignatureKind, text: &str) -> Option<SignatureKind> {
        if kind == SignatureKind::Function && is_method(text) {
            return Some(SignatureKind::Method);
        }
        Some(kind)
    }

    fn strip_body(&self, text: &str, kind: &SignatureKind) -> String {
        match kind {
            SignatureKind::Function | SignatureKind::Method | SignatureKind::Class => {
                let text = text.trim();
                strip::cut_at(text, strip::python_colon(text))
            }
            _ => text.trim().to_string(),
        }
    }
}
