use super::LanguageQuery;
use crate::strip;
use brief_core::SignatureKind;

pub struct Cpp;

const QUERY: &str = r"
; free functions
(function_definition
  declarator: (function_declarator
    declarator: (identifier) @name)) @signature @kind

(function_definition
  declarator: (pointer_declarator
    declarator: (function_declarator
      declarator: (identifier) @name))) @signature @kind

(function_definition
  declarator: (reference_declarator
    (function_declarator
      declarator: (identifier) @name))) @signature @kind

(declaration
  declarator: (function_declarator
    declarator: (identifier) @name)) @signature @kind

(declaration
  declarator: (pointer_declarator
    declarator: (function_declarator
      declarator: (identifier) @name))) @signature @kind

(declaration
  declarator: (reference_declarator
    (function_declarator
      declarator: (identifier) @name))) @signature @kind

; types
(class_specifier
  name: (type_identifier) @name) @signature @kind

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

; member functions declared in a class body
(field_declaration
  declarator: (function_declarator
    declarator: (field_identifier) @name)) @signature @kind

(field_declaration
  declarator: (pointer_declarator
    declarator: (function_declarator
      declarator: (field_identifier) @name))) @signature @kind

(field_declaration
  declarator: (reference_declarator
    (function_declarator
      declarator: (field_identifier) @name))) @signature @kind

; out-of-line definitions: Type::method, Type::Type
(function_definition
  declarator: (function_declarator
    declarator: (qualified_identifier
      name: (identifier) @name))) @signature @kind

; destructors
(function_definition
  declarator: (function_declarator
    declarator: (destructor_name
      (identifier) @name))) @signature @kind

(declaration
  declarator: (function_declarator
    declarator: (destructor_name
      (identifier) @name))) @signature @kind

; operator overloads
(function_definition
  declarator: (function_declarator
    declarator: (operator_name) @name)) @signature @kind

(function_definition
  declarator: (function_declarator
    declarator: (qualified_identifier
      name: (operator_name) @name))) @signature @kind

(field_declaration
  declarator: (function_declarator
    declarator: (operator_name) @name)) @signature @kind

(namespace_definition
  name: (namespace_identifier) @name) @signature @kind

; templates
(template_declaration
  (function_definition
    declarator: (function_declarator
      declarator: (identifier) @name))) @signature @kind

(template_declaration
  (function_definition
    declarator: (pointer_declarator
      declarator: (function_declarator
        declarator: (identifier) @name)))) @signature @kind

(template_declaration
  (class_specifier
    name: (type_identifier) @name)) @signature @kind

(template_declaration
  (struct_specifier
    name: (type_identifier) @name)) @signature @kind

(template_declaration
  (declaration
    declarator: (function_declarator
      declarator: (identifier) @name))) @signature @kind
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
    ("class_specifier", "class"),
    ("field_declaration", "method"),
    ("template_declaration", "template"),
    ("namespace_definition", "namespace"),
];

impl LanguageQuery for Cpp {
    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_cpp::LANGUAGE.into()
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
        match kind {
            SignatureKind::Function
            | SignatureKind::Method
            | SignatureKind::Constructor
            | SignatureKind::Destructor
            | SignatureKind::Class
            | SignatureKind::Struct
            | SignatureKind::Namespace
            | SignatureKind::Template => strip::strip_braced(text, true, kind.is_callable()),
            _ => text.trim().to_string(),
        }
    }
}
