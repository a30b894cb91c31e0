use brief_core::{ParseOptions, Signature, SignatureKind};
use brief_parser::parse;

fn cpp(source: &str) -> Vec<Signature> {
    parse(source, "cpp", &ParseOptions::default())
        .unwrap()
        .signatures
}

fn find<'a>(sigs: &'a [Signature], name: &str) -> &'a Signature {
    sigs.iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("no signature named {name}: {sigs:?}"))
}

#[test]
fn cpp_class_with_member_declarations() {
    let source = "class Shape {\npublic:\n    int id();\n};\n";
    let sigs = cpp(source);
    let class = find(&sigs, "Shape");
    assert_eq!(class.kind, SignatureKind::Class);
    assert_eq!(class.text, "class Shape");
    let id = find(&sigs, "id");
    assert_eq!(id.kind, SignatureKind::Method);
    assert_eq!(id.text, "int id();");
}

#[test]
fn cpp_namespace_and_function() {
    let source = "namespace geo {\nint area(int w, int h) {\n    return w * h;\n}\n}\n";
    let sigs = cpp(source);
    assert_eq!(sigs.len(), 2);
    let ns = find(&sigs, "geo");
    assert_eq!(ns.kind, SignatureKind::Namespace);
    assert_eq!(ns.text, "namespace geo");
    assert_eq!(find(&sigs, "area").text, "int area(int w, int h)");
}

#[test]
fn cpp_template_function() {
    let source = "template <typename T>\nT biggest(T a, T b) {\n    return a > b ? a : b;\n}\n";
    let sigs = cpp(source);
    let template = sigs
        .iter()
        .find(|s| s.kind == SignatureKind::Template)
        .unwrap();
    assert_eq!(template.name, "biggest");
    assert_eq!(template.line, 1);
    assert_eq!(template.text, "template <typename T>\nT biggest(T a, T b)");
}

#[test]
fn cpp_out_of_line_constructor() {
    let source = "Point::Point(int x) : x_(x) {\n}\n";
    let sigs = cpp(source);
    assert_eq!(sigs.len(), 1);
    assert_eq!(sigs[0].name, "Point");
    assert_eq!(sigs[0].text, "Point::Point(int x) : x_(x)");
}

#[test]
fn cpp_reference_return() {
    let source = "std::string& label() {\n    return name;\n}\n";
    let sigs = cpp(source);
    assert_eq!(sigs.len(), 1);
    assert_eq!(sigs[0].name, "label");
    assert_eq!(sigs[0].text, "std::string& label()");
}

#[test]
fn cpp_enum_class_kept_whole() {
    let source = "enum class Color { Red, Green };\n";
    let sigs = cpp(source);
    assert_eq!(sigs.len(), 1);
    assert_eq!(sigs[0].kind, SignatureKind::Enum);
    assert_eq!(sigs[0].text, "enum class Color { Red, Green }");
}

#[test]
fn cpp_operator_overloads() {
    let source = "\
struct Version {
    bool operator==(const Version& o) const;
};

bool operator>(const Version& a, const Version& b) {
    return a.major > b.major;
}

bool Version::operator<(const Version& o) const {
    return major < o.major;
}
";
    let sigs = cpp(source);
    let eq = find(&sigs, "operator==");
    assert_eq!(eq.kind, SignatureKind::Method);
    assert_eq!(eq.text, "bool operator==(const Version& o) const;");
    assert_eq!(
        find(&sigs, "operator>").text,
        "bool operator>(const Version& a, const Version& b)"
    );
    assert_eq!(
        find(&sigs, "operator<").text,
        "bool Version::operator<(const Version& o) const"
    );
}
