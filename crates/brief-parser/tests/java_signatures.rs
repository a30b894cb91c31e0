use brief_core::{ParseOptions, Signature, SignatureKind};
use brief_parser::parse;

fn java(source: &str, opts: &ParseOptions) -> Vec<Signature> {
    parse(source, "java", opts).unwrap().signatures
}

fn find<'a>(sigs: &'a [Signature], name: &str) -> &'a Signature {
    sigs.iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("no signature named {name}: {sigs:?}"))
}

#[test]
fn java_instance_fields_dropped_static_fields_kept() {
    let source = "public class User {\n    private String name;\n    public static final String X = \"a\";\n}\n";
    let sigs = java(source, &ParseOptions::default());
    assert_eq!(sigs.len(), 2);
    assert!(sigs.iter().all(|s| s.name != "name"));
    let x = find(&sigs, "X");
    assert_eq!(x.kind, SignatureKind::Variable);
    assert_eq!(x.text, "public static final String X = \"a\";");
    assert_eq!(find(&sigs, "User").text, "public class User");
}

#[test]
fn java_instance_field_dropped_even_with_private_included() {
    let source = "class A {\n    private String name;\n}\n";
    let opts = ParseOptions {
        include_private: true,
        ..ParseOptions::default()
    };
    let sigs = java(source, &opts);
    assert_eq!(sigs.len(), 1);
    assert_eq!(sigs[0].name, "A");
}

#[test]
fn java_private_method_filtered() {
    let source = "public class Calc {\n    public int add(int a, int b) {\n        return a + b;\n    }\n\n    private void reset() {\n    }\n}\n";
    let sigs = java(source, &ParseOptions::default());
    assert_eq!(sigs.len(), 2);
    assert_eq!(find(&sigs, "add").text, "public int add(int a, int b)");
    assert!(sigs.iter().all(|s| s.name != "reset"));

    let opts = ParseOptions {
        include_private: true,
        ..ParseOptions::default()
    };
    let sigs = java(source, &opts);
    let reset = find(&sigs, "reset");
    assert!(!reset.exported);
    assert_eq!(reset.text, "private void reset()");
}

#[test]
fn java_constructor() {
    let source = "public class Calc {\n    public Calc(int seed) {\n    }\n}\n";
    let sigs = java(source, &ParseOptions::default());
    let ctor = sigs
        .iter()
        .find(|s| s.kind == SignatureKind::Constructor)
        .unwrap();
    assert_eq!(ctor.name, "Calc");
    assert_eq!(ctor.text, "public Calc(int seed)");
}

#[test]
fn java_interface_abstract_method() {
    let source = "public interface Shape {\n    double area();\n}\n";
    let sigs = java(source, &ParseOptions::default());
    assert_eq!(sigs.len(), 2);
    let shape = find(&sigs, "Shape");
    assert_eq!(shape.kind, SignatureKind::Interface);
    assert_eq!(shape.text, "public interface Shape");
    assert_eq!(find(&sigs, "area").text, "double area();");
}

#[test]
fn java_enum_record_annotation() {
    let source = "public enum Color { RED, GREEN }\n\nrecord Point(int x, int y) {}\n\n@interface Marker {}\n";
    let sigs = java(source, &ParseOptions::default());
    assert_eq!(sigs.len(), 3);
    let color = find(&sigs, "Color");
    assert_eq!(color.kind, SignatureKind::Enum);
    assert_eq!(color.text, "public enum Color");
    let point = find(&sigs, "Point");
    assert_eq!(point.kind, SignatureKind::Record);
    assert_eq!(point.text, "record Point(int x, int y)");
    let marker = find(&sigs, "Marker");
    assert_eq!(marker.kind, SignatureKind::Annotation);
    assert_eq!(marker.text, "@interface Marker");
}

#[test]
fn java_javadoc_attached() {
    let source = "class Calc {\n    /**\n     * Adds two ints.\n     */\n    int add(int a, int b) {\n        return a + b;\n    }\n}\n";
    let sigs = java(source, &ParseOptions::default());
    assert_eq!(find(&sigs, "add").doc, "Adds two ints.");
}

#[test]
fn java_annotated_private_member_filtered() {
    let source = "\
public class Svc {
    @SuppressWarnings(\"unchecked\")
    private void hidden() {}

    @Deprecated(since = \"1\") private static int X = 1;

    public void open() {}
}
";
    let sigs = java(source, &ParseOptions::default());
    let mut names: Vec<&str> = sigs.iter().map(|s| s.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Svc", "open"]);

    let opts = ParseOptions {
        include_private: true,
        ..ParseOptions::default()
    };
    let sigs = java(source, &opts);
    assert!(!find(&sigs, "hidden").exported);
    assert!(!find(&sigs, "X").exported);
    assert!(find(&sigs, "open").exported);
}
