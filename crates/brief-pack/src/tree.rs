//! ASCII directory tree of scanned files.

use std::collections::BTreeMap;

#[derive(Default)]
struct Node {
    children: BTreeMap<String, Node>,
}

/// Render `/`-separated relative paths as a tree.
///
/// Top-level entries carry no connector; deeper levels use `├── ` and
/// `└── `. Siblings are sorted by name. Returns an empty string for no paths.
pub fn build_tree<S: AsRef<str>>(paths: &[S]) -> String {
    let mut root = Node::default();
    for path in paths {
        let mut current = &mut root;
        for part in path.as_ref().split('/').filter(|p| !p.is_empty()) {
            current = current.children.entry(part.to_string()).or_default();
        }
    }

    let mut out = String::new();
    render(&root, "", true, &mut out);
    out.truncate(out.trim_end_matches('\n').len());
    out
}

fn render(node: &Node, prefix: &str, is_root: bool, out: &mut String) {
    let count = node.children.len();
    for (i, (name, child)) in node.children.iter().enumerate() {
        let last = i + 1 == count;
        if is_root {
            out.push_str(name);
        } else {
            out.push_str(prefix);
            out.push_str(if last { "└── " } else { "├── " });
            out.push_str(name);
        }
        out.push('\n');

        let child_prefix = if is_root {
            String::new()
        } else if last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };
        render(child, &child_prefix, false, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(build_tree::<&str>(&[]), "");
    }

    #[test]
    fn test_flat_files_sorted() {
        assert_eq!(build_tree(&["main.go", "a.go"]), "a.go\nmain.go");
    }

    #[test]
    fn test_nested() {
        let paths = [
            "src/parser/lexer.go",
            "src/main.go",
            "src/parser/ast.go",
            "README.go",
            "pkg/util.go",
        ];
        let expected = "\
README.go
pkg
└── util.go
src
├── main.go
└── parser
    ├── ast.go
    └── lexer.go";
        assert_eq!(build_tree(&paths), expected);
    }

    #[test]
    fn test_continuation_bars() {
        let paths = ["a/b/c.go", "a/d.go"];
        let expected = "\
a
├── b
│   └── c.go
└── d.go";
        assert_eq!(build_tree(&paths), expected);
    }
}
