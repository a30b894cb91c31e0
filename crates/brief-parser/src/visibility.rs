//! Public/private heuristics.

use brief_core::GoVisibility;

/// Go: exported iff the identifier starts with an uppercase ASCII letter, or
/// unconditionally under [`GoVisibility::PackageLevel`].
pub fn go_exported(name: &str, mode: GoVisibility) -> bool {
    match mode {
        GoVisibility::Capitalized => name.chars().next().is_some_and(|c| c.is_ascii_uppercase()),
        GoVisibility::PackageLevel => !name.is_empty(),
    }
}

/// Words that begin the declaration proper; modifiers never follow them.
const JAVA_DECL_KEYWORDS: &[&str] = &["class", "interface", "enum", "void", "@interface", "record"];

/// Java: whether `private` appears among the leading modifier words.
///
/// Annotations (`@Name`, optionally with a `(...)` argument list spanning
/// several words) are modifiers too and are skipped.
pub fn java_private(text: &str) -> bool {
    let mut annotation_depth = 0usize;
    for word in text.split_whitespace() {
        if annotation_depth > 0 {
            annotation_depth = paren_balance(word, annotation_depth);
            continue;
        }
        if word.starts_with('@') && word != "@interface" {
            annotation_depth = paren_balance(word, 0);
            continue;
        }
        if word == "private" {
            return true;
        }
        if JAVA_DECL_KEYWORDS.contains(&word) || word.contains(['(', '{', '=', ';']) {
            return false;
        }
    }
    false
}

/// Paren depth after `word`, starting from `depth`. Never negative.
fn paren_balance(word: &str, depth: usize) -> usize {
    word.chars().fold(depth, |d, c| match c {
        '(' => d + 1,
        ')' => d.saturating_sub(1),
        _ => d,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_capitalized() {
        assert!(go_exported("Add", GoVisibility::Capitalized));
        assert!(!go_exported("add", GoVisibility::Capitalized));
        assert!(!go_exported("_x", GoVisibility::Capitalized));
        assert!(!go_exported("", GoVisibility::Capitalized));
    }

    #[test]
    fn test_go_package_level() {
        assert!(go_exported("add", GoVisibility::PackageLevel));
        assert!(!go_exported("", GoVisibility::PackageLevel));
    }

    #[test]
    fn test_java_private_modifier() {
        assert!(java_private("private String name;"));
        assert!(java_private("@Deprecated\nprivate static void run() {}"));
        assert!(!java_private("public static final String X = \"a\";"));
        assert!(!java_private("String name;"));
    }

    #[test]
    fn test_java_private_scan_stops_at_declaration() {
        assert!(!java_private("public class A { private int x; }"));
        assert!(!java_private("void run() { private_call(); }"));
        assert!(!java_private("static String s = \"private\";"));
        assert!(!java_private("public @interface Marker { }"));
    }

    #[test]
    fn test_java_private_after_annotation_arguments() {
        assert!(java_private("@SuppressWarnings(\"unchecked\")\n  private void hidden() {}"));
        assert!(java_private("@Deprecated(since = \"1\") private static int X = 1;"));
        assert!(java_private("@Test(expected = X.class)\n@Override private void t() {}"));
        assert!(!java_private("@Deprecated(since = \"1\") public void open() {}"));
        assert!(!java_private("@Named(\"private\") void run() {}"));
    }
}
