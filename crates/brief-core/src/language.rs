//! File extension → language tag resolution.

use std::path::Path;

/// Extension (lowercase, no dot) to registry tag.
const EXTENSIONS: &[(&str, &str)] = &[
    ("go", "go"),
    ("ts", "typescript"),
    ("mts", "typescript"),
    ("cts", "typescript"),
    ("tsx", "tsx"),
    ("js", "javascript"),
    ("mjs", "javascript"),
    ("cjs", "javascript"),
    ("jsx", "jsx"),
    ("py", "python"),
    ("pyi", "python"),
    ("c", "c"),
    ("h", "c"),
    ("cpp", "cpp"),
    ("cc", "cpp"),
    ("cxx", "cpp"),
    ("hpp", "cpp"),
    ("hh", "cpp"),
    ("hxx", "cpp"),
    ("java", "java"),
];

/// Resolve a bare extension (with or without the leading dot).
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.trim_start_matches('.').to_ascii_lowercase();
    EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, tag)| *tag)
}

/// Resolve the language tag of a file path from its extension.
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(language_for_extension)
}

/// All extensions with a known language.
pub fn supported_extensions() -> impl Iterator<Item = &'static str> {
    EXTENSIONS.iter().map(|(e, _)| *e)
}
