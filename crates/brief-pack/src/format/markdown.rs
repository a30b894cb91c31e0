//! Markdown rendering.

use super::{PackageData, empty_comment};

pub fn render(data: &PackageData) -> String {
    let mut out = String::from("# Brief Output\n\n");

    if !data.tree.is_empty() {
        out.push_str("## Directory Tree\n\n```\n");
        out.push_str(&data.tree);
        out.push_str("\n```\n\n");
    }

    if data.total_signatures > 0 {
        out.push_str("## Symbols\n\n");
        for sig in data.files.iter().flat_map(|f| &f.signatures) {
            out.push_str("- `");
            out.push_str(&escape_markdown(&sig.text));
            out.push_str("`\n");
        }
        out.push_str("\n---\n\n");
    }

    out.push_str("## Files\n\n");
    for file in &data.files {
        out.push_str(&format!("### {}\n\n", file.path));

        if let Some(ref error) = file.error {
            out.push_str("> **Error:** ");
            out.push_str(&escape_markdown(error));
            out.push_str("\n\n");
            out.push_str("---\n\n");
            continue;
        }

        if data.include_imports && !file.imports.is_empty() {
            out.push_str("**Imports:**\n\n");
            for imp in &file.imports {
                out.push_str("- ");
                out.push_str(imp.kind.as_str());
                out.push_str(" `");
                out.push_str(&escape_markdown(&imp.path));
                out.push('`');
                if !imp.name.is_empty() {
                    out.push_str(" `");
                    out.push_str(&escape_markdown(&imp.name));
                    out.push('`');
                }
                out.push('\n');
            }
            out.push('\n');
        }

        out.push_str(&format!("```{}\n", file.language));
        if file.signatures.is_empty() {
            out.push_str(empty_comment(&file.language));
            out.push('\n');
        }
        for sig in &file.signatures {
            out.push_str(&sig.text);
            out.push('\n');
        }
        out.push_str("```\n\n");

        for sig in file.signatures.iter().filter(|s| !s.doc.is_empty()) {
            out.push_str("> ");
            out.push_str(&escape_markdown(&sig.doc).replace('\n', "\n> "));
            out.push_str("\n\n");
        }

        out.push_str("---\n\n");
    }

    out
}

/// Escape backticks so inline code spans stay intact.
pub fn escape_markdown(s: &str) -> String {
    s.replace('`', "\\`")
}
