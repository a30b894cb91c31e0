//! XML rendering.

use super::PackageData;
use brief_core::ImportExport;

pub fn render(data: &PackageData) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<brief>\n");

    out.push_str("  <metadata>\n");
    if !data.tree.is_empty() {
        out.push_str("    <tree>");
        out.push_str(&escape_xml(&data.tree));
        out.push_str("</tree>\n");
    }
    if data.total_signatures > 0 {
        out.push_str("    <symbols>\n");
        for sig in data.files.iter().flat_map(|f| &f.signatures) {
            out.push_str("      - ");
            out.push_str(&escape_xml(&sig.text));
            out.push('\n');
        }
        out.push_str("    </symbols>\n");
    }
    out.push_str("  </metadata>\n");

    out.push_str("  <files>\n");
    for file in &data.files {
        out.push_str(&format!(
            "    <file path=\"{}\" language=\"{}\">\n",
            escape_xml(&file.path),
            escape_xml(&file.language)
        ));

        if let Some(ref error) = file.error {
            out.push_str("      <error>");
            out.push_str(&escape_xml(error));
            out.push_str("</error>\n");
        } else {
            if data.include_imports && !file.imports.is_empty() {
                out.push_str("      <imports>\n");
                for imp in &file.imports {
                    write_import(&mut out, imp);
                }
                out.push_str("      </imports>\n");
            }
            for sig in &file.signatures {
                out.push_str("      <signature>");
                out.push_str(&escape_xml(&sig.text));
                out.push_str("</signature>\n");
                if !sig.doc.is_empty() {
                    out.push_str("      <doc>");
                    out.push_str(&escape_xml(&sig.doc));
                    out.push_str("</doc>\n");
                }
            }
        }

        out.push_str("    </file>\n");
    }
    out.push_str("  </files>\n");

    out.push_str("</brief>\n");
    out
}

fn write_import(out: &mut String, imp: &ImportExport) {
    let tag = imp.kind.as_str();
    out.push_str(&format!("        <{tag} line=\"{}\"", imp.line));
    if !imp.name.is_empty() {
        out.push_str(&format!(" name=\"{}\"", escape_xml(&imp.name)));
    }
    out.push('>');
    out.push_str(&escape_xml(&imp.path));
    out.push_str(&format!("</{tag}>\n"));
}

/// Escape the five XML special characters.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
