//! JSON rendering.

use super::PackageData;
use anyhow::{Context, Result};

pub fn render(data: &PackageData) -> Result<String> {
    let mut out = serde_json::to_string_pretty(data).context("failed to serialize output")?;
    out.push('\n');
    Ok(out)
}
