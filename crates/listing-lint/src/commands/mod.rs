//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

use listing_lint_core::ProductFields;
use listing_lint_core::product::check_input_size;

pub mod analyze;
pub mod info;
pub mod keywords;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    check_input_size(size, max_bytes).with_context(|| format!("cannot read {path}"))?;

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read extractor output and make sure it describes a product page.
pub fn read_product_fields(
    path: &Utf8Path,
    max_bytes: Option<usize>,
) -> anyhow::Result<ProductFields> {
    let content = read_input_file(path, max_bytes)?;
    let fields = ProductFields::from_json(&content)
        .with_context(|| format!("failed to parse product fields from {path}"))?;
    fields
        .ensure_product_page()
        .with_context(|| format!("{path} has neither a title nor a price"))?;
    Ok(fields)
}
