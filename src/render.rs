//! Output text: one `--- PAGE n ---` block per page, blank line between
//! blocks.

use crate::error::Result;
use crate::pdf::Document;
use std::path::Path;

/// Separator between page blocks (one blank line).
const PAGE_SEPARATOR: &str = "\n\n";

/// Format a single page block. `number` is 1-based.
pub(crate) fn format_page(number: usize, text: &str) -> String {
    format!("--- PAGE {number} ---\n{text}")
}

/// Collect every page of `doc` into the output text.
///
/// The first failing page aborts the whole render, so nothing is returned
/// for a partially read document.
pub(crate) fn render_document<D: Document>(doc: &D) -> Result<String> {
    let count = doc.page_count();
    let mut blocks = Vec::with_capacity(count);
    for index in 0..count {
        let text = doc.page_text(index)?;
        log::debug!("page {}: {} chars", index + 1, text.chars().count());
        blocks.push(format_page(index + 1, &text));
    }
    Ok(blocks.join(PAGE_SEPARATOR))
}

/// Write the rendered text to `path` in one go, replacing any existing file.
pub(crate) fn write_output(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text.as_bytes())?;
    log::debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
