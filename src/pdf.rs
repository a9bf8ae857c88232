//! PDF reading.
//!
//! The rest of the crate only sees the [`PdfReader`] and [`Document`]
//! traits: open a file, ask how many pages it has, ask for the text of a
//! page. [`ExtractBackend`] implements them with [`pdf_extract`]. Since
//! `pdf_extract` can panic on malformed input (rather than returning
//! errors), extraction is wrapped in [`std::panic::catch_unwind`] to convert
//! panics into [`PdfpagesError::Document`] errors.

use crate::error::{PdfpagesError, Result};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// PDF signature. Must appear within the first [`HEADER_SEARCH_LEN`] bytes.
const PDF_MAGIC: &[u8; 5] = b"%PDF-";

/// Some producers put junk before the header; readers conventionally look
/// at the first KiB.
const HEADER_SEARCH_LEN: usize = 1024;

/// Something that can open a PDF file.
pub(crate) trait PdfReader {
    type Document: Document;

    /// Open and parse the file at `path`.
    fn open(&self, path: &Path) -> Result<Self::Document>;
}

/// An opened PDF: an ordered, finite sequence of pages.
pub(crate) trait Document {
    /// Number of pages, known before any page is read.
    fn page_count(&self) -> usize;

    /// Text of the page at 0-based `index`. A page without extractable
    /// text yields an empty string, not an error.
    fn page_text(&self, index: usize) -> Result<String>;
}

/// [`PdfReader`] backed by `pdf_extract`.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ExtractBackend;

/// Pages of text pulled out of a PDF by [`ExtractBackend`].
#[derive(Debug)]
pub(crate) struct ExtractedDocument {
    pages: Vec<String>,
}

impl PdfReader for ExtractBackend {
    type Document = ExtractedDocument;

    fn open(&self, path: &Path) -> Result<ExtractedDocument> {
        let data = std::fs::read(path)?;
        log::debug!("read {} bytes from {}", data.len(), path.display());
        let pages = extract_pages(&data)?;
        log::debug!("{} pages in {}", pages.len(), path.display());
        Ok(ExtractedDocument { pages })
    }
}

impl Document for ExtractedDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String> {
        self.pages.get(index).cloned().ok_or_else(|| {
            PdfpagesError::Document(format!(
                "page {} out of range ({} pages)",
                index + 1,
                self.pages.len()
            ))
        })
    }
}

/// Whether `data` carries a PDF header near its start.
fn has_pdf_header(data: &[u8]) -> bool {
    let window = &data[..data.len().min(HEADER_SEARCH_LEN)];
    window.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC)
}

/// Extract pages of text from a PDF byte slice, returning one `String` per
/// page.
///
/// Panics from the underlying library are caught and converted to errors.
fn extract_pages(data: &[u8]) -> Result<Vec<String>> {
    if !has_pdf_header(data) {
        return Err(PdfpagesError::Document(
            "not a PDF document (missing %PDF- header)".into(),
        ));
    }

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(data)
    }));
    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(PdfpagesError::Document(format!(
            "PDF extraction failed: {e}"
        ))),
        Err(_) => Err(PdfpagesError::Document(
            "PDF extraction panicked (malformed document)".into(),
        )),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fmt::Write as _;

    /// Build a small, valid PDF with one Helvetica text line per page.
    /// An empty string produces a page with an empty content stream.
    pub(crate) fn build_pdf(pages: &[&str]) -> Vec<u8> {
        const FIRST_PAGE_ID: usize = 4;

        let mut objects: Vec<String> = Vec::new();
        objects.push("<< /Type /Catalog /Pages 2 0 R >>".into());

        let kids: Vec<String> = (0..pages.len())
            .map(|i| format!("{} 0 R", FIRST_PAGE_ID + 2 * i))
            .collect();
        objects.push(format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        ));
        objects.push(
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .into(),
        );

        for (i, text) in pages.iter().enumerate() {
            let content_id = FIRST_PAGE_ID + 2 * i + 1;
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {content_id} 0 R >>"
            ));
            let stream = if text.is_empty() {
                String::new()
            } else {
                format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET")
            };
            objects.push(format!(
                "<< /Length {} >>\nstream\n{stream}\nendstream",
                stream.len()
            ));
        }

        let mut out = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            let _ = write!(out, "{} 0 obj\n{body}\nendobj\n", i + 1);
        }

        let xref_offset = out.len();
        let _ = write!(out, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in &offsets {
            let _ = writeln!(out, "{offset:010} 00000 n ");
        }
        let _ = write!(
            out,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        );
        out.into_bytes()
    }

    #[test]
    fn header_at_start() {
        assert!(has_pdf_header(b"%PDF-1.7\n"));
    }

    #[test]
    fn header_after_leading_junk() {
        let mut data = vec![b' '; 100];
        data.extend_from_slice(b"%PDF-1.4\n");
        assert!(has_pdf_header(&data));
    }

    #[test]
    fn header_too_late_is_rejected() {
        let mut data = vec![b' '; HEADER_SEARCH_LEN];
        data.extend_from_slice(b"%PDF-1.4\n");
        assert!(!has_pdf_header(&data));
    }

    #[test]
    fn header_missing_on_short_input() {
        assert!(!has_pdf_header(b""));
        assert!(!has_pdf_header(b"%PD"));
    }

    #[test]
    fn missing_header_is_rejected_before_parsing() {
        match extract_pages(b"plain text, no signature") {
            Err(PdfpagesError::Document(msg)) => {
                assert_eq!(msg, "not a PDF document (missing %PDF- header)");
            }
            other => panic!("expected header error, got {other:?}"),
        }
    }

    #[test]
    fn header_without_body_fails_extraction() {
        // Passes the signature check, then has no xref or trailer.
        match extract_pages(b"%PDF-1.7\n%%EOF\n") {
            Err(PdfpagesError::Document(msg)) => {
                assert!(msg.starts_with("PDF extraction"), "{msg}");
            }
            other => panic!("expected extraction error, got {other:?}"),
        }
    }

    #[test]
    fn backend_reads_pages_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("three.pdf");
        std::fs::write(&path, build_pdf(&["Alpha", "", "Gamma"])).unwrap();

        let doc = ExtractBackend.open(&path).unwrap();
        assert_eq!(doc.page_count(), 3);
        assert!(doc.page_text(0).unwrap().contains("Alpha"));
        assert_eq!(doc.page_text(1).unwrap(), "");
        assert!(doc.page_text(2).unwrap().contains("Gamma"));
    }

    #[test]
    fn backend_page_out_of_range() {
        let doc = ExtractedDocument {
            pages: vec!["one".into()],
        };
        assert_eq!(doc.page_text(0).unwrap(), "one");
        assert!(doc.page_text(1).is_err());
    }

    #[test]
    fn backend_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ExtractBackend.open(&dir.path().join("nope.pdf"));
        assert!(matches!(result, Err(PdfpagesError::Io(_))));
    }
}
