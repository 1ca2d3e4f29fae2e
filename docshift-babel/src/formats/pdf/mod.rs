//! PDF
//!
//! Output renders text as one preformatted, monospaced block (see [`layout`] and
//! [`writer`]). Input is limited to extracting the embedded text with `pdf-extract`;
//! scanned pages yield nothing, and no layout is recovered.

pub mod layout;
pub mod writer;

pub use layout::{PageSize, PdfOptions};

use crate::error::{ConvertError, Result};
use crate::publish;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::debug;

pub fn write_pdf_text(path: &Path, text: &str, options: &PdfOptions) -> Result<()> {
    publish::write_with(path, |file| writer::write_pdf(text, options, file))
}

pub fn read_pdf_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|err| ConvertError::io(path, err))?;
    debug!(path = %path.display(), bytes = bytes.len(), "extracting pdf text");
    extract_text(&bytes)
}

/// Extract text from an in-memory PDF.
///
/// pdf-extract panics on some malformed files; that is reported as an extraction error.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(err)) => Err(ConvertError::PdfExtraction(err.to_string())),
        Err(_) => Err(ConvertError::PdfExtraction(
            "pdf parser aborted on malformed input".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_extracts_rendered_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        write_pdf_text(&path, "hello\nworld", &PdfOptions::default()).unwrap();

        let text = read_pdf_text(&path).unwrap();
        assert!(text.contains("hello"), "extracted: {text:?}");
        assert!(text.contains("world"), "extracted: {text:?}");
    }

    #[test]
    fn test_garbage_is_extraction_error() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ConvertError::PdfExtraction(_)));
    }
}
