//! Error types for conversions

use crate::format::DocumentKind;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while converting a document.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// No route exists for the (source, target) pair. Nothing was read or written.
    #[error("conversion from '{source_ext}' to '{target}' is not supported")]
    UnsupportedConversion {
        source_ext: String,
        target: DocumentKind,
    },

    /// A conversion was requested before a source file was chosen.
    #[error("no source file selected")]
    MissingSelection,

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("docx error: {0}")]
    Docx(String),

    #[error("pdf rendering error: {0}")]
    Pdf(String),

    #[error("pdf text extraction error: {0}")]
    PdfExtraction(String),

    /// The universal converter ran but did not produce the destination.
    #[error("universal converter error: {0}")]
    Universal(String),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn unsupported(source_ext: impl Into<String>, target: DocumentKind) -> Self {
        ConvertError::UnsupportedConversion {
            source_ext: source_ext.into(),
            target,
        }
    }
}

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
