//! Conversion requests
//!
//! A request is built at the moment the user asks for a conversion and handed to the
//! [`Converter`](crate::convert::Converter) as a value. Nothing about a request outlives
//! the call.

use crate::error::{ConvertError, Result};
use crate::format::DocumentKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    source: PathBuf,
    destination: PathBuf,
    target: DocumentKind,
}

impl ConversionRequest {
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        target: DocumentKind,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            target,
        }
    }

    /// Request a conversion next to the source: same directory and stem, with the
    /// target's extension in place of the source's last extension.
    pub fn for_source(source: impl Into<PathBuf>, target: DocumentKind) -> Self {
        let source = source.into();
        let destination = destination_for(&source, target);
        Self::new(source, destination, target)
    }

    /// Build a request from whatever the user has selected so far.
    pub fn from_selection(selection: Option<&Path>, target: DocumentKind) -> Result<Self> {
        selection
            .map(|source| Self::for_source(source, target))
            .ok_or(ConvertError::MissingSelection)
    }

    /// Replace the destination path.
    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn target(&self) -> DocumentKind {
        self.target
    }

    /// Kind of the source file, if its extension is recognized.
    pub fn source_kind(&self) -> Option<DocumentKind> {
        DocumentKind::from_path(&self.source)
    }
}

/// Derive the destination path for converting `source` to `target`.
pub fn destination_for(source: &Path, target: DocumentKind) -> PathBuf {
    source.with_extension(target.extension())
}
