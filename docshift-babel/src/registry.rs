//! Route table
//!
//! Every supported conversion is one [`Route`] variant. [`Route::resolve`] is the whole
//! dispatch table: a pair that is not listed there is not supported, and there is no
//! fallback lookup by name.

use crate::format::DocumentKind;
use std::fmt;

/// A supported (source, target) conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    DocxToPdf,
    DocxToText,
    TextToDocx,
    TextToPdf,
    PdfToText,
    MarkdownToText,
    MarkdownToDocx,
    MarkdownToPdf,
}

impl Route {
    /// All routes, grouped by source kind.
    pub const ALL: [Route; 8] = [
        Route::DocxToPdf,
        Route::DocxToText,
        Route::TextToDocx,
        Route::TextToPdf,
        Route::PdfToText,
        Route::MarkdownToText,
        Route::MarkdownToDocx,
        Route::MarkdownToPdf,
    ];

    /// Look up the route for a pair of kinds.
    pub fn resolve(source: DocumentKind, target: DocumentKind) -> Option<Route> {
        use DocumentKind::*;

        match (source, target) {
            (DocumentModel, Pdf) => Some(Route::DocxToPdf),
            (DocumentModel, PlainText) => Some(Route::DocxToText),
            (PlainText, DocumentModel) => Some(Route::TextToDocx),
            (PlainText, Pdf) => Some(Route::TextToPdf),
            (Pdf, PlainText) => Some(Route::PdfToText),
            (Markdown, PlainText) => Some(Route::MarkdownToText),
            (Markdown, DocumentModel) => Some(Route::MarkdownToDocx),
            (Markdown, Pdf) => Some(Route::MarkdownToPdf),
            _ => None,
        }
    }

    pub fn source(&self) -> DocumentKind {
        match self {
            Route::DocxToPdf | Route::DocxToText => DocumentKind::DocumentModel,
            Route::TextToDocx | Route::TextToPdf => DocumentKind::PlainText,
            Route::PdfToText => DocumentKind::Pdf,
            Route::MarkdownToText | Route::MarkdownToDocx | Route::MarkdownToPdf => {
                DocumentKind::Markdown
            }
        }
    }

    pub fn target(&self) -> DocumentKind {
        match self {
            Route::DocxToPdf | Route::TextToPdf | Route::MarkdownToPdf => DocumentKind::Pdf,
            Route::DocxToText | Route::PdfToText | Route::MarkdownToText => {
                DocumentKind::PlainText
            }
            Route::TextToDocx | Route::MarkdownToDocx => DocumentKind::DocumentModel,
        }
    }

    /// Whether the universal converter may take over this route.
    pub fn prefers_universal(&self) -> bool {
        matches!(self, Route::MarkdownToDocx | Route::MarkdownToPdf)
    }

    /// Routes that read the given source kind.
    pub fn from_source(source: DocumentKind) -> impl Iterator<Item = Route> {
        Self::ALL.into_iter().filter(move |r| r.source() == source)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source(), self.target())
    }
}
