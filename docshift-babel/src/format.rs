//! Document kinds
//!
//! The closed set of formats the dispatcher knows about. A kind is derived from a file
//! extension (for sources) or from a target token (for destinations). Markdown is only
//! ever a source.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A document format understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    PlainText,
    /// Word-processor document (DOCX), handled as flat paragraph text
    DocumentModel,
    Pdf,
    Markdown,
}

impl DocumentKind {
    /// Kinds that can be produced by a conversion, in the order the front ends offer them.
    pub const TARGETS: [DocumentKind; 3] = [
        DocumentKind::Pdf,
        DocumentKind::PlainText,
        DocumentKind::DocumentModel,
    ];

    /// Canonical file extension (and target token) for this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::PlainText => "txt",
            DocumentKind::DocumentModel => "docx",
            DocumentKind::Pdf => "pdf",
            DocumentKind::Markdown => "md",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::PlainText => "Plain text",
            DocumentKind::DocumentModel => "Word document",
            DocumentKind::Pdf => "PDF",
            DocumentKind::Markdown => "Markdown",
        }
    }

    /// Match an extension, without the leading dot, ignoring case.
    pub fn from_extension(ext: &str) -> Option<DocumentKind> {
        match ext.to_ascii_lowercase().as_str() {
            "txt" | "text" => Some(DocumentKind::PlainText),
            "docx" => Some(DocumentKind::DocumentModel),
            "pdf" => Some(DocumentKind::Pdf),
            "md" | "markdown" => Some(DocumentKind::Markdown),
            _ => None,
        }
    }

    /// Detect the kind of a file from its extension.
    pub fn from_path(path: &Path) -> Option<DocumentKind> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(DocumentKind::from_extension)
    }

    /// Whether a conversion can produce this kind.
    pub fn is_target(&self) -> bool {
        Self::TARGETS.contains(self)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Error returned when a target token is not one of `pdf`, `txt` or `docx`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTarget(pub String);

impl fmt::Display for UnknownTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown target format '{}' (expected one of: pdf, txt, docx)",
            self.0
        )
    }
}

impl std::error::Error for UnknownTarget {}

impl FromStr for DocumentKind {
    type Err = UnknownTarget;

    /// Parse a target token. Only kinds in [`DocumentKind::TARGETS`] are accepted.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        DocumentKind::from_extension(token.trim_start_matches('.'))
            .filter(DocumentKind::is_target)
            .ok_or_else(|| UnknownTarget(token.to_string()))
    }
}

/// Extension of a path as written, lowercased, for error reporting.
pub(crate) fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension_is_case_insensitive() {
        assert_eq!(
            DocumentKind::from_extension("DOCX"),
            Some(DocumentKind::DocumentModel)
        );
        assert_eq!(DocumentKind::from_extension("Md"), Some(DocumentKind::Markdown));
        assert_eq!(DocumentKind::from_extension("rtf"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            DocumentKind::from_path(Path::new("/tmp/Notes.TXT")),
            Some(DocumentKind::PlainText)
        );
        assert_eq!(DocumentKind::from_path(Path::new("/tmp/README")), None);
    }

    #[test]
    fn test_target_tokens() {
        assert_eq!("pdf".parse::<DocumentKind>(), Ok(DocumentKind::Pdf));
        assert_eq!("txt".parse::<DocumentKind>(), Ok(DocumentKind::PlainText));
        assert_eq!(
            "docx".parse::<DocumentKind>(),
            Ok(DocumentKind::DocumentModel)
        );
        assert!("md".parse::<DocumentKind>().is_err());
        assert!("html".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_extension_round_trips_for_targets() {
        for kind in DocumentKind::TARGETS {
            assert_eq!(kind.extension().parse::<DocumentKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_extension_of_missing_extension() {
        assert_eq!(extension_of(Path::new("Makefile")), "");
        assert_eq!(extension_of(Path::new("a.RTF")), "rtf");
    }
}
