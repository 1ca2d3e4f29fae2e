//! The conversion dispatcher
//!
//! [`Converter::convert`] resolves the [`Route`] for a request and runs it as
//! "read source into text, write text as target". Markdown routes to DOCX or PDF are
//! first offered to the universal converter when one is configured; if it is missing
//! or fails, the same read/write pipeline runs with the Markdown flattened in memory.
//!
//! The converter keeps no state between calls.

use crate::error::{ConvertError, Result};
use crate::format::{extension_of, DocumentKind};
use crate::formats::{docx, markdown, pdf, text};
use crate::formats::{PdfOptions, UniversalConverter, UniversalOptions};
use crate::publish;
use crate::registry::Route;
use crate::request::ConversionRequest;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Settings for a [`Converter`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterOptions {
    pub pdf: PdfOptions,
    pub universal: UniversalOptions,
}

/// Which engine produced the destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The in-process read/write adapters
    Builtin,
    /// The external universal converter
    Universal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutcome {
    pub destination: PathBuf,
    pub route: Route,
    pub strategy: Strategy,
}

pub struct Converter {
    pdf: PdfOptions,
    universal: Option<Box<dyn UniversalConverter>>,
}

impl Converter {
    /// Build a converter, looking up the universal converter if the options enable it.
    pub fn new(options: ConverterOptions) -> Self {
        let universal = options
            .universal
            .discover()
            .map(|found| Box::new(found) as Box<dyn UniversalConverter>);
        Converter {
            pdf: options.pdf,
            universal,
        }
    }

    /// A converter that only uses the built-in adapters.
    pub fn builtin(pdf: PdfOptions) -> Self {
        Converter {
            pdf,
            universal: None,
        }
    }

    pub fn with_universal<U: UniversalConverter + 'static>(mut self, universal: U) -> Self {
        self.universal = Some(Box::new(universal));
        self
    }

    pub fn without_universal(mut self) -> Self {
        self.universal = None;
        self
    }

    pub fn universal(&self) -> Option<&dyn UniversalConverter> {
        self.universal.as_deref()
    }

    /// Resolve the route for a request without touching the filesystem.
    pub fn route_for(&self, request: &ConversionRequest) -> Result<Route> {
        request
            .source_kind()
            .and_then(|source| Route::resolve(source, request.target()))
            .ok_or_else(|| {
                ConvertError::unsupported(extension_of(request.source()), request.target())
            })
    }

    /// Run one conversion. Unsupported pairs are rejected before anything is read or
    /// written; an existing destination is replaced.
    pub fn convert(&self, request: &ConversionRequest) -> Result<ConversionOutcome> {
        let route = self.route_for(request)?;
        let source = request.source();
        let destination = request.destination();
        debug!(
            %route,
            source = %source.display(),
            destination = %destination.display(),
            "resolved route"
        );

        if !source.is_file() {
            return Err(ConvertError::io(
                source,
                io::Error::new(io::ErrorKind::NotFound, "source file not found"),
            ));
        }

        let strategy = match self.universal.as_deref() {
            Some(universal) if route.prefers_universal() => {
                match run_universal(universal, route, source, destination) {
                    Ok(()) => Strategy::Universal,
                    Err(err) => {
                        warn!(
                            converter = universal.name(),
                            error = %err,
                            "universal converter failed, using built-in pipeline"
                        );
                        self.run_builtin(route, source, destination)?;
                        Strategy::Builtin
                    }
                }
            }
            _ => {
                self.run_builtin(route, source, destination)?;
                Strategy::Builtin
            }
        };

        info!(%route, destination = %destination.display(), ?strategy, "converted");
        Ok(ConversionOutcome {
            destination: destination.to_path_buf(),
            route,
            strategy,
        })
    }

    fn run_builtin(&self, route: Route, source: &Path, destination: &Path) -> Result<()> {
        let text = read_source(route.source(), source)?;
        debug!(chars = text.len(), "read source text");
        self.write_target(route.target(), destination, &text)
    }

    fn write_target(&self, target: DocumentKind, destination: &Path, text: &str) -> Result<()> {
        match target {
            DocumentKind::PlainText => text::write_text(destination, text),
            DocumentKind::DocumentModel => docx::write_docx_text(destination, text),
            DocumentKind::Pdf => pdf::write_pdf_text(destination, text, &self.pdf),
            DocumentKind::Markdown => Err(ConvertError::unsupported(
                extension_of(destination),
                DocumentKind::Markdown,
            )),
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Converter::new(ConverterOptions::default())
    }
}

/// Read a source file into flat text.
pub fn read_source(kind: DocumentKind, path: &Path) -> Result<String> {
    match kind {
        DocumentKind::PlainText => text::read_text(path),
        DocumentKind::DocumentModel => docx::read_docx_text(path),
        DocumentKind::Pdf => pdf::read_pdf_text(path),
        DocumentKind::Markdown => text::read_text(path).map(|md| markdown::markdown_to_text(&md)),
    }
}

/// Let the universal converter write a staged file, then move it into place.
fn run_universal(
    universal: &dyn UniversalConverter,
    route: Route,
    source: &Path,
    destination: &Path,
) -> Result<()> {
    let staged = publish::stage_for(destination)?.into_temp_path();
    universal.convert(source, route.source(), &staged, route.target())?;

    let written = staged
        .metadata()
        .map_err(|err| ConvertError::io(destination, err))?;
    if written.len() == 0 {
        return Err(ConvertError::Universal(format!(
            "{} produced an empty file",
            universal.name()
        )));
    }
    publish::commit(staged, destination)
}
