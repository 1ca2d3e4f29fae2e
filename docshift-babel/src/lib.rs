//! Conversions between plain text, Word documents, PDF and Markdown
//!
//!     This crate is the dispatcher behind the docshift front ends. Given a
//!     [`ConversionRequest`] (source path, destination path, target kind) it picks the
//!     [`Route`] for the pair of kinds and runs it. It is shell agnostic: no code here
//!     prints, reads environment variables or talks to a terminal.
//!
//! Architecture
//!
//!     - DocumentKind: the closed set of formats, detected from file extensions.
//!     - Route: one variant per supported (source, target) pair. [`Route::resolve`] is the
//!       whole dispatch table; anything it does not list is unsupported.
//!     - Converter: runs a route as "read the source into text, write the text as the
//!       target". It holds the PDF layout options and, optionally, a universal converter.
//!     - formats: one adapter module per format.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # ConvertError
//!     ├── format.rs               # DocumentKind
//!     ├── registry.rs             # Route table
//!     ├── request.rs              # ConversionRequest
//!     ├── convert.rs              # Converter (the dispatcher)
//!     ├── publish.rs              # staged writes to the destination
//!     ├── formats
//!     │   ├── text                # plain text
//!     │   ├── docx                # Word documents, via docx-rs
//!     │   ├── pdf                 # lopdf output, pdf-extract input
//!     │   ├── markdown            # comrak + html5ever flattening
//!     │   └── pandoc              # optional universal converter
//!     └── lib.rs
//!
//! Implementation Principles
//!
//!     Every format is handled by a specialized crate; the code here only adapts between
//!     those crates and flat text. The intermediate representation is always a `String`,
//!     so conversions are lossy by construction: styles, images and structure are dropped.
//!
//!     The one exception is the universal converter (pandoc), which is shelled out to when
//!     installed, for Markdown to DOCX/PDF, where it keeps far more of the document.
//!
//! Resources
//!
//!     Output is always staged in a temporary file beside the destination and moved into
//!     place at the end (see [`publish`]). Whatever the failure, no partial destination or
//!     temporary file is left behind.

pub mod convert;
pub mod error;
pub mod format;
pub mod formats;
pub mod publish;
pub mod registry;
pub mod request;

pub use convert::{ConversionOutcome, Converter, ConverterOptions, Strategy};
pub use error::ConvertError;
pub use format::DocumentKind;
pub use registry::Route;
pub use request::ConversionRequest;
