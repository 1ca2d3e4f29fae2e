//! Format adapters
//!
//! One module per format. Each exposes plain functions that read a file into a `String`
//! and/or write a `String` out as a file; the dispatcher composes them.

pub mod docx;
pub mod markdown;
pub mod pandoc;
pub mod pdf;
pub mod text;

pub use pandoc::{PandocConverter, UniversalConverter, UniversalOptions};
pub use pdf::{PageSize, PdfOptions};
