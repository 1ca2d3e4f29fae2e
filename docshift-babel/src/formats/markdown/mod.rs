//! Markdown
//!
//! Markdown is a source-only format. It is flattened to plain text in two steps:
//!
//!     1. comrak renders the Markdown to HTML (CommonMark plus tables, strikethrough,
//!        autolinks and task lists).
//!     2. html5ever parses that HTML into a DOM and [`text::TextCollector`] walks it,
//!        keeping every text node in document order and dropping the markup.
//!
//! Going through HTML rather than the comrak AST means every construct comrak knows how to
//! render is flattened the same way, including the extensions.

pub mod text;

use comrak::{markdown_to_html, ComrakOptions};

/// Render Markdown source to an HTML fragment.
pub fn render_html(source: &str) -> String {
    markdown_to_html(source, &default_comrak_options())
}

/// Flatten Markdown source to plain text.
pub fn markdown_to_text(source: &str) -> String {
    text::html_to_text(&render_html(source))
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options
}
