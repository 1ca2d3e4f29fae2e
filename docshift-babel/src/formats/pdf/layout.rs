//! Page layout for preformatted text
//!
//! Text is laid out as a single preformatted block: one output line per input line, no
//! wrapping, monospaced. Lines that do not fit on a page continue on the next one.

use serde::{Deserialize, Serialize};

pub const TAB_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageSize {
    #[default]
    Letter,
    A4,
}

impl PageSize {
    /// Width and height in points.
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.28, 841.89),
        }
    }
}

/// Layout knobs for PDF output. All lengths are in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfOptions {
    pub page_size: PageSize,
    pub font_size: f32,
    /// Distance between baselines
    pub leading: f32,
    /// Margin on every side of the page
    pub margin: f32,
    /// Extra left indent of the text block
    pub indent: f32,
}

impl Default for PdfOptions {
    fn default() -> Self {
        PdfOptions {
            page_size: PageSize::Letter,
            font_size: 8.0,
            leading: 8.8,
            margin: 72.0,
            indent: 36.0,
        }
    }
}

impl PdfOptions {
    /// How many lines fit between the top and bottom margins (at least one).
    pub fn lines_per_page(&self) -> usize {
        let (_, height) = self.page_size.dimensions();
        let usable = height - 2.0 * self.margin;
        if self.leading <= 0.0 || usable <= 0.0 {
            return 1;
        }
        ((usable / self.leading).floor() as usize).max(1)
    }

    /// Position of the first baseline on a page.
    pub fn text_origin(&self) -> (f32, f32) {
        let (_, height) = self.page_size.dimensions();
        (self.margin + self.indent, height - self.margin - self.font_size)
    }
}

/// Split text into pages of display lines. Always returns at least one page.
pub fn layout_pages(text: &str, options: &PdfOptions) -> Vec<Vec<String>> {
    let lines: Vec<String> = text.lines().map(expand_tabs).collect();
    if lines.is_empty() {
        return vec![Vec::new()];
    }
    lines
        .chunks(options.lines_per_page())
        .map(|page| page.to_vec())
        .collect()
}

/// Replace tabs with spaces up to the next tab stop.
pub fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    out
}
