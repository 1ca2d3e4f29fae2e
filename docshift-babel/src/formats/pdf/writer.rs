//! PDF rendering with lopdf
//!
//! Pages use the standard Courier font with WinAnsi encoding, so nothing is embedded.
//! Characters outside Latin-1 are rendered as `?`.

use super::layout::{layout_pages, PdfOptions};
use crate::error::{ConvertError, Result};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::io::Write;

const FONT_NAME: &str = "F1";

/// Render `text` as a preformatted block and return the document.
pub fn render(text: &str, options: &PdfOptions) -> Result<Document> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_NAME => font_id,
        },
    });

    let (width, height) = options.page_size.dimensions();
    let mut kids: Vec<Object> = Vec::new();

    for lines in layout_pages(text, options) {
        let content = page_content(&lines, options);
        let encoded = content
            .encode()
            .map_err(|err| ConvertError::Pdf(err.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    Ok(doc)
}

/// Render and serialize into `out`.
pub fn write_pdf<W: Write>(text: &str, options: &PdfOptions, out: &mut W) -> Result<()> {
    let mut doc = render(text, options)?;
    doc.save_to(out)
        .map_err(|err| ConvertError::Pdf(err.to_string()))
}

fn page_content(lines: &[String], options: &PdfOptions) -> Content {
    let (x, y) = options.text_origin();
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![FONT_NAME.into(), options.font_size.into()]),
        Operation::new("TL", vec![options.leading.into()]),
        Operation::new("Td", vec![x.into(), y.into()]),
    ];
    for line in lines {
        if !line.is_empty() {
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(encode_win_ansi(line))],
            ));
        }
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));
    Content { operations }
}

/// Map text onto single-byte WinAnsi codes.
fn encode_win_ansi(line: &str) -> Vec<u8> {
    line.chars()
        .filter(|ch| !ch.is_control())
        .map(|ch| match ch as u32 {
            code @ 0x20..=0x7e => code as u8,
            code @ 0xa0..=0xff => code as u8,
            _ => b'?',
        })
        .collect()
}
