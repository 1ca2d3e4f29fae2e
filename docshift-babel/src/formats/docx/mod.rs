//! Word documents (DOCX)
//!
//! Only the flat paragraph text of the document body is used. Reading keeps top-level
//! paragraphs and drops tables, headers, footers, images and all styling. Writing emits
//! one unstyled paragraph per line of text.
//!
//! Both directions go through `docx-rs`.

use crate::error::{ConvertError, Result};
use crate::publish;
use docx_rs::{
    read_docx, DocumentChild, Docx, InsertChild, MoveToChild, Paragraph, ParagraphChild, Run,
    RunChild,
};
use std::fs;
use std::path::Path;

/// Read the text of every body paragraph, joined by newlines.
pub fn read_docx_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|err| ConvertError::io(path, err))?;
    let docx = read_docx(&bytes).map_err(|err| ConvertError::Docx(err.to_string()))?;
    Ok(paragraph_texts(&docx).join("\n"))
}

/// Write `text` as a document with one paragraph per line.
pub fn write_docx_text(path: &Path, text: &str) -> Result<()> {
    let docx = build_docx(text);
    publish::write_with(path, |file| {
        docx.build()
            .pack(file)
            .map_err(|err| ConvertError::Docx(err.to_string()))
    })
}

fn build_docx(text: &str) -> Docx {
    text.lines().fold(Docx::new(), |docx, line| {
        let paragraph = if line.is_empty() {
            Paragraph::new()
        } else {
            Paragraph::new().add_run(Run::new().add_text(line))
        };
        docx.add_paragraph(paragraph)
    })
}

fn paragraph_texts(docx: &Docx) -> Vec<String> {
    docx.document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect()
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&paragraph.children, &mut text);
    text
}

/// Runs, hyperlinks and tracked insertions contribute text; deletions do not.
fn push_children_text(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run_text(run, out),
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, out),
            ParagraphChild::Insert(insert) => {
                for child in &insert.children {
                    if let InsertChild::Run(run) = child {
                        push_run_text(run, out);
                    }
                }
            }
            ParagraphChild::MoveTo(moved) => {
                for child in &moved.children {
                    if let MoveToChild::Run(run) = child {
                        push_run_text(run, out);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run_text(run: &Run, out: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Hyperlink, HyperlinkType, Insert};
    use tempfile::tempdir;

    #[test]
    fn test_lines_become_paragraphs() {
        let docx = build_docx("first\n\nthird");
        assert_eq!(paragraph_texts(&docx), vec!["first", "", "third"]);
    }

    #[test]
    fn test_crlf_lines() {
        let docx = build_docx("a\r\nb\r\n");
        assert_eq!(paragraph_texts(&docx), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_text_has_no_paragraphs() {
        assert!(paragraph_texts(&build_docx("")).is_empty());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.docx");
        write_docx_text(&path, "hello\nworld").unwrap();
        assert_eq!(read_docx_text(&path).unwrap(), "hello\nworld");
    }

    #[test]
    fn test_hyperlink_text_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("linked.docx");
        let paragraph = Paragraph::new()
            .add_run(Run::new().add_text("See "))
            .add_hyperlink(
                Hyperlink::new("https://example.com", HyperlinkType::External)
                    .add_run(Run::new().add_text("the site")),
            )
            .add_run(Run::new().add_text(" now"));
        let file = fs::File::create(&path).unwrap();
        Docx::new()
            .add_paragraph(paragraph)
            .build()
            .pack(file)
            .unwrap();

        assert_eq!(read_docx_text(&path).unwrap(), "See the site now");
    }

    #[test]
    fn test_tracked_insertions_are_read() {
        let paragraph = Paragraph::new()
            .add_run(Run::new().add_text("before "))
            .add_insert(Insert::new(Run::new().add_text("added")))
            .add_run(Run::new().add_text(" after"));
        let docx = Docx::new().add_paragraph(paragraph);

        assert_eq!(paragraph_texts(&docx), vec!["before added after"]);
    }

    #[test]
    fn test_read_garbage_is_docx_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.docx");
        fs::write(&path, b"this is not a zip archive").unwrap();
        let err = read_docx_text(&path).unwrap_err();
        assert!(matches!(err, ConvertError::Docx(_)));
    }
}
