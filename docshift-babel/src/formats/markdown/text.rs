//! HTML to plain text
//!
//! Collects the text nodes of an HTML DOM in document order. Text inside one block
//! element becomes one line; whitespace is collapsed except inside `<pre>`, where lines
//! are kept as written. Script and style content is dropped.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parse an HTML document or fragment and return its text content.
pub fn html_to_text(html: &str) -> String {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);
    let mut collector = TextCollector::default();
    collector.walk(&dom.document);
    collector.finish()
}

#[derive(Debug, Default)]
pub struct TextCollector {
    lines: Vec<String>,
    current: String,
    preformatted: usize,
}

impl TextCollector {
    pub fn walk(&mut self, handle: &Handle) {
        match &handle.data {
            NodeData::Document => self.walk_children(handle),
            NodeData::Text { contents } => {
                let contents = contents.borrow();
                if self.preformatted > 0 {
                    self.push_preformatted(&contents);
                } else {
                    self.push_collapsed(&contents);
                }
            }
            NodeData::Element { name, .. } => {
                let tag: &str = &name.local;
                if is_skipped(tag) {
                    return;
                }
                if tag == "br" {
                    self.finish_line(true);
                    return;
                }

                let block = is_block(tag);
                if block {
                    self.finish_line(false);
                }
                if tag == "pre" {
                    self.preformatted += 1;
                }
                self.walk_children(handle);
                if tag == "pre" {
                    self.preformatted -= 1;
                }
                if block {
                    self.finish_line(false);
                }
            }
            _ => {}
        }
    }

    fn walk_children(&mut self, handle: &Handle) {
        for child in handle.children.borrow().iter() {
            self.walk(child);
        }
    }

    pub fn finish(mut self) -> String {
        self.finish_line(false);
        self.lines.join("\n")
    }

    fn push_collapsed(&mut self, text: &str) {
        for ch in text.chars() {
            if ch.is_whitespace() {
                if !self.current.is_empty() && !self.current.ends_with(' ') {
                    self.current.push(' ');
                }
            } else {
                self.current.push(ch);
            }
        }
    }

    fn push_preformatted(&mut self, text: &str) {
        for (i, segment) in text.split('\n').enumerate() {
            if i > 0 {
                self.finish_line(true);
            }
            self.current.push_str(segment.trim_end_matches('\r'));
        }
    }

    /// End the current line. Blank lines are only kept when `keep_empty` is set.
    fn finish_line(&mut self, keep_empty: bool) {
        let line = self.current.trim_end();
        if !line.is_empty() || keep_empty {
            self.lines.push(line.to_string());
        }
        self.current.clear();
    }
}

fn is_skipped(tag: &str) -> bool {
    matches!(tag, "script" | "style" | "head" | "template")
}

fn is_block(tag: &str) -> bool {
    matches!(
        tag,
        "html"
            | "body"
            | "p"
            | "div"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "ul"
            | "ol"
            | "li"
            | "dl"
            | "dt"
            | "dd"
            | "blockquote"
            | "pre"
            | "hr"
            | "table"
            | "thead"
            | "tbody"
            | "tfoot"
            | "tr"
            | "th"
            | "td"
            | "section"
            | "article"
            | "header"
            | "footer"
            | "aside"
            | "nav"
            | "figure"
            | "figcaption"
            | "details"
            | "summary"
    )
}
