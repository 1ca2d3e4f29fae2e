//! Data model for the shell
//!
//! The Model struct holds the pure form state:
//! - The selected source file (if any)
//! - The chosen target format
//! - The modal dialog currently shown, if any
//!
//! Conversion requests are never stored here. One is built from the current
//! selection each time the user asks for a conversion.

use docshift_babel::request::destination_for;
use docshift_babel::{ConversionRequest, ConvertError, DocumentKind};
use std::path::{Path, PathBuf};

/// Which pane currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// File browser has focus
    #[default]
    Browser,
    /// Conversion form has focus
    Form,
}

impl Focus {
    /// Toggle focus to the other pane
    pub fn toggle(&self) -> Focus {
        match self {
            Focus::Browser => Focus::Form,
            Focus::Form => Focus::Browser,
        }
    }
}

/// A modal message box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Info(String),
    Error(String),
}

impl Dialog {
    pub fn title(&self) -> &'static str {
        match self {
            Dialog::Info(_) => "Info",
            Dialog::Error(_) => "Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Dialog::Info(message) | Dialog::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Dialog::Error(_))
    }
}

/// The core form state
#[derive(Debug, Clone, Default)]
pub struct Model {
    selection: Option<PathBuf>,
    /// Index into [`DocumentKind::TARGETS`]
    target: usize,
    dialog: Option<Dialog>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<&Path> {
        self.selection.as_deref()
    }

    pub fn select_file(&mut self, path: PathBuf) {
        self.selection = Some(path);
    }

    pub fn target(&self) -> DocumentKind {
        DocumentKind::TARGETS[self.target]
    }

    pub fn next_target(&mut self) {
        self.target = (self.target + 1) % DocumentKind::TARGETS.len();
    }

    pub fn previous_target(&mut self) {
        let count = DocumentKind::TARGETS.len();
        self.target = (self.target + count - 1) % count;
    }

    /// Where the current selection would be written.
    pub fn destination(&self) -> Option<PathBuf> {
        self.selection
            .as_deref()
            .map(|source| destination_for(source, self.target()))
    }

    /// Build a fresh request from the current selection and target.
    pub fn request(&self) -> Result<ConversionRequest, ConvertError> {
        ConversionRequest::from_selection(self.selection(), self.target())
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn show_info(&mut self, message: impl Into<String>) {
        self.dialog = Some(Dialog::Info(message.into()));
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.dialog = Some(Dialog::Error(message.into()));
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }
}
