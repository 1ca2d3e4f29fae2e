//! Test infrastructure for the shell
//!
//! Provides utilities for testing the full application including:
//! - TestApp: the app over a temporary directory, rendered to a test backend
//! - Key helpers that return the screen as a string after each key

use super::app::App;
use super::browser::Browser;
use super::model::{Dialog, Focus};
use super::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use docshift_babel::formats::PdfOptions;
use docshift_babel::{Converter, DocumentKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test application wrapper with test backend
pub struct TestApp {
    app: App,
    terminal: Terminal<TestBackend>,
    _dir: TempDir,
}

impl TestApp {
    /// Create a test app browsing a temporary directory holding `files` (name, contents)
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        for (name, contents) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("Failed to create fixture dir");
            }
            fs::write(path, contents).expect("Failed to write fixture");
        }
        let browser = Browser::open(dir.path()).expect("Failed to list temp dir");
        // Never shell out in tests, so results do not depend on the host
        let app = App::new(browser, Converter::builtin(PdfOptions::default()));

        let backend = TestBackend::new(80, 24);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");

        TestApp {
            app,
            terminal,
            _dir: dir,
        }
    }

    /// Send a keyboard event and return the rendered output
    pub fn send_key(&mut self, code: KeyCode) -> String {
        self.send_key_with_modifiers(code, KeyModifiers::empty())
    }

    pub fn send_key_with_modifiers(&mut self, code: KeyCode, modifiers: KeyModifiers) -> String {
        self.app.handle_key(KeyEvent::new(code, modifiers));
        self.render()
    }

    /// Move the browser cursor onto `name` and press Enter
    pub fn select(&mut self, name: &str) -> String {
        let index = self
            .app
            .browser
            .entries()
            .iter()
            .position(|entry| entry.name == name)
            .unwrap_or_else(|| panic!("no entry named {name}"));
        self.send_key(KeyCode::Home);
        for _ in 0..index {
            self.send_key(KeyCode::Down);
        }
        self.send_key(KeyCode::Enter)
    }

    /// Render the current application state and return output
    pub fn render(&mut self) -> String {
        self.terminal
            .draw(|frame| ui::render(frame, &self.app))
            .expect("Failed to draw");

        let buffer = self.terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.app.browser.dir().join(name)
    }
}

#[test]
fn test_initial_render() {
    let mut app = TestApp::with_files(&[("notes.txt", "hello")]);
    let output = app.render();

    assert!(output.contains("docshift::"));
    assert!(output.contains("Files [FOCUSED]"));
    assert!(output.contains("../"));
    assert!(output.contains("notes.txt"));
    assert!(output.contains("(no file selected)"));
    assert!(output.contains(" PDF "));
    assert!(output.contains(" TXT "));
    assert!(output.contains(" DOCX "));
    assert!(output.contains("[ Convert ]"));
}

#[test]
fn test_selecting_a_file_shows_info_dialog() {
    let mut app = TestApp::with_files(&[("notes.txt", "hello")]);
    let output = app.select("notes.txt");

    let expected = app.path("notes.txt");
    assert_eq!(app.app().model.selection(), Some(expected.as_path()));
    assert!(matches!(
        app.app().model.dialog(),
        Some(Dialog::Info(m)) if m.contains("notes.txt")
    ));
    assert!(output.contains("Selected file:"));
    assert!(output.contains("close dialog"));

    let output = app.send_key(KeyCode::Esc);
    assert!(app.app().model.dialog().is_none());
    assert!(!output.contains("Selected file:"));
}

#[test]
fn test_dialog_is_modal() {
    let mut app = TestApp::with_files(&[("notes.txt", "hello")]);
    app.select("notes.txt");

    // Neither quitting nor switching focus happens while a dialog is open
    app.send_key(KeyCode::Char('q'));
    app.send_key(KeyCode::Tab);
    assert!(!app.app().should_quit);
    assert_eq!(app.app().focus, Focus::Browser);

    app.send_key(KeyCode::Enter);
    assert!(app.app().model.dialog().is_none());
}

#[test]
fn test_convert_without_selection_reports_error() {
    let mut app = TestApp::with_files(&[("notes.txt", "hello")]);
    let output = app.send_key(KeyCode::Char('c'));

    assert!(matches!(app.app().model.dialog(), Some(Dialog::Error(_))));
    assert!(output.contains("no source file selected"));
    assert!(!app.app().should_quit);
}

#[test]
fn test_convert_text_to_pdf() {
    let mut app = TestApp::with_files(&[("notes.txt", "hello\nworld")]);
    app.select("notes.txt");
    app.send_key(KeyCode::Enter);

    let output = app.send_key(KeyCode::Char('c'));

    let destination = app.path("notes.pdf");
    assert!(fs::read(&destination).unwrap().starts_with(b"%PDF-"));
    match app.app().model.dialog() {
        Some(Dialog::Info(message)) => {
            assert!(message.contains(&destination.display().to_string()))
        }
        other => panic!("expected info dialog, got {other:?}"),
    }
    assert!(output.contains("Converted file:"));

    // The browser picks up the new file
    app.send_key(KeyCode::Enter);
    assert!(app
        .app()
        .browser
        .entries()
        .iter()
        .any(|entry| entry.name == "notes.pdf"));
}

#[test]
fn test_form_target_and_button() {
    let mut app = TestApp::with_files(&[("report.md", "# Report\n\nAll good.")]);
    app.select("report.md");
    app.send_key(KeyCode::Esc);

    app.send_key(KeyCode::Tab);
    assert_eq!(app.app().focus, Focus::Form);
    app.send_key(KeyCode::Right);
    assert_eq!(app.app().model.target(), DocumentKind::PlainText);
    assert_eq!(app.app().model.destination(), Some(app.path("report.txt")));

    // Down moves to the button, Enter presses it
    app.send_key(KeyCode::Down);
    app.send_key(KeyCode::Enter);

    let text = fs::read_to_string(app.path("report.txt")).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), vec!["Report", "All good."]);
}

#[test]
fn test_unsupported_conversion_reports_error() {
    let mut app = TestApp::with_files(&[("scan.pdf", "not a real pdf")]);
    app.select("scan.pdf");
    app.send_key(KeyCode::Esc);

    // PDF -> DOCX has no route
    app.send_key(KeyCode::Tab);
    app.send_key(KeyCode::Left);
    assert_eq!(app.app().model.target(), DocumentKind::DocumentModel);
    let output = app.send_key(KeyCode::Char('c'));

    assert!(output.contains("Error"));
    assert!(matches!(
        app.app().model.dialog(),
        Some(Dialog::Error(m)) if m.contains("not supported")
    ));
    assert!(!app.path("scan.docx").exists());
}

#[test]
fn test_adapter_failure_is_reported_not_fatal() {
    let mut app = TestApp::with_files(&[("broken.docx", "not a zip")]);
    app.select("broken.docx");
    app.send_key(KeyCode::Esc);

    app.send_key(KeyCode::Char('c'));

    assert!(matches!(app.app().model.dialog(), Some(Dialog::Error(_))));
    assert!(!app.app().should_quit);
    assert!(!app.path("broken.pdf").exists());
}

#[test]
fn test_directory_navigation() {
    let mut app = TestApp::with_files(&[("top.txt", ""), ("nested/deep.md", "")]);
    let root = app.app().browser.dir().to_path_buf();

    let output = app.select("nested");
    assert_eq!(app.app().browser.dir(), root.join("nested"));
    assert!(output.contains("deep.md"));
    assert!(app.app().model.dialog().is_none());

    app.send_key(KeyCode::Backspace);
    assert_eq!(app.app().browser.dir(), root);

    app.select("..");
    assert_eq!(Some(app.app().browser.dir()), root.parent());
}

#[test]
fn test_focus_toggle_with_tab() {
    let mut app = TestApp::with_files(&[]);
    let output = app.send_key(KeyCode::Tab);
    assert_eq!(app.app().focus, Focus::Form);
    assert!(output.contains("Convert [FOCUSED]"));

    app.send_key(KeyCode::Tab);
    assert_eq!(app.app().focus, Focus::Browser);
}

#[test]
fn test_quit_keys() {
    let mut app = TestApp::with_files(&[]);
    app.send_key(KeyCode::Char('q'));
    assert!(app.app().should_quit);

    let mut app = TestApp::with_files(&[("notes.txt", "")]);
    app.select("notes.txt");
    app.send_key_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.app().should_quit);
}

#[test]
fn test_narrow_terminal() {
    let app = TestApp::with_files(&[]);
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    terminal.draw(|frame| ui::render(frame, app.app())).unwrap();
    let rendered: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(rendered.contains("Terminal too narrow"));
}
