//! Shell module - pane trait, events, and main entry point
//!
//! The Pane trait defines a common interface for UI components that:
//! - Render themselves given a model and area
//! - Handle keyboard input and return events
//!
//! This module also contains the terminal event loop.

use super::app::App;
use super::browser::Browser;
use super::model::Model;
use super::ui;
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use docshift_babel::Converter;
use ratatui::layout::Rect;
use ratatui::prelude::{CrosstermBackend, Terminal};
use ratatui::Frame;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Events that can be emitted by panes
///
/// These represent model changes that the app applies after handling input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneEvent {
    /// List a different directory
    OpenDirectory(PathBuf),
    /// Use a file as the conversion source
    SelectFile(PathBuf),
    NextTarget,
    PreviousTarget,
    /// Run the conversion for the current selection
    Convert,
}

/// Trait for UI panes
pub trait Pane {
    /// Render this pane to the given area
    fn render(&self, frame: &mut Frame, area: Rect, model: &Model);

    /// Handle a keyboard event and return the resulting event
    fn handle_key(&mut self, key: event::KeyEvent, model: &Model) -> Option<PaneEvent>;
}

/// Run the shell, browsing from `start_dir`
pub fn run_shell(start_dir: PathBuf, converter: Converter) -> io::Result<()> {
    let browser = Browser::open(&start_dir)?;
    let mut app = App::new(browser, converter);

    // Setup terminal
    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            // Resize needs no handling: the next draw() picks up the new size
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}
