//! Application state and input routing
//!
//! App owns the model, both panes and the converter. Keys go to the open dialog
//! first, then to global bindings, then to the focused pane. Pane events are
//! applied here, which is the only place the model is mutated.

use super::browser::Browser;
use super::form::Form;
use super::model::{Focus, Model};
use super::shell::{Pane, PaneEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use docshift_babel::Converter;
use std::path::Path;

pub struct App {
    pub model: Model,
    pub focus: Focus,
    pub browser: Browser,
    pub form: Form,
    pub should_quit: bool,
    converter: Converter,
}

impl App {
    pub fn new(browser: Browser, converter: Converter) -> Self {
        App {
            model: Model::new(),
            focus: Focus::default(),
            browser,
            form: Form::new(),
            should_quit: false,
            converter,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Dialogs are modal
        if self.model.dialog().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.model.dismiss_dialog();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.is_empty() => self.apply(PaneEvent::Convert),
            KeyCode::Tab => self.toggle_focus(),
            _ => {
                let event = match self.focus {
                    Focus::Browser => self.browser.handle_key(key, &self.model),
                    Focus::Form => self.form.handle_key(key, &self.model),
                };
                if let Some(event) = event {
                    self.apply(event);
                }
            }
        }
    }

    fn apply(&mut self, event: PaneEvent) {
        match event {
            PaneEvent::OpenDirectory(dir) => self.open_directory(&dir),
            PaneEvent::SelectFile(path) => {
                let message = format!("Selected file:\n{}", path.display());
                self.model.select_file(path);
                self.model.show_info(message);
            }
            PaneEvent::NextTarget => self.model.next_target(),
            PaneEvent::PreviousTarget => self.model.previous_target(),
            PaneEvent::Convert => self.convert(),
        }
    }

    fn open_directory(&mut self, dir: &Path) {
        if let Err(err) = self.browser.change_dir(dir) {
            tracing::warn!("cannot open {}: {err}", dir.display());
            self.model
                .show_error(format!("Cannot open {}:\n{err}", dir.display()));
        }
    }

    /// Build a request from the selection as it is right now and run it.
    fn convert(&mut self) {
        let result = self
            .model
            .request()
            .and_then(|request| self.converter.convert(&request));

        match result {
            Ok(outcome) => {
                self.model.show_info(format!(
                    "Converted file:\n{}",
                    outcome.destination.display()
                ));
                if let Err(err) = self.browser.refresh() {
                    tracing::warn!("cannot refresh {}: {err}", self.browser.dir().display());
                }
            }
            Err(err) => {
                tracing::error!("conversion failed: {err}");
                self.model.show_error(err.to_string());
            }
        }
    }
}
