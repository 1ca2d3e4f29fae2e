//! File browser - lists a directory and picks the source document
//!
//! Stands in for an open-file dialog. The listing always starts with the
//! parent entry (when there is one), followed by sub-directories and then
//! files, each group sorted by name.

use super::model::Model;
use super::shell::{Pane, PaneEvent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{List, ListItem, ListState};
use ratatui::Frame;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Parent,
    Directory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    fn label(&self) -> String {
        match self.kind {
            EntryKind::Parent => "../".to_string(),
            EntryKind::Directory => format!("{}/", self.name),
            EntryKind::File => self.name.clone(),
        }
    }
}

#[derive(Debug)]
pub struct Browser {
    dir: PathBuf,
    entries: Vec<Entry>,
    cursor: usize,
}

impl Browser {
    /// List `dir`. The path is canonicalized so the parent entry is always meaningful.
    pub fn open(dir: &Path) -> io::Result<Self> {
        let dir = fs::canonicalize(dir)?;
        let entries = read_entries(&dir)?;
        Ok(Browser {
            dir,
            entries,
            cursor: 0,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    /// Switch to another directory. On failure the current listing is kept.
    pub fn change_dir(&mut self, dir: &Path) -> io::Result<()> {
        let dir = fs::canonicalize(dir)?;
        let entries = read_entries(&dir)?;
        self.dir = dir;
        self.entries = entries;
        self.cursor = 0;
        Ok(())
    }

    /// Re-read the current directory, keeping the cursor on the same name if possible.
    pub fn refresh(&mut self) -> io::Result<()> {
        let selected = self.current().map(|entry| entry.name.clone());
        self.entries = read_entries(&self.dir)?;
        self.cursor = selected
            .and_then(|name| self.entries.iter().position(|e| e.name == name))
            .unwrap_or(0);
        Ok(())
    }

    fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }
}

fn read_entries(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for item in fs::read_dir(dir)? {
        let item = item?;
        let name = item.file_name().to_string_lossy().into_owned();
        let path = item.path();
        // Follows symlinks, so linked directories can be entered
        if path.is_dir() {
            dirs.push(Entry {
                name,
                path,
                kind: EntryKind::Directory,
            });
        } else {
            files.push(Entry {
                name,
                path,
                kind: EntryKind::File,
            });
        }
    }
    dirs.sort_by_key(|e| e.name.to_lowercase());
    files.sort_by_key(|e| e.name.to_lowercase());

    let mut entries = Vec::with_capacity(dirs.len() + files.len() + 1);
    if let Some(parent) = dir.parent() {
        entries.push(Entry {
            name: "..".to_string(),
            path: parent.to_path_buf(),
            kind: EntryKind::Parent,
        });
    }
    entries.extend(dirs);
    entries.extend(files);
    Ok(entries)
}

impl Pane for Browser {
    fn render(&self, frame: &mut Frame, area: Rect, model: &Model) {
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let style = match entry.kind {
                    EntryKind::Parent | EntryKind::Directory => Style::default().fg(Color::Blue),
                    EntryKind::File if model.selection() == Some(entry.path.as_path()) => {
                        Style::default().fg(Color::Green)
                    }
                    EntryKind::File => Style::default(),
                };
                ListItem::new(entry.label()).style(style)
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn handle_key(&mut self, key: KeyEvent, _model: &Model) -> Option<PaneEvent> {
        match key.code {
            KeyCode::Up => {
                self.move_up();
                None
            }
            KeyCode::Down => {
                self.move_down();
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = self.entries.len().saturating_sub(1);
                None
            }
            KeyCode::Enter => self.current().map(|entry| match entry.kind {
                EntryKind::Parent | EntryKind::Directory => {
                    PaneEvent::OpenDirectory(entry.path.clone())
                }
                EntryKind::File => PaneEvent::SelectFile(entry.path.clone()),
            }),
            KeyCode::Backspace => self
                .dir
                .parent()
                .map(|parent| PaneEvent::OpenDirectory(parent.to_path_buf())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tempfile::tempdir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_listing_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.md"), "").unwrap();
        fs::write(dir.path().join("A.txt"), "").unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();

        let browser = Browser::open(dir.path()).unwrap();
        let labels: Vec<_> = browser.entries().iter().map(Entry::label).collect();
        assert_eq!(labels, vec!["../", "alpha/", "zeta/", "A.txt", "b.md"]);
    }

    #[test]
    fn test_enter_on_file_selects_it() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        let mut browser = Browser::open(dir.path()).unwrap();
        let model = Model::new();

        browser.handle_key(key(KeyCode::Down), &model);
        let event = browser.handle_key(key(KeyCode::Enter), &model);

        let expected = browser.dir().join("notes.txt");
        assert_eq!(event, Some(PaneEvent::SelectFile(expected)));
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("only.txt"), "").unwrap();
        let mut browser = Browser::open(dir.path()).unwrap();
        let model = Model::new();

        browser.handle_key(key(KeyCode::Up), &model);
        assert_eq!(browser.cursor(), 0);
        for _ in 0..5 {
            browser.handle_key(key(KeyCode::Down), &model);
        }
        assert_eq!(browser.cursor(), 1);
    }

    #[test]
    fn test_change_dir_and_back() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("inner.md"), "").unwrap();
        let mut browser = Browser::open(dir.path()).unwrap();
        let root = browser.dir().to_path_buf();

        browser.change_dir(&root.join("sub")).unwrap();
        assert_eq!(browser.dir(), root.join("sub"));
        assert_eq!(browser.entries()[1].name, "inner.md");

        let model = Model::new();
        let event = browser.handle_key(key(KeyCode::Backspace), &model);
        assert_eq!(event, Some(PaneEvent::OpenDirectory(root)));
    }

    #[test]
    fn test_change_dir_failure_keeps_listing() {
        let dir = tempdir().unwrap();
        let mut browser = Browser::open(dir.path()).unwrap();
        let before = browser.dir().to_path_buf();

        assert!(browser.change_dir(&dir.path().join("missing")).is_err());
        assert_eq!(browser.dir(), before);
    }

    #[test]
    fn test_refresh_keeps_cursor_on_same_entry() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        let mut browser = Browser::open(dir.path()).unwrap();
        let model = Model::new();
        browser.handle_key(key(KeyCode::End), &model);
        assert_eq!(browser.current().unwrap().name, "b.txt");

        fs::write(dir.path().join("a.txt"), "").unwrap();
        browser.refresh().unwrap();
        assert_eq!(browser.current().unwrap().name, "b.txt");
        assert_eq!(browser.cursor(), 2);
    }
}
