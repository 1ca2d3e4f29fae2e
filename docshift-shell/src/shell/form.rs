//! Conversion form - shows the source, the target selector and the convert button

use super::model::Model;
use super::shell::{Pane, PaneEvent};
use crossterm::event::{KeyCode, KeyEvent};
use docshift_babel::DocumentKind;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

/// Which form control the cursor is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Target,
    Convert,
}

#[derive(Debug, Default)]
pub struct Form {
    field: Field,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self) -> Field {
        self.field
    }

    fn toggle_field(&mut self) {
        self.field = match self.field {
            Field::Target => Field::Convert,
            Field::Convert => Field::Target,
        };
    }
}

fn label_style() -> Style {
    Style::default().fg(Color::Yellow)
}

impl Pane for Form {
    fn render(&self, frame: &mut Frame, area: Rect, model: &Model) {
        let source = model
            .selection()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "(no file selected)".to_string());
        let destination = model
            .destination()
            .map(|path| path.display().to_string())
            .unwrap_or_default();

        let mut targets = vec![Span::styled("Target: ", label_style())];
        for kind in DocumentKind::TARGETS {
            let text = format!(" {} ", kind.extension().to_uppercase());
            let style = if kind == model.target() {
                let style = Style::default().fg(Color::Black).bg(Color::Cyan);
                if self.field == Field::Target {
                    style.add_modifier(Modifier::BOLD)
                } else {
                    style
                }
            } else {
                Style::default()
            };
            targets.push(Span::styled(text, style));
            targets.push(Span::raw(" "));
        }

        let button_style = if self.field == Field::Convert {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };

        let lines = vec![
            Line::from(vec![Span::styled("Source: ", label_style()), Span::raw(source)]),
            Line::from(""),
            Line::from(targets),
            Line::from(""),
            Line::from(vec![
                Span::styled("Output: ", label_style()),
                Span::raw(destination),
            ]),
            Line::from(""),
            Line::from(Span::styled("[ Convert ]", button_style)),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }

    fn handle_key(&mut self, key: KeyEvent, _model: &Model) -> Option<PaneEvent> {
        match key.code {
            KeyCode::Up | KeyCode::Down => {
                self.toggle_field();
                None
            }
            KeyCode::Left => Some(PaneEvent::PreviousTarget),
            KeyCode::Right => Some(PaneEvent::NextTarget),
            KeyCode::Enter => match self.field {
                Field::Target => Some(PaneEvent::NextTarget),
                Field::Convert => Some(PaneEvent::Convert),
            },
            _ => None,
        }
    }
}
