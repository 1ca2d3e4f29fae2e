//! UI rendering logic
//!
//! Layout structure:
//! - Title bar (1 line, fixed)
//! - Middle section (responsive height):
//!   - File browser (40 chars, fixed width)
//!   - Conversion form (remaining space)
//! - Status line (1 line, fixed)
//! - Modal dialog drawn over everything when one is open

use super::app::App;
use super::model::{Dialog, Focus};
use super::shell::Pane;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 50;
/// Width allocated to the file browser
const BROWSER_WIDTH: u16 = 40;
/// Height of the status line
const STATUS_LINE_HEIGHT: u16 = 1;
/// Dialog size as a percentage of the terminal
const DIALOG_WIDTH_PERCENT: u16 = 70;
const DIALOG_HEIGHT: u16 = 8;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    if size.width < MIN_TERMINAL_WIDTH {
        render_error_too_narrow(frame, size);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                  // Title bar
            Constraint::Min(1),                     // Browser | form
            Constraint::Length(STATUS_LINE_HEIGHT), // Status line
        ])
        .split(size);

    render_title_bar(frame, chunks[0], app);
    render_middle_section(frame, chunks[1], app);
    render_status_line(frame, chunks[2], app);

    if let Some(dialog) = app.model.dialog() {
        render_dialog(frame, size, dialog);
    }
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too narrow: {} < {} chars",
        area.width, MIN_TERMINAL_WIDTH
    );
    let paragraph =
        Paragraph::new(msg).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!("docshift:: {}", app.browser.dir().display());
    let paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_middle_section(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BROWSER_WIDTH), Constraint::Min(1)])
        .split(area);

    render_pane(frame, chunks[0], "Files", app.focus == Focus::Browser, |f, a| {
        app.browser.render(f, a, &app.model)
    });
    render_pane(frame, chunks[1], "Convert", app.focus == Focus::Form, |f, a| {
        app.form.render(f, a, &app.model)
    });
}

/// Draw a bordered pane and let `content` fill its inside.
fn render_pane(
    frame: &mut Frame,
    area: Rect,
    name: &str,
    focused: bool,
    content: impl FnOnce(&mut Frame, Rect),
) {
    let title = if focused {
        format!("{name} [FOCUSED]")
    } else {
        name.to_string()
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner_area = block.inner(area);
    frame.render_widget(block, area);
    content(frame, inner_area);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(Color::Yellow);
    let mut spans = vec![
        Span::styled("Tab", key_style),
        Span::raw(" switch  "),
        Span::styled("Enter", key_style),
        Span::raw(" open/select  "),
        Span::styled("←/→", key_style),
        Span::raw(" target  "),
        Span::styled("c", key_style),
        Span::raw(" convert  "),
        Span::styled("q", key_style),
        Span::raw(" quit"),
    ];
    if app.model.dialog().is_some() {
        spans = vec![
            Span::styled("Enter/Esc", key_style),
            Span::raw(" close dialog"),
        ];
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_dialog(frame: &mut Frame, area: Rect, dialog: &Dialog) {
    let popup = centered_rect(area, DIALOG_WIDTH_PERCENT, DIALOG_HEIGHT);
    let border_color = if dialog.is_error() {
        Color::Red
    } else {
        Color::Green
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(dialog.title());
    let paragraph = Paragraph::new(dialog.message())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

/// A rect `percent_x` wide and `height` tall, centered in `area`.
fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
