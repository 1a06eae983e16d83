use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};

use super::helpers::spans_width;

/// Render the status row (bottom of screen): an error message, if any,
/// and key hints for whatever has focus
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = Vec::new();
    if let Some(ref msg) = app.status {
        spans.push(Span::styled(
            format!(" {}", msg),
            Style::default().fg(app.theme.red).bg(bg),
        ));
    }

    let hint = match (app.focus, app.editing) {
        (_, Some(_)) => "Enter save  Shift+Enter newline  Esc cancel",
        (Focus::Input, None) => "Enter add  Tab list  Ctrl+C quit",
        (Focus::List, None) => "Space toggle  e edit  d delete  1-3 filter  ? help",
    };
    let content_width = spans_width(&spans);
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
