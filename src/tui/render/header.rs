use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus, HitTarget};

use super::helpers::caret_window;

const TITLE: &str = "todos";
const PLACEHOLDER: &str = "What needs to be done?";
const TOGGLE_ALL: &str = "\u{276F}";

/// Render the header: title, the new-item input and a separator
pub fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // input
            Constraint::Length(1), // separator
        ])
        .split(area);

    let bg = app.theme.background;
    let title = Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            TITLE,
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), chunks[0]);

    render_input(frame, app, chunks[1]);

    let sep = "\u{2500}".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(sep, Style::default().fg(app.theme.dim).bg(bg))),
        chunks[2],
    );
}

fn render_input(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let has_items = !app.controller.items().is_empty();
    let all_done = has_items && app.controller.items().remaining() == 0;

    // toggle-all sits over the toggle column of the rows
    let toggle_area = Rect::new(area.x + 2, area.y, 1, 1);
    let input_area = Rect::new(
        area.x + 5,
        area.y,
        area.width.saturating_sub(6),
        1,
    );
    if has_items {
        let fg = if all_done {
            app.theme.text_bright
        } else {
            app.theme.dim
        };
        frame.render_widget(
            Paragraph::new(Span::styled(TOGGLE_ALL, Style::default().fg(fg).bg(bg))),
            toggle_area,
        );
        app.hits
            .push((Rect::new(area.x + 1, area.y, 3, 1), HitTarget::ToggleAll));
    }
    app.hits.push((input_area, HitTarget::Input));

    let focused = app.focus == Focus::Input && app.editing.is_none();
    let width = input_area.width as usize;
    if app.input.text.is_empty() {
        let style = Style::default()
            .fg(app.theme.dim)
            .bg(bg)
            .add_modifier(Modifier::ITALIC);
        frame.render_widget(Paragraph::new(Span::styled(PLACEHOLDER, style)), input_area);
        if focused {
            frame.set_cursor_position(Position::new(input_area.x, input_area.y));
        }
        return;
    }

    let (shown, caret) = caret_window(&app.input.text, app.input.cursor, width);
    frame.render_widget(
        Paragraph::new(Span::styled(
            shown,
            Style::default().fg(app.theme.text_bright).bg(bg),
        )),
        input_area,
    );
    if focused {
        frame.set_cursor_position(Position::new(input_area.x + caret as u16, input_area.y));
    }
}
