use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, HitTarget};
use crate::util::unicode;

use super::helpers::spans_width;

const CLEAR_COMPLETED: &str = "Clear completed";
const SELECTOR_GAP: &str = "  ";

/// Render the footer: counter, filter selectors, clear-completed
pub fn render_footer(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // separator
            Constraint::Length(1), // counter + selectors
        ])
        .split(area);
    let bg = app.theme.background;

    let sep = "\u{2500}".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(sep, Style::default().fg(app.theme.dim).bg(bg))),
        chunks[0],
    );

    let line_area = chunks[1];
    let model = app.controller.view().view_model();
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let selected_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let mut spans = vec![
        Span::styled(" ", text_style),
        Span::styled(model.count_text(), text_style),
        Span::styled("   ", text_style),
    ];
    let mut hits = Vec::new();
    for (i, selector) in model.selectors.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SELECTOR_GAP, text_style));
        }
        let x = line_area.x + spans_width(&spans) as u16;
        let label = selector.filter.label();
        let width = unicode::display_width(label) as u16;
        hits.push((
            Rect::new(x, line_area.y, width, 1),
            HitTarget::Selector(selector.filter),
        ));
        let style = if selector.selected {
            selected_style
        } else {
            text_style
        };
        spans.push(Span::styled(label, style));
    }

    let used = spans_width(&spans);
    let clear_w = unicode::display_width(CLEAR_COMPLETED);
    if model.completed > 0 && used + clear_w + 2 <= line_area.width as usize {
        let pad = line_area.width as usize - used - clear_w - 1;
        spans.push(Span::styled(" ".repeat(pad), text_style));
        let x = line_area.x + (used + pad) as u16;
        hits.push((
            Rect::new(x, line_area.y, clear_w as u16, 1),
            HitTarget::ClearCompleted,
        ));
        spans.push(Span::styled(
            CLEAR_COMPLETED,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        line_area,
    );
    app.hits.extend(hits);
}
