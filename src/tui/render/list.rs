use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;
use crate::view::{ElementKind, RowNode};

use super::helpers::{caret_window, label_display};

const REMOVE_MARK: &str = "x";

/// Lay out the list container in `area` and draw its visible rows
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let container = app.controller.view_mut().container_mut();
    if container.area() != area {
        container.layout(area);
        if let Some(focus) = container.focus() {
            container.scroll_to(focus.row);
        }
    }

    let app = &*app;
    let container = app.controller.view().container();
    let focus = container.focus();
    for (i, row) in container.rows().iter().enumerate() {
        if row.layout.row.height == 0 {
            continue;
        }
        let on_cursor = focus.is_some_and(|el| el.row == i);
        let editing = app.editing.filter(|e| e.row == i);
        let bg = if on_cursor {
            app.theme.selection_bg
        } else {
            app.theme.background
        };
        frame.render_widget(Block::default().style(Style::default().bg(bg)), row.layout.row);

        render_toggle(frame, app, row, bg);

        match editing {
            Some(edit) => {
                let width = row.layout.label.width as usize;
                let (shown, caret) = caret_window(&row.text, edit.cursor, width);
                let style = Style::default()
                    .fg(app.theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::UNDERLINED);
                frame.render_widget(Paragraph::new(Span::styled(shown, style)), row.layout.label);
                if focus.is_some_and(|el| el.kind == ElementKind::Label) {
                    frame.set_cursor_position(Position::new(
                        row.layout.label.x + caret as u16,
                        row.layout.label.y,
                    ));
                }
            }
            None => {
                let mut style = Style::default().fg(app.theme.text).bg(bg);
                if row.fragment.struck {
                    style = style.fg(app.theme.dim).add_modifier(Modifier::CROSSED_OUT);
                }
                let text = unicode::truncate_to_width(
                    &label_display(&row.text),
                    row.layout.label.width as usize,
                );
                frame.render_widget(Paragraph::new(Span::styled(text, style)), row.layout.label);
            }
        }

        if container.remove_visible(i) {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    REMOVE_MARK,
                    Style::default().fg(app.theme.red).bg(bg),
                )),
                row.layout.remove,
            );
        }
    }
}

fn render_toggle(frame: &mut Frame, app: &App, row: &RowNode, bg: Color) {
    let fg = if row.fragment.completed {
        app.theme.green
    } else {
        app.theme.dim
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            row.fragment.toggle.symbol(),
            Style::default().fg(fg).bg(bg),
        )),
        row.layout.toggle,
    );
}
