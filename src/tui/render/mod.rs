pub mod footer;
pub mod header;
pub mod help_overlay;
mod helpers;
pub mod list;
pub mod status_row;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Draw one frame of the todo screen and rebuild the hit map
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (3 rows) | list | footer (2 rows) | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title + input + separator
            Constraint::Min(1),    // list container
            Constraint::Length(2), // separator + counter/selectors
            Constraint::Length(1), // status row
        ])
        .split(area);

    // Hit areas are rebuilt by every draw
    app.hits.clear();

    header::render_header(frame, app, chunks[0]);
    list::render_list(frame, app, chunks[1]);
    footer::render_footer(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::test_app;
    use super::test_helpers::{TERM_H, TERM_W, render_to_string};

    #[test]
    fn full_screen() {
        let mut app = test_app(&["buy milk", "walk dog"]);
        app.controller.toggle("id-walk dog").unwrap();
        let out = render_to_string(TERM_W, TERM_H, |frame, _| {
            render(frame, &mut app);
        });
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " todos");
        assert_eq!(lines[1], "  \u{276F}  What needs to be done?");
        assert_eq!(lines[3], " [ ] buy milk");
        assert_eq!(lines[4], " [x] walk dog");
        assert!(lines[22].starts_with(" 1 items left   All  Active  Completed"));
        assert!(lines[22].ends_with("Clear completed"));
        assert!(lines[23].ends_with("Enter add  Tab list  Ctrl+C quit"));
        // the list container was laid out below the header
        assert_eq!(
            app.controller.view().container().area(),
            ratatui::layout::Rect::new(0, 3, TERM_W, 18)
        );
    }

    #[test]
    fn help_overlay_on_top() {
        let mut app = test_app(&[]);
        app.show_help = true;
        let out = render_to_string(TERM_W, TERM_H, |frame, _| {
            render(frame, &mut app);
        });
        assert!(out.contains("Key Bindings"));
        assert!(out.contains("Clear completed"));
    }
}
