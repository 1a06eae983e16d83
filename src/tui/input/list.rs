use crossterm::event::{KeyCode, KeyEvent};

use crate::app::Outcome;
use crate::io::store::StoreError;
use crate::model::Filter;
use crate::tui::app::{App, Focus};
use crate::view::{ElementKind, ElementRef, UiEvent};

use super::common::move_cursor;
use super::edit::start_edit;

/// Keys while the list has focus and no label is being edited
pub(super) fn handle_list(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => {
            if app.cursor == 0 {
                app.focus = Focus::Input;
            } else {
                move_cursor(app, -1);
            }
        }
        KeyCode::PageDown => move_cursor(app, page(app)),
        KeyCode::PageUp => move_cursor(app, -page(app)),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.cursor = app.row_count().saturating_sub(1),
        KeyCode::Char(' ') | KeyCode::Char('x') => click(app, ElementKind::Toggle),
        KeyCode::Char('d') | KeyCode::Delete => click(app, ElementKind::Remove),
        KeyCode::Enter | KeyCode::Char('e') => start_edit(app, app.cursor),
        KeyCode::Char('1') => navigate(app, Filter::All),
        KeyCode::Char('2') => navigate(app, Filter::Active),
        KeyCode::Char('3') => navigate(app, Filter::Completed),
        KeyCode::Char('A') => {
            let result = app.controller.toggle_all();
            settle(app, result);
        }
        KeyCode::Char('C') => {
            let result = app.controller.clear_completed();
            settle(app, result);
        }
        KeyCode::Char('i') | KeyCode::Char('n') | KeyCode::Tab | KeyCode::Esc => {
            app.focus = Focus::Input;
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

/// Keyboard stand-in for a mouse click on an affordance of the cursor row
fn click(app: &mut App, kind: ElementKind) {
    if app.row_count() == 0 {
        return;
    }
    let event = UiEvent::click(ElementRef::new(app.cursor, kind));
    if let Err(e) = app.controller.dispatch(&event) {
        app.report(e);
    }
}

pub(super) fn navigate(app: &mut App, filter: Filter) {
    app.controller.navigate(filter.route());
}

pub(super) fn settle(app: &mut App, result: Result<Outcome, StoreError>) {
    if let Err(e) = result {
        app.report(e);
    }
}

fn page(app: &App) -> isize {
    let height = app.controller.view().container().area().height;
    height.max(1) as isize
}
