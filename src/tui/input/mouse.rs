use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::{App, Focus, HitTarget};
use crate::view::{ElementKind, UiEvent};

use super::common::move_cursor;
use super::edit::start_edit;
use super::list::{navigate, settle};

/// Handle a mouse event: hover tracking, clicks and wheel scrolling
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.show_help {
        if let MouseEventKind::Down(_) = mouse.kind {
            app.show_help = false;
        }
        return;
    }

    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved => {
            let row = app.controller.view().container().row_at(x, y);
            app.controller.view_mut().container_mut().set_hover(row);
        }
        MouseEventKind::Down(MouseButton::Left) => click_at(app, x, y),
        MouseEventKind::ScrollDown => move_cursor(app, 1),
        MouseEventKind::ScrollUp => move_cursor(app, -1),
        _ => {}
    }
    app.sync_focus();
}

fn click_at(app: &mut App, x: u16, y: u16) {
    // any click outside the label being edited ends the edit
    let hit = app.controller.view().container().element_at(x, y);
    if let Some(edit) = app.editing
        && hit.is_none_or(|el| el.row != edit.row || el.kind != ElementKind::Label)
    {
        app.editing = None;
    }

    if let Some(target) = app.hit_at(x, y) {
        match target {
            HitTarget::Input => app.focus = Focus::Input,
            HitTarget::ToggleAll => {
                let result = app.controller.toggle_all();
                settle(app, result);
            }
            HitTarget::Selector(filter) => navigate(app, filter),
            HitTarget::ClearCompleted => {
                let result = app.controller.clear_completed();
                settle(app, result);
            }
        }
        return;
    }

    let Some(element) = hit else {
        return;
    };
    app.focus = Focus::List;
    app.cursor = element.row;
    if element.kind == ElementKind::Label {
        if app.editing.is_none() {
            start_edit(app, element.row);
        }
        return;
    }
    if let Err(e) = app.controller.dispatch(&UiEvent::click(element)) {
        app.report(e);
    }
}
