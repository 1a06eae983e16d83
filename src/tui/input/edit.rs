use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, EditState, Focus};
use crate::view::{ElementKind, ElementRef, UiEvent};

use super::text::{edit_text, insert_str};

/// Begin editing the label of `row`, caret at the end of its text
pub(super) fn start_edit(app: &mut App, row: usize) {
    let Some(text) = app.controller.view().container().text_content(row) else {
        return;
    };
    let cursor = text.len();
    app.focus = Focus::List;
    app.cursor = row;
    app.editing = Some(EditState { row, cursor });
}

/// Keys while a label is being edited. Each key is first delivered to the
/// delegated listeners as a key-down on the label; the default text
/// action runs only if no listener prevented it.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let Some(edit) = app.editing else {
        return;
    };

    if key.code == KeyCode::Esc {
        app.controller
            .view_mut()
            .container_mut()
            .reset_text(edit.row);
        app.editing = None;
        return;
    }

    let event = UiEvent::key_down(ElementRef::new(edit.row, ElementKind::Label), key);
    let result = app.controller.dispatch(&event);
    if let Err(e) = result {
        app.report(e);
    }
    if event.default_prevented() {
        app.editing = None;
        return;
    }

    default_action(app, edit, key);
}

/// Insert pasted text into the label being edited
pub(super) fn paste(app: &mut App, text: &str) {
    let Some(mut edit) = app.editing else {
        return;
    };
    let clean = text.replace('\r', "");
    let container = app.controller.view_mut().container_mut();
    if let Some(label) = container.text_content_mut(edit.row) {
        insert_str(label, &mut edit.cursor, &clean);
        app.editing = Some(edit);
    }
}

fn default_action(app: &mut App, mut edit: EditState, key: KeyEvent) {
    let container = app.controller.view_mut().container_mut();
    let Some(label) = container.text_content_mut(edit.row) else {
        app.editing = None;
        return;
    };
    if key.code == KeyCode::Enter && key.modifiers.contains(KeyModifiers::SHIFT) {
        insert_str(label, &mut edit.cursor, "\n");
    } else {
        edit_text(label, &mut edit.cursor, key);
    }
    app.editing = Some(edit);
}
