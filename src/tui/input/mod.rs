mod common;
mod edit;
mod entry;
mod list;
mod mouse;
mod text;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

use common::normalize_key;

pub use mouse::handle_mouse;

/// Handle a key event for whatever currently has focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    let key = normalize_key(key);

    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        app.should_quit = true;
        return;
    }

    // Help overlay intercepts all input
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    app.status = None;
    if app.editing.is_some() {
        edit::handle_edit(app, key);
    } else {
        match app.focus {
            Focus::Input => entry::handle_entry(app, key),
            Focus::List => list::handle_list(app, key),
        }
    }
    app.sync_focus();
}

/// Handle a bracketed paste event (terminal sends pasted text as a single string).
/// Goes into the label being edited, otherwise into the new-item input with
/// newlines flattened to spaces.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() || app.show_help {
        return;
    }
    if app.editing.is_some() {
        edit::paste(app, text);
    } else if app.focus == Focus::Input {
        let clean = text.replace('\n', " ").replace('\r', "");
        text::insert_str(&mut app.input.text, &mut app.input.cursor, &clean);
    }
    app.sync_focus();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::{EditState, test_app};
    use crate::view::{ElementKind, ElementRef};
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn values(app: &App) -> Vec<String> {
        app.controller
            .items()
            .iter()
            .map(|i| i.value.clone())
            .collect()
    }

    fn completed(app: &App) -> Vec<bool> {
        app.controller.items().iter().map(|i| i.completed).collect()
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn enter_adds_trimmed_item_and_clears_input() {
        let mut app = test_app(&[]);
        type_str(&mut app, "  buy milk ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(values(&app), vec!["buy milk"]);
        assert_eq!(app.input.text, "");
        assert_eq!(app.input.cursor, 0);
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn blank_input_keeps_text_and_focus() {
        let mut app = test_app(&[]);
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert!(app.controller.items().is_empty());
        assert_eq!(app.input.text, "   ");
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn list_keys_toggle_and_remove_through_delegation() {
        let mut app = test_app(&["a", "b", "c"]);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::List);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(completed(&app), vec![false, true, false]);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(values(&app), vec!["a", "c"]);
        // cursor stays on the same index, now "c"
        assert_eq!(app.cursor, 1);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn cursor_row_holds_container_focus() {
        let mut app = test_app(&["a", "b"]);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('G'));
        let container = app.controller.view().container();
        assert_eq!(container.focus(), Some(ElementRef::new(1, ElementKind::Row)));
        assert!(container.remove_visible(1));
        assert!(!container.remove_visible(0));
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.focus, Focus::Input);
        assert_eq!(app.controller.view().container().focus(), None);
    }

    #[test]
    fn number_keys_switch_filter() {
        let mut app = test_app(&["a", "b"]);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.controller.route().fragment(), "#/completed");
        assert_eq!(app.row_count(), 1);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.row_count(), 1);
        assert_eq!(
            app.controller.view().container().text_content(0),
            Some("b")
        );
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.row_count(), 2);
    }

    #[test]
    fn edit_commits_on_enter() {
        let mut app = test_app(&["old"]);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.editing, Some(EditState { row: 0, cursor: 3 }));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "ak");
        assert_eq!(
            app.controller.view().container().text_content(0),
            Some("oak")
        );
        // nothing persisted mid-edit
        assert_eq!(values(&app), vec!["old"]);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.editing, None);
        assert_eq!(values(&app), vec!["oak"]);
    }

    #[test]
    fn shift_enter_inserts_newline_in_label() {
        let mut app = test_app(&["line"]);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('e'));
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT));
        type_str(&mut app, "two");
        assert!(app.editing.is_some());
        press(&mut app, KeyCode::Enter);
        assert_eq!(values(&app), vec!["line\ntwo"]);
    }

    #[test]
    fn escape_abandons_edit() {
        let mut app = test_app(&["keep"]);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "zzz");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.editing, None);
        assert_eq!(
            app.controller.view().container().text_content(0),
            Some("keep")
        );
        assert_eq!(values(&app), vec!["keep"]);
    }

    #[test]
    fn toggle_all_then_clear_completed() {
        let mut app = test_app(&["a", "b"]);
        press(&mut app, KeyCode::Tab);
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('a'), KeyModifiers::SHIFT));
        assert_eq!(completed(&app), vec![true, true]);
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT));
        assert!(app.controller.items().is_empty());
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = test_app(&["a"]);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(values(&app), vec!["a"]);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = test_app(&[]);
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn paste_flattens_newlines_into_input() {
        let mut app = test_app(&[]);
        handle_paste(&mut app, "one\ntwo\r\n");
        assert_eq!(app.input.text, "one two ");
        assert_eq!(app.input.cursor, app.input.text.len());
    }

    #[test]
    fn mouse_clicks_hit_row_affordances() {
        let mut app = test_app(&["a", "b"]);
        app.controller
            .view_mut()
            .container_mut()
            .layout(Rect::new(0, 3, 40, 10));

        // toggle of row 1 sits at x=1, y=4
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 1, 4));
        assert_eq!(completed(&app), vec![false, true]);
        assert_eq!(app.focus, Focus::List);
        assert_eq!(app.cursor, 1);

        // hovering row 0 reveals its remove affordance
        handle_mouse(&mut app, mouse(MouseEventKind::Moved, 10, 3));
        assert!(app.controller.view().container().remove_visible(0));

        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 38, 3));
        assert_eq!(values(&app), vec!["b"]);
    }

    #[test]
    fn clicking_a_label_starts_editing_it() {
        let mut app = test_app(&["a", "b"]);
        app.controller
            .view_mut()
            .container_mut()
            .layout(Rect::new(0, 3, 40, 10));
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 8, 4));
        assert_eq!(app.editing, Some(EditState { row: 1, cursor: 1 }));
        assert_eq!(
            app.controller.view().container().focus(),
            Some(ElementRef::new(1, ElementKind::Label))
        );
        // clicking elsewhere ends the edit without committing
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 0, 3));
        assert_eq!(app.editing, None);
    }
}
