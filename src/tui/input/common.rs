use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

/// Normalize shifted letters so bindings can match on `Char('A')` whether
/// or not the terminal reports the uppercase char.
pub(super) fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}

/// Move the list cursor by `delta` rows, clamped to the rendered rows
pub(super) fn move_cursor(app: &mut App, delta: isize) {
    let len = app.row_count();
    if len == 0 {
        return;
    }
    app.cursor = app.cursor.saturating_add_signed(delta).min(len - 1);
}
