use crossterm::event::{KeyCode, KeyEvent};

use crate::app::Outcome;
use crate::tui::app::{App, Focus};

use super::text::edit_text;

/// Keys while the new-item input has focus
pub(super) fn handle_entry(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => submit(app),
        KeyCode::Tab | KeyCode::Down | KeyCode::Esc => app.focus = Focus::List,
        _ => {
            edit_text(&mut app.input.text, &mut app.input.cursor, key);
        }
    }
}

fn submit(app: &mut App) {
    match app.controller.add(&app.input.text) {
        Ok(Outcome::Added(id)) => {
            tracing::debug!(id = %id, "item added from input");
            app.input.clear();
        }
        // blank input: keep text and focus
        Ok(_) => {}
        Err(e) => {
            // the item is in the list even though the write failed
            app.input.clear();
            app.report(e);
        }
    }
}
