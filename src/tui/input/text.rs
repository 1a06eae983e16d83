use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode;

/// Apply a line-editing key to `buffer` at byte offset `cursor`.
/// Returns false when the key is not an editing key.
pub(super) fn edit_text(buffer: &mut String, cursor: &mut usize, key: KeyEvent) -> bool {
    *cursor = (*cursor).min(buffer.len());
    let m = key.modifiers;
    match key.code {
        KeyCode::Left if m.contains(KeyModifiers::ALT) => {
            *cursor = unicode::word_boundary_left(buffer, *cursor);
        }
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(buffer, *cursor) {
                *cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = unicode::next_grapheme_boundary(buffer, *cursor) {
                *cursor = next;
            }
        }
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = buffer.len(),
        KeyCode::Char('a') if m.contains(KeyModifiers::CONTROL) => *cursor = 0,
        KeyCode::Char('e') if m.contains(KeyModifiers::CONTROL) => *cursor = buffer.len(),
        KeyCode::Char('u') if m.contains(KeyModifiers::CONTROL) => {
            buffer.drain(..*cursor);
            *cursor = 0;
        }
        KeyCode::Char('w') if m.contains(KeyModifiers::CONTROL) => delete_word(buffer, cursor),
        KeyCode::Backspace if m.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) => {
            delete_word(buffer, cursor)
        }
        KeyCode::Backspace => {
            if let Some(prev) = unicode::prev_grapheme_boundary(buffer, *cursor) {
                buffer.drain(prev..*cursor);
                *cursor = prev;
            }
        }
        KeyCode::Delete => {
            if let Some(next) = unicode::next_grapheme_boundary(buffer, *cursor) {
                buffer.drain(*cursor..next);
            }
        }
        KeyCode::Char(c) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            insert_str(buffer, cursor, c.encode_utf8(&mut [0; 4]));
        }
        _ => return false,
    }
    true
}

pub(super) fn insert_str(buffer: &mut String, cursor: &mut usize, text: &str) {
    *cursor = (*cursor).min(buffer.len());
    buffer.insert_str(*cursor, text);
    *cursor += text.len();
}

fn delete_word(buffer: &mut String, cursor: &mut usize) {
    let start = unicode::word_boundary_left(buffer, *cursor);
    buffer.drain(start..*cursor);
    *cursor = start;
}
