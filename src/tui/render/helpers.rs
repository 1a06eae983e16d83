use ratatui::text::Span;
use unicode_segmentation::UnicodeSegmentation;

use crate::util::unicode;

/// Marker drawn in place of a newline inside a one-line label
pub(super) const NEWLINE_MARK: &str = "\u{21B5}";

/// Label text as drawn on a single line
pub(super) fn label_display(text: &str) -> String {
    text.replace('\n', NEWLINE_MARK)
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Slice of an edited line that keeps the caret in view, plus the caret
/// column within that slice. `cursor` is a byte offset into `text`.
pub(super) fn caret_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    let shown = label_display(&text[..cursor.min(text.len())]);
    let caret = unicode::display_width(&shown);
    let full = label_display(text);
    if width == 0 {
        return (String::new(), 0);
    }
    let skip = caret.saturating_sub(width - 1);
    let mut col = 0;
    let mut out = String::new();
    for g in full.graphemes(true) {
        let w = unicode::display_width(g);
        if col >= skip && col + w <= skip + width {
            out.push_str(g);
        }
        col += w;
    }
    (out, caret - skip)
}
