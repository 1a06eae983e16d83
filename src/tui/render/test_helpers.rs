use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

/// Screen size the layout tests assume
pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Draw `f` on a `w` x `h` test terminal and return the screen as text,
/// one line per row with styles dropped.
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let lines: Vec<String> = buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Rows below the last drawn line are noise
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}
