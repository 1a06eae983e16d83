use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::app::{Controller, Route};
use crate::io::store::{FileStore, KeyValueStore, StoreError};
use crate::model::Filter;
use crate::view::dom::{ElementKind, ElementRef};

use super::input;
use super::render;
use super::theme::Theme;

/// Which part of the screen receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The new-item input in the header
    Input,
    /// The list; the cursor row is focused
    List,
}

/// Single-line text field with a byte-offset cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    pub text: String,
    pub cursor: usize,
}

impl InputField {
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// An in-progress label edit. The text itself lives in the list container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditState {
    pub row: usize,
    /// Byte offset into the row's label text
    pub cursor: usize,
}

/// Clickable spots outside the list container, recorded while drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Input,
    ToggleAll,
    Selector(Filter),
    ClearCompleted,
}

/// Main application state
pub struct App {
    pub controller: Controller<Box<dyn KeyValueStore>>,
    pub focus: Focus,
    pub input: InputField,
    /// Cursor row in the list container
    pub cursor: usize,
    pub editing: Option<EditState>,
    pub theme: Theme,
    pub show_help: bool,
    pub should_quit: bool,
    /// One-line message in the status row (errors)
    pub status: Option<String>,
    /// Hit areas of the header and footer from the last draw
    pub hits: Vec<(Rect, HitTarget)>,
}

impl App {
    pub fn new(controller: Controller<Box<dyn KeyValueStore>>, theme: Theme) -> Self {
        App {
            controller,
            focus: Focus::Input,
            input: InputField::default(),
            cursor: 0,
            editing: None,
            theme,
            show_help: false,
            should_quit: false,
            status: None,
            hits: Vec::new(),
        }
    }

    /// Number of rows currently in the list container
    pub fn row_count(&self) -> usize {
        self.controller.view().container().len()
    }

    /// Show a store failure in the status row
    pub fn report(&mut self, err: StoreError) {
        tracing::error!(error = %err, "store failure");
        self.status = Some(format!("error: {}", err));
    }

    /// Re-establish cursor and container focus after rows were replaced
    pub fn sync_focus(&mut self) {
        let len = self.row_count();
        if len == 0 {
            self.cursor = 0;
            self.editing = None;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
        let target = match (self.focus, self.editing) {
            (_, Some(edit)) => Some(ElementRef::new(edit.row, ElementKind::Label)),
            (Focus::List, None) if len > 0 => Some(ElementRef::new(self.cursor, ElementKind::Row)),
            _ => None,
        };
        self.controller
            .view_mut()
            .container_mut()
            .set_focus(target);
    }

    /// Clickable target under a screen position, outside the list
    pub fn hit_at(&self, col: u16, line: u16) -> Option<HitTarget> {
        self.hits
            .iter()
            .find(|(r, _)| col >= r.x && col < r.x + r.width && line >= r.y && line < r.y + r.height)
            .map(|(_, target)| *target)
    }
}

/// App over an in-memory store seeded with `values`, in order
#[cfg(test)]
pub(crate) fn test_app(values: &[&str]) -> App {
    use crate::io::persistence::save_items;
    use crate::io::store::MemoryStore;
    use crate::model::item::{Item, ItemList};

    let items: ItemList = values
        .iter()
        .map(|v| Item {
            id: format!("id-{}", v),
            value: v.to_string(),
            completed: false,
        })
        .collect();
    let mut store = MemoryStore::new();
    save_items(&mut store, "todos", &items).unwrap();
    let store: Box<dyn KeyValueStore> = Box::new(store);
    let controller = Controller::start(store, "todos", Route::default()).unwrap();
    App::new(controller, Theme::default())
}

/// Options for launching the TUI
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub data_dir: PathBuf,
    pub key: String,
    pub route: String,
    pub mouse: bool,
    pub theme: Theme,
}

/// Run the TUI application
pub fn run(options: RunOptions) -> Result<(), Box<dyn std::error::Error>> {
    let store: Box<dyn KeyValueStore> = Box::new(FileStore::new(&options.data_dir));
    let controller = Controller::start(store, options.key.clone(), Route::new(options.route.clone()))?;
    let mut app = App::new(controller, options.theme.clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if options.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    // Shift+Enter is only distinguishable from Enter with enhanced key reporting
    let keyboard_enhanced = matches!(crossterm::terminal::supports_keyboard_enhancement(), Ok(true))
        && execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )
        .is_ok();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    if keyboard_enhanced {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    tracing::info!("tui exited");

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
