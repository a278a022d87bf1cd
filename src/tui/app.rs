use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::bridge::{BackAction, HostBridge, TerminalBridge};
use crate::io::kv_store::StoreBackend;
use crate::model::{Config, Filter, Task};
use crate::ops::task_ops::TaskStore;
use crate::ops::{actions, projection};

use super::input;
use super::modal::Modal;
use super::render;
use super::theme::Theme;

/// Current interaction mode, derived from which overlay is up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Modal,
    Confirm,
}

/// A delete waiting for a yes/no answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDelete {
    pub id: u64,
    pub title: String,
}

/// Screen regions recorded during the last draw, for mouse input
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub pills: Vec<(Rect, Filter)>,
    pub cards: Vec<(Rect, u64)>,
    pub add_button: Option<Rect>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.pills.clear();
        self.cards.clear();
        self.add_button = None;
    }

    pub fn pill_at(&self, col: u16, row: u16) -> Option<&Filter> {
        self.pills
            .iter()
            .find(|(r, _)| contains(r, col, row))
            .map(|(_, f)| f)
    }

    pub fn card_at(&self, col: u16, row: u16) -> Option<u64> {
        self.cards
            .iter()
            .find(|(r, _)| contains(r, col, row))
            .map(|(_, id)| *id)
    }

    pub fn on_add_button(&self, col: u16, row: u16) -> bool {
        self.add_button.is_some_and(|r| contains(&r, col, row))
    }
}

fn contains(r: &Rect, col: u16, row: u16) -> bool {
    col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height
}

/// Main application state
pub struct App<B: HostBridge = TerminalBridge> {
    pub store: TaskStore<StoreBackend>,
    pub bridge: B,
    pub filter: Filter,
    /// Cursor index into the projected list
    pub cursor: usize,
    /// First visible card
    pub scroll_offset: usize,
    pub modal: Modal,
    pub confirm: Option<ConfirmDelete>,
    pub theme: Theme,
    pub date_format: String,
    pub show_key_hints: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub hits: HitMap,
}

impl<B: HostBridge> App<B> {
    pub fn new(store: TaskStore<StoreBackend>, mut bridge: B, config: &Config) -> Self {
        bridge.ready();
        bridge.expand();
        bridge.set_header_color(&config.ui.header_color);

        App {
            store,
            bridge,
            filter: Filter::All,
            cursor: 0,
            scroll_offset: 0,
            modal: Modal::default(),
            confirm: None,
            theme: Theme::from_config(&config.ui),
            date_format: config.ui.date_format.clone(),
            show_key_hints: config.ui.show_key_hints,
            status_message: None,
            should_quit: false,
            hits: HitMap::default(),
        }
    }

    pub fn mode(&self) -> Mode {
        if self.confirm.is_some() {
            Mode::Confirm
        } else if self.modal.is_open() {
            Mode::Modal
        } else {
            Mode::Navigate
        }
    }

    /// The projected list currently on screen
    pub fn visible(&self) -> Vec<&Task> {
        projection::project(self.store.tasks(), &self.filter)
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.visible().get(self.cursor).map(|t| t.id)
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    /// Put the cursor on task `id` if it is visible
    fn follow(&mut self, id: u64) {
        if let Some(pos) = self.visible().iter().position(|t| t.id == id) {
            self.cursor = pos;
        } else {
            self.clamp_cursor();
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.cursor = 0;
        self.scroll_offset = 0;
        self.bridge.selection_changed();
    }

    /// Step through the filter pills (wrapping)
    pub fn cycle_filter(&mut self, forward: bool) {
        let pills = Filter::pills();
        let len = pills.len();
        let next = match pills.iter().position(|p| *p == self.filter) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.set_filter(pills[next].clone());
    }

    pub fn toggle(&mut self, id: u64) {
        match actions::toggle_task(&mut self.store, &mut self.bridge, id) {
            Ok(Some(_)) => self.follow(id),
            Ok(None) => {}
            Err(e) => self.storage_failed(e),
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.toggle(id);
        }
    }

    /// Ask before deleting `id`
    pub fn request_delete(&mut self, id: u64) {
        if let Some(task) = self.store.get(id) {
            self.confirm = Some(ConfirmDelete {
                id,
                title: task.title.clone(),
            });
        }
    }

    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.request_delete(id);
        }
    }

    pub fn confirm_delete(&mut self) {
        let Some(pending) = self.confirm.take() else {
            return;
        };
        match actions::delete_task(&mut self.store, &mut self.bridge, pending.id) {
            Ok(_) => self.clamp_cursor(),
            Err(e) => self.storage_failed(e),
        }
    }

    pub fn cancel_delete(&mut self) {
        self.confirm = None;
    }

    pub fn open_modal(&mut self) {
        self.modal.open(&mut self.bridge);
    }

    pub fn close_modal(&mut self) {
        self.modal.close(&mut self.bridge);
    }

    pub fn submit_modal(&mut self) {
        match self.modal.submit_create(&mut self.store, &mut self.bridge) {
            Ok(Some(id)) => self.follow(id),
            Ok(None) => {}
            Err(e) => self.storage_failed(e),
        }
    }

    /// Press the host back button and run whatever is hooked to it
    pub fn press_back(&mut self) {
        for action in self.bridge.back_button().click() {
            match action {
                BackAction::CloseModal => self.close_modal(),
            }
        }
    }

    fn storage_failed(&mut self, e: crate::io::kv_store::StorageError) {
        tracing::error!(error = %e, "could not save tasks");
        self.status_message = Some(format!("save failed: {}", e));
    }
}

/// Run the TUI application
pub fn run(store: TaskStore<StoreBackend>, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let bridge = TerminalBridge::stdout(config.ui.haptics);
    let mut app = App::new(store, bridge, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        );
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop<B: HostBridge>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<B>,
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
