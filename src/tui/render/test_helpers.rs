use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::bridge::{RecordingBridge, TerminalBridge};
use crate::io::kv_store::{MemoryStore, StoreBackend};
use crate::io::storage::TaskStorage;
use crate::model::Config;
use crate::ops::task_ops::TaskStore;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
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

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An in-memory store holding the two seed tasks, with a deterministic clock.
pub fn seeded_store() -> TaskStore<StoreBackend> {
    TaskStore::open(TaskStorage::new(StoreBackend::Memory(MemoryStore::new())))
        .with_clock(|| 1000)
}

/// App over the seed tasks that records every host call.
pub fn app() -> App<RecordingBridge> {
    App::new(seeded_store(), RecordingBridge::new(), &Config::default())
}

/// App over the seed tasks with the terminal host writing into a buffer,
/// for tests that need alerts to stay pending.
pub fn terminal_app() -> App<TerminalBridge<Vec<u8>>> {
    App::new(
        seeded_store(),
        TerminalBridge::new(Vec::new(), false),
        &Config::default(),
    )
}
