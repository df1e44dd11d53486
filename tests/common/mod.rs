//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! let (mut capsule, events) = common::recording_capsule(CapsuleConfig::default());
//! ```

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use tcreactions::app::App;
use tcreactions::capsule::{CapsuleConfig, ReactionCapsule, SelectionEvent};
use tcreactions::config::AppConfig;

/// Shared log of every event a capsule's observer saw.
pub type EventLog = Rc<RefCell<Vec<SelectionEvent>>>;

/// A capsule whose observer records into the returned log.
pub fn recording_capsule(config: CapsuleConfig) -> (ReactionCapsule, EventLog) {
    let log: EventLog = Rc::new(RefCell::new(Vec::new()));
    let mut capsule = ReactionCapsule::new(config);
    let sink = Rc::clone(&log);
    capsule.set_observer(move |event| sink.borrow_mut().push(event.clone()));
    (capsule, log)
}

/// Visible titles in display order.
pub fn titles(capsule: &ReactionCapsule) -> Vec<String> {
    capsule.visible_entries().map(|e| e.title.clone()).collect()
}

/// App with the demo feed off, for synchronous tests.
pub fn quiet_app() -> App {
    App::new(AppConfig::default().with_feed_enabled(false))
}

pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).unwrap()
}

pub fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) {
    terminal
        .draw(|f| tcreactions::ui::render(f, app))
        .unwrap();
}

/// All buffer symbols, one line per terminal row.
pub fn screen_text(buffer: &Buffer) -> String {
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer.cell((x, y)).map_or(" ", |c| c.symbol()))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
