//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Focus`] - Which part of the screen takes key input
//! - [`AppMessage`] - Messages for async communication
//!
//! The App owns the [`RowSelectionContext`] and is the only place a capsule
//! is mutated. Capsule taps and feed deliveries both arrive as
//! [`AppMessage`]s on the UI loop.

mod handlers;
mod messages;
mod navigation;
mod preview;
mod state_methods;
mod types;

pub use messages::AppMessage;
pub use types::{Focus, PressState, ViewLayout};

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::menu::MenuState;
use crate::selection::{RowId, RowSelectionContext};

/// Main application state
pub struct App {
    pub config: AppConfig,
    /// Message texts, one row each
    pub messages: Vec<String>,
    /// Committed reaction per row, shown as a badge on the bubble
    pub reactions: HashMap<RowId, String>,
    /// Highlighted row in the message list
    pub selected_row: usize,
    pub focus: Focus,
    /// Highlighted button in the open capsule
    pub capsule_cursor: usize,
    pub menu: MenuState,
    pub selection: RowSelectionContext,
    /// Cells of the pressed row, captured on the first preview frame
    pub preview_snapshot: Option<Buffer>,
    /// Mouse button currently held over a row
    pub press: Option<PressState>,
    /// One-line feedback for the last action
    pub status: Option<String>,
    /// Areas recorded by the last render
    pub layout: ViewLayout,
    /// Flag indicating UI needs to be redrawn
    pub needs_redraw: bool,
    /// Flag to quit the application
    pub should_quit: bool,
    /// Tick counter for the main loop
    pub tick_count: u64,
    /// Channel sender for async messages
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Channel receiver, taken by the main loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: AppConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let messages = config.messages.clone();
        let selection = RowSelectionContext::new(config.selection.clone());

        Self {
            config,
            messages,
            reactions: HashMap::new(),
            selected_row: 0,
            focus: Focus::default(),
            capsule_cursor: 0,
            menu: MenuState::default(),
            selection,
            preview_snapshot: None,
            press: None,
            status: None,
            layout: ViewLayout::default(),
            needs_redraw: true,
            should_quit: false,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Reaction committed for `row`, if any.
    pub fn reaction_for(&self, row: usize) -> Option<&str> {
        self.reactions.get(&RowId(row)).map(String::as_str)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
