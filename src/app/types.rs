//! Type definitions for the application state.
//!
//! - [`Focus`] - Which part of the screen takes key input
//! - [`PressState`] - A mouse button held on a message row
//! - [`ViewLayout`] - Areas recorded by the last render

use std::time::Instant;

use ratatui::layout::Rect;

/// Which part of the screen takes key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The message list; no preview is open.
    #[default]
    Messages,
    /// The reaction capsule of the open preview.
    Capsule,
    /// The context menu under the open preview.
    Menu,
}

/// A left button held down over a row, waiting to become a long-press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressState {
    pub row: usize,
    pub started: Instant,
}

/// Screen areas from the most recent frame, used for mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLayout {
    /// Area the message rows are laid out in.
    pub list_area: Rect,
    /// Inside of the capsule border, once the capsule is drawn.
    pub capsule_area: Option<Rect>,
    /// Inside of the menu border, once the menu is drawn.
    pub menu_area: Option<Rect>,
}

impl Default for ViewLayout {
    fn default() -> Self {
        Self {
            list_area: Rect::new(0, 0, 80, 22),
            capsule_area: None,
            menu_area: None,
        }
    }
}
