//! Terminal management with RAII cleanup.
//!
//! ```no_run
//! use tcreactions::terminal::TerminalManager;
//!
//! fn main() -> color_eyre::Result<()> {
//!     let mut term_manager = TerminalManager::new()?;
//!     let terminal = term_manager.terminal();
//!     // ... run the application ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::UiError;

/// Restores the terminal when dropped.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore now. Later calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the TUI.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen and clear it.
    pub fn new() -> Result<Self, UiError> {
        let init_failed = |e: io::Error| UiError::TerminalInitFailed {
            message: e.to_string(),
        };

        enable_raw_mode().map_err(init_failed)?;

        let mut stdout = io::stdout();
        // Dropped on early return, undoing raw mode.
        let guard = TerminalGuard::new();
        enter_tui_mode(&mut stdout).map_err(init_failed)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(init_failed)?;
        terminal.clear().map_err(init_failed)?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal before dropping the manager.
    pub fn restore(&mut self) -> Result<(), UiError> {
        self.guard.cleanup();
        self.terminal
            .show_cursor()
            .map_err(|e| UiError::TerminalRestoreFailed {
                message: e.to_string(),
            })
    }
}
