//! UI-related error types.
//!
//! Errors raised while driving the terminal for the demo host.

use thiserror::Error;

/// UI-specific error variants.
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal initialization failed.
    #[error("Terminal initialization failed: {message}")]
    TerminalInitFailed { message: String },

    /// Terminal restore failed.
    #[error("Terminal restore failed: {message}")]
    TerminalRestoreFailed { message: String },

    /// Rendering error.
    #[error("Render failed for '{component}': {message}")]
    RenderFailed { component: String, message: String },
}

impl UiError {
    /// Check if this error is recoverable (UI can continue working).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, UiError::RenderFailed { .. })
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            UiError::TerminalInitFailed { .. } => {
                "Failed to initialize the terminal. Please check your terminal settings."
                    .to_string()
            }
            UiError::TerminalRestoreFailed { .. } => {
                "Failed to restore terminal. You may need to run `reset`.".to_string()
            }
            UiError::RenderFailed { component, .. } => {
                format!("Failed to render {}. Please try again.", component)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            UiError::TerminalInitFailed { .. } => "E_UI_TERM_INIT",
            UiError::TerminalRestoreFailed { .. } => "E_UI_TERM_RESTORE",
            UiError::RenderFailed { .. } => "E_UI_RENDER",
        }
    }
}
