//! Unified error type for the crate.

use thiserror::Error;

use super::capsule::CapsuleError;
use super::category::ErrorCategory;
use super::ui::UiError;

/// Unified error type consolidating capsule, UI and I/O failures.
#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected capsule mutation.
    #[error(transparent)]
    Capsule(#[from] CapsuleError),

    /// Terminal errors.
    #[error(transparent)]
    Ui(#[from] UiError),

    /// Filesystem and terminal I/O.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Capsule(CapsuleError::CapacityExceeded { .. }) => ErrorCategory::User,
            AppError::Capsule(CapsuleError::IndexOutOfRange { .. }) => ErrorCategory::Client,
            AppError::Ui(err) if err.is_recoverable() => ErrorCategory::User,
            AppError::Ui(_) | AppError::Io(_) => ErrorCategory::System,
        }
    }

    /// Check if the application can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Capsule(err) => err.is_recoverable(),
            AppError::Ui(err) => err.is_recoverable(),
            AppError::Io(_) => false,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Capsule(err) => err.error_code(),
            AppError::Ui(err) => err.error_code(),
            AppError::Io(_) => "E_SYS_IO",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Capsule(err) => err.user_message(),
            AppError::Ui(err) => err.user_message(),
            AppError::Io(err) => format!("A system error occurred: {}", err),
        }
    }
}
