//! Error handling for tcreactions.
//!
//! - [`CapsuleError`]: recoverable rejections from the reaction capsule
//! - [`UiError`]: terminal failures in the demo host
//! - [`AppError`]: unified error with [`ErrorCategory`] classification
//!
//! | Error | Category | Recoverable |
//! |-------|----------|-------------|
//! | `CapsuleError::CapacityExceeded` | User | Yes |
//! | `CapsuleError::IndexOutOfRange` | Client | Yes |
//! | `UiError::RenderFailed` | User | Yes |
//! | other `UiError`, I/O | System | No |

mod app_error;
mod capsule;
mod category;
mod result;
mod ui;

pub use app_error::AppError;
pub use capsule::CapsuleError;
pub use category::ErrorCategory;
pub use result::AppResult;
pub use ui::UiError;
