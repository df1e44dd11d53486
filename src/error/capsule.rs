//! Reaction capsule error types.
//!
//! Every capsule operation that can violate an invariant returns one of these
//! instead of aborting. The capsule state is left untouched when an error is
//! returned.

use thiserror::Error;

/// Errors returned by [`ReactionCapsule`](crate::capsule::ReactionCapsule) mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapsuleError {
    /// Appending would push the non-accessory count past the capacity.
    #[error("capsule capacity exceeded: {current} reactions + {requested} requested > {capacity}")]
    CapacityExceeded {
        capacity: usize,
        current: usize,
        requested: usize,
    },

    /// The index does not address a visible entry.
    #[error("index {index} out of range for {len} visible reactions")]
    IndexOutOfRange { index: usize, len: usize },
}

impl CapsuleError {
    /// Capsule errors never leave the capsule in a bad state.
    pub fn is_recoverable(&self) -> bool {
        true
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            CapsuleError::CapacityExceeded { .. } => "E_CAPSULE_CAPACITY",
            CapsuleError::IndexOutOfRange { .. } => "E_CAPSULE_INDEX",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            CapsuleError::CapacityExceeded { capacity, .. } => {
                format!("No room for more reactions (limit is {}).", capacity)
            }
            CapsuleError::IndexOutOfRange { .. } => {
                "That reaction is no longer available.".to_string()
            }
        }
    }
}
