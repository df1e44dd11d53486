//! Value types owned or emitted by the reaction capsule.

use std::fmt;

use uuid::Uuid;

/// Default number of non-accessory reactions a capsule holds.
pub const DEFAULT_CAPACITY: usize = 6;

/// Default title of the trailing accessory button.
pub const DEFAULT_ACCESSORY_TITLE: &str = "+";

/// Identity of one capsule interaction.
///
/// A capsule gets a fresh id on construction and on every
/// [`reset`](super::ReactionCapsule::reset), so anything still addressed to
/// an earlier interaction can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapsuleId(Uuid);

impl CapsuleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CapsuleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CapsuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One button in the capsule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEntry {
    pub title: String,
    pub is_accessory: bool,
}

impl ReactionEntry {
    pub fn reaction(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_accessory: false,
        }
    }

    pub fn accessory(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_accessory: true,
        }
    }
}

/// Emitted once per tap on a capsule button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEvent {
    /// The capsule the tap happened on.
    pub capsule: CapsuleId,
    /// Position of the tapped button among the visible entries.
    pub index: usize,
    /// Title of the tapped button at the time of the tap.
    pub value: String,
    /// Whether the tapped button was the trailing accessory.
    pub is_accessory: bool,
}

/// Construction-time settings for a capsule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapsuleConfig {
    /// Maximum number of non-accessory reactions.
    pub capacity: usize,
    /// Title of the accessory placeholder.
    pub accessory_title: String,
    /// Whether the accessory starts visible.
    pub accessory_visible: bool,
}

impl Default for CapsuleConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            accessory_title: DEFAULT_ACCESSORY_TITLE.to_string(),
            accessory_visible: false,
        }
    }
}

impl CapsuleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_accessory_title(mut self, title: impl Into<String>) -> Self {
        self.accessory_title = title.into();
        self
    }

    pub fn with_accessory_visible(mut self, visible: bool) -> Self {
        self.accessory_visible = visible;
        self
    }
}
