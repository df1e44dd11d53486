//! Reaction capsule: a bounded, ordered row of reaction buttons.
//!
//! The capsule owns its buttons directly as a `Vec` of reactions plus one
//! optional accessory slot that always renders last. It never aborts on bad
//! input: mutations that would break an invariant return a
//! [`CapsuleError`] and leave the state as it was.
//!
//! ```
//! use tcreactions::capsule::{CapsuleConfig, ReactionCapsule};
//!
//! let mut capsule = ReactionCapsule::new(CapsuleConfig::default());
//! capsule.append_reactions(["👍", "❤️"]).unwrap();
//! capsule.set_accessory_visible(true);
//!
//! let titles: Vec<_> = capsule.visible_entries().map(|e| e.title.as_str()).collect();
//! assert_eq!(titles, ["👍", "❤️", "+"]);
//! ```

mod entry;
mod layout;

pub use entry::{
    CapsuleConfig, CapsuleId, ReactionEntry, SelectionEvent, DEFAULT_ACCESSORY_TITLE,
    DEFAULT_CAPACITY,
};
pub use layout::{button_frames, hit_test, HORIZONTAL_MARGIN_RATIO};

use std::fmt;

use crate::error::CapsuleError;
use crate::geometry::{Frame, Point};

/// Callback receiving every [`SelectionEvent`] of a capsule.
pub type SelectionObserver = Box<dyn FnMut(&SelectionEvent)>;

/// Bounded reaction button row with a trailing accessory slot.
pub struct ReactionCapsule {
    id: CapsuleId,
    capacity: usize,
    /// Non-accessory entries in insertion order.
    reactions: Vec<ReactionEntry>,
    accessory: ReactionEntry,
    accessory_visible: bool,
    /// Accessory title restored by [`reset`](Self::reset).
    placeholder_title: String,
    observer: Option<SelectionObserver>,
}

impl Default for ReactionCapsule {
    fn default() -> Self {
        Self::new(CapsuleConfig::default())
    }
}

impl fmt::Debug for ReactionCapsule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactionCapsule")
            .field("id", &self.id)
            .field("capacity", &self.capacity)
            .field("reactions", &self.reactions)
            .field("accessory", &self.accessory)
            .field("accessory_visible", &self.accessory_visible)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl ReactionCapsule {
    /// Create an empty capsule with a hidden or shown accessory placeholder.
    pub fn new(config: CapsuleConfig) -> Self {
        Self {
            id: CapsuleId::new(),
            capacity: config.capacity,
            reactions: Vec::with_capacity(config.capacity),
            accessory: ReactionEntry::accessory(config.accessory_title.clone()),
            accessory_visible: config.accessory_visible,
            placeholder_title: config.accessory_title,
            observer: None,
        }
    }

    pub fn id(&self) -> CapsuleId {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of non-accessory entries.
    pub fn reaction_count(&self) -> usize {
        self.reactions.len()
    }

    pub fn remaining_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.reactions.len())
    }

    /// Number of entries a user can see and tap, accessory included when shown.
    pub fn visible_count(&self) -> usize {
        self.reactions.len() + usize::from(self.accessory_visible)
    }

    /// Visible entries in display order.
    pub fn visible_entries(&self) -> impl Iterator<Item = &ReactionEntry> + '_ {
        let accessory = Some(&self.accessory).filter(|_| self.accessory_visible);
        self.reactions.iter().chain(accessory)
    }

    /// Visible entry at `index`.
    pub fn entry(&self, index: usize) -> Option<&ReactionEntry> {
        if index < self.reactions.len() {
            self.reactions.get(index)
        } else if index == self.reactions.len() && self.accessory_visible {
            Some(&self.accessory)
        } else {
            None
        }
    }

    fn entry_mut(&mut self, index: usize) -> Option<&mut ReactionEntry> {
        if index < self.reactions.len() {
            self.reactions.get_mut(index)
        } else if index == self.reactions.len() && self.accessory_visible {
            Some(&mut self.accessory)
        } else {
            None
        }
    }

    pub fn accessory_visible(&self) -> bool {
        self.accessory_visible
    }

    pub fn accessory_title(&self) -> &str {
        &self.accessory.title
    }

    /// Insert reactions immediately before the accessory.
    ///
    /// All or nothing: when the titles don't fit, nothing is inserted and
    /// [`CapsuleError::CapacityExceeded`] is returned.
    pub fn append_reactions<I, S>(&mut self, titles: I) -> Result<(), CapsuleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let incoming: Vec<ReactionEntry> =
            titles.into_iter().map(ReactionEntry::reaction).collect();

        if self.reactions.len() + incoming.len() > self.capacity {
            return Err(CapsuleError::CapacityExceeded {
                capacity: self.capacity,
                current: self.reactions.len(),
                requested: incoming.len(),
            });
        }

        self.reactions.extend(incoming);
        Ok(())
    }

    /// Show or hide the accessory. Has no effect on the reaction count.
    pub fn set_accessory_visible(&mut self, visible: bool) {
        self.accessory_visible = visible;
    }

    /// Rename the accessory in place, shown or not.
    pub fn set_accessory_title(&mut self, title: impl Into<String>) {
        self.accessory.title = title.into();
    }

    /// Replace the title of the visible entry at `index`.
    pub fn update_title(&mut self, index: usize, title: impl Into<String>) -> Result<(), CapsuleError> {
        let len = self.visible_count();
        let entry = self
            .entry_mut(index)
            .ok_or(CapsuleError::IndexOutOfRange { index, len })?;
        entry.title = title.into();
        Ok(())
    }

    pub fn set_observer(&mut self, observer: impl FnMut(&SelectionEvent) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// Tap the visible button at `index`.
    ///
    /// The event reports the button's own position, not the number of buttons
    /// at tap time. The observer, if any, is called exactly once.
    pub fn select(&mut self, index: usize) -> Result<SelectionEvent, CapsuleError> {
        let entry = self.entry(index).ok_or(CapsuleError::IndexOutOfRange {
            index,
            len: self.visible_count(),
        })?;

        let event = SelectionEvent {
            capsule: self.id,
            index,
            value: entry.title.clone(),
            is_accessory: entry.is_accessory,
        };

        if let Some(observer) = self.observer.as_mut() {
            observer(&event);
        }
        Ok(event)
    }

    /// Clear every entry and detach the observer.
    ///
    /// The accessory goes back to its hidden placeholder, so a pooled capsule
    /// can show it again. The capsule is given a fresh [`CapsuleId`];
    /// deliveries addressed to the old id no longer match.
    pub fn reset(&mut self) {
        self.observer = None;
        self.reactions.clear();
        self.accessory = ReactionEntry::accessory(self.placeholder_title.clone());
        self.accessory_visible = false;
        self.id = CapsuleId::new();
    }

    /// Frames of the visible buttons inside `bounds`, in display order.
    pub fn button_frames(&self, bounds: Frame) -> Vec<Frame> {
        let titles: Vec<&str> = self.visible_entries().map(|e| e.title.as_str()).collect();
        button_frames(&titles, bounds)
    }

    /// Index of the visible button under `point`, if any.
    pub fn hit_test(&self, bounds: Frame, point: Point) -> Option<usize> {
        hit_test(&self.button_frames(bounds), point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn titles(capsule: &ReactionCapsule) -> Vec<String> {
        capsule.visible_entries().map(|e| e.title.clone()).collect()
    }

    #[test]
    fn test_new_capsule_is_empty() {
        let capsule = ReactionCapsule::default();
        assert_eq!(capsule.reaction_count(), 0);
        assert_eq!(capsule.visible_count(), 0);
        assert_eq!(capsule.capacity(), 6);
        assert_eq!(capsule.accessory_title(), "+");
    }

    #[test]
    fn test_visible_accessory_counts() {
        let capsule =
            ReactionCapsule::new(CapsuleConfig::default().with_accessory_visible(true));
        assert_eq!(capsule.visible_count(), 1);
        assert!(capsule.entry(0).unwrap().is_accessory);
    }

    #[test]
    fn test_append_inserts_before_accessory() {
        let mut capsule =
            ReactionCapsule::new(CapsuleConfig::default().with_accessory_visible(true));
        capsule.append_reactions(["a", "b"]).unwrap();
        capsule.append_reactions(["c"]).unwrap();

        assert_eq!(titles(&capsule), vec!["a", "b", "c", "+"]);
        let last = capsule.visible_entries().last().unwrap();
        assert!(last.is_accessory);
    }

    #[test]
    fn test_append_fills_to_capacity_exactly() {
        let mut capsule = ReactionCapsule::default();
        capsule.append_reactions(["1", "2", "3", "4", "5", "6"]).unwrap();
        assert_eq!(capsule.reaction_count(), 6);
        assert_eq!(capsule.remaining_capacity(), 0);
    }

    #[test]
    fn test_append_over_capacity_is_atomic() {
        let mut capsule = ReactionCapsule::default();
        capsule.append_reactions(["👍", "👍 "]).unwrap();

        let err = capsule
            .append_reactions(["a", "b", "c", "d", "e"])
            .unwrap_err();

        assert_eq!(
            err,
            CapsuleError::CapacityExceeded {
                capacity: 6,
                current: 2,
                requested: 5
            }
        );
        assert_eq!(titles(&capsule), vec!["👍", "👍 "]);
    }

    #[test]
    fn test_append_to_full_capsule_fails() {
        let mut capsule = ReactionCapsule::new(CapsuleConfig::default().with_capacity(1));
        capsule.append_reactions(["a"]).unwrap();
        assert!(capsule.append_reactions(["b"]).is_err());
        assert_eq!(capsule.reaction_count(), 1);
    }

    #[test]
    fn test_append_empty_is_ok() {
        let mut capsule = ReactionCapsule::default();
        capsule.append_reactions(Vec::<String>::new()).unwrap();
        assert_eq!(capsule.reaction_count(), 0);
    }

    #[test]
    fn test_accessory_stays_last_when_toggled() {
        let mut capsule = ReactionCapsule::default();
        capsule.append_reactions(["a"]).unwrap();
        capsule.set_accessory_visible(true);
        capsule.append_reactions(["b"]).unwrap();
        capsule.set_accessory_visible(false);
        capsule.append_reactions(["c"]).unwrap();
        capsule.set_accessory_visible(true);

        assert_eq!(titles(&capsule), vec!["a", "b", "c", "+"]);
        let accessories = capsule.visible_entries().filter(|e| e.is_accessory).count();
        assert_eq!(accessories, 1);
    }

    #[test]
    fn test_scenario_accessory_title_and_visibility() {
        let mut capsule = ReactionCapsule::default();
        capsule.append_reactions(["👍", "👍 "]).unwrap();
        assert_eq!(capsule.visible_count(), 2);

        capsule.set_accessory_visible(true);
        capsule.set_accessory_title("...");

        assert_eq!(titles(&capsule), vec!["👍", "👍 ", "..."]);
        assert!(capsule.entry(2).unwrap().is_accessory);
    }

    #[test]
    fn test_update_title_changes_only_target() {
        let mut capsule = ReactionCapsule::default();
        capsule.append_reactions(["a", "b", "c"]).unwrap();

        capsule.update_title(1, "B").unwrap();

        assert_eq!(titles(&capsule), vec!["a", "B", "c"]);
    }

    #[test]
    fn test_update_title_reaches_visible_accessory() {
        let mut capsule =
            ReactionCapsule::new(CapsuleConfig::default().with_accessory_visible(true));
        capsule.append_reactions(["a"]).unwrap();

        capsule.update_title(1, "more").unwrap();

        assert_eq!(capsule.accessory_title(), "more");
        assert!(capsule.entry(1).unwrap().is_accessory);
    }

    #[test]
    fn test_update_title_hidden_accessory_out_of_range() {
        let mut capsule = ReactionCapsule::default();
        capsule.append_reactions(["a"]).unwrap();

        let err = capsule.update_title(1, "x").unwrap_err();

        assert_eq!(err, CapsuleError::IndexOutOfRange { index: 1, len: 1 });
        assert_eq!(capsule.accessory_title(), "+");
        assert_eq!(titles(&capsule), vec!["a"]);
    }

    #[test]
    fn test_select_reports_stable_position() {
        let mut capsule =
            ReactionCapsule::new(CapsuleConfig::default().with_accessory_visible(true));
        capsule.append_reactions(["a", "b", "c"]).unwrap();

        let event = capsule.select(0).unwrap();
        assert_eq!(event.index, 0);
        assert_eq!(event.value, "a");
        assert!(!event.is_accessory);
        assert_eq!(event.capsule, capsule.id());

        let event = capsule.select(3).unwrap();
        assert_eq!(event.index, 3);
        assert_eq!(event.value, "+");
        assert!(event.is_accessory);
    }

    #[test]
    fn test_select_reports_current_title() {
        let mut capsule = ReactionCapsule::default();
        capsule.append_reactions(["a"]).unwrap();
        capsule.update_title(0, "z").unwrap();

        assert_eq!(capsule.select(0).unwrap().value, "z");
    }

    #[test]
    fn test_select_notifies_observer_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut capsule = ReactionCapsule::default();
        capsule.append_reactions(["a", "b"]).unwrap();

        let sink = Rc::clone(&seen);
        capsule.set_observer(move |event| sink.borrow_mut().push(event.clone()));

        capsule.select(1).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].index, 1);
        assert_eq!(seen[0].value, "b");
    }

    #[test]
    fn test_select_out_of_range_is_silent() {
        let calls = Rc::new(RefCell::new(0));
        let mut capsule = ReactionCapsule::default();
        capsule.append_reactions(["a"]).unwrap();

        let counter = Rc::clone(&calls);
        capsule.set_observer(move |_| *counter.borrow_mut() += 1);

        let err = capsule.select(1).unwrap_err();

        assert_eq!(err, CapsuleError::IndexOutOfRange { index: 1, len: 1 });
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_reset_clears_entries_and_observer() {
        let mut capsule =
            ReactionCapsule::new(CapsuleConfig::default().with_accessory_visible(true));
        capsule.append_reactions(["a", "b"]).unwrap();
        capsule.set_observer(|_| {});
        let old_id = capsule.id();

        capsule.reset();

        assert_eq!(capsule.visible_count(), 0);
        assert!(!capsule.accessory_visible());
        assert!(!capsule.has_observer());
        assert_ne!(capsule.id(), old_id);
    }

    #[test]
    fn test_reset_restores_accessory_placeholder() {
        let mut capsule =
            ReactionCapsule::new(CapsuleConfig::default().with_accessory_visible(true));
        capsule.set_accessory_title("...");
        capsule.reset();
        assert_eq!(capsule.accessory_title(), "+");

        capsule.append_reactions(["a"]).unwrap();
        capsule.set_accessory_visible(true);

        assert_eq!(titles(&capsule), vec!["a", "+"]);
        assert!(capsule.select(1).unwrap().is_accessory);
    }

    #[test]
    fn test_hit_test_maps_to_button() {
        let mut capsule = ReactionCapsule::default();
        capsule.append_reactions(["a", "b"]).unwrap();
        let bounds = Frame::new(0.0, 0.0, 100.0, 10.0);

        assert_eq!(capsule.hit_test(bounds, Point::new(10.0, 5.0)), Some(0));
        assert_eq!(capsule.hit_test(bounds, Point::new(90.0, 5.0)), Some(1));
        assert_eq!(capsule.hit_test(bounds, Point::new(1.0, 5.0)), None);
    }
}
