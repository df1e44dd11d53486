//! Row selection context: glue between a long-pressed row and its preview.
//!
//! The context owns at most one [`ActivePreview`] at a time. Beginning a new
//! preview dismisses the previous one; dismissing or committing cancels the
//! preview's feeds and resets its capsule, so nothing carries over between
//! interactions.

use std::fmt;

use tokio::sync::mpsc;

use crate::capsule::{CapsuleConfig, ReactionCapsule, SelectionEvent};
use crate::error::CapsuleError;
use crate::feed::{AsyncReactionFeed, DeliveryOutcome, FeedDelivery, FeedHandle, FeedId};
use crate::geometry::{Frame, Size};
use crate::preview::{PreviewComposer, PreviewMetrics, PreviewOverlay};

/// Reactions every fresh capsule starts with.
pub const DEFAULT_SEED_REACTIONS: [&str; 3] = ["👏", "👍", "❤️"];

/// Accessory title shown in previews.
pub const PREVIEW_ACCESSORY_TITLE: &str = "...";

/// Stable identifier of a row in the host's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub usize);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}", self.0)
    }
}

/// A reaction resolved back to the row it was picked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowReaction {
    pub row: RowId,
    pub reaction: String,
}

/// How previews are built.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionConfig {
    pub capsule: CapsuleConfig,
    pub seed_reactions: Vec<String>,
    /// Fixed bounding box of the capsule.
    pub capsule_size: Size,
    pub metrics: PreviewMetrics,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            capsule: CapsuleConfig::default()
                .with_accessory_title(PREVIEW_ACCESSORY_TITLE)
                .with_accessory_visible(true),
            seed_reactions: DEFAULT_SEED_REACTIONS.iter().map(|s| s.to_string()).collect(),
            capsule_size: Size::new(250.0, 50.0),
            metrics: PreviewMetrics::default(),
        }
    }
}

impl SelectionConfig {
    pub fn with_capsule(mut self, capsule: CapsuleConfig) -> Self {
        self.capsule = capsule;
        self
    }

    pub fn with_seed_reactions<I, S>(mut self, seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seed_reactions = seeds.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_capsule_size(mut self, size: Size) -> Self {
        self.capsule_size = size;
        self
    }

    pub fn with_metrics(mut self, metrics: PreviewMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

/// The preview currently shown over a row.
#[derive(Debug)]
pub struct ActivePreview {
    row: RowId,
    row_frame: Frame,
    capsule: ReactionCapsule,
    overlay: PreviewOverlay,
    feeds: Vec<FeedHandle>,
    revealed: bool,
}

impl ActivePreview {
    pub fn row(&self) -> RowId {
        self.row
    }

    /// Frame of the row when it was pressed, in host coordinates.
    pub fn row_frame(&self) -> Frame {
        self.row_frame
    }

    pub fn capsule(&self) -> &ReactionCapsule {
        &self.capsule
    }

    pub fn overlay(&self) -> &PreviewOverlay {
        &self.overlay
    }

    pub fn feed_count(&self) -> usize {
        self.feeds.len()
    }

    /// Whether the capsule has been revealed. Previews start hidden for one frame.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn reveal(&mut self) -> bool {
        let changed = !self.revealed;
        self.revealed = true;
        changed
    }

    fn teardown(mut self) {
        for feed in &self.feeds {
            feed.cancel();
        }
        self.feeds.clear();
        self.capsule.reset();
    }
}

/// Correlates long-presses with previews and taps with rows.
#[derive(Debug, Default)]
pub struct RowSelectionContext {
    config: SelectionConfig,
    composer: PreviewComposer,
    active: Option<ActivePreview>,
}

impl RowSelectionContext {
    pub fn new(config: SelectionConfig) -> Self {
        let composer = PreviewComposer::new(config.metrics);
        Self {
            config,
            composer,
            active: None,
        }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    pub fn active(&self) -> Option<&ActivePreview> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut ActivePreview> {
        self.active.as_mut()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Build a seeded capsule and its overlay for the row at `row_frame`.
    ///
    /// Any preview already open is dismissed first. Fails only when the seed
    /// reactions don't fit the configured capacity.
    pub fn begin(
        &mut self,
        row: RowId,
        row_frame: Frame,
        observer: impl FnMut(&SelectionEvent) + 'static,
    ) -> Result<&ActivePreview, CapsuleError> {
        self.dismiss();

        let mut capsule = ReactionCapsule::new(self.config.capsule.clone());
        capsule.append_reactions(self.config.seed_reactions.iter().map(String::as_str))?;
        capsule.set_observer(observer);

        let overlay = self.composer.compose(row_frame, self.config.capsule_size);

        tracing::debug!(
            %row,
            capsule = %capsule.id(),
            reactions = capsule.reaction_count(),
            "Opening reaction preview"
        );

        Ok(&*self.active.insert(ActivePreview {
            row,
            row_frame,
            capsule,
            overlay,
            feeds: Vec::new(),
            revealed: false,
        }))
    }

    /// Start `feed` against the active capsule. Returns `None` without a preview.
    pub fn attach_feed<M>(
        &mut self,
        feed: AsyncReactionFeed,
        tx: mpsc::UnboundedSender<M>,
    ) -> Option<FeedId>
    where
        M: From<FeedDelivery> + Send + 'static,
    {
        let active = self.active.as_mut()?;
        let handle = feed.spawn(active.capsule.id(), tx);
        let id = handle.id();
        active.feeds.push(handle);
        Some(id)
    }

    /// Apply a feed delivery to the active capsule, if it is still the target.
    pub fn apply_delivery(&mut self, delivery: &FeedDelivery) -> DeliveryOutcome {
        match self.active.as_mut() {
            Some(active) => delivery.apply_to(&mut active.capsule),
            None => {
                tracing::debug!(title = %delivery.title, "No preview open, dropping delivery");
                DeliveryOutcome::Ignored
            }
        }
    }

    /// Tap the button at `index` on the active capsule.
    pub fn select(&mut self, index: usize) -> Result<SelectionEvent, CapsuleError> {
        match self.active.as_mut() {
            Some(active) => active.capsule.select(index),
            None => Err(CapsuleError::IndexOutOfRange { index, len: 0 }),
        }
    }

    /// Resolve `event` to its row and close the preview.
    ///
    /// Events from a capsule other than the active one are stale and
    /// resolve to `None`, leaving the active preview open.
    pub fn commit(&mut self, event: &SelectionEvent) -> Option<RowReaction> {
        let matches = self
            .active
            .as_ref()
            .is_some_and(|active| active.capsule.id() == event.capsule);
        if !matches {
            tracing::debug!(capsule = %event.capsule, "Ignoring selection from a stale capsule");
            return None;
        }

        let active = self.active.take()?;
        let resolved = RowReaction {
            row: active.row,
            reaction: event.value.clone(),
        };
        tracing::info!(row = %resolved.row, reaction = %resolved.reaction, "Reaction committed");
        active.teardown();
        Some(resolved)
    }

    /// Close the active preview without a reaction.
    pub fn dismiss(&mut self) -> Option<RowId> {
        let active = self.active.take()?;
        let row = active.row;
        tracing::debug!(%row, "Dismissing reaction preview");
        active.teardown();
        Some(row)
    }
}
