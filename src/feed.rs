//! Delayed reaction feed.
//!
//! An [`AsyncReactionFeed`] waits once for its delay and then hands every
//! title, in order, to the UI loop as a [`FeedDelivery`] message. The feed
//! task never touches a capsule: the UI loop applies deliveries with
//! [`FeedDelivery::apply_to`], which silently ignores deliveries addressed to
//! a capsule that has since been reset or discarded.
//!
//! ```ignore
//! let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<FeedDelivery>();
//! let handle = AsyncReactionFeed::new(["😂", "😮"], DEFAULT_FEED_DELAY).spawn(capsule.id(), tx);
//!
//! while let Some(delivery) = rx.recv().await {
//!     delivery.apply_to(&mut capsule);
//! }
//! ```

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::capsule::{CapsuleId, ReactionCapsule};
use crate::error::CapsuleError;

/// Delay before a feed delivers its titles.
pub const DEFAULT_FEED_DELAY: Duration = Duration::from_secs(3);

/// Identity of one spawned feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedId(Uuid);

impl FeedId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// One title on its way to a capsule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDelivery {
    pub feed: FeedId,
    pub target: CapsuleId,
    pub title: String,
}

/// What happened when a delivery was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The title was appended.
    Applied,
    /// The target capsule is gone; nothing changed.
    Ignored,
    /// The capsule refused the title; nothing changed.
    Rejected(CapsuleError),
}

impl FeedDelivery {
    /// Append this delivery's title to `capsule` if it is still the target.
    pub fn apply_to(&self, capsule: &mut ReactionCapsule) -> DeliveryOutcome {
        if capsule.id() != self.target {
            tracing::debug!(
                target_capsule = %self.target,
                live_capsule = %capsule.id(),
                "Dropping reaction delivery for a discarded capsule"
            );
            return DeliveryOutcome::Ignored;
        }

        match capsule.append_reactions([self.title.as_str()]) {
            Ok(()) => DeliveryOutcome::Applied,
            Err(err) => {
                tracing::warn!(
                    code = err.error_code(),
                    title = %self.title,
                    "Reaction delivery rejected: {}",
                    err
                );
                DeliveryOutcome::Rejected(err)
            }
        }
    }
}

/// A finite list of reaction titles delivered after a fixed delay.
#[derive(Debug, Clone)]
pub struct AsyncReactionFeed {
    titles: Vec<String>,
    delay: Duration,
}

impl AsyncReactionFeed {
    pub fn new<I, S>(titles: I, delay: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            delay,
        }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule the feed on the current tokio runtime.
    ///
    /// All titles are sent together once `delay` has elapsed, one message
    /// each, in source order. Consumes the feed; a feed runs at most once.
    pub fn spawn<M>(self, target: CapsuleId, tx: mpsc::UnboundedSender<M>) -> FeedHandle
    where
        M: From<FeedDelivery> + Send + 'static,
    {
        let id = FeedId::new();
        let token = CancellationToken::new();
        let task_token = token.clone();
        let Self { titles, delay } = self;

        tracing::debug!(
            capsule = %target,
            count = titles.len(),
            delay_ms = delay.as_millis() as u64,
            "Scheduling reaction feed"
        );

        let task = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = task_token.cancelled() => return,
                _ = tokio::time::sleep(delay) => {}
            }

            for title in titles {
                if task_token.is_cancelled() {
                    return;
                }
                let delivery = FeedDelivery {
                    feed: id,
                    target,
                    title,
                };
                if tx.send(M::from(delivery)).is_err() {
                    // UI loop is gone
                    return;
                }
            }
        });

        FeedHandle {
            id,
            target,
            token,
            task,
        }
    }
}

/// Handle to a scheduled feed. Dropping it cancels the feed.
#[derive(Debug)]
pub struct FeedHandle {
    id: FeedId,
    target: CapsuleId,
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl FeedHandle {
    pub fn id(&self) -> FeedId {
        self.id
    }

    pub fn target(&self) -> CapsuleId {
        self.target
    }

    /// Stop future deliveries. Titles already sent are not taken back.
    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!(capsule = %self.target, "Cancelling reaction feed");
        }
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// True once the feed task has returned, delivered or not.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
