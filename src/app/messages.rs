//! AppMessage enum for async communication within the application.

use crate::capsule::SelectionEvent;
use crate::feed::FeedDelivery;

/// Messages delivered to the UI loop.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// A capsule button was tapped.
    ReactionSelected(SelectionEvent),
    /// A reaction feed produced a title for its capsule.
    ReactionDelivered(FeedDelivery),
}

impl From<FeedDelivery> for AppMessage {
    fn from(delivery: FeedDelivery) -> Self {
        AppMessage::ReactionDelivered(delivery)
    }
}
