//! Opening, tapping and closing the reaction preview.
//!
//! Capsule taps are not committed where they happen. The capsule observer
//! sends each tap back to the App's own channel, one message per tap, and
//! [`App::handle_message`] commits it; the observer cannot borrow the App.

use crate::capsule::SelectionEvent;
use crate::feed::{AsyncReactionFeed, DeliveryOutcome};
use crate::geometry::{Frame, Point};
use crate::menu::MenuAction;
use crate::selection::RowId;
use crate::ui::message_row_rect;

use super::{App, AppMessage, Focus};

impl App {
    /// Frame of `row` in the message list from the last render.
    pub fn row_frame(&self, row: usize) -> Frame {
        Frame::from(message_row_rect(self.layout.list_area, row))
    }

    /// Message row under the terminal cell `(column, row)`.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let point = Point::new(column as f64 + 0.5, row as f64 + 0.5);
        (0..self.messages.len()).find(|&i| self.row_frame(i).contains(point))
    }

    /// Open a reaction preview over `row`.
    ///
    /// Taps on the new capsule come back as [`AppMessage::ReactionSelected`].
    /// When the demo feed is on, it is started against the new capsule.
    pub fn open_preview(&mut self, row: usize) {
        if row >= self.messages.len() {
            return;
        }

        let tx = self.message_tx.clone();
        let observer = move |event: &SelectionEvent| {
            let _ = tx.send(AppMessage::ReactionSelected(event.clone()));
        };

        let row_frame = self.row_frame(row);
        if let Err(e) = self.selection.begin(RowId(row), row_frame, observer).map(|_| ()) {
            tracing::error!(code = e.error_code(), "Failed to open preview: {}", e);
            self.status = Some(e.user_message());
            self.mark_dirty();
            return;
        }

        if self.config.feed_enabled {
            let feed = AsyncReactionFeed::new(self.config.feed_titles.clone(), self.config.feed_delay);
            let tx = self.message_tx.clone();
            if let Some(id) = self.selection.attach_feed(feed, tx) {
                tracing::debug!(feed = ?id, "Reaction feed started");
            }
        }

        self.selected_row = row;
        self.focus = Focus::Capsule;
        self.capsule_cursor = 0;
        self.menu.reset();
        self.preview_snapshot = None;
        self.press = None;
        self.status = None;
        self.mark_dirty();
    }

    /// Tap the capsule button at `index`.
    ///
    /// The outcome arrives later as an [`AppMessage`]; an invalid index only
    /// updates the status line.
    pub fn tap_capsule(&mut self, index: usize) {
        match self.selection.select(index) {
            Ok(event) => {
                tracing::debug!(index = event.index, value = %event.value, "Capsule tapped");
            }
            Err(e) => {
                tracing::warn!(code = e.error_code(), "Capsule tap rejected: {}", e);
                self.status = Some(e.user_message());
            }
        }
        self.mark_dirty();
    }

    /// Close the preview without reacting.
    pub fn dismiss_preview(&mut self) {
        if let Some(row) = self.selection.dismiss() {
            tracing::debug!(%row, "Preview dismissed");
        }
        self.close_overlay();
    }

    /// Run a context menu action for the previewed row, then close the preview.
    pub fn run_menu_action(&mut self, action: MenuAction) {
        let row = self.selection.active().map(|active| active.row());
        match row {
            Some(row) => {
                tracing::info!(%row, action = action.title(), "Menu action");
                self.status = Some(format!("{} on \"{}\"", action.title(), self.message_text(row)));
            }
            None => return,
        }
        self.dismiss_preview();
    }

    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::ReactionSelected(event) if event.is_accessory => {
                let current = self
                    .selection
                    .active()
                    .is_some_and(|active| active.capsule().id() == event.capsule);
                if current {
                    self.focus = Focus::Menu;
                    self.menu.reset();
                }
            }
            AppMessage::ReactionSelected(event) => {
                if let Some(resolved) = self.selection.commit(&event) {
                    self.status = Some(format!(
                        "Reacted {} to \"{}\"",
                        resolved.reaction,
                        self.message_text(resolved.row)
                    ));
                    self.reactions.insert(resolved.row, resolved.reaction);
                    self.close_overlay();
                }
            }
            AppMessage::ReactionDelivered(delivery) => {
                if let DeliveryOutcome::Rejected(e) = self.selection.apply_delivery(&delivery) {
                    self.status = Some(e.user_message());
                }
            }
        }
    }

    fn message_text(&self, row: RowId) -> &str {
        self.messages.get(row.0).map(String::as_str).unwrap_or_default()
    }

    fn close_overlay(&mut self) {
        self.focus = Focus::Messages;
        self.capsule_cursor = 0;
        self.menu.reset();
        self.preview_snapshot = None;
        self.layout.capsule_area = None;
        self.layout.menu_area = None;
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(AppConfig::default().with_feed_enabled(false))
    }

    fn titles(app: &App) -> Vec<String> {
        app.selection
            .active()
            .unwrap()
            .capsule()
            .visible_entries()
            .map(|e| e.title.clone())
            .collect()
    }

    #[test]
    fn test_open_preview_seeds_capsule() {
        let mut app = app();
        app.open_preview(1);

        assert_eq!(app.focus, Focus::Capsule);
        assert_eq!(app.selected_row, 1);
        assert_eq!(titles(&app), vec!["👏", "👍", "❤️", "..."]);
    }

    #[test]
    fn test_open_preview_out_of_range_is_ignored() {
        let mut app = app();
        app.open_preview(99);
        assert!(!app.selection.is_active());
        assert_eq!(app.focus, Focus::Messages);
    }

    #[test]
    fn test_tap_reaction_commits_to_row() {
        let mut app = app();
        app.open_preview(0);
        app.tap_capsule(1);

        assert_eq!(app.drain_messages(), 1);

        assert_eq!(app.reaction_for(0), Some("👍"));
        assert!(!app.selection.is_active());
        assert_eq!(app.focus, Focus::Messages);
        assert_eq!(app.status.as_deref(), Some("Reacted 👍 to \"Hello\""));
    }

    #[test]
    fn test_tap_accessory_focuses_menu() {
        let mut app = app();
        app.open_preview(0);
        app.tap_capsule(3);
        app.drain_messages();

        assert!(app.selection.is_active());
        assert_eq!(app.focus, Focus::Menu);
        assert!(app.reaction_for(0).is_none());
    }

    #[test]
    fn test_tap_out_of_range_sets_status() {
        let mut app = app();
        app.open_preview(0);
        app.tap_capsule(9);

        assert_eq!(app.drain_messages(), 0);
        assert!(app.selection.is_active());
        assert!(app.status.is_some());
    }

    #[test]
    fn test_stale_selection_is_ignored() {
        let mut app = app();
        app.open_preview(0);
        app.tap_capsule(0);
        // Replace the preview before the tap is handled.
        app.open_preview(2);
        app.drain_messages();

        assert!(app.reaction_for(0).is_none());
        assert_eq!(app.selection.active().unwrap().row(), RowId(2));
    }

    #[test]
    fn test_menu_action_closes_preview() {
        let mut app = app();
        app.open_preview(3);
        app.run_menu_action(MenuAction::Forward);

        assert!(!app.selection.is_active());
        assert_eq!(app.status.as_deref(), Some("Forward on \"Howdy\""));
    }

    #[test]
    fn test_menu_action_without_preview_is_noop() {
        let mut app = app();
        app.run_menu_action(MenuAction::Recall);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_row_at_matches_row_frames() {
        let app = app();
        let rect = message_row_rect(app.layout.list_area, 1);
        assert_eq!(app.row_at(rect.x, rect.y), Some(1));
        assert_eq!(app.row_at(0, app.layout.list_area.bottom() + 5), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_feed_grows_open_capsule() {
        let mut app = App::new(AppConfig::default());
        app.open_preview(0);

        tokio::time::sleep(crate::feed::DEFAULT_FEED_DELAY + std::time::Duration::from_millis(10))
            .await;
        tokio::task::yield_now().await;

        assert_eq!(app.drain_messages(), 3);
        assert_eq!(
            titles(&app),
            vec!["👏", "👍", "❤️", "😂", "😮", "🎉", "..."]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_feed_after_dismiss_is_dropped() {
        let mut app = App::new(AppConfig::default());
        app.open_preview(0);
        app.dismiss_preview();

        tokio::time::sleep(crate::feed::DEFAULT_FEED_DELAY * 2).await;

        assert_eq!(app.drain_messages(), 0);
        assert!(!app.selection.is_active());
    }
}
