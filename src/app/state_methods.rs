//! State accessor and utility methods for the App.

use std::time::Instant;

use super::App;

impl App {
    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance the main loop by one tick.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Tick with an explicit clock.
    ///
    /// Reveals a preview opened on the previous frame and turns a held
    /// mouse press into a long-press once the threshold has passed.
    pub fn tick_at(&mut self, now: Instant) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if let Some(active) = self.selection.active_mut() {
            if active.reveal() {
                self.mark_dirty();
            }
        }

        if let Some(press) = self.press {
            if now.saturating_duration_since(press.started) >= self.config.long_press {
                self.press = None;
                self.open_preview(press.row);
            }
        }
    }

    /// Handle every message already queued on the App's own receiver.
    ///
    /// Returns how many were handled. Does nothing once the main loop has
    /// taken the receiver.
    pub fn drain_messages(&mut self) -> usize {
        let mut pending = Vec::new();
        if let Some(rx) = self.message_rx.as_mut() {
            while let Ok(msg) = rx.try_recv() {
                pending.push(msg);
            }
        }
        let count = pending.len();
        for msg in pending {
            self.handle_message(msg);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::PressState;
    use crate::config::AppConfig;
    use std::time::Duration;

    fn app() -> App {
        App::new(AppConfig::default().with_feed_enabled(false))
    }

    #[test]
    fn test_tick_reveals_preview_once() {
        let mut app = app();
        app.open_preview(0);
        assert!(!app.selection.active().unwrap().is_revealed());

        app.needs_redraw = false;
        app.tick();
        assert!(app.selection.active().unwrap().is_revealed());
        assert!(app.needs_redraw);

        app.needs_redraw = false;
        app.tick();
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_short_press_does_not_open_preview() {
        let mut app = app();
        let start = Instant::now();
        app.press = Some(PressState { row: 2, started: start });

        app.tick_at(start + Duration::from_millis(100));

        assert!(!app.selection.is_active());
        assert!(app.press.is_some());
    }

    #[test]
    fn test_held_press_opens_preview() {
        let mut app = app();
        let start = Instant::now();
        app.press = Some(PressState { row: 2, started: start });

        app.tick_at(start + Duration::from_millis(500));

        assert!(app.press.is_none());
        assert_eq!(app.selection.active().unwrap().row().0, 2);
    }

    #[test]
    fn test_drain_without_receiver_is_noop() {
        let mut app = app();
        app.message_rx.take();
        assert_eq!(app.drain_messages(), 0);
    }
}
