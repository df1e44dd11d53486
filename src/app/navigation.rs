//! Navigation methods for the App.

use super::App;

impl App {
    /// Move the row highlight up
    pub fn move_up(&mut self) {
        if self.selected_row > 0 {
            self.selected_row -= 1;
            self.mark_dirty();
        }
    }

    /// Move the row highlight down
    pub fn move_down(&mut self) {
        if self.selected_row + 1 < self.messages.len() {
            self.selected_row += 1;
            self.mark_dirty();
        }
    }

    /// Number of buttons in the open capsule, zero without a preview.
    pub fn capsule_len(&self) -> usize {
        self.selection
            .active()
            .map_or(0, |active| active.capsule().visible_count())
    }

    pub fn capsule_left(&mut self) {
        let len = self.capsule_len();
        if len == 0 {
            return;
        }
        self.capsule_cursor = self.capsule_cursor.min(len - 1).saturating_sub(1);
        self.mark_dirty();
    }

    pub fn capsule_right(&mut self) {
        let len = self.capsule_len();
        if len == 0 {
            return;
        }
        self.capsule_cursor = (self.capsule_cursor + 1).min(len - 1);
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn app() -> App {
        App::new(AppConfig::default().with_feed_enabled(false))
    }

    #[test]
    fn test_row_movement_is_bounded() {
        let mut app = app();
        app.move_up();
        assert_eq!(app.selected_row, 0);

        for _ in 0..10 {
            app.move_down();
        }
        assert_eq!(app.selected_row, 4);
    }

    #[test]
    fn test_capsule_cursor_is_bounded() {
        let mut app = app();
        app.capsule_right();
        assert_eq!(app.capsule_cursor, 0);

        app.open_preview(0);
        for _ in 0..10 {
            app.capsule_right();
        }
        assert_eq!(app.capsule_cursor, 3);

        for _ in 0..10 {
            app.capsule_left();
        }
        assert_eq!(app.capsule_cursor, 0);
    }
}
