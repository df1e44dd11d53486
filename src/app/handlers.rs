//! Key and mouse handling for the App.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::geometry::{Frame, Point};
use crate::menu::MenuAction;

use super::{App, Focus, PressState};

fn cell_center(column: u16, row: u16) -> Point {
    Point::new(column as f64 + 0.5, row as f64 + 0.5)
}

fn contains(area: Option<Rect>, column: u16, row: u16) -> Option<Rect> {
    area.filter(|a| a.contains(Position::new(column, row)))
}

impl App {
    /// Handle a key press.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match self.focus {
            Focus::Messages => self.handle_list_key(key.code),
            Focus::Capsule => self.handle_capsule_key(key.code),
            Focus::Menu => self.handle_menu_key(key.code),
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Enter | KeyCode::Char(' ') => self.open_preview(self.selected_row),
            _ => {}
        }
    }

    fn handle_capsule_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.dismiss_preview(),
            KeyCode::Left | KeyCode::Char('h') => self.capsule_left(),
            KeyCode::Right | KeyCode::Char('l') => self.capsule_right(),
            KeyCode::Enter | KeyCode::Char(' ') => self.tap_capsule(self.capsule_cursor),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.capsule_cursor = index;
                self.tap_capsule(index);
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = Focus::Menu;
                self.mark_dirty();
            }
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.dismiss_preview(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu.previous();
                self.mark_dirty();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu.next();
                self.mark_dirty();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.run_menu_action(self.menu.selected_action());
            }
            KeyCode::Tab => {
                self.focus = Focus::Capsule;
                self.mark_dirty();
            }
            _ => {}
        }
    }

    /// Handle a mouse event.
    ///
    /// Without a preview, holding the left button on a row starts a press
    /// that [`App::tick`] turns into a long-press. With a preview open,
    /// clicks land on the capsule or the menu, and anywhere else dismisses.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if self.selection.is_active() => {
                self.click_overlay(column, row);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.press = None;
                if let Some(r) = self.row_at(column, row) {
                    self.selected_row = r;
                    self.press = Some(PressState {
                        row: r,
                        started: Instant::now(),
                    });
                    self.mark_dirty();
                }
            }
            MouseEventKind::Up(_) | MouseEventKind::Drag(_) => {
                self.press = None;
            }
            _ => {}
        }
    }

    fn click_overlay(&mut self, column: u16, row: u16) {
        if let Some(area) = contains(self.layout.capsule_area, column, row) {
            let hit = self
                .selection
                .active()
                .and_then(|active| active.capsule().hit_test(Frame::from(area), cell_center(column, row)));
            if let Some(index) = hit {
                self.capsule_cursor = index;
                self.tap_capsule(index);
            }
            return;
        }

        if let Some(area) = contains(self.layout.menu_area, column, row) {
            if let Some(&action) = MenuAction::ALL.get((row - area.y) as usize) {
                self.run_menu_action(action);
            }
            return;
        }

        self.dismiss_preview();
    }
}
