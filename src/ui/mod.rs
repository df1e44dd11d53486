//! UI rendering
//!
//! One screen: a header, the message list and a footer with key hints or
//! the last status. When a reaction preview is open it is drawn on top:
//! the list dims, the pressed row's snapshot is painted back in place, the
//! capsule floats above it and the context menu sits below.
//!
//! The render pass records the areas it used in [`App::layout`] so mouse
//! clicks can be hit-tested against the last frame.

mod message_list;
mod overlay;
mod theme;

// Re-export theme colors for external use
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BUBBLE, COLOR_BUBBLE_SELECTED, COLOR_CURSOR_BG,
    COLOR_DESTRUCTIVE, COLOR_DIM, COLOR_HEADER, COLOR_OVERLAY_BG,
};

pub use message_list::{message_row_rect, ROW_HEIGHT, ROW_SPACING};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use message_list::render_message_list;
use overlay::render_preview;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);

    app.layout.list_area = chunks[1];
    render_message_list(frame, chunks[1], app);

    render_footer(frame, chunks[2], app);

    if app.selection.is_active() {
        render_preview(frame, chunks[1], app);
    } else {
        app.layout.capsule_area = None;
        app.layout.menu_area = None;
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " tcreactions ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

/// Key hints for the current focus.
pub fn key_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Messages => " ↑↓ move · Enter/hold click react · q quit",
        Focus::Capsule => " ←→ move · 1-9/Enter react · Tab menu · Esc close",
        Focus::Menu => " ↑↓ move · Enter run · Tab reactions · Esc close",
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status {
        Some(status) => Line::from(Span::styled(
            format!(" {}", status),
            Style::default().fg(COLOR_ACCENT),
        )),
        None => Line::from(Span::styled(
            key_hints(app.focus),
            Style::default().fg(COLOR_DIM),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
