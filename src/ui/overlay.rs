//! Reaction preview overlay: row snapshot, capsule and context menu.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::geometry::Frame as GeoFrame;
use crate::menu::MenuAction;

use super::message_list::{capture_cells, paint_cells};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_CURSOR_BG, COLOR_DESTRUCTIVE, COLOR_DIM, COLOR_OVERLAY_BG,
};

/// Menu box width including borders.
const MENU_WIDTH: u16 = 26;

/// Render the open preview over everything drawn so far.
///
/// The first frame after opening captures the row's cells; later frames
/// paint that capture, so the snapshot stays as it looked when pressed.
pub(super) fn render_preview(frame: &mut Frame, list_area: Rect, app: &mut App) {
    let Some(active) = app.selection.active() else {
        return;
    };
    let screen = frame.area();
    let overlay = *active.overlay();
    let row_rect = active.row_frame().to_rect(screen);
    let revealed = active.is_revealed();

    if app.preview_snapshot.is_none() {
        app.preview_snapshot = Some(capture_cells(frame.buffer_mut(), row_rect));
    }

    frame
        .buffer_mut()
        .set_style(list_area, Style::default().fg(COLOR_DIM).add_modifier(Modifier::DIM));

    let dy = vertical_shift(overlay.container_frame(), screen);
    let snapshot_rect = overlay
        .placed_snapshot_frame()
        .translated(0.0, dy)
        .to_rect(screen);
    if let Some(snapshot) = &app.preview_snapshot {
        paint_cells(frame.buffer_mut(), snapshot, snapshot_rect);
    }

    if !revealed {
        app.layout.capsule_area = None;
        app.layout.menu_area = None;
        return;
    }

    let capsule_rect = overlay
        .placed_capsule_frame()
        .translated(0.0, dy)
        .to_rect(screen);
    app.layout.capsule_area = render_capsule(frame, capsule_rect, app);

    let menu_rect = menu_rect(screen, snapshot_rect);
    app.layout.menu_area = render_menu(frame, menu_rect, app);
}

/// Vertical offset that keeps `container` on screen, preferring its top edge.
fn vertical_shift(container: GeoFrame, screen: Rect) -> f64 {
    let top = screen.top() as f64;
    let bottom = screen.bottom() as f64;
    if container.max_y() > bottom {
        (bottom - container.max_y()).max(top - container.min_y())
    } else if container.min_y() < top {
        top - container.min_y()
    } else {
        0.0
    }
}

fn render_capsule(frame: &mut Frame, area: Rect, app: &App) -> Option<Rect> {
    let active = app.selection.active()?;
    if area.is_empty() {
        return None;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_OVERLAY_BG));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let capsule = active.capsule();
    let frames = capsule.button_frames(GeoFrame::from(inner));
    let cursor = app.capsule_cursor.min(capsule.visible_count().saturating_sub(1));

    for (index, (entry, button)) in capsule.visible_entries().zip(frames).enumerate() {
        let mut style = Style::default().bg(COLOR_OVERLAY_BG);
        if entry.is_accessory {
            style = style.fg(COLOR_DIM);
        }
        if app.focus == Focus::Capsule && index == cursor {
            style = style.bg(COLOR_CURSOR_BG).add_modifier(Modifier::BOLD);
        }
        frame.render_widget(
            Paragraph::new(Span::styled(entry.title.clone(), style))
                .style(style)
                .alignment(Alignment::Center),
            button.to_rect(inner),
        );
    }

    Some(inner)
}

/// Below the snapshot, or pushed up when the screen is too short.
fn menu_rect(screen: Rect, snapshot: Rect) -> Rect {
    let height = MenuAction::ALL.len() as u16 + 2;
    let y = snapshot.bottom().min(screen.bottom().saturating_sub(height));
    Rect::new(snapshot.x, y, MENU_WIDTH, height).intersection(screen)
}

fn render_menu(frame: &mut Frame, area: Rect, app: &App) -> Option<Rect> {
    if area.is_empty() {
        return None;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_OVERLAY_BG));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = MenuAction::ALL
        .iter()
        .enumerate()
        .map(|(index, action)| {
            let mut style = Style::default().fg(if action.is_destructive() {
                COLOR_DESTRUCTIVE
            } else {
                COLOR_ACCENT
            });
            if app.focus == Focus::Menu && index == app.menu.selected() {
                style = style.bg(COLOR_CURSOR_BG).add_modifier(Modifier::BOLD);
            }
            Line::from(vec![
                Span::styled(format!(" {} ", action.icon()), style),
                Span::styled(action.title(), style),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    Some(inner)
}
