//! Message rows rendered as bubbles.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

use super::theme::{COLOR_ACCENT, COLOR_BUBBLE, COLOR_BUBBLE_SELECTED};

/// Rows are bordered bubbles, one line of text each.
pub const ROW_HEIGHT: u16 = 3;

/// Blank lines above each row.
pub const ROW_SPACING: u16 = 1;

/// Columns left of every bubble, holding the highlight marker.
const ROW_INDENT: u16 = 2;

/// Area of message row `index` within `list_area`, clipped to it.
pub fn message_row_rect(list_area: Rect, index: usize) -> Rect {
    let step = (ROW_HEIGHT + ROW_SPACING) as usize;
    let offset = (ROW_SPACING as usize).saturating_add(index.saturating_mul(step));
    let y = (list_area.y as usize).saturating_add(offset).min(u16::MAX as usize) as u16;
    Rect::new(list_area.x, y, list_area.width, ROW_HEIGHT).intersection(list_area)
}

fn bubble_width(text: &str, available: u16) -> u16 {
    let wanted = text.width().saturating_add(4);
    wanted.min(available as usize) as u16
}

/// Draw every row that fits in `area`.
pub(super) fn render_message_list(frame: &mut Frame, area: Rect, app: &App) {
    for (index, text) in app.messages.iter().enumerate() {
        let row = message_row_rect(area, index);
        if row.height < ROW_HEIGHT {
            break;
        }
        let selected = index == app.selected_row;
        render_row(frame, row, text, app.reaction_for(index), selected);
    }
}

fn render_row(frame: &mut Frame, row: Rect, text: &str, reaction: Option<&str>, selected: bool) {
    if selected {
        frame.render_widget(
            Paragraph::new(Span::styled("›", Style::default().fg(COLOR_ACCENT))),
            Rect::new(row.x, row.y + 1, 1, 1).intersection(row),
        );
    }

    let available = row.width.saturating_sub(ROW_INDENT);
    let bubble = Rect::new(row.x + ROW_INDENT, row.y, bubble_width(text, available), row.height)
        .intersection(row);

    let border = if selected {
        Style::default()
            .fg(COLOR_BUBBLE_SELECTED)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_BUBBLE)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);
    frame.render_widget(
        Paragraph::new(format!(" {}", text)).block(block),
        bubble,
    );

    if let Some(reaction) = reaction {
        let badge = Rect::new(bubble.right() + 1, row.y + 1, reaction.width() as u16 + 1, 1)
            .intersection(row);
        frame.render_widget(Paragraph::new(reaction.to_string()), badge);
    }
}

/// Copy the cells of `area` out of `buf`.
pub(super) fn capture_cells(buf: &Buffer, area: Rect) -> Buffer {
    let area = area.intersection(buf.area);
    let mut snapshot = Buffer::empty(area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let (Some(src), Some(dst)) = (buf.cell((x, y)), snapshot.cell_mut((x, y))) {
                *dst = src.clone();
            }
        }
    }
    snapshot
}

/// Paint `snapshot` into `buf` with its top-left corner at `target`'s.
///
/// Cells falling outside `target` or `buf` are dropped.
pub(super) fn paint_cells(buf: &mut Buffer, snapshot: &Buffer, target: Rect) {
    let source = snapshot.area;
    for y in source.top()..source.bottom() {
        for x in source.left()..source.right() {
            let dx = target.x.saturating_add(x - source.x);
            let dy = target.y.saturating_add(y - source.y);
            if dx >= target.right() || dy >= target.bottom() {
                continue;
            }
            if let (Some(src), Some(dst)) = (snapshot.cell((x, y)), buf.cell_mut((dx, dy))) {
                *dst = src.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_row_rects_are_stacked_with_spacing() {
        let area = Rect::new(0, 1, 40, 20);
        assert_eq!(message_row_rect(area, 0), Rect::new(0, 2, 40, 3));
        assert_eq!(message_row_rect(area, 1), Rect::new(0, 6, 40, 3));
        assert_eq!(message_row_rect(area, 2), Rect::new(0, 10, 40, 3));
    }

    #[test]
    fn test_row_rect_past_bottom_is_clipped() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(message_row_rect(area, 2).height, 1);
        assert!(message_row_rect(area, 3).is_empty());
        assert!(message_row_rect(area, usize::MAX).is_empty());
    }

    #[test]
    fn test_bubble_width_is_clamped() {
        assert_eq!(bubble_width("Hello", 80), 9);
        assert_eq!(bubble_width("Hello", 6), 6);
    }

    #[test]
    fn test_capture_and_paint_moves_cells() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 4));
        buf.set_string(1, 1, "ab", Style::default());

        let snapshot = capture_cells(&buf, Rect::new(1, 1, 2, 1));
        paint_cells(&mut buf, &snapshot, Rect::new(5, 3, 2, 1));

        assert_eq!(buf.cell((5, 3)).unwrap().symbol(), "a");
        assert_eq!(buf.cell((6, 3)).unwrap().symbol(), "b");
    }

    #[test]
    fn test_paint_clips_to_buffer() {
        let mut source = Buffer::empty(Rect::new(0, 0, 4, 1));
        source.set_string(0, 0, "wxyz", Style::default());
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 2));

        paint_cells(&mut buf, &source, Rect::new(4, 1, 4, 1));

        assert_eq!(buf.cell((4, 1)).unwrap().symbol(), "w");
        assert_eq!(buf.cell((5, 1)).unwrap().symbol(), "x");
    }
}
