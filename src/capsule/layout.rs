//! Proportional button layout inside the capsule's fixed bounding box.

use unicode_width::UnicodeWidthStr;

use crate::geometry::{Frame, Point};

/// Share of the box width kept empty on each side.
pub const HORIZONTAL_MARGIN_RATIO: f64 = 0.05;

/// Padding added to each title's intrinsic width, in the same units as the title width.
const BUTTON_PADDING: f64 = 2.0;

fn intrinsic_width(title: &str) -> f64 {
    title.width().max(1) as f64 + BUTTON_PADDING
}

/// Lay out one button per title across `bounds`.
///
/// Buttons span the full height and share the width between the side margins
/// in proportion to their titles' display width.
pub fn button_frames(titles: &[&str], bounds: Frame) -> Vec<Frame> {
    if titles.is_empty() {
        return Vec::new();
    }

    let margin = bounds.width() * HORIZONTAL_MARGIN_RATIO;
    let available = (bounds.width() - margin * 2.0).max(0.0);
    let weights: Vec<f64> = titles.iter().map(|t| intrinsic_width(t)).collect();
    let total: f64 = weights.iter().sum();

    let mut x = bounds.min_x() + margin;
    weights
        .iter()
        .map(|weight| {
            let width = available * weight / total;
            let frame = Frame::new(x, bounds.min_y(), width, bounds.height());
            x += width;
            frame
        })
        .collect()
}

/// Index of the first frame containing `point`.
pub fn hit_test(frames: &[Frame], point: Point) -> Option<usize> {
    frames.iter().position(|frame| frame.contains(point))
}
