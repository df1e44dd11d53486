//! Overlay geometry for the transient row preview.
//!
//! The preview is a container holding the capsule at its top-left and a
//! snapshot of the pressed row at its bottom-left, separated by a small gap.
//! The host centres the container on [`PreviewOverlay::anchor_center`],
//! which sits above the row's own centre so the capsule appears to float
//! just over the row.
//!
//! Everything here is plain arithmetic on [`Frame`]s. Degenerate inputs are
//! clamped to zero instead of failing.

use crate::geometry::{clamp_dimension, Frame, Point, Size};

/// Vertical space between the capsule and the row snapshot.
pub const DEFAULT_GAP: f64 = 5.0;

/// How far the anchor is lowered back from a full capsule-height shift.
pub const DEFAULT_ANCHOR_LIFT: f64 = 10.0;

/// Spacing used by [`PreviewComposer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewMetrics {
    pub gap: f64,
    pub anchor_lift: f64,
}

impl Default for PreviewMetrics {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            anchor_lift: DEFAULT_ANCHOR_LIFT,
        }
    }
}

impl PreviewMetrics {
    pub fn new(gap: f64, anchor_lift: f64) -> Self {
        Self { gap, anchor_lift }
    }
}

/// Composed overlay layout. Frames are relative to the container's top-left;
/// the anchor is in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewOverlay {
    pub container_size: Size,
    pub capsule_frame: Frame,
    pub row_snapshot_frame: Frame,
    pub anchor_center: Point,
}

impl PreviewOverlay {
    /// The container in host coordinates, centred on the anchor.
    pub fn container_frame(&self) -> Frame {
        Frame::from_parts(
            self.anchor_center.offset(
                -self.container_size.width / 2.0,
                -self.container_size.height / 2.0,
            ),
            self.container_size,
        )
    }

    /// Capsule frame in host coordinates.
    pub fn placed_capsule_frame(&self) -> Frame {
        let origin = self.container_frame().origin;
        self.capsule_frame.translated(origin.x, origin.y)
    }

    /// Row snapshot frame in host coordinates.
    pub fn placed_snapshot_frame(&self) -> Frame {
        let origin = self.container_frame().origin;
        self.row_snapshot_frame.translated(origin.x, origin.y)
    }
}

/// Computes [`PreviewOverlay`]s. Holds no view state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PreviewComposer {
    metrics: PreviewMetrics,
}

impl PreviewComposer {
    pub fn new(metrics: PreviewMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> PreviewMetrics {
        self.metrics
    }

    /// Lay out the capsule above a snapshot of the row at `row_frame`.
    pub fn compose(&self, row_frame: Frame, capsule_size: Size) -> PreviewOverlay {
        let row = Size::new(row_frame.width(), row_frame.height());
        let capsule = Size::new(capsule_size.width, capsule_size.height);
        let gap = clamp_dimension(self.metrics.gap);

        let container_size = Size::new(row.width, row.height + capsule.height + gap);
        let capsule_frame = Frame::from_parts(Point::ZERO, capsule);
        let row_snapshot_frame =
            Frame::from_parts(Point::new(0.0, container_size.height - row.height), row);

        let anchor_center = Frame::from_parts(row_frame.origin, row)
            .center()
            .offset(0.0, -(capsule.height - self.metrics.anchor_lift));

        PreviewOverlay {
            container_size,
            capsule_frame,
            row_snapshot_frame,
            anchor_center,
        }
    }
}
