//! Plain 2D geometry shared by the capsule layout and the preview composer.
//!
//! Units are abstract (points in the composer, terminal cells in the demo
//! host). Sizes are never negative: constructors clamp negative and
//! non-finite dimensions to zero.

use ratatui::layout::Rect;

/// Clamp a dimension to a finite, non-negative value.
#[inline]
pub(crate) fn clamp_dimension(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// A point in host coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A non-negative width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: clamp_dimension(width),
            height: clamp_dimension(height),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle: origin at the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frame {
    pub origin: Point,
    pub size: Size,
}

impl Frame {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_parts(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// Translate by `(dx, dy)`, keeping the size.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            origin: self.origin.offset(dx, dy),
            size: self.size,
        }
    }

    /// Snap to whole terminal cells and clip to `bounds`.
    ///
    /// Returns an empty rect at the clipped origin when the frame lies
    /// entirely outside `bounds`.
    pub fn to_rect(&self, bounds: Rect) -> Rect {
        let left = (self.min_x().round() as i64).max(bounds.x as i64);
        let top = (self.min_y().round() as i64).max(bounds.y as i64);
        let right = (self.max_x().round() as i64).min(bounds.x as i64 + bounds.width as i64);
        let bottom = (self.max_y().round() as i64).min(bounds.y as i64 + bounds.height as i64);

        let left = left.min(bounds.x as i64 + bounds.width as i64);
        let top = top.min(bounds.y as i64 + bounds.height as i64);

        Rect::new(
            left as u16,
            top as u16,
            (right - left).max(0) as u16,
            (bottom - top).max(0) as u16,
        )
    }
}

impl From<Rect> for Frame {
    fn from(rect: Rect) -> Self {
        Frame::new(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        )
    }
}
