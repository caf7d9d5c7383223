//! Field geometry
//!
//! Every position and path in the crate lives in a fixed logical field space
//! (default 800 × 500 units) that does not depend on the on-screen size.
//!
//! ## Coordinate System
//! - X: 0 = left sideline, `width` = right sideline
//! - Y: 0 = top of the field, `height` = bottom (routes move "up" with negative dy)
//!
//! Player positions are kept inside the playable area, which is the field
//! minus `padding` on every side.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Logical field width
pub const FIELD_WIDTH: f32 = 800.0;
/// Logical field height
pub const FIELD_HEIGHT: f32 = 500.0;
/// Margin kept free around the playable area
pub const FIELD_PADDING: f32 = 40.0;

/// A point in field space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum, used to walk relative route segments
    #[inline]
    pub fn offset(self, delta: Point) -> Point {
        Point { x: self.x + delta.x, y: self.y + delta.y }
    }

    /// NaN/infinite coordinates cannot be written as JSON numbers
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Size of the logical field and its padding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDimensions {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
}

impl Default for FieldDimensions {
    fn default() -> Self {
        Self { width: FIELD_WIDTH, height: FIELD_HEIGHT, padding: FIELD_PADDING }
    }
}

impl FieldDimensions {
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a point into the playable area `[P, W-P] × [P, H-P]`
    ///
    /// Must not panic for lo > hi, hence `max().min()` instead of `f32::clamp`.
    pub fn clamp(&self, point: Point) -> Point {
        let p = self.padding;
        Point {
            x: point.x.max(p).min(self.width - p),
            y: point.y.max(p).min(self.height - p),
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        let p = self.padding;
        point.x >= p && point.x <= self.width - p && point.y >= p && point.y <= self.height - p
    }

    /// Convert a pointer position in screen pixels into field space.
    ///
    /// X and Y are scaled independently, so a rendered rect that does not keep
    /// the field's aspect ratio simply stretches the mapping. Returns `None` for
    /// a collapsed rect (zero or negative width/height).
    pub fn to_field_space(&self, screen: Point, rect: &RenderedRect) -> Option<Point> {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return None;
        }

        let scale_x = self.width / rect.width;
        let scale_y = self.height / rect.height;

        Some(Point { x: (screen.x - rect.left) * scale_x, y: (screen.y - rect.top) * scale_y })
    }
}

/// Bounding box of the rendered field, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderedRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl RenderedRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }
}

/// Clamp against the default field
pub fn clamp(point: Point) -> Point {
    FieldDimensions::default().clamp(point)
}

/// Screen → field conversion against the default field
pub fn to_field_space(screen: Point, rect: &RenderedRect) -> Option<Point> {
    FieldDimensions::default().to_field_space(screen, rect)
}
