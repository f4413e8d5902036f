//! Geometry primitives in CSS pixels.
//!
//! All element rectangles are expressed relative to the viewport of the
//! window that owns the element, the same way `getBoundingClientRect`
//! reports them. Nested frames are handled by carrying the frame's offset
//! from the top window and re-expressing the top viewport in frame space
//! (see [`ClipRect::for_frame`]).

use serde::{Deserialize, Serialize};

/// A point (or offset) in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by the origin of `rect`.
    ///
    /// Used when descending into a frame: the child's offset is the parent
    /// offset plus the frame element's own top-left corner.
    #[must_use]
    pub fn offset_by(self, rect: &Rect) -> Self {
        Self {
            x: self.x + rect.left,
            y: self.y + rect.top,
        }
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A bounding rectangle relative to its window's viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The part of a frame's coordinate space that is visible in the top
/// window's viewport.
///
/// Boundaries are inclusive: a rectangle touching an edge still overlaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl ClipRect {
    /// Clip rectangle for the top window itself.
    #[must_use]
    pub fn viewport(top: Size) -> Self {
        Self::for_frame(top, Point::default(), top)
    }

    /// Re-express the top viewport in the coordinate space of a frame whose
    /// origin sits at `offset` (relative to the top window) and whose own
    /// window is `frame` sized.
    ///
    /// A negative offset means the frame is scrolled partly out of view, so
    /// the visible area starts `-offset` pixels into the frame. The far edge
    /// is pulled in only when the frame overflows the top viewport.
    #[must_use]
    pub fn for_frame(top: Size, offset: Point, frame: Size) -> Self {
        let min_x = if offset.x < 0.0 { -offset.x } else { 0.0 };
        let min_y = if offset.y < 0.0 { -offset.y } else { 0.0 };
        let max_x = if offset.x + frame.width > top.width {
            top.width - offset.x
        } else {
            top.width
        };
        let max_y = if offset.y + frame.height > top.height {
            top.height - offset.y
        } else {
            top.height
        };

        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Whether `rect` intersects this clip rectangle.
    #[must_use]
    pub fn overlaps(&self, rect: &Rect) -> bool {
        !(rect.left > self.max_x
            || rect.right() < self.min_x
            || rect.top > self.max_y
            || rect.bottom() < self.min_y)
    }
}
