//! Rectangle and page geometry
//!
//! Plain value types. Nothing here knows about elements, labels or errors.

use serde::Serialize;
use thiserror::Error;

/// Rejected geometry input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("rectangle width must not be negative, got {0}")]
    NegativeWidth(i32),
    #[error("rectangle height must not be negative, got {0}")]
    NegativeHeight(i32),
    #[error("rectangle at ({x},{y}) of size {width}x{height} reaches past the coordinate range")]
    EdgeOutOfRange {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    },
    #[error("page size must be positive, got {width}x{height}")]
    EmptyPage { width: i32, height: i32 },
}

/// Size of the page (viewport) a session measures against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageSize {
    width: i32,
    height: i32,
}

impl PageSize {
    pub fn new(width: i32, height: i32) -> Result<Self, GeometryError> {
        if width <= 0 || height <= 0 {
            return Err(GeometryError::EmptyPage { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

/// Axis-aligned bounding box in page pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rectangle {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rectangle {
    /// Create a rectangle from its top-left corner and size
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, GeometryError> {
        if width < 0 {
            return Err(GeometryError::NegativeWidth(width));
        }
        if height < 0 {
            return Err(GeometryError::NegativeHeight(height));
        }
        if x.checked_add(width).is_none() || y.checked_add(height).is_none() {
            return Err(GeometryError::EdgeOutOfRange {
                x: x.into(),
                y: y.into(),
                width: width.into(),
                height: height.into(),
            });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Create a rectangle spanning two opposite corners, in any order
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Self, GeometryError> {
        let x = x1.min(x2);
        let y = y1.min(y2);
        let width = (i64::from(x2) - i64::from(x1)).abs();
        let height = (i64::from(y2) - i64::from(y1)).abs();
        match (i32::try_from(width), i32::try_from(height)) {
            (Ok(width), Ok(height)) => Self::new(x, y, width, height),
            _ => Err(GeometryError::EdgeOutOfRange {
                x: x.into(),
                y: y.into(),
                width,
                height,
            }),
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn right_edge(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom_edge(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Distance from the right edge to the right border of the page
    pub fn right_offset(&self, page: PageSize) -> i32 {
        page.width.saturating_sub(self.right_edge())
    }

    /// Distance from the bottom edge to the bottom border of the page
    pub fn bottom_offset(&self, page: PageSize) -> i32 {
        page.height.saturating_sub(self.bottom_edge())
    }

    /// True iff the interiors intersect. Touching edges do not overlap.
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        !(self.right_edge() <= other.x
            || other.right_edge() <= self.x
            || self.bottom_edge() <= other.y
            || other.bottom_edge() <= self.y)
    }

    /// True iff `other` lies within `self`, edges included
    pub fn contains(&self, other: &Rectangle) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right_edge() <= self.right_edge()
            && other.bottom_edge() <= self.bottom_edge()
    }

    /// Grow the rectangle outwards by the given amount on each side.
    ///
    /// Negative amounts shrink it; the size never drops below zero.
    pub fn expanded(&self, top: i32, right: i32, bottom: i32, left: i32) -> Rectangle {
        Rectangle {
            x: self.x.saturating_sub(left),
            y: self.y.saturating_sub(top),
            width: self.width.saturating_add(left).saturating_add(right).max(0),
            height: self.height.saturating_add(top).saturating_add(bottom).max(0),
        }
    }

    pub fn has_equal_left_offset_as(&self, other: &Rectangle) -> bool {
        self.x == other.x
    }

    // Both offsets are taken against the same page, so comparing edges is enough.
    pub fn has_equal_right_offset_as(&self, other: &Rectangle) -> bool {
        self.right_edge() == other.right_edge()
    }

    pub fn has_equal_top_offset_as(&self, other: &Rectangle) -> bool {
        self.y == other.y
    }

    pub fn has_equal_bottom_offset_as(&self, other: &Rectangle) -> bool {
        self.bottom_edge() == other.bottom_edge()
    }

    pub fn has_equal_left_right_offset(&self, page: PageSize) -> bool {
        self.x == self.right_offset(page)
    }

    pub fn has_equal_top_bottom_offset(&self, page: PageSize) -> bool {
        self.y == self.bottom_offset(page)
    }

    pub fn has_same_width_as(&self, other: &Rectangle) -> bool {
        self.width == other.width
    }

    pub fn has_same_height_as(&self, other: &Rectangle) -> bool {
        self.height == other.height
    }

    pub fn has_same_size_as(&self, other: &Rectangle) -> bool {
        self.has_same_width_as(other) && self.has_same_height_as(other)
    }

    pub fn has_min_width(&self, width: i32) -> bool {
        self.width >= width
    }

    pub fn has_max_width(&self, width: i32) -> bool {
        self.width <= width
    }

    pub fn has_min_height(&self, height: i32) -> bool {
        self.height >= height
    }

    pub fn has_max_height(&self, height: i32) -> bool {
        self.height <= height
    }
}
