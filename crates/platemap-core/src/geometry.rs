//! Geometric primitives for plate layout and positioning.
//!
//! This module provides the geometric types used to place wells, labels and
//! frame shapes on a plate, and to size the output canvas.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`Insets`] - Margin values for four sides
//!
//! # Coordinate Systems
//!
//! Layout happens in *grid units*: one unit per well cell, with the origin at
//! the bottom-left and Y increasing upward, so row `A` has the largest Y.
//!
//! ```text
//!    +Y
//!     ▲
//!     │  A ● ● ●
//!     │  B ● ● ●
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! Renderers map grid units to pixel space, where the origin is the top-left
//! corner and Y increases downward (the SVG convention).

/// A 2D point.
///
/// # Examples
///
/// ```
/// # use platemap_core::geometry::Point;
/// let p = Point::new(1.4, 8.0);
/// assert_eq!(p.x(), 1.4);
/// assert_eq!(p.y(), 8.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds spanning two opposite corners, in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use platemap_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::new_from_corners(Point::new(4.0, 1.0), Point::new(1.0, 3.0));
    /// assert_eq!(bounds.min_x(), 1.0);
    /// assert_eq!(bounds.max_y(), 3.0);
    /// assert_eq!(bounds.width(), 3.0);
    /// ```
    pub fn new_from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Margins around the plot area, in pixels, with potentially different
/// values for each side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_dimensions() {
        let bounds = Bounds::new_from_corners(Point::new(12.78, 8.38), Point::new(1.02, 0.72));
        assert_eq!(bounds.min_x(), 1.02);
        assert_eq!(bounds.min_y(), 0.72);
        assert_eq!(bounds.max_x(), 12.78);
        assert_eq!(bounds.max_y(), 8.38);
    }

    #[test]
    fn test_insets_sums() {
        let insets = Insets::new(20.0, 20.0, 20.0, 60.0);
        assert_eq!(insets.horizontal_sum(), 80.0);
        assert_eq!(insets.vertical_sum(), 40.0);
        assert_eq!(Insets::uniform(5.0).horizontal_sum(), 10.0);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    /// Corner order must not matter.
    fn check_corners_are_symmetric(a: Point, b: Point) -> Result<(), TestCaseError> {
        let ab = Bounds::new_from_corners(a, b);
        let ba = Bounds::new_from_corners(b, a);
        prop_assert_eq!(ab, ba);
        prop_assert!(ab.width() >= 0.0);
        prop_assert!(ab.height() >= 0.0);
        Ok(())
    }

    proptest! {
        #[test]
        fn corners_are_symmetric(a in point_strategy(), b in point_strategy()) {
            check_corners_are_symmetric(a, b)?;
        }
    }
}
