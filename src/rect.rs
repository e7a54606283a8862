// Copyright 2026 the Arcbound Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle.

use core::fmt;

use crate::Point;

/// An axis-aligned rectangle.
///
/// Every rectangle produced by this crate has `left <= right` and
/// `top <= bottom`. "Top" is the minimum y, which is the top edge in
/// y-down spaces such as SVG.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The minimum x coordinate.
    pub left: f64,
    /// The minimum y coordinate.
    pub top: f64,
    /// The maximum x coordinate.
    pub right: f64,
    /// The maximum y coordinate.
    pub bottom: f64,
}

impl Rect {
    /// A new rectangle from its edges.
    #[inline]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Rect {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// A new rectangle from two points.
    ///
    /// The result will have non-negative width and height.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcbound::{Point, Rect};
    /// let r = Rect::from_points(Point::new(-1.0, 0.0), Point::new(0.0, -1.0));
    /// assert_eq!(r, Rect::new(-1.0, -1.0, 0.0, 0.0));
    /// ```
    #[inline]
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> Rect {
        let p0 = p0.into();
        let p1 = p1.into();
        Rect {
            left: p0.x.min(p1.x),
            top: p0.y.min(p1.y),
            right: p0.x.max(p1.x),
            bottom: p0.y.max(p1.y),
        }
    }

    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Compute the union with one point.
    ///
    /// This method includes the perimeter of zero-area rectangles.
    #[inline]
    pub fn union_pt(&self, pt: Point) -> Rect {
        Rect::new(
            self.left.min(pt.x),
            self.top.min(pt.y),
            self.right.max(pt.x),
            self.bottom.max(pt.y),
        )
    }

    /// Returns `true` if `point` lies within `self`, edges included.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }

    /// Is this rectangle [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(
                f,
                "Rect {{ left: {:?}, top: {:?}, right: {:?}, bottom: {:?} }}",
                self.left, self.top, self.right, self.bottom
            )
        } else {
            write!(
                f,
                "Rect {{ x: {:?}..{:?}, y: {:?}..{:?} }}",
                self.left, self.right, self.top, self.bottom
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Point, Rect};

    #[test]
    fn from_points_orders_edges() {
        let r = Rect::from_points((5.0, -2.0), (1.0, 3.0));
        assert_eq!(r, Rect::new(1.0, -2.0, 5.0, 3.0));
        assert_eq!(r.width(), 4.0);
        assert_eq!(r.height(), 5.0);
    }

    #[test]
    fn union_pt_and_contains() {
        let r = Rect::new(0.0, 0.0, 1.0, 1.0).union_pt(Point::new(2.0, -1.0));
        assert_eq!(r, Rect::new(0.0, -1.0, 2.0, 1.0));
        assert!(r.contains(Point::new(2.0, -1.0)));
        assert!(!r.contains(Point::new(2.1, 0.0)));
        let r = r.union_pt(Point::ZERO).union_pt(Point::new(-3.0, 7.0));
        assert_eq!(r, Rect::new(-3.0, -1.0, 2.0, 7.0));
    }

    #[test]
    fn debug_formats() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(format!("{:?}", r), "Rect { x: 1.0..3.0, y: 2.0..4.0 }");
        assert!(format!("{:#?}", r).starts_with("Rect { left: 1.0"));
    }
}
