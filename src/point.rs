// Copyright 2026 the Arcbound Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D point.

use core::fmt;
use core::ops::Add;

use crate::vec2::Vec2;

/// A 2D point.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

impl Point {
    /// The point (0, 0).
    pub const ZERO: Point = Point::new(0., 0.);

    /// Create a new `Point` with the provided `x` and `y` coordinates.
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Determine the midpoint of two points.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcbound::Point;
    /// let mid = Point::new(-1.0, 0.0).midpoint(Point::new(0.0, -1.0));
    /// assert_eq!(mid, Point::new(-0.5, -0.5));
    /// ```
    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new(0.5 * self.x + 0.5 * other.x, 0.5 * self.y + 0.5 * other.y)
    }

    /// Half the vector from `other` to `self`.
    #[inline]
    pub(crate) fn half_diff(self, other: Point) -> Vec2 {
        Vec2::new(0.5 * self.x - 0.5 * other.x, 0.5 * self.y - 0.5 * other.y)
    }

    /// Is this point finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    #[inline(always)]
    fn from(v: (f64, f64)) -> Point {
        Point { x: v.0, y: v.1 }
    }
}

impl Add<Vec2> for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Vec2) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

#[cfg(feature = "mint")]
impl From<Point> for mint::Point2<f64> {
    #[inline(always)]
    fn from(p: Point) -> mint::Point2<f64> {
        mint::Point2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Point2<f64>> for Point {
    #[inline(always)]
    fn from(p: mint::Point2<f64>) -> Point {
        Point { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_plus_vec() {
        assert_eq!(
            Point::new(1., 2.) + Vec2::new(10., -1.),
            Point::new(11., 1.)
        );
    }

    #[test]
    fn half_diff() {
        let v = Point::new(-1., 0.).half_diff(Point::new(0., -1.));
        assert_eq!(v, Vec2::new(-0.5, 0.5));
    }

    #[test]
    fn halves_do_not_overflow() {
        let a = Point::new(f64::MAX, -f64::MAX);
        let b = Point::new(-f64::MAX, f64::MAX);
        assert_eq!(a.midpoint(b), Point::ZERO);
        let v = a.half_diff(b);
        assert_eq!(v, Vec2::new(f64::MAX, -f64::MAX));
    }

    #[test]
    fn finite() {
        assert!(Point::ZERO.is_finite());
        assert!(!Point::new(f64::INFINITY, 0.).is_finite());
        assert!(!Point::new(0., f64::NAN).is_finite());
    }
}
