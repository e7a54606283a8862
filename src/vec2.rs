// Copyright 2026 the Arcbound Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple 2D vector, used for directions inside the arc math.

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A 2D vector.
///
/// Unlike [`Point`](crate::Point) this is a direction or offset, never a
/// position. It stays inside the crate.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub(crate) struct Vec2 {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl Vec2 {
    /// The positive x unit vector, the reference for start angles.
    pub(crate) const UNIT_X: Vec2 = Vec2::new(1., 0.);

    #[inline(always)]
    pub(crate) const fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    /// Dot product of two vectors.
    #[inline]
    pub(crate) fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product of two vectors.
    ///
    /// This is signed so that `(1, 0) × (0, 1) = 1`.
    #[inline]
    pub(crate) fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Magnitude of vector.
    #[inline]
    pub(crate) fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// The signed angle from `self` to `other`, in `[-π, π]`.
    ///
    /// The magnitude comes from the arccosine of the normalized dot product
    /// and the sign from the cross product; a zero cross product counts as
    /// positive, so exactly opposite vectors give `π`.
    #[inline]
    pub(crate) fn signed_angle(self, other: Vec2) -> f64 {
        let cos = self.dot(other) / (self.hypot() * other.hypot());
        // Rounding can push the ratio just past ±1.
        let magnitude = cos.clamp(-1.0, 1.0).acos();
        if self.cross(other) >= 0.0 {
            magnitude
        } else {
            -magnitude
        }
    }

    /// Rotate by the angle whose sine and cosine are given.
    ///
    /// Passing `-sin` rotates back into the frame the angle was applied to.
    #[inline]
    pub(crate) fn rotate(self, sin: f64, cos: f64) -> Vec2 {
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn cross_sign() {
        let v = Vec2::new(1., 0.).cross(Vec2::new(0., 1.));
        assert_eq!(v, 1.);
    }

    #[test]
    fn signed_angle_quadrants() {
        let x = Vec2::UNIT_X;
        assert_eq!(x.signed_angle(Vec2::new(0., 1.)), FRAC_PI_2);
        assert_eq!(x.signed_angle(Vec2::new(0., -1.)), -FRAC_PI_2);
        assert_eq!(x.signed_angle(Vec2::new(-1., 0.)), PI);
        assert_eq!(x.signed_angle(Vec2::new(3., 0.)), 0.);
        assert!((x.signed_angle(Vec2::new(1., -1.)) + FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn signed_angle_is_antisymmetric() {
        let a = Vec2::new(0.3, -2.0);
        let b = Vec2::new(-1.5, 0.7);
        assert!((a.signed_angle(b) + b.signed_angle(a)).abs() < 1e-12);
    }

    #[test]
    fn signed_angle_stays_in_range() {
        // Nearly parallel vectors whose normalized dot product rounds past 1.
        let a = Vec2::new(0.1, 0.2);
        let b = Vec2::new(0.1 * 3.0, 0.2 * 3.0);
        let th = a.signed_angle(b);
        assert!(!th.is_nan());
        assert!(th.abs() < 1e-6);
    }

    #[test]
    fn rotate_round_trip() {
        let (sin, cos) = (0.6, 0.8);
        let v = Vec2::new(2.0, -1.0);
        let back = v.rotate(sin, cos).rotate(-sin, cos);
        assert!((back.x - v.x).abs() < 1e-12);
        assert!((back.y - v.y).abs() < 1e-12);
        assert_eq!(Vec2::UNIT_X.rotate(1.0, 0.0), Vec2::new(0.0, 1.0));
    }
}
