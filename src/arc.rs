// Copyright 2026 the Arcbound Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An ellipse arc in center form.

use core::f64::consts::PI;

use arrayvec::ArrayVec;

use crate::vec2::Vec2;
use crate::{Axis, Point};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The maximum number of stationary angles [`Arc::extrema`] reports for one axis.
pub const MAX_EXTREMA: usize = 7;

/// Periodic repetitions of a stationary angle tried against the sweep.
///
/// The representative angle lies in `[-π/2, π/2]` and repeats every π. A
/// start angle in `[-π, π]` plus a sweep of at most 2π in magnitude keeps
/// the arc inside `(-3π, 3π)`, which shifts of up to 3π cover.
const PERIOD_OFFSETS: [f64; MAX_EXTREMA] = [
    -3.0 * PI,
    -2.0 * PI,
    -PI,
    0.0,
    PI,
    2.0 * PI,
    3.0 * PI,
];

/// A single elliptical arc segment, in center parameterization.
///
/// The point at angle `θ` is the center plus `(rx·cos θ, ry·sin θ)`
/// rotated by `x_rotation`. The arc runs from `start_angle` to
/// `start_angle + sweep_angle`; a positive sweep increases the angle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc {
    /// The arc's centre point.
    pub center: Point,
    /// The radius along the ellipse's own x axis, before rotation.
    pub rx: f64,
    /// The radius along the ellipse's own y axis, before rotation.
    pub ry: f64,
    /// How much the ellipse is rotated, in radians.
    pub x_rotation: f64,
    /// The start angle in radians.
    pub start_angle: f64,
    /// The signed angle between the start and end of the arc, in radians.
    pub sweep_angle: f64,
}

impl Arc {
    /// Create a new `Arc`.
    #[inline(always)]
    pub fn new(
        center: impl Into<Point>,
        rx: f64,
        ry: f64,
        start_angle: f64,
        sweep_angle: f64,
        x_rotation: f64,
    ) -> Self {
        Self {
            center: center.into(),
            rx,
            ry,
            x_rotation,
            start_angle,
            sweep_angle,
        }
    }

    /// The angle at which the arc ends, in radians.
    #[inline]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    /// Returns a copy of this `Arc` in the opposite direction.
    ///
    /// The new `Arc` will sweep towards the original `Arc`s
    /// start angle.
    #[must_use]
    #[inline]
    pub fn reversed(&self) -> Arc {
        Self {
            center: self.center,
            rx: self.rx,
            ry: self.ry,
            x_rotation: self.x_rotation,
            start_angle: self.end_angle(),
            sweep_angle: -self.sweep_angle,
        }
    }

    /// The point on the underlying ellipse at `angle`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arcbound::{Arc, Point};
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let arc = Arc::new((1.0, 1.0), 2.0, 1.0, 0.0, FRAC_PI_2, 0.0);
    /// let p = arc.point_at_angle(0.0);
    /// assert_eq!(p, Point::new(3.0, 1.0));
    /// ```
    #[inline]
    pub fn point_at_angle(&self, angle: f64) -> Point {
        self.center + sample_ellipse(self.rx, self.ry, self.x_rotation, angle)
    }

    /// The point where the arc starts.
    #[inline]
    pub fn start_point(&self) -> Point {
        self.point_at_angle(self.start_angle)
    }

    /// The point where the arc ends.
    #[inline]
    pub fn end_point(&self) -> Point {
        self.point_at_angle(self.end_angle())
    }

    /// Is this arc [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite()
            && self.rx.is_finite()
            && self.ry.is_finite()
            && self.x_rotation.is_finite()
            && self.start_angle.is_finite()
            && self.sweep_angle.is_finite()
    }

    /// The angles strictly inside the sweep where the coordinate along
    /// `axis` is stationary, in increasing order.
    ///
    /// These are the only places besides the endpoints where the arc can
    /// reach its extent along `axis`. The arc must have nonzero radii and
    /// sweep, as produced by [`Arc::from_svg_arc`].
    ///
    /// With `φ = x_rotation`, `x` is stationary where
    /// `tan θ = −(ry/rx)·tan φ` and `y` where `tan θ = (ry/rx)/tan φ`. When
    /// `tan φ` is zero the quotient is infinite and `atan` yields `±π/2`,
    /// which is the correct answer for an axis-aligned ellipse.
    pub fn extrema(&self, axis: Axis) -> ArrayVec<f64, MAX_EXTREMA> {
        let tan_phi = self.x_rotation.tan();
        let ratio = self.ry / self.rx;
        let base = match axis {
            Axis::Horizontal => (-ratio * tan_phi).atan(),
            Axis::Vertical => (ratio / tan_phi).atan(),
        };
        let mut result = ArrayVec::new();
        for offset in PERIOD_OFFSETS {
            let angle = base + offset;
            // Position along the sweep; the endpoints themselves are excluded.
            let t = (angle - self.start_angle) / self.sweep_angle;
            if t > 0.0 && t < 1.0 {
                result.push(angle);
            }
        }
        result
    }
}

/// The offset from the center of the point at `angle` on a rotated ellipse.
fn sample_ellipse(rx: f64, ry: f64, x_rotation: f64, angle: f64) -> Vec2 {
    let (angle_sin, angle_cos) = angle.sin_cos();
    let (phi_sin, phi_cos) = x_rotation.sin_cos();
    Vec2::new(rx * angle_cos, ry * angle_sin).rotate(phi_sin, phi_cos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn assert_near(p0: Point, p1: Point, epsilon: f64) {
        assert!(
            (p1.x - p0.x).hypot(p1.y - p0.y) < epsilon,
            "{:?} != {:?}",
            p0,
            p1
        );
    }

    #[test]
    fn reversed_arc() {
        let a = Arc::new((0., 0.), 1., 0.5, 0., PI, 0.);
        let f = a.reversed();

        // Most fields should be unchanged:
        assert_eq!(a.center, f.center);
        assert_eq!(a.rx, f.rx);
        assert_eq!(a.ry, f.ry);
        assert_eq!(a.x_rotation, f.x_rotation);

        // Sweep angle should be in reverse
        assert_eq!(a.sweep_angle, -f.sweep_angle);
        assert_eq!(f.start_angle, PI);

        // Reversing it again should result in the original arc
        assert_eq!(a, f.reversed());
    }

    #[test]
    fn endpoints_follow_angles() {
        let a = Arc::new((1., -1.), 1., 1., FRAC_PI_2, -FRAC_PI_2, 0.);
        assert_near(a.start_point(), Point::new(1., 0.), 1e-12);
        assert_near(a.end_point(), Point::new(2., -1.), 1e-12);
        assert_eq!(a.end_angle(), 0.);
    }

    #[test]
    fn rotated_sample() {
        // A quarter turn swaps the roles of the radii.
        let a = Arc::new((0., 0.), 2., 1., 0., PI, FRAC_PI_2);
        assert_near(a.point_at_angle(0.), Point::new(0., 2.), 1e-12);
        assert_near(a.point_at_angle(FRAC_PI_2), Point::new(-1., 0.), 1e-12);
    }

    #[test]
    fn circle_extrema() {
        let a = Arc::new((0., 0.), 1., 1., 0., 1.25 * PI, 0.);
        assert_eq!(a.extrema(Axis::Horizontal).as_slice(), &[PI]);
        assert_eq!(a.extrema(Axis::Vertical).as_slice(), &[FRAC_PI_2]);

        // Going the other way visits the other side.
        let b = Arc::new((0., 0.), 1., 1., 0., -1.25 * PI, 0.);
        assert_eq!(b.extrema(Axis::Horizontal).as_slice(), &[-PI]);
        assert_eq!(b.extrema(Axis::Vertical).as_slice(), &[-FRAC_PI_2]);
    }

    #[test]
    fn endpoints_are_not_extrema() {
        // Quarter arc from the top of the circle to its left side.
        let a = Arc::new((0., 0.), 1., 1., FRAC_PI_2, FRAC_PI_2, 0.);
        assert!(a.extrema(Axis::Horizontal).is_empty());
        assert!(a.extrema(Axis::Vertical).is_empty());
    }

    #[test]
    fn near_full_sweep_extrema() {
        let a = Arc::new((0., 0.), 3., 1., 0.1, 2. * PI - 0.2, FRAC_PI_4);
        let xs = a.extrema(Axis::Horizontal);
        let ys = a.extrema(Axis::Vertical);
        assert_eq!(xs.len(), 2);
        assert_eq!(ys.len(), 2);
        assert!((xs[1] - xs[0] - PI).abs() < 1e-12);
        assert!((ys[1] - ys[0] - PI).abs() < 1e-12);
    }

    #[test]
    fn extrema_past_five_half_turns() {
        // Ends near 9.2, beyond π/2 + 2π; the last x extremum is at 11π/4.
        let a = Arc::new((0., 0.), 1., 1., 3.0, 6.2, FRAC_PI_4);
        let xs = a.extrema(Axis::Horizontal);
        assert_eq!(xs.len(), 2);
        assert!((xs[1] - 11. * FRAC_PI_4).abs() < 1e-12);
        let ys = a.extrema(Axis::Vertical);
        assert_eq!(ys.len(), 2);
    }

    #[test]
    fn quarter_turn_extrema() {
        // tan(π/2) is huge but finite; the x extremum lands at -ry.
        let a = Arc::new((0., 0.), 2., 1., 0., PI, FRAC_PI_2);
        let xs = a.extrema(Axis::Horizontal);
        assert_eq!(xs.len(), 1);
        assert!((xs[0] - FRAC_PI_2).abs() < 1e-12);
        assert!((a.point_at_angle(xs[0]).x + 1.).abs() < 1e-12);
        // The y extremum sits on the start point, give or take rounding.
        let ys = a.extrema(Axis::Vertical);
        assert!(ys.iter().all(|th| th.abs() < 1e-12));
    }
}
