// Copyright 2026 the Arcbound Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG endpoint-form arcs, and their conversion to center form.

use core::f64::consts::PI;

use log::trace;

use crate::vec2::Vec2;
use crate::{Arc, Axis, Point, Rect};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

// Note: the conversion follows sections F.6.5 and F.6.6 of the SVG 1.1
// implementation notes; the comments below name the equations.

/// Which of the four candidate arcs an [`SvgArc`] selects.
///
/// Two endpoints and a pair of radii admit up to two ellipses, and each
/// ellipse splits into two arcs between the endpoints. The SVG flags pick
/// one of the four: `large-arc-flag` picks the arc spanning more than π,
/// `sweep-flag` picks the direction of increasing angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArcChoice {
    /// At most π, decreasing angle (`large-arc-flag = 0`, `sweep-flag = 0`).
    SmallNegative,
    /// At most π, increasing angle (`large-arc-flag = 0`, `sweep-flag = 1`).
    SmallPositive,
    /// More than π, decreasing angle (`large-arc-flag = 1`, `sweep-flag = 0`).
    LargeNegative,
    /// More than π, increasing angle (`large-arc-flag = 1`, `sweep-flag = 1`).
    LargePositive,
}

impl ArcChoice {
    /// The choice named by SVG's `large-arc-flag` and `sweep-flag`.
    #[inline]
    pub const fn from_flags(large_arc: bool, sweep: bool) -> Self {
        match (large_arc, sweep) {
            (false, false) => ArcChoice::SmallNegative,
            (false, true) => ArcChoice::SmallPositive,
            (true, false) => ArcChoice::LargeNegative,
            (true, true) => ArcChoice::LargePositive,
        }
    }

    /// SVG's `large-arc-flag`.
    #[inline]
    pub const fn large_arc(self) -> bool {
        matches!(self, ArcChoice::LargeNegative | ArcChoice::LargePositive)
    }

    /// SVG's `sweep-flag`.
    #[inline]
    pub const fn sweep(self) -> bool {
        matches!(self, ArcChoice::SmallPositive | ArcChoice::LargePositive)
    }

    /// Sign of the root that places the ellipse center.
    ///
    /// Negative exactly when the two flags agree.
    #[inline]
    const fn center_sign(self) -> f64 {
        match self {
            ArcChoice::SmallNegative | ArcChoice::LargePositive => -1.0,
            ArcChoice::SmallPositive | ArcChoice::LargeNegative => 1.0,
        }
    }
}

/// A single SVG arc segment, the parameters of a path `A` command.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SvgArc {
    /// The arc's start point.
    pub from: Point,
    /// The arc's end point.
    pub to: Point,
    /// The radius along the ellipse's own x axis. Negative values are
    /// taken by magnitude.
    pub rx: f64,
    /// The radius along the ellipse's own y axis. Negative values are
    /// taken by magnitude.
    pub ry: f64,
    /// How much the ellipse is rotated, in degrees.
    pub x_axis_rotation: f64,
    /// Does this arc sweep through more than π radians?
    pub large_arc: bool,
    /// Determines if the arc should begin moving at positive angles.
    pub sweep: bool,
}

impl SvgArc {
    /// Create a new `SvgArc` from the arguments of an SVG `A` command.
    #[inline]
    pub fn new(
        from: impl Into<Point>,
        to: impl Into<Point>,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
    ) -> Self {
        SvgArc {
            from: from.into(),
            to: to.into(),
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
        }
    }

    /// Returns a copy of this arc with the flags set from `choice`.
    #[must_use]
    #[inline]
    pub fn with_choice(self, choice: ArcChoice) -> Self {
        SvgArc {
            large_arc: choice.large_arc(),
            sweep: choice.sweep(),
            ..self
        }
    }

    /// The flags of this arc as an [`ArcChoice`].
    #[inline]
    pub fn choice(&self) -> ArcChoice {
        ArcChoice::from_flags(self.large_arc, self.sweep)
    }

    /// Checks that arc is actually a straight line.
    ///
    /// This is the case when either radius is zero, or when the endpoints
    /// coincide and the segment collapses to a point.
    #[inline]
    pub fn is_straight_line(&self) -> bool {
        self.rx == 0.0 || self.ry == 0.0 || self.from == self.to
    }

    /// The rotation in radians, reduced modulo π.
    ///
    /// An ellipse is symmetric under a half turn, so only the rotation
    /// modulo 180° matters. The result keeps the sign of
    /// [`x_axis_rotation`](Self::x_axis_rotation).
    #[inline]
    pub fn x_rotation_radians(&self) -> f64 {
        (self.x_axis_rotation % 180.0) / 180.0 * PI
    }

    /// Convert to center form. See [`convert_arc_params`].
    #[inline]
    pub fn to_arc(&self) -> Arc {
        convert_arc_params(self)
    }

    /// The tight bounding box of the traced arc. See [`arc_bound`].
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        arc_bound(self)
    }
}

impl Arc {
    /// Creates an `Arc` from a `SvgArc`.
    ///
    /// Returns `None` if `arc` is actually a straight line, or if the chord
    /// is too short or too long to measure against the radii in `f64`.
    /// Radii that are too small to connect the endpoints are scaled up
    /// uniformly until they just do.
    pub fn from_svg_arc(arc: &SvgArc) -> Option<Arc> {
        // Have to check this first, otherwise the chord has no direction.
        if arc.is_straight_line() {
            return None;
        }

        let mut rx = arc.rx.abs();
        let mut ry = arc.ry.abs();

        let x_rotation = arc.x_rotation_radians();
        let (sin_phi, cos_phi) = x_rotation.sin_cos();

        // F.6.5.1, measured in radii so that no coordinate is ever squared.
        let p = arc.from.half_diff(arc.to).rotate(-sin_phi, cos_phi);
        let p = Vec2::new(p.x / rx, p.y / ry);
        let half_chord = p.hypot();
        if half_chord == 0.0 || !half_chord.is_finite() {
            trace!("{:?} has no chord at the scale of its radii", arc);
            return None;
        }
        let dir = Vec2::new(p.x / half_chord, p.y / half_chord);

        // F.6.6.2
        if half_chord > 1.0 {
            trace!(
                "radii ({}, {}) cannot reach between {:?} and {:?}, scaling by {}",
                rx,
                ry,
                arc.from,
                arc.to,
                half_chord
            );
            rx *= half_chord;
            ry *= half_chord;
        }
        let h = half_chord.min(1.0);

        // F.6.5.2, with the signed center offset in radii along the chord normal.
        let k = arc.choice().center_sign() * ((1.0 - h) * (1.0 + h)).sqrt();
        let center_p = Vec2::new(k * rx * dir.y, -k * ry * dir.x);

        // F.6.5.3
        let center = arc.from.midpoint(arc.to) + center_p.rotate(sin_phi, cos_phi);

        // F.6.5.5
        let start_v = Vec2::new(h * dir.x - k * dir.y, h * dir.y + k * dir.x);
        let start_angle = Vec2::UNIT_X.signed_angle(start_v);

        // F.6.5.6. The endpoints lie symmetric about the center; the short
        // way round they are twice the angle subtended by the half chord.
        let short = 2.0 * h.atan2(k.abs());
        let magnitude = if arc.large_arc { 2.0 * PI - short } else { short };
        let sweep_angle = if arc.sweep { magnitude } else { -magnitude };
        debug_assert!(sweep_angle.abs() <= 2.0 * PI);

        Some(Arc {
            center,
            rx,
            ry,
            x_rotation,
            start_angle,
            sweep_angle,
        })
    }
}

/// Converts an endpoint-form arc into center form.
///
/// This never fails. When [`Arc::from_svg_arc`] gives `None`, as it does
/// whenever [`SvgArc::is_straight_line`] holds, the result is a
/// placeholder: the center is the midpoint of the endpoints, the radii are
/// returned as given, `start_angle` is `0` and `sweep_angle` is exactly `π`.
///
/// # Examples
///
/// ```
/// use arcbound::{convert_arc_params, SvgArc};
/// use std::f64::consts::FRAC_PI_2;
///
/// let arc = convert_arc_params(&SvgArc::new((-1.0, 0.0), (0.0, -1.0), 1.0, 1.0, 0.0, false, false));
/// assert!((arc.center.x + 1.0).abs() < 1e-9 && (arc.center.y + 1.0).abs() < 1e-9);
/// assert!((arc.start_angle - FRAC_PI_2).abs() < 1e-9);
/// assert!((arc.sweep_angle + FRAC_PI_2).abs() < 1e-9);
/// ```
pub fn convert_arc_params(arc: &SvgArc) -> Arc {
    match Arc::from_svg_arc(arc) {
        Some(center_arc) => center_arc,
        None => {
            trace!("{:?} degenerates to a line", arc);
            Arc {
                center: arc.from.midpoint(arc.to),
                rx: arc.rx,
                ry: arc.ry,
                x_rotation: arc.x_rotation_radians(),
                start_angle: 0.0,
                sweep_angle: PI,
            }
        }
    }
}

/// The tight axis-aligned bounding box of an arc.
///
/// The box covers the whole traced curve, not only its endpoints. For a
/// straight line it is the box of the two endpoints.
///
/// # Examples
///
/// ```
/// use arcbound::{arc_bound, Rect, SvgArc};
///
/// // The upper half of a circle of radius 10 in a y-down space.
/// let rect = arc_bound(&SvgArc::new((0.0, 0.0), (20.0, 0.0), 10.0, 10.0, 0.0, false, true));
/// assert!((rect.top + 10.0).abs() < 1e-9);
/// assert_eq!((rect.left, rect.right, rect.bottom), (0.0, 20.0, 0.0));
/// ```
pub fn arc_bound(arc: &SvgArc) -> Rect {
    let mut bounds = Rect::from_points(arc.from, arc.to);
    let center_arc = match Arc::from_svg_arc(arc) {
        Some(center_arc) => center_arc,
        None => return bounds,
    };
    for axis in Axis::ALL {
        for angle in center_arc.extrema(axis) {
            bounds = bounds.union_pt(center_arc.point_at_angle(angle));
        }
    }
    bounds
}
