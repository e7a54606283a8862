// Copyright 2026 the Arcbound Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elliptical arcs as written in SVG paths, in center form, with tight bounds.
//!
//! An SVG path `A` command describes an arc by its endpoints, two radii,
//! a rotation in degrees, and two flags. That is convenient to write but
//! awkward to compute with. This crate converts such an [`SvgArc`] into
//! the equivalent center-parameterized [`Arc`] (center, radii, rotation,
//! start angle and signed sweep), following the SVG implementation notes,
//! and computes the tight axis-aligned bounding [`Rect`] of the traced arc.
//!
//! Both operations are pure and infallible. Zero radii and coincident
//! endpoints degrade to a straight line, and radii too small to reach
//! between the endpoints are scaled up, as SVG renderers do.
//!
//! # Examples
//!
//! ```
//! use arcbound::{arc_bound, convert_arc_params, Point, Rect, SvgArc};
//! use std::f64::consts::PI;
//!
//! // A large arc of a circle of radius 10 through (0, 0) and (10, 0).
//! let svg = SvgArc::new((0.0, 0.0), (10.0, 0.0), 10.0, 10.0, 0.0, true, true);
//!
//! let arc = convert_arc_params(&svg);
//! assert!((arc.sweep_angle - 5.0 * PI / 3.0).abs() < 1e-9);
//! assert!((arc.end_point().x - 10.0).abs() < 1e-9);
//!
//! // The bound reaches past the chord, out to the far side of the circle.
//! let rect = arc_bound(&svg);
//! assert!((rect.left + 5.0).abs() < 1e-9);
//! assert!((rect.right - 15.0).abs() < 1e-9);
//! assert!(rect.contains(Point::new(5.0, -18.0)));
//! ```
//!
//! # Feature Flags
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//!   However, note that the `libm` crate is not as efficient as the standard library.
//! - `mint`: Enable `From`/`Into` conversion of [`Point`] and [mint][] types, enabling
//!   interoperability with other graphics libraries.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the value types.
//! - `schemars`: Add best-effort support for using the value types in JSON schemas using [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! Diagnostics go through the [log][] facade at `trace` level; the crate
//! never installs a logger.
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars
//! [log]: https://docs.rs/log

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(clippy::many_single_char_names)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
// Feel free to send a PR that solves one or more of these.
#![allow(
    clippy::exhaustive_enums,
    clippy::missing_assert_message,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("arcbound requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

// Only the benches use criterion.
#[cfg(test)]
use criterion as _;

mod arc;
mod axis;
pub mod common;
mod point;
mod rect;
mod svg;
mod vec2;

pub use crate::arc::{Arc, MAX_EXTREMA};
pub use crate::axis::Axis;
pub use crate::point::Point;
pub use crate::rect::Rect;
pub use crate::svg::{arc_bound, convert_arc_params, ArcChoice, SvgArc};
