// Copyright 2026 the Arcbound Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// An axis in the plane.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// Both axes, x first.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}
