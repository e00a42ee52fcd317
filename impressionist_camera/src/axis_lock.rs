// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

//! Adapting the rotation order to the axis being dragged.
//!
//! Rotating around an axis that is applied last always looks like turning
//! the view around that axis on screen. So when a drag starts rotating an
//! axis that is still (nearly) at zero, that axis is moved to the end of the
//! order first. Axes that already hold a real angle are left where they are:
//! moving them would make the whole view jump.
//!
//! Each axis is adapted at most once until the locks are cleared, so a long
//! drag that carries the angle past the threshold does not reshuffle the
//! order mid-gesture.

use impressionist_pose::{Axis, AxisOrder, Rotation};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

bitflags::bitflags! {
    /// Axes whose position in the rotation order has been settled.
    ///
    /// Cleared when a step is entered and when the order is edited by hand.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct AxisLocks: u8 {
        /// Rotation around x.
        const X = 0b0000_0001;
        /// Rotation around y.
        const Y = 0b0000_0010;
        /// Rotation around z.
        const Z = 0b0000_0100;
    }
}

impl AxisLocks {
    /// The flag for a single axis.
    #[must_use]
    pub const fn of(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::X,
            Axis::Y => Self::Y,
            Axis::Z => Self::Z,
        }
    }
}

/// Angles below this many degrees count as "not rotated yet".
pub const SETTLED_ANGLE: f64 = 1.0;

/// Returns the order to use while the axes set in `rotating` are being
/// dragged, and locks those axes.
///
/// `current` is the rotation before the drag delta is applied.
pub fn adapt_order(current: &Rotation, rotating: [bool; 3], locks: &mut AxisLocks) -> AxisOrder {
    let mut order = current.order;
    for axis in Axis::ALL {
        if !rotating[axis.index()] {
            continue;
        }
        let lock = AxisLocks::of(axis);
        if !locks.contains(lock) && current.angle(axis).abs() < SETTLED_ANGLE {
            let adapted = order.with_last(axis);
            if adapted != order {
                tracing::debug!(%axis, from = %order, to = %adapted, "rotation order adapted");
            }
            order = adapted;
        }
        locks.insert(lock);
    }
    order
}
