// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

//! Rotation matrices and the camera reference frame.
//!
//! Matrices follow CSS conventions: `rotateX(a) rotateY(b)` is the product
//! `Rx(a) * Ry(b)`, applied to column vectors, with angles in degrees.

use core::ops::Mul;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::axis::Axis;
use crate::pose::{Rotation, Vec3};

/// A 3x3 row-major matrix.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix3(pub [[f64; 3]; 3]);

impl Matrix3 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// The matrix of a single `rotateX/Y/Z(degrees)` CSS function.
    #[must_use]
    pub fn rotation(axis: Axis, degrees: f64) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        match axis {
            Axis::X => Self([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]]),
            Axis::Y => Self([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]]),
            Axis::Z => Self([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]]),
        }
    }

    /// Multiplies this matrix with a column vector.
    #[must_use]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        let v = v.to_array();
        let mut out = [0.0; 3];
        for (i, row) in self.0.iter().enumerate() {
            out[i] = row[0] * v[0] + row[1] * v[1] + row[2] * v[2];
        }
        Vec3::from_array(out)
    }

    /// Returns `true` if every entry is within `tolerance` of `other`'s.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.0[i][k] * rhs.0[k][j]).sum();
            }
        }
        Self(out)
    }
}

impl Rotation {
    /// The matrix equivalent of [`css::rotate`](crate::css::rotate) for the same arguments.
    #[must_use]
    pub fn matrix(&self, revert: bool) -> Matrix3 {
        self.order
            .iter(revert)
            .fold(Matrix3::IDENTITY, |m, axis| {
                m * Matrix3::rotation(axis, self.angle(axis))
            })
    }
}

/// Rotates `v` around a single axis by `degrees`.
#[must_use]
pub fn rotate_about(axis: Axis, degrees: f64, v: Vec3) -> Vec3 {
    Matrix3::rotation(axis, degrees).apply(v)
}

/// Re-expresses a screen-space translation delta in the camera's frame.
///
/// Rotations are applied from the last axis of the order to the first, each
/// by the camera's current angle for that axis. The result is the vector the
/// camera must move by so that a drag pans relative to what is on screen,
/// whatever the camera's orientation.
#[must_use]
pub fn to_camera_frame(delta: Vec3, rotation: &Rotation) -> Vec3 {
    rotation
        .order
        .iter(true)
        .fold(delta, |v, axis| rotate_about(axis, rotation.angle(axis), v))
}
