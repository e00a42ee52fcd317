// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

use core::ops::{Add, Mul, Neg, Sub};

use crate::axis::{Axis, AxisOrder};

/// A 3D vector in CSS pixel space (y grows downwards, z towards the viewer).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
    /// Depth component.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component along `axis`.
    #[must_use]
    pub const fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Sets the component along `axis`.
    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }

    /// Components as an `[x, y, z]` array.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Builds a vector from an `[x, y, z]` array.
    #[must_use]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Returns `true` if every component is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Per-axis rotation angles in degrees, plus the order they compose in.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rotation {
    /// Angles around x, y and z, in degrees.
    pub angles: Vec3,
    /// Composition order of the three rotations.
    pub order: AxisOrder,
}

impl Rotation {
    /// No rotation, `xyz` order.
    pub const IDENTITY: Self = Self {
        angles: Vec3::ZERO,
        order: AxisOrder::XYZ,
    };

    /// Creates a rotation from angles in degrees and an order.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, order: AxisOrder) -> Self {
        Self {
            angles: Vec3::new(x, y, z),
            order,
        }
    }

    /// Angle around `axis`, in degrees.
    #[must_use]
    pub const fn angle(&self, axis: Axis) -> f64 {
        self.angles.get(axis)
    }

    /// The same order with every angle negated.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            angles: -self.angles,
            order: self.order,
        }
    }
}

/// Placement of the camera or of one step: translation, rotation and scale.
///
/// The camera pose describes where the eye is; the canvas is moved by its
/// inverse. A step pose positions one slide directly inside the canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    /// Translation in pixels.
    pub translate: Vec3,
    /// Rotation in degrees with its axis order.
    pub rotate: Rotation,
    /// Uniform scale factor; positive.
    pub scale: f64,
}

impl Pose {
    /// The origin pose: no translation, no rotation, scale 1.
    pub const ORIGIN: Self = Self {
        translate: Vec3::ZERO,
        rotate: Rotation::IDENTITY,
        scale: 1.0,
    };
}

impl Default for Pose {
    fn default() -> Self {
        Self::ORIGIN
    }
}
