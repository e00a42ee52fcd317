// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

use impressionist_pose::{Axis, AxisOrder, Pose};

use crate::coordinate::{Coordinate, CoordinateValue};

/// A partial pose: every field that is `Some` replaces the pose's value.
///
/// Missing fields leave the existing value alone, so a patch can carry
/// anything from a single typed coordinate to a full drag update.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PosePatch {
    /// New x translation.
    pub x: Option<f64>,
    /// New y translation.
    pub y: Option<f64>,
    /// New z translation.
    pub z: Option<f64>,
    /// New scale.
    pub scale: Option<f64>,
    /// New rotation around x.
    pub rotate_x: Option<f64>,
    /// New rotation around y.
    pub rotate_y: Option<f64>,
    /// New rotation around z.
    pub rotate_z: Option<f64>,
    /// New rotation order.
    pub order: Option<AxisOrder>,
}

impl PosePatch {
    /// A patch that sets every field to `pose`'s value.
    #[must_use]
    pub fn from_pose(pose: &Pose) -> Self {
        Self {
            x: Some(pose.translate.x),
            y: Some(pose.translate.y),
            z: Some(pose.translate.z),
            scale: Some(pose.scale),
            rotate_x: Some(pose.rotate.angles.x),
            rotate_y: Some(pose.rotate.angles.y),
            rotate_z: Some(pose.rotate.angles.z),
            order: Some(pose.rotate.order),
        }
    }

    /// A patch that sets a single coordinate.
    ///
    /// A number given for [`Coordinate::Order`] or an order given for a
    /// numeric coordinate produces an empty patch.
    #[must_use]
    pub fn single(coordinate: Coordinate, value: CoordinateValue) -> Self {
        let mut patch = Self::default();
        match (coordinate, value) {
            (Coordinate::Translate(axis), CoordinateValue::Number(v)) => {
                *patch.translate_mut(axis) = Some(v);
            }
            (Coordinate::Rotate(axis), CoordinateValue::Number(v)) => {
                *patch.rotate_mut(axis) = Some(v);
            }
            (Coordinate::Scale, CoordinateValue::Number(v)) => patch.scale = Some(v),
            (Coordinate::Order, CoordinateValue::Order(order)) => patch.order = Some(order),
            _ => {}
        }
        patch
    }

    /// The translation set along `axis`, if any.
    #[must_use]
    pub fn translate(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// The rotation set around `axis`, if any.
    #[must_use]
    pub fn rotate(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.rotate_x,
            Axis::Y => self.rotate_y,
            Axis::Z => self.rotate_z,
        }
    }

    fn translate_mut(&mut self, axis: Axis) -> &mut Option<f64> {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    fn rotate_mut(&mut self, axis: Axis) -> &mut Option<f64> {
        match axis {
            Axis::X => &mut self.rotate_x,
            Axis::Y => &mut self.rotate_y,
            Axis::Z => &mut self.rotate_z,
        }
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Writes the set fields into `pose`, returning `true` if anything changed.
    pub fn apply_to(&self, pose: &mut Pose) -> bool {
        let before = *pose;
        for axis in Axis::ALL {
            if let Some(v) = self.translate(axis) {
                pose.translate.set(axis, v);
            }
            if let Some(v) = self.rotate(axis) {
                pose.rotate.angles.set(axis, v);
            }
        }
        if let Some(scale) = self.scale {
            pose.scale = scale;
        }
        if let Some(order) = self.order {
            pose.rotate.order = order;
        }
        *pose != before
    }

    /// Rounds the translation and rotation fields to whole numbers.
    #[must_use]
    pub fn rounded(mut self) -> Self {
        for field in [
            &mut self.x,
            &mut self.y,
            &mut self.z,
            &mut self.rotate_x,
            &mut self.rotate_y,
            &mut self.rotate_z,
        ] {
            *field = field.map(round);
        }
        self
    }
}

/// Rounds to the nearest whole number, halves towards positive infinity.
pub(crate) fn round(v: f64) -> f64 {
    #[cfg(not(feature = "std"))]
    use kurbo::common::FloatFuncs as _;

    (v + 0.5).floor()
}
