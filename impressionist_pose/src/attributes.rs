// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

//! Reading and writing poses as markup attributes.
//!
//! A step keeps its pose in `data-*` attributes so that it survives a reload
//! of the presentation. Values written here parse back to the same pose
//! through [`to_number`] and [`to_order`].

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::axis::AxisOrder;
use crate::coerce::{to_number, to_order};
use crate::css::CssNumber;
use crate::pose::{Pose, Rotation, Vec3};
use crate::viewport::ViewportConfig;

/// Attribute names used on steps and on the presentation root.
pub mod names {
    /// Step translation along x.
    pub const X: &str = "data-x";
    /// Step translation along y.
    pub const Y: &str = "data-y";
    /// Step translation along z.
    pub const Z: &str = "data-z";
    /// Step rotation around x.
    pub const ROTATE_X: &str = "data-rotate-x";
    /// Step rotation around y.
    pub const ROTATE_Y: &str = "data-rotate-y";
    /// Step rotation around z.
    pub const ROTATE_Z: &str = "data-rotate-z";
    /// Legacy single-axis rotation, read as a fallback for [`ROTATE_Z`].
    pub const ROTATE: &str = "data-rotate";
    /// Step rotation order.
    pub const ROTATE_ORDER: &str = "data-rotate-order";
    /// Step scale.
    pub const SCALE: &str = "data-scale";

    /// Logical canvas width on the presentation root.
    pub const WIDTH: &str = "data-width";
    /// Logical canvas height on the presentation root.
    pub const HEIGHT: &str = "data-height";
    /// Maximum window scale on the presentation root.
    pub const MAX_SCALE: &str = "data-max-scale";
    /// Minimum window scale on the presentation root.
    pub const MIN_SCALE: &str = "data-min-scale";
    /// Perspective depth on the presentation root.
    pub const PERSPECTIVE: &str = "data-perspective";
}

/// Something attributes can be read from, such as a step element.
pub trait AttributeSource {
    /// Returns the raw value of attribute `name`, if present.
    fn attribute(&self, name: &str) -> Option<&str>;
}

/// Something attributes can be written to.
pub trait AttributeSink {
    /// Sets attribute `name` to `value`, replacing any previous value.
    fn set_attribute(&mut self, name: &str, value: &str);
}

impl AttributeSource for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl AttributeSink for BTreeMap<String, String> {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

impl AttributeSource for [(&str, &str)] {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }
}

fn number(src: &(impl AttributeSource + ?Sized), name: &str, fallback: f64) -> f64 {
    let raw = src.attribute(name);
    let value = to_number(raw, fallback);
    if let Some(raw) = raw.filter(|r| !r.trim().is_empty()) {
        if !raw.trim().parse::<f64>().is_ok_and(f64::is_finite) {
            tracing::warn!(attribute = name, value = raw, fallback, "malformed number attribute");
        }
    }
    value
}

/// Reads a step pose from its attributes.
///
/// Missing or malformed values fall back to the origin pose: 0 for
/// translations and rotations, 1 for scale, `xyz` for the order. The z
/// rotation falls back to the legacy `data-rotate` attribute first.
#[must_use]
pub fn read_step_pose(src: &(impl AttributeSource + ?Sized)) -> Pose {
    let legacy_rotate = number(src, names::ROTATE, 0.0);
    let order = src.attribute(names::ROTATE_ORDER);
    let rotate_order = to_order(order, AxisOrder::XYZ);
    if let Some(raw) = order {
        if raw.parse::<AxisOrder>().is_err() {
            tracing::warn!(value = raw, "malformed rotate order attribute, using xyz");
        }
    }
    Pose {
        translate: Vec3::new(
            number(src, names::X, 0.0),
            number(src, names::Y, 0.0),
            number(src, names::Z, 0.0),
        ),
        rotate: Rotation::new(
            number(src, names::ROTATE_X, 0.0),
            number(src, names::ROTATE_Y, 0.0),
            number(src, names::ROTATE_Z, legacy_rotate),
            rotate_order,
        ),
        scale: number(src, names::SCALE, 1.0),
    }
}

/// The attribute name/value pairs that persist `pose` on a step.
#[must_use]
pub fn step_attributes(pose: &Pose) -> Vec<(&'static str, String)> {
    let num = |v: f64| CssNumber(v).to_string();
    alloc::vec![
        (names::X, num(pose.translate.x)),
        (names::Y, num(pose.translate.y)),
        (names::Z, num(pose.translate.z)),
        (names::ROTATE_X, num(pose.rotate.angles.x)),
        (names::ROTATE_Y, num(pose.rotate.angles.y)),
        (names::ROTATE_Z, num(pose.rotate.angles.z)),
        (names::ROTATE_ORDER, pose.rotate.order.to_string()),
        (names::SCALE, num(pose.scale)),
    ]
}

/// Writes `pose` onto a step's attributes.
pub fn write_step_pose(pose: &Pose, sink: &mut (impl AttributeSink + ?Sized)) {
    for (name, value) in step_attributes(pose) {
        sink.set_attribute(name, &value);
    }
}

/// Reads the viewport configuration from the presentation root's attributes.
#[must_use]
pub fn read_viewport_config(src: &(impl AttributeSource + ?Sized)) -> ViewportConfig {
    let d = ViewportConfig::DEFAULT;
    ViewportConfig {
        width: number(src, names::WIDTH, d.width),
        height: number(src, names::HEIGHT, d.height),
        max_scale: number(src, names::MAX_SCALE, d.max_scale),
        min_scale: number(src, names::MIN_SCALE, d.min_scale),
        perspective: number(src, names::PERSPECTIVE, d.perspective),
    }
}
