// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

//! Placing a step inside the canvas and persisting its pose.

use alloc::string::String;

use impressionist_pose::{AttributeSink, AttributeSource, Pose, css, write_step_pose};

use crate::style::ElementStyle;

/// A step element as seen by the editor: readable and writable attributes
/// plus an inline style.
pub trait StepElement: AttributeSource + AttributeSink {
    /// Applies `style` to the element.
    fn set_style(&mut self, style: &ElementStyle);
}

/// The transform that places a step at `pose` inside the canvas.
///
/// The step is centered on its anchor first, then translated, rotated in
/// its own axis order, and scaled. Unlike the canvas, nothing is inverted.
#[must_use]
pub fn step_transform(pose: &Pose) -> String {
    css::join([
        "translate(-50%,-50%)",
        css::translate(pose.translate).as_str(),
        css::rotate(&pose.rotate, false).as_str(),
        css::scale(pose.scale).as_str(),
    ])
}

/// Moves `step` to `pose` and writes the pose into its attributes.
pub fn update_step_position(pose: &Pose, step: &mut (impl StepElement + ?Sized)) {
    step.set_style(&ElementStyle::immediate(step_transform(pose)));
    write_step_pose(pose, step);
}
