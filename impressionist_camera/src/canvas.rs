// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

//! Placing the canvas for a camera pose.
//!
//! The presentation has two nested elements: the root carries perspective
//! and the overall scale, the canvas inside it carries rotation and
//! translation. Both are driven by the inverse of the camera pose.

use core::time::Duration;

use impressionist_pose::{Pose, ViewportConfig, css};
use kurbo::Size;

use crate::style::ElementStyle;

/// Timing for an animated move of the canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasTransition {
    /// Total transition duration.
    pub duration: Duration,
    /// Canvas scale of the state being left, as reported by
    /// [`CanvasStyles::canvas_scale`].
    pub previous_scale: f64,
}

/// Styles for the root and canvas elements.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasStyles {
    /// Perspective and scale, for the root element.
    pub root: ElementStyle,
    /// Rotation and translation, for the canvas element.
    pub canvas: ElementStyle,
    /// Canvas scale before window fitting, i.e. `1 / camera.scale`.
    pub canvas_scale: f64,
    /// Window-fit factor that was multiplied into the root scale.
    pub window_scale: f64,
}

/// The pose the canvas must take so that the camera sees it from `camera`.
///
/// Translation and rotation are negated (the order is kept) and the scale is
/// the reciprocal of the camera's.
#[must_use]
pub fn canvas_target(camera: &Pose) -> Pose {
    Pose {
        translate: -camera.translate,
        rotate: camera.rotate.negated(),
        scale: 1.0 / camera.scale,
    }
}

/// Computes the root and canvas styles for `camera`.
///
/// The root scale is the canvas scale times the window-fit scale, and the
/// perspective is divided by that scale so perceived depth stays constant
/// across zoom levels. The canvas applies the rotation in reverse order
/// because it undoes the camera's rotation.
///
/// With a `transition`, half its duration becomes a delay: zooming in delays
/// the root (scale) transition, zooming out delays the canvas
/// (rotate/translate) transition. There is no delay when the scale does not
/// change.
#[must_use]
pub fn canvas_styles(
    camera: &Pose,
    config: &ViewportConfig,
    viewport: Size,
    transition: Option<CanvasTransition>,
) -> CanvasStyles {
    let target = canvas_target(camera);
    let window_scale = config.window_scale(viewport);
    let target_scale = target.scale * window_scale;

    let root_transform = css::join([
        css::perspective(config.perspective / target_scale).as_str(),
        css::scale(target_scale).as_str(),
    ]);
    let canvas_transform = css::join([
        css::rotate(&target.rotate, true).as_str(),
        css::translate(target.translate).as_str(),
    ]);

    let (root, canvas) = match transition {
        None => (
            ElementStyle::immediate(root_transform),
            ElementStyle::immediate(canvas_transform),
        ),
        Some(transition) => {
            let zoom_in = target.scale >= transition.previous_scale;
            let delay = if target.scale == transition.previous_scale {
                Duration::ZERO
            } else {
                transition.duration / 2
            };
            (
                ElementStyle {
                    transform: root_transform,
                    transition_duration: transition.duration,
                    transition_delay: if zoom_in { delay } else { Duration::ZERO },
                },
                ElementStyle {
                    transform: canvas_transform,
                    transition_duration: transition.duration,
                    transition_delay: if zoom_in { Duration::ZERO } else { delay },
                },
            )
        }
    };

    CanvasStyles {
        root,
        canvas,
        canvas_scale: target.scale,
        window_scale,
    }
}
