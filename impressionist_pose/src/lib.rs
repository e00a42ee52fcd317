// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=impressionist_pose --heading-base-level=0

//! Impressionist Pose: camera and step poses for CSS3 3D presentations.
//!
//! A presentation is a canvas of absolutely positioned steps (slides), each
//! placed in 3D with a translation, a rotation around x/y/z and a scale. A
//! camera looks at that canvas from a pose of its own. This crate holds the
//! headless pieces of that model:
//! - [`Pose`], [`Rotation`] and [`Vec3`], with an explicit [`AxisOrder`] for
//!   composing rotations.
//! - Lenient coercion of markup strings ([`to_number`], [`to_order`]).
//! - CSS transform-function strings ([`css`]).
//! - Window fitting ([`ViewportConfig::window_scale`]).
//! - Rotation matrices and the camera reference frame ([`frame`]).
//! - Reading and writing step poses as `data-*` attributes ([`attributes`]).
//!
//! It does **not** own a document or talk to a browser. Callers hand it
//! attribute values and apply the strings it produces.
//!
//! ## Minimal example
//!
//! ```rust
//! use impressionist_pose::{css, Pose, Rotation, Vec3};
//!
//! let pose = Pose {
//!     translate: Vec3::new(1000.0, 0.0, 0.0),
//!     rotate: Rotation::new(0.0, 0.0, 90.0, "zyx".parse().unwrap()),
//!     scale: 2.0,
//! };
//!
//! let transform = css::join([
//!     css::translate(pose.translate).as_str(),
//!     css::rotate(&pose.rotate, false).as_str(),
//!     css::scale(pose.scale).as_str(),
//! ]);
//! assert_eq!(
//!     transform,
//!     "translate3d(1000px,0px,0px) rotateZ(90deg) rotateY(0deg) rotateX(0deg) scale(2)"
//! );
//! ```
//!
//! ## Rotation order
//!
//! Rotations do not commute. The same angles composed as `xyz` and as `zyx`
//! put a step in different places, so the order is part of the pose and is
//! encoded letter by letter. [`Rotation::matrix`] evaluates the encoded
//! string numerically, which is handy for checking that a camera and its
//! inverse cancel:
//!
//! ```rust
//! use impressionist_pose::{frame::Matrix3, Rotation};
//!
//! let camera = Rotation::new(20.0, -35.0, 80.0, "yzx".parse().unwrap());
//! let canvas = camera.negated();
//! let both = camera.matrix(false) * canvas.matrix(true);
//! assert!(both.approx_eq(&Matrix3::IDENTITY, 1e-9));
//! ```
//!
//! ## Features
//!
//! - `std` (default): use the standard library for float math.
//! - `libm`: use `libm` through Kurbo for float math in `no_std` builds.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod attributes;
mod axis;
mod coerce;
pub mod css;
pub mod frame;
mod pose;
mod viewport;

pub use attributes::{
    AttributeSink, AttributeSource, read_step_pose, read_viewport_config, step_attributes,
    write_step_pose,
};
pub use axis::{Axis, AxisOrder, ParseOrderError};
pub use coerce::{to_number, to_order};
pub use frame::{Matrix3, to_camera_frame};
pub use pose::{Pose, Rotation, Vec3};
pub use viewport::{ViewportConfig, compute_window_scale};
