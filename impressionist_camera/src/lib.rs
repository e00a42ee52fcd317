// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=impressionist_camera --heading-base-level=0

//! Impressionist Camera: the editing camera of a CSS3 3D presentation.
//!
//! While editing, the author looks at the canvas through a free camera
//! instead of jumping from step to step. This crate turns that camera into
//! CSS and keeps it in sync with the document:
//!
//! - [`canvas_styles`] renders a camera [`Pose`](impressionist_pose::Pose)
//!   as the root and canvas transforms, including the timing of animated moves.
//! - [`update_step_position`] places a step and writes its pose back into
//!   its attributes.
//! - [`drag`] and [`DragController`] turn the three drag controls (pan,
//!   zoom/roll, tilt) into [`PosePatch`]es, adapting the rotation order with
//!   [`adapt_order`] as they go.
//! - [`PoseStore`] holds the camera and step poses and tells
//!   [`PoseObserver`]s about changes.
//! - [`CameraSession`] wires all of that to a host [`Stage`].
//!
//! Nothing here owns a timer. A drag is a state machine that the host
//! advances by calling [`CameraSession::tick`] every
//! [`DragTuning::tick_interval`] for as long as it returns `true`.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use impressionist_camera::{
//!     CameraSession, DragControl, ElementStyle, Stage, StepElement,
//! };
//! use impressionist_pose::{AttributeSink, AttributeSource, ViewportConfig};
//! use kurbo::{Point, Size};
//!
//! #[derive(Default)]
//! struct Step(BTreeMap<String, String>);
//!
//! impl AttributeSource for Step {
//!     fn attribute(&self, name: &str) -> Option<&str> {
//!         self.0.attribute(name)
//!     }
//! }
//! impl AttributeSink for Step {
//!     fn set_attribute(&mut self, name: &str, value: &str) {
//!         self.0.set_attribute(name, value);
//!     }
//! }
//! impl StepElement for Step {
//!     fn set_style(&mut self, _: &ElementStyle) {}
//! }
//!
//! #[derive(Default)]
//! struct Document {
//!     canvas: String,
//!     step: Step,
//! }
//!
//! impl Stage for Document {
//!     fn set_root_style(&mut self, _: &ElementStyle) {}
//!     fn set_canvas_style(&mut self, style: &ElementStyle) {
//!         self.canvas = style.transform.clone();
//!     }
//!     fn active_step(&mut self) -> Option<&mut dyn StepElement> {
//!         Some(&mut self.step)
//!     }
//! }
//!
//! let mut doc = Document::default();
//! let mut camera = CameraSession::new(ViewportConfig::DEFAULT, Size::new(1024.0, 768.0));
//! camera.enter_step(&mut doc);
//!
//! // Drag the pan control 40px to the right and tick once.
//! assert!(camera.pointer_down(DragControl::Pan, Point::new(0.0, 0.0)));
//! camera.pointer_move(Point::new(40.0, 0.0));
//! assert!(camera.tick(&mut doc));
//! assert_eq!(camera.camera().translate.x, 40.0);
//! assert!(doc.canvas.ends_with("translate3d(-40px,0px,0px)"));
//!
//! // Releasing ends the loop.
//! camera.pointer_up();
//! assert!(!camera.tick(&mut doc));
//! ```
//!
//! ## Logging
//!
//! Drag sessions, order adaptation and step entry are reported through
//! [`tracing`](https://docs.rs/tracing) at `debug` level, every drag patch at
//! `trace`. No subscriber is installed.
//!
//! ## Features
//!
//! - `std` (default): use the standard library for float math.
//! - `libm`: use `libm` through Kurbo for float math in `no_std` builds.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod axis_lock;
mod canvas;
mod controller;
mod coordinate;
pub mod drag;
mod patch;
mod session;
mod step;
mod store;
mod style;

pub use axis_lock::{AxisLocks, SETTLED_ANGLE, adapt_order};
pub use canvas::{CanvasStyles, CanvasTransition, canvas_styles, canvas_target};
pub use controller::{DragController, DragSessions, DragState, drag_patch};
pub use coordinate::{Coordinate, CoordinateEdit, CoordinateValue, UnknownCoordinate};
pub use drag::{DragControl, DragDelta, DragSession, DragTuning};
pub use patch::PosePatch;
pub use session::{CameraSession, Stage};
pub use step::{StepElement, step_transform, update_step_position};
pub use store::{Applied, PoseEvent, PoseObserver, PoseStore, PoseTargets};
pub use style::ElementStyle;
