// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

//! The editor-side camera: poses, drags and widget edits applied to a host stage.

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use impressionist_pose::{
    AttributeSource, Pose, ViewportConfig, read_step_pose, read_viewport_config, step_attributes,
};
use kurbo::{Point, Size};

use crate::axis_lock::AxisLocks;
use crate::canvas::{CanvasTransition, canvas_styles};
use crate::controller::{DragController, drag_patch};
use crate::coordinate::{Coordinate, CoordinateEdit, CoordinateValue};
use crate::drag::{DragControl, DragTuning};
use crate::patch::{PosePatch, round};
use crate::step::{StepElement, update_step_position};
use crate::store::{Applied, PoseEvent, PoseObserver, PoseStore, PoseTargets};
use crate::style::ElementStyle;

/// The presentation as the camera sees it.
///
/// Implemented by the host on top of its document: the root element, the
/// canvas inside it and the step that is currently active.
pub trait Stage {
    /// Applies `style` to the root element (perspective and scale).
    fn set_root_style(&mut self, style: &ElementStyle);
    /// Applies `style` to the canvas element (rotation and translation).
    fn set_canvas_style(&mut self, style: &ElementStyle);
    /// The active step, if the presentation has one.
    fn active_step(&mut self) -> Option<&mut dyn StepElement>;
}

/// Camera state of one editing session.
///
/// Owns the [`PoseStore`], the drag controller and the rotation-axis locks,
/// and applies every pose change to the [`Stage`] right away: the canvas is
/// re-rendered after each camera change and the active step is re-placed and
/// its attributes rewritten after each step change. Observers are notified
/// after that, so what they read is what is on screen.
#[derive(Debug)]
pub struct CameraSession {
    store: PoseStore,
    config: ViewportConfig,
    viewport: Size,
    tuning: DragTuning,
    controller: DragController,
    locks: AxisLocks,
    canvas_scale: f64,
}

impl CameraSession {
    /// Creates a session for a presentation designed for `config`, shown in
    /// a window of size `viewport`.
    #[must_use]
    pub fn new(config: ViewportConfig, viewport: Size) -> Self {
        Self {
            store: PoseStore::new(),
            config,
            viewport,
            tuning: DragTuning::DEFAULT,
            controller: DragController::new(),
            locks: AxisLocks::empty(),
            canvas_scale: 1.0,
        }
    }

    /// Creates a session configured from the presentation root's attributes.
    #[must_use]
    pub fn from_root(root: &(impl AttributeSource + ?Sized), viewport: Size) -> Self {
        Self::new(read_viewport_config(root), viewport)
    }

    /// Replaces the drag tuning.
    #[must_use]
    pub fn with_tuning(mut self, tuning: DragTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Snapshot of the camera pose, e.g. for the numeric widgets.
    #[must_use]
    pub fn camera(&self) -> Pose {
        self.store.camera()
    }

    /// Snapshot of the active step's pose.
    #[must_use]
    pub fn step(&self) -> Pose {
        self.store.step()
    }

    /// The viewport configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// The current window size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The drag tuning.
    #[must_use]
    pub fn tuning(&self) -> &DragTuning {
        &self.tuning
    }

    /// Axes whose place in the rotation order is settled.
    #[must_use]
    pub fn axis_locks(&self) -> AxisLocks {
        self.locks
    }

    /// Current patch targets.
    #[must_use]
    pub fn targets(&self) -> PoseTargets {
        self.store.targets()
    }

    /// Sets which poses subsequent patches apply to.
    pub fn set_targets(&mut self, targets: PoseTargets) {
        self.store.set_targets(targets);
    }

    /// Registers an observer for pose changes.
    pub fn subscribe(&mut self, observer: impl PoseObserver + 'static) {
        self.store.subscribe(observer);
    }

    /// A step became active.
    ///
    /// The host has already moved the canvas onto the step, so both poses
    /// are re-seeded from its attributes and nothing is rendered. The
    /// rotation-axis locks are cleared.
    pub fn enter_step(&mut self, stage: &mut (impl Stage + ?Sized)) {
        self.locks = AxisLocks::empty();
        self.reseed(stage);
    }

    /// The window was resized.
    ///
    /// The host re-places the canvas itself; once that has settled it calls
    /// [`resettle`](Self::resettle).
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Re-seeds both poses from the active step after the host re-placed the
    /// canvas, e.g. a moment after a resize.
    pub fn resettle(&mut self, stage: &mut (impl Stage + ?Sized)) {
        self.reseed(stage);
    }

    fn reseed(&mut self, stage: &mut (impl Stage + ?Sized)) {
        let Some(step) = stage.active_step() else {
            return;
        };
        let pose = read_step_pose(&*step);
        tracing::debug!(?pose, "poses seeded from active step");
        self.store.reset(pose);
        self.store.notify(&PoseEvent::StepEntered(pose));
    }

    /// Renders the canvas for the current camera pose.
    ///
    /// With a `transition` duration the move is animated from the canvas this
    /// session rendered last, the way step navigation animates it; otherwise
    /// it applies immediately.
    pub fn place_canvas(&mut self, stage: &mut (impl Stage + ?Sized), transition: Option<Duration>) {
        let transition = transition.map(|duration| CanvasTransition {
            duration,
            previous_scale: self.canvas_scale,
        });
        let styles = canvas_styles(&self.store.camera(), &self.config, self.viewport, transition);
        stage.set_root_style(&styles.root);
        stage.set_canvas_style(&styles.canvas);
        self.canvas_scale = styles.canvas_scale;
    }

    /// Applies `patch` to the targeted poses and brings the stage up to date.
    pub fn apply_patch(&mut self, patch: &PosePatch, stage: &mut (impl Stage + ?Sized)) -> Applied {
        let applied = self.store.apply(patch);
        self.present(applied, stage)
    }

    fn present(&mut self, applied: Applied, stage: &mut (impl Stage + ?Sized)) -> Applied {
        if applied.camera {
            self.place_canvas(stage, None);
        }
        let step = self.store.step();
        if applied.step {
            match stage.active_step() {
                Some(element) => update_step_position(&step, element),
                None => tracing::warn!("step pose changed without an active step"),
            }
        }
        if applied.camera {
            self.store.notify(&PoseEvent::CameraChanged(self.store.camera()));
        }
        if applied.step {
            self.store.notify(&PoseEvent::StepChanged(step));
        }
        applied
    }

    /// Applies a manual edit of one camera widget.
    ///
    /// Typed numbers fall back to 0 (1 for scale) when they do not parse,
    /// and a typed scale that is not positive keeps the current one; the buttons step to the next whole number, and scale never drops
    /// below 1. Order edits sanitize typed text and cycle the letters on the
    /// buttons. Any order edit clears the rotation-axis locks.
    pub fn edit_coordinate(
        &mut self,
        coordinate: Coordinate,
        edit: CoordinateEdit<'_>,
        stage: &mut (impl Stage + ?Sized),
    ) -> Applied {
        if coordinate == Coordinate::Order {
            self.locks = AxisLocks::empty();
        }
        let value = match (edit, coordinate.get(&self.store.camera())) {
            (CoordinateEdit::Input(text), _) => coordinate.parse_input(text),
            (CoordinateEdit::Decrement, CoordinateValue::Number(v)) => {
                let v = round(v - 1.0);
                Some(CoordinateValue::Number(if coordinate == Coordinate::Scale {
                    v.max(1.0)
                } else {
                    v
                }))
            }
            (CoordinateEdit::Increment, CoordinateValue::Number(v)) => {
                Some(CoordinateValue::Number(round(v + 1.0)))
            }
            (CoordinateEdit::Decrement, CoordinateValue::Order(order)) => {
                Some(CoordinateValue::Order(order.step_down()))
            }
            (CoordinateEdit::Increment, CoordinateValue::Order(order)) => {
                Some(CoordinateValue::Order(order.step_up()))
            }
        };
        match value {
            Some(value) => self.apply_patch(&PosePatch::single(coordinate, value), stage),
            None => Applied::default(),
        }
    }

    /// A camera control was pressed.
    ///
    /// Returns `true` if the host has to start calling [`tick`](Self::tick).
    pub fn pointer_down(&mut self, control: DragControl, at: Point) -> bool {
        self.controller.pointer_down(control, at)
    }

    /// The pointer moved.
    pub fn pointer_move(&mut self, at: Point) {
        self.controller.pointer_move(at);
    }

    /// The pointer was released.
    pub fn pointer_up(&mut self) {
        self.controller.pointer_up();
    }

    /// The pointer left the document.
    pub fn pointer_leave(&mut self) {
        self.controller.pointer_leave();
    }

    /// Returns `true` while a camera control is held.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.controller.is_active()
    }

    /// One step of the drag loop.
    ///
    /// Moves the camera by the current drag, and the step too when it is
    /// targeted. Each pose moves relative to its own values, in its own frame
    /// and with its own rotation order. Returns `true` if the host should
    /// call again after [`DragTuning::tick_interval`], `false` once the drag
    /// is over.
    pub fn tick(&mut self, stage: &mut (impl Stage + ?Sized)) -> bool {
        let Some(delta) = self.controller.delta(&self.tuning) else {
            return false;
        };
        if delta.is_zero() {
            return true;
        }
        let mut step_locks = self.locks;
        let camera = drag_patch(&self.store.camera(), &delta, &mut self.locks, &self.tuning);
        let step = self
            .store
            .targets()
            .includes_step()
            .then(|| drag_patch(&self.store.step(), &delta, &mut step_locks, &self.tuning));
        tracing::trace!(?camera, ?step, "drag tick");
        let applied = self.store.apply_each(&camera, step.as_ref());
        self.present(applied, stage);
        true
    }

    /// Attributes that place a new step where the camera is now.
    #[must_use]
    pub fn new_step_attributes(&self) -> Vec<(&'static str, String)> {
        step_attributes(&self.store.camera())
    }
}
