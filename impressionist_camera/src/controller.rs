// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

//! The drag state machine.
//!
//! The controller is [`DragState::Idle`] until a control is pressed, then
//! [`DragState::Dragging`] until the pointer is released or leaves the
//! document. Pointer events only update the sessions. The camera moves on
//! [`DragController::tick`], which the host calls every
//! [`DragTuning::tick_interval`] for as long as the controller is dragging.

use impressionist_pose::{Pose, to_camera_frame};
use kurbo::Point;

use crate::axis_lock::{AxisLocks, adapt_order};
use crate::drag::{DragControl, DragDelta, DragSession, DragTuning};
use crate::patch::PosePatch;

/// Sessions of the controls currently held, one slot per [`DragControl`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragSessions([Option<DragSession>; 3]);

impl DragSessions {
    /// The session of `control`, if it is held.
    #[must_use]
    pub fn get(&self, control: DragControl) -> Option<&DragSession> {
        self.0[control.index()].as_ref()
    }

    /// Iterates the active sessions.
    pub fn iter(&self) -> impl Iterator<Item = &DragSession> {
        self.0.iter().flatten()
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut DragSession> {
        self.0.iter_mut().flatten()
    }

    fn insert(&mut self, session: DragSession) {
        self.0[session.control().index()] = Some(session);
    }
}

/// Whether a drag is in progress.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum DragState {
    /// No control is held.
    #[default]
    Idle,
    /// At least one control is held.
    Dragging(DragSessions),
}

/// Turns pointer input on the camera controls into pose patches.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns `true` while any control is held.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// A control was pressed at `at`.
    ///
    /// Pressing a control that is already held restarts its session. Returns
    /// `true` if this left [`DragState::Idle`], i.e. the host has to start
    /// ticking.
    pub fn pointer_down(&mut self, control: DragControl, at: Point) -> bool {
        tracing::debug!(%control, x = at.x, y = at.y, "drag started");
        let session = DragSession::start(control, at);
        if let DragState::Dragging(sessions) = &mut self.state {
            sessions.insert(session);
            return false;
        }
        let mut sessions = DragSessions::default();
        sessions.insert(session);
        self.state = DragState::Dragging(sessions);
        true
    }

    /// The pointer moved to `at`; every held control follows it.
    pub fn pointer_move(&mut self, at: Point) {
        if let DragState::Dragging(sessions) = &mut self.state {
            for session in sessions.iter_mut() {
                session.move_to(at);
            }
        }
    }

    /// The pointer was released; all sessions end.
    pub fn pointer_up(&mut self) {
        self.stop("released");
    }

    /// The pointer left the document; all sessions end.
    pub fn pointer_leave(&mut self) {
        self.stop("left");
    }

    fn stop(&mut self, reason: &'static str) {
        if self.is_active() {
            tracing::debug!(reason, "drag ended");
        }
        self.state = DragState::Idle;
    }

    /// Combined snapped delta of all held controls, or `None` when idle.
    pub fn delta(&mut self, tuning: &DragTuning) -> Option<DragDelta> {
        let DragState::Dragging(sessions) = &mut self.state else {
            return None;
        };
        Some(
            sessions
                .iter_mut()
                .fold(DragDelta::ZERO, |acc, s| acc + s.delta(tuning.dead_zone)),
        )
    }

    /// One step of the drag loop.
    ///
    /// Returns the patch that moves `camera` by the current drag, or `None`
    /// when idle, in which case the host stops ticking.
    pub fn tick(
        &mut self,
        camera: &Pose,
        locks: &mut AxisLocks,
        tuning: &DragTuning,
    ) -> Option<PosePatch> {
        let delta = self.delta(tuning)?;
        let patch = drag_patch(camera, &delta, locks, tuning);
        tracing::trace!(?patch, "drag tick");
        Some(patch)
    }
}

/// The pose values `pose` moves to for `delta`, which may be the camera or a
/// step carried along with it.
///
/// Translation is re-expressed in the pose's frame and multiplied by its
/// scale, so panning covers the same screen distance at any zoom. Rotation
/// is damped; pitch and roll are inverted so the canvas follows the
/// pointer. A scale change is floored at [`DragTuning::min_scale`]. The rotation
/// order is adapted to the axes being rotated (see [`adapt_order`]).
///
/// Positions and angles are rounded to whole numbers.
pub fn drag_patch(
    pose: &Pose,
    delta: &DragDelta,
    locks: &mut AxisLocks,
    tuning: &DragTuning,
) -> PosePatch {
    let translate = pose.translate + to_camera_frame(delta.translate, &pose.rotate) * pose.scale;
    let damped = |degrees: f64| degrees / tuning.rotation_damping;
    let rotating = delta.rotate.to_array().map(|v| v != 0.0);
    let order = adapt_order(&pose.rotate, rotating, locks);
    let angles = pose.rotate.angles;

    PosePatch {
        x: Some(translate.x),
        y: Some(translate.y),
        z: Some(translate.z),
        scale: (delta.scale != 0.0).then(|| (pose.scale + delta.scale).max(tuning.min_scale)),
        rotate_x: Some(angles.x - damped(delta.rotate.x)),
        rotate_y: Some(angles.y + damped(delta.rotate.y)),
        rotate_z: Some(angles.z - damped(delta.rotate.z)),
        order: Some(order),
    }
    .rounded()
}
