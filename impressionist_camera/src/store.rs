// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

//! The live camera and step poses, and who gets told when they change.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use impressionist_pose::Pose;

use crate::patch::PosePatch;

/// Which poses a patch is applied to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PoseTargets {
    /// Move the camera only; the active step stays where it is.
    #[default]
    Camera,
    /// Move the camera and carry the active step along with it.
    CameraAndStep,
}

impl PoseTargets {
    /// Returns `true` if the step pose is a target.
    #[must_use]
    pub fn includes_step(self) -> bool {
        matches!(self, Self::CameraAndStep)
    }
}

/// A change to the live poses.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PoseEvent {
    /// Both poses were re-seeded from a step's attributes.
    StepEntered(Pose),
    /// The camera pose changed.
    CameraChanged(Pose),
    /// The step pose changed and was written back to the step.
    StepChanged(Pose),
}

/// Receives [`PoseEvent`]s, e.g. to refresh numeric widgets.
///
/// Any `FnMut(&PoseEvent)` closure is an observer.
pub trait PoseObserver {
    /// Called after the change has been applied and rendered.
    fn on_pose_event(&mut self, event: &PoseEvent);
}

impl<F: FnMut(&PoseEvent)> PoseObserver for F {
    fn on_pose_event(&mut self, event: &PoseEvent) {
        self(event);
    }
}

/// Which poses a patch actually changed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Applied {
    /// The camera pose changed.
    pub camera: bool,
    /// The step pose changed.
    pub step: bool,
}

/// Owner of the camera pose and the active step's pose.
///
/// The two are structurally identical and move independently unless the
/// [`PoseTargets`] lock them together.
#[derive(Default)]
pub struct PoseStore {
    camera: Pose,
    step: Pose,
    targets: PoseTargets,
    observers: Vec<Box<dyn PoseObserver>>,
}

impl fmt::Debug for PoseStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoseStore")
            .field("camera", &self.camera)
            .field("step", &self.step)
            .field("targets", &self.targets)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl PoseStore {
    /// Creates a store with both poses at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the camera pose.
    #[must_use]
    pub fn camera(&self) -> Pose {
        self.camera
    }

    /// Snapshot of the active step's pose.
    #[must_use]
    pub fn step(&self) -> Pose {
        self.step
    }

    /// Current patch targets.
    #[must_use]
    pub fn targets(&self) -> PoseTargets {
        self.targets
    }

    /// Sets which poses subsequent patches apply to.
    pub fn set_targets(&mut self, targets: PoseTargets) {
        self.targets = targets;
    }

    /// Replaces both poses, as when a step becomes active.
    pub fn reset(&mut self, pose: Pose) {
        self.camera = pose;
        self.step = pose;
    }

    /// Applies `patch` to the targeted poses.
    pub fn apply(&mut self, patch: &PosePatch) -> Applied {
        self.apply_each(patch, Some(patch))
    }

    /// Applies `camera` to the camera pose and `step` to the step pose.
    ///
    /// For patches computed relative to each pose, as a drag does. `step` is
    /// ignored unless the step is targeted.
    pub fn apply_each(&mut self, camera: &PosePatch, step: Option<&PosePatch>) -> Applied {
        Applied {
            camera: camera.apply_to(&mut self.camera),
            step: match step {
                Some(patch) if self.targets.includes_step() => patch.apply_to(&mut self.step),
                _ => false,
            },
        }
    }

    /// Registers an observer.
    pub fn subscribe(&mut self, observer: impl PoseObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Sends `event` to every observer, in subscription order.
    pub fn notify(&mut self, event: &PoseEvent) {
        for observer in &mut self.observers {
            observer.on_pose_event(event);
        }
    }
}
