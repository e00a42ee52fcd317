// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

//! Drag sessions for the three camera controls.
//!
//! ## Usage
//!
//! 1) Start a session with [`DragSession::start`] when a control is pressed.
//! 2) Feed pointer moves to [`DragSession::move_to`].
//! 3) Every tick, read [`DragSession::delta`]: the offset from the start
//!    position with small components snapped to zero, mapped to the pose
//!    components the control drives.
//!
//! ```
//! use impressionist_camera::drag::{DragControl, DragSession};
//! use kurbo::Point;
//!
//! let mut tilt = DragSession::start(DragControl::Tilt, Point::new(100.0, 100.0));
//!
//! // Mostly downwards: rotate around x, and stay that way.
//! tilt.move_to(Point::new(103.0, 140.0));
//! let delta = tilt.delta(5.0);
//! assert_eq!((delta.rotate.x, delta.rotate.y), (40.0, 0.0));
//!
//! tilt.move_to(Point::new(200.0, 150.0));
//! let delta = tilt.delta(5.0);
//! assert_eq!((delta.rotate.x, delta.rotate.y), (50.0, 0.0));
//! ```

use core::fmt;
use core::ops::Add;
use core::time::Duration;

use impressionist_pose::Vec3;
use kurbo::{Point, Vec2};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// One of the drag handles of the camera toolbar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragControl {
    /// Pans along x (horizontal) and y (vertical).
    Pan,
    /// Moves along z (vertical) or rolls around z (horizontal), never both.
    ZoomRotate,
    /// Pitches around x (vertical) or yaws around y (horizontal), never both.
    Tilt,
}

impl DragControl {
    /// Every control.
    pub const ALL: [Self; 3] = [Self::Pan, Self::ZoomRotate, Self::Tilt];

    /// Short name, used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pan => "pan",
            Self::ZoomRotate => "zoom-rotate",
            Self::Tilt => "tilt",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Pan => 0,
            Self::ZoomRotate => 1,
            Self::Tilt => 2,
        }
    }

    /// Whether the two drag directions exclude each other for the session.
    #[must_use]
    pub const fn is_exclusive(self) -> bool {
        !matches!(self, Self::Pan)
    }
}

impl fmt::Display for DragControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interaction constants for camera drags.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragTuning {
    /// Offset components up to this many pixels are ignored.
    pub dead_zone: f64,
    /// Pixels of drag per degree of rotation.
    pub rotation_damping: f64,
    /// Lowest camera scale a drag may produce.
    pub min_scale: f64,
    /// Delay between two ticks while a drag is active.
    pub tick_interval: Duration,
}

impl DragTuning {
    /// The toolbar's stock tuning.
    pub const DEFAULT: Self = Self {
        dead_zone: 5.0,
        rotation_damping: 10.0,
        min_scale: 1.0,
        tick_interval: Duration::from_millis(100),
    };
}

impl Default for DragTuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Raw amounts a drag asks the camera to move by, in pixels.
///
/// Translation is still in screen space; rotation is undamped.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragDelta {
    /// Translation along x, y and z.
    pub translate: Vec3,
    /// Rotation around x, y and z.
    pub rotate: Vec3,
    /// Additive scale change.
    pub scale: f64,
}

impl DragDelta {
    /// No movement.
    pub const ZERO: Self = Self {
        translate: Vec3::ZERO,
        rotate: Vec3::ZERO,
        scale: 0.0,
    };

    /// Returns `true` if nothing moves.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.translate.is_zero() && self.rotate.is_zero() && self.scale == 0.0
    }
}

impl Add for DragDelta {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            translate: self.translate + rhs.translate,
            rotate: self.rotate + rhs.rotate,
            scale: self.scale + rhs.scale,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Direction {
    Vertical,
    Horizontal,
}

/// Pointer state of one control, live while its button is held.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    control: DragControl,
    start: Point,
    current: Point,
    direction: Option<Direction>,
}

impl DragSession {
    /// Starts a session for `control` with the pointer at `at`.
    #[must_use]
    pub fn start(control: DragControl, at: Point) -> Self {
        Self {
            control,
            start: at,
            current: at,
            direction: None,
        }
    }

    /// The control being dragged.
    #[must_use]
    pub fn control(&self) -> DragControl {
        self.control
    }

    /// Where the pointer went down.
    #[must_use]
    pub fn start_point(&self) -> Point {
        self.start
    }

    /// Last known pointer position.
    #[must_use]
    pub fn current_point(&self) -> Point {
        self.current
    }

    /// Records a pointer move.
    pub fn move_to(&mut self, at: Point) {
        self.current = at;
    }

    /// Offset from the start position, unfiltered.
    #[must_use]
    pub fn total_offset(&self) -> Vec2 {
        self.current - self.start
    }

    /// Offset from the start position, snapped.
    ///
    /// Components within `dead_zone` pixels are zeroed. For exclusive
    /// controls the first clearly larger component decides the direction of
    /// the whole session; the other one stays zero until the session ends.
    pub fn snapped_offset(&mut self, dead_zone: f64) -> Vec2 {
        let raw = self.total_offset();
        let snap = |v: f64| if v.abs() > dead_zone { v } else { 0.0 };
        let mut offset = Vec2::new(snap(raw.x), snap(raw.y));
        if !self.control.is_exclusive() {
            return offset;
        }
        if self.direction.is_none() {
            if offset.y.abs() > offset.x.abs() {
                self.direction = Some(Direction::Vertical);
            } else if offset.x.abs() > offset.y.abs() {
                self.direction = Some(Direction::Horizontal);
            }
        }
        match self.direction {
            Some(Direction::Vertical) => offset.x = 0.0,
            Some(Direction::Horizontal) => offset.y = 0.0,
            None => {}
        }
        offset
    }

    /// The snapped offset mapped to the pose components this control drives.
    pub fn delta(&mut self, dead_zone: f64) -> DragDelta {
        let offset = self.snapped_offset(dead_zone);
        let mut delta = DragDelta::ZERO;
        match self.control {
            DragControl::Pan => {
                delta.translate.x = offset.x;
                delta.translate.y = offset.y;
            }
            DragControl::ZoomRotate => {
                delta.translate.z = offset.y;
                delta.rotate.z = offset.x;
            }
            DragControl::Tilt => {
                delta.rotate.x = offset.y;
                delta.rotate.y = offset.x;
            }
        }
        delta
    }
}
