// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

//! Addressing single fields of a pose.

use core::fmt;
use core::str::FromStr;

use impressionist_pose::{Axis, AxisOrder, Pose, to_number};

/// One editable field of a pose.
///
/// Resolved once when an input is bound, e.g. from the widget name
/// `"rotateX"`, instead of re-deriving the field from a string every time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Coordinate {
    /// Translation along an axis.
    Translate(Axis),
    /// Uniform scale.
    Scale,
    /// Rotation around an axis.
    Rotate(Axis),
    /// Rotation axis order.
    Order,
}

impl Coordinate {
    /// Every coordinate, in widget order.
    pub const ALL: [Self; 8] = [
        Self::Translate(Axis::X),
        Self::Translate(Axis::Y),
        Self::Translate(Axis::Z),
        Self::Scale,
        Self::Rotate(Axis::X),
        Self::Rotate(Axis::Y),
        Self::Rotate(Axis::Z),
        Self::Order,
    ];

    /// The widget name of this coordinate: `x`, `scale`, `rotateY`, `order`, ...
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Translate(Axis::X) => "x",
            Self::Translate(Axis::Y) => "y",
            Self::Translate(Axis::Z) => "z",
            Self::Scale => "scale",
            Self::Rotate(Axis::X) => "rotateX",
            Self::Rotate(Axis::Y) => "rotateY",
            Self::Rotate(Axis::Z) => "rotateZ",
            Self::Order => "order",
        }
    }

    /// Value typed text falls back to when it is not a number.
    #[must_use]
    pub const fn fallback(self) -> f64 {
        match self {
            Self::Scale => 1.0,
            _ => 0.0,
        }
    }

    /// Reads this coordinate from `pose`.
    #[must_use]
    pub fn get(self, pose: &Pose) -> CoordinateValue {
        match self {
            Self::Translate(axis) => CoordinateValue::Number(pose.translate.get(axis)),
            Self::Scale => CoordinateValue::Number(pose.scale),
            Self::Rotate(axis) => CoordinateValue::Number(pose.rotate.angle(axis)),
            Self::Order => CoordinateValue::Order(pose.rotate.order),
        }
    }

    /// Parses the text of an input bound to this coordinate.
    ///
    /// Numeric coordinates coerce with their [`fallback`](Self::fallback);
    /// the order is sanitized and returns `None` when nothing usable remains.
    /// A scale that is not positive is refused with `None` as well.
    #[must_use]
    pub fn parse_input(self, text: &str) -> Option<CoordinateValue> {
        match self {
            Self::Order => AxisOrder::sanitize_input(text).map(CoordinateValue::Order),
            Self::Scale => {
                let scale = to_number(Some(text), self.fallback());
                (scale > 0.0).then_some(CoordinateValue::Number(scale))
            }
            _ => Some(CoordinateValue::Number(to_number(
                Some(text),
                self.fallback(),
            ))),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for a name that is not a coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownCoordinate;

impl fmt::Display for UnknownCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown coordinate name")
    }
}

impl core::error::Error for UnknownCoordinate {}

impl FromStr for Coordinate {
    type Err = UnknownCoordinate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or(UnknownCoordinate)
    }
}

/// The value of one coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CoordinateValue {
    /// A translation, rotation or scale.
    Number(f64),
    /// An axis order.
    Order(AxisOrder),
}

/// A manual edit of one coordinate, as done with the camera widgets.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CoordinateEdit<'a> {
    /// Text typed into the coordinate's input.
    Input(&'a str),
    /// The "-" button.
    Decrement,
    /// The "+" button.
    Increment,
}
