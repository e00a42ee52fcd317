// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

//! Rotation axes and the order in which they are composed.

use core::fmt;
use core::str::FromStr;

/// One of the three rotation (and translation) axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
    /// The depth axis, pointing out of the screen.
    Z,
}

impl Axis {
    /// All axes, in alphabetical order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Returns the axis for a lowercase letter, if it names one.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'x' => Some(Self::X),
            'y' => Some(Self::Y),
            'z' => Some(Self::Z),
            _ => None,
        }
    }

    /// Lowercase letter used in order strings, e.g. `'x'`.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
        }
    }

    /// Uppercase letter used in CSS function names, e.g. `'X'` in `rotateX`.
    #[must_use]
    pub const fn css_letter(self) -> char {
        match self {
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
        }
    }

    /// Position of this axis in `[x, y, z]` arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Error returned when a string is not a valid axis order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseOrderError {
    /// The string was empty.
    Empty,
    /// The string had more than three letters.
    TooLong(usize),
    /// The string contained something other than `x`, `y` or `z`.
    InvalidLetter(char),
}

impl fmt::Display for ParseOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "axis order is empty"),
            Self::TooLong(len) => write!(f, "axis order has {len} letters, at most 3 allowed"),
            Self::InvalidLetter(c) => write!(f, "axis order contains {c:?}, expected x, y or z"),
        }
    }
}

impl core::error::Error for ParseOrderError {}

/// The sequence in which per-axis rotations are composed.
///
/// Holds one to three letters from `{x, y, z}`. Rotations do not commute, so
/// the order decides what a given rotation triple looks like: encoders apply
/// the letters strictly in sequence (or reversed for the canvas).
///
/// Parsing follows the lenient rules of [`to_order`](crate::to_order): a
/// letter may repeat, nothing is reordered.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct AxisOrder {
    axes: [Axis; 3],
    len: u8,
}

impl AxisOrder {
    /// The default `xyz` order.
    pub const XYZ: Self = Self {
        axes: [Axis::X, Axis::Y, Axis::Z],
        len: 3,
    };

    /// Builds an order from a non-empty slice of at most three axes.
    #[must_use]
    pub fn from_axes(axes: &[Axis]) -> Option<Self> {
        if axes.is_empty() || axes.len() > 3 {
            return None;
        }
        let mut order = Self {
            axes: [Axis::X; 3],
            len: 0,
        };
        for &axis in axes {
            order.push(axis);
        }
        Some(order)
    }

    fn push(&mut self, axis: Axis) {
        self.axes[self.len as usize] = axis;
        self.len += 1;
    }

    /// The axes in application order.
    #[must_use]
    pub fn axes(&self) -> &[Axis] {
        &self.axes[..self.len as usize]
    }

    /// Number of axes in this order.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`; an order holds at least one axis.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `axis` appears in this order.
    #[must_use]
    pub fn contains(&self, axis: Axis) -> bool {
        self.axes().contains(&axis)
    }

    /// Returns `true` if `axis` is applied last.
    #[must_use]
    pub fn is_last(&self, axis: Axis) -> bool {
        self.axes().last() == Some(&axis)
    }

    /// Iterates the axes in application order, or in reverse when `revert` is set.
    pub fn iter(&self, revert: bool) -> impl Iterator<Item = Axis> + '_ {
        let axes = self.axes();
        let len = axes.len();
        (0..len).map(move |i| if revert { axes[len - 1 - i] } else { axes[i] })
    }

    /// Returns this order with `axis` removed from wherever it was and appended last.
    ///
    /// Repeated letters of the other axes collapse to their first occurrence so
    /// the result never exceeds three letters.
    #[must_use]
    pub fn with_last(&self, axis: Axis) -> Self {
        let mut out = Self {
            axes: [Axis::X; 3],
            len: 0,
        };
        for &a in self.axes() {
            if a != axis && !out.contains(a) {
                out.push(a);
            }
        }
        out.push(axis);
        out
    }

    /// First axis of `xyz` not present in this order.
    #[must_use]
    pub fn first_missing(&self) -> Option<Axis> {
        Axis::ALL.into_iter().find(|a| !self.contains(*a))
    }

    /// Order-field "minus" step.
    ///
    /// A partial order gets the first unused axis appended; a full order is
    /// rotated left (`xyz` becomes `yzx`).
    #[must_use]
    pub fn step_down(&self) -> Self {
        let mut out = *self;
        if self.len < 3 {
            if let Some(axis) = self.first_missing() {
                out.push(axis);
            }
        } else {
            out.axes.rotate_left(1);
        }
        out
    }

    /// Order-field "plus" step.
    ///
    /// A partial order gets the first unused axis prepended; a full order is
    /// rotated right (`xyz` becomes `zxy`).
    #[must_use]
    pub fn step_up(&self) -> Self {
        if self.len < 3 {
            let Some(axis) = self.first_missing() else {
                return *self;
            };
            let mut out = Self {
                axes: [axis; 3],
                len: 1,
            };
            for &a in self.axes() {
                out.push(a);
            }
            out
        } else {
            let mut out = *self;
            out.axes.rotate_right(1);
            out
        }
    }

    /// Cleans free-form text typed into an order field.
    ///
    /// The text is lowercased, only its first three characters are looked at,
    /// and anything that is not `x`, `y` or `z` is dropped. Returns `None` when
    /// nothing usable is left.
    #[must_use]
    pub fn sanitize_input(text: &str) -> Option<Self> {
        let mut out = Self {
            axes: [Axis::X; 3],
            len: 0,
        };
        for c in text.chars().take(3) {
            if let Some(axis) = Axis::from_letter(c.to_ascii_lowercase()) {
                out.push(axis);
            }
        }
        (out.len > 0).then_some(out)
    }
}

impl Default for AxisOrder {
    fn default() -> Self {
        Self::XYZ
    }
}

impl FromStr for AxisOrder {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseOrderError::Empty);
        }
        let count = s.chars().count();
        if count > 3 {
            return Err(ParseOrderError::TooLong(count));
        }
        let mut out = Self {
            axes: [Axis::X; 3],
            len: 0,
        };
        for c in s.chars() {
            out.push(Axis::from_letter(c).ok_or(ParseOrderError::InvalidLetter(c))?);
        }
        Ok(out)
    }
}

impl fmt::Display for AxisOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for axis in self.axes() {
            write!(f, "{axis}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for AxisOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AxisOrder({self})")
    }
}
