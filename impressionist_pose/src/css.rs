// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

//! CSS3 transform-function strings for poses.
//!
//! These are pure string builders; callers join the fragments with spaces and
//! assign the result to an element's `transform` property. Functions compose
//! right to left in CSS, so the last fragment is applied to the element first.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::pose::{Rotation, Vec3};

/// Formats a number the way it should appear in CSS and in markup attributes.
///
/// Uses the shortest representation that parses back to the same value, and
/// prints negative zero as `0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CssNumber(pub f64);

impl fmt::Display for CssNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// `translate3d(..)` for a translation in pixels.
#[must_use]
pub fn translate(t: Vec3) -> String {
    format!(
        "translate3d({}px,{}px,{}px)",
        CssNumber(t.x),
        CssNumber(t.y),
        CssNumber(t.z)
    )
}

/// One `rotateX/Y/Z(..)` term per axis in `r.order`, space separated.
///
/// With `revert` the order is walked backwards, which is how the canvas
/// undoes a camera rotation.
#[must_use]
pub fn rotate(r: &Rotation, revert: bool) -> String {
    let mut css = String::new();
    for axis in r.order.iter(revert) {
        if !css.is_empty() {
            css.push(' ');
        }
        css.push_str(&format!(
            "rotate{}({}deg)",
            axis.css_letter(),
            CssNumber(r.angle(axis))
        ));
    }
    css
}

/// `scale(..)` for a uniform factor.
#[must_use]
pub fn scale(s: f64) -> String {
    format!("scale({})", CssNumber(s))
}

/// `perspective(..)` for a depth in pixels.
#[must_use]
pub fn perspective(p: f64) -> String {
    format!("perspective({}px)", CssNumber(p))
}

/// Joins transform fragments with single spaces, skipping empty ones.
#[must_use]
pub fn join<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for fragment in fragments.into_iter().filter(|f| !f.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(fragment);
    }
    out
}
