// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

//! Lenient conversion of user and markup strings into pose values.
//!
//! Nothing here fails: unparseable input yields the caller's fallback.

use crate::axis::AxisOrder;

/// Parses `raw` as a finite number, or returns `fallback`.
///
/// Missing input, blank strings and non-finite values (`NaN`, `inf`) all
/// count as unparseable. Surrounding whitespace is ignored.
///
/// ```
/// use impressionist_pose::to_number;
///
/// assert_eq!(to_number(Some("3.14"), 0.0), 3.14);
/// assert_eq!(to_number(Some("abc"), 5.0), 5.0);
/// assert_eq!(to_number(Some(""), 2.0), 2.0);
/// assert_eq!(to_number(None, 1.0), 1.0);
/// ```
#[must_use]
pub fn to_number(raw: Option<&str>, fallback: f64) -> f64 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(fallback)
}

/// Parses `raw` as an axis order, or returns `fallback`.
///
/// Valid orders have one to three letters, each one of `x`, `y`, `z`. The
/// string is taken as is: repeated letters are kept and nothing is sorted.
///
/// ```
/// use impressionist_pose::{AxisOrder, to_order};
///
/// assert_eq!(to_order(Some("zy"), AxisOrder::XYZ).to_string(), "zy");
/// assert_eq!(to_order(Some("xyzz"), AxisOrder::XYZ), AxisOrder::XYZ);
/// assert_eq!(to_order(Some("xqz"), AxisOrder::XYZ), AxisOrder::XYZ);
/// ```
#[must_use]
pub fn to_order(raw: Option<&str>, fallback: AxisOrder) -> AxisOrder {
    raw.and_then(|s| s.parse().ok()).unwrap_or(fallback)
}
