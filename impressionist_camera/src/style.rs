// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

use alloc::format;
use alloc::string::String;
use core::time::Duration;

/// Inline style produced for one element: a transform and its transition timing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementStyle {
    /// Value for the CSS `transform` property.
    pub transform: String,
    /// Value for `transition-duration`.
    pub transition_duration: Duration,
    /// Value for `transition-delay`.
    pub transition_delay: Duration,
}

impl ElementStyle {
    /// A style that applies `transform` immediately, without a transition.
    #[must_use]
    pub fn immediate(transform: String) -> Self {
        Self {
            transform,
            transition_duration: Duration::ZERO,
            transition_delay: Duration::ZERO,
        }
    }

    /// CSS property/value pairs, ready to assign to an element's style.
    #[must_use]
    pub fn declarations(&self) -> [(&'static str, String); 3] {
        [
            ("transform", self.transform.clone()),
            (
                "transition-duration",
                format!("{}ms", self.transition_duration.as_millis()),
            ),
            (
                "transition-delay",
                format!("{}ms", self.transition_delay.as_millis()),
            ),
        ]
    }
}
