// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

//! An in-memory document standing in for the browser.

#![allow(
    dead_code,
    reason = "Integration-test helper module; each test binary uses part of it."
)]

use std::collections::BTreeMap;

use impressionist_camera::{CameraSession, ElementStyle, Stage, StepElement};
use impressionist_pose::{AttributeSink, AttributeSource, ViewportConfig};
use kurbo::Size;

/// The size presentations are designed for.
pub(crate) const DESIGN_SIZE: Size = Size::new(1024.0, 768.0);

#[derive(Debug, Default)]
pub(crate) struct FakeStep {
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) style: ElementStyle,
    pub(crate) style_writes: usize,
}

impl FakeStep {
    pub(crate) fn with_attributes(pairs: &[(&str, &str)]) -> Self {
        Self {
            attributes: pairs
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
            ..Self::default()
        }
    }
}

impl AttributeSource for FakeStep {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.attribute(name)
    }
}

impl AttributeSink for FakeStep {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.set_attribute(name, value);
    }
}

impl StepElement for FakeStep {
    fn set_style(&mut self, style: &ElementStyle) {
        self.style = style.clone();
        self.style_writes += 1;
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeDocument {
    pub(crate) root: ElementStyle,
    pub(crate) canvas: ElementStyle,
    pub(crate) step: Option<FakeStep>,
}

impl FakeDocument {
    pub(crate) fn with_step(step: FakeStep) -> Self {
        Self {
            step: Some(step),
            ..Self::default()
        }
    }
}

impl Stage for FakeDocument {
    fn set_root_style(&mut self, style: &ElementStyle) {
        self.root = style.clone();
    }

    fn set_canvas_style(&mut self, style: &ElementStyle) {
        self.canvas = style.clone();
    }

    fn active_step(&mut self) -> Option<&mut dyn StepElement> {
        self.step.as_mut().map(|s| s as &mut dyn StepElement)
    }
}

pub(crate) fn session() -> CameraSession {
    CameraSession::new(ViewportConfig::DEFAULT, DESIGN_SIZE)
}
