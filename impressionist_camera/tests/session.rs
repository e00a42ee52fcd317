// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

//! Tests for `CameraSession`: seeding, patches, widget edits and rendering.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use impressionist_camera::{
    CameraSession, Coordinate, CoordinateEdit, PoseEvent, PosePatch, PoseTargets,
};
use impressionist_pose::{AttributeSource, Axis, AxisOrder, Pose, Vec3, read_step_pose};
use kurbo::Size;

mod common;

use common::{DESIGN_SIZE, FakeDocument, FakeStep, session};

fn recorded(camera: &mut CameraSession) -> Rc<RefCell<Vec<PoseEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    camera.subscribe(move |event: &PoseEvent| sink.borrow_mut().push(*event));
    events
}

#[test]
fn entering_a_step_seeds_both_poses() {
    let step = FakeStep::with_attributes(&[
        ("data-x", "1000"),
        ("data-y", "-200"),
        ("data-rotate", "45"),
        ("data-rotate-order", "zyx"),
        ("data-scale", "2"),
    ]);
    let mut doc = FakeDocument::with_step(step);
    let mut camera = session();
    let events = recorded(&mut camera);

    camera.enter_step(&mut doc);

    let pose = camera.camera();
    assert_eq!(pose.translate, Vec3::new(1000.0, -200.0, 0.0));
    assert_eq!(pose.rotate.angles.z, 45.0);
    assert_eq!(pose.rotate.order, "zyx".parse::<AxisOrder>().unwrap());
    assert_eq!(pose.scale, 2.0);
    assert_eq!(camera.step(), pose);
    assert_eq!(*events.borrow(), [PoseEvent::StepEntered(pose)]);
    // The host already placed the canvas.
    assert_eq!(doc.canvas.transform, "");
}

#[test]
fn malformed_attributes_degrade_to_defaults() {
    let step = FakeStep::with_attributes(&[
        ("data-x", "left"),
        ("data-scale", ""),
        ("data-rotate-order", "xqz"),
    ]);
    let mut doc = FakeDocument::with_step(step);
    let mut camera = session();
    camera.enter_step(&mut doc);
    assert_eq!(camera.camera(), Pose::ORIGIN);
}

#[test]
fn camera_patch_leaves_step_alone() {
    let mut doc = FakeDocument::with_step(FakeStep::with_attributes(&[("data-x", "5")]));
    let mut camera = session();
    camera.enter_step(&mut doc);
    let events = recorded(&mut camera);

    let patch = PosePatch {
        x: Some(50.0),
        scale: Some(2.0),
        ..PosePatch::default()
    };
    let applied = camera.apply_patch(&patch, &mut doc);

    assert!(applied.camera && !applied.step);
    assert_eq!(camera.step().translate.x, 5.0);
    let step = doc.step.as_ref().unwrap();
    assert_eq!(step.attribute("data-x"), Some("5"));
    assert_eq!(step.style_writes, 0);
    assert_eq!(doc.root.transform, "perspective(2000px) scale(0.5)");
    assert_eq!(
        doc.canvas.transform,
        "rotateZ(0deg) rotateY(0deg) rotateX(0deg) translate3d(-50px,0px,0px)"
    );
    assert_eq!(*events.borrow(), [PoseEvent::CameraChanged(camera.camera())]);
}

#[test]
fn locked_patch_writes_step_back() {
    let mut doc = FakeDocument::with_step(FakeStep::default());
    let mut camera = session();
    camera.enter_step(&mut doc);
    camera.set_targets(PoseTargets::CameraAndStep);
    let events = recorded(&mut camera);

    let patch = PosePatch {
        y: Some(-75.0),
        rotate_x: Some(30.0),
        order: Some("yx".parse().unwrap()),
        ..PosePatch::default()
    };
    let applied = camera.apply_patch(&patch, &mut doc);
    assert!(applied.camera && applied.step);

    let step = doc.step.as_ref().unwrap();
    assert_eq!(read_step_pose(step), camera.step());
    assert_eq!(step.attribute("data-rotate-order"), Some("yx"));
    assert_eq!(
        step.style.transform,
        "translate(-50%,-50%) translate3d(0px,-75px,0px) rotateY(0deg) rotateX(30deg) scale(1)"
    );
    assert_eq!(
        *events.borrow(),
        [
            PoseEvent::CameraChanged(camera.camera()),
            PoseEvent::StepChanged(camera.step())
        ]
    );
}

#[test]
fn step_only_change_is_reported_alone() {
    let mut doc = FakeDocument::with_step(FakeStep::default());
    let mut camera = session();
    camera.enter_step(&mut doc);

    // Move the camera away first, then lock and move it back onto the step.
    camera.apply_patch(
        &PosePatch {
            x: Some(10.0),
            ..PosePatch::default()
        },
        &mut doc,
    );
    camera.set_targets(PoseTargets::CameraAndStep);
    let applied = camera.apply_patch(
        &PosePatch {
            x: Some(10.0),
            ..PosePatch::default()
        },
        &mut doc,
    );
    assert!(!applied.camera && applied.step);
    assert_eq!(camera.step().translate.x, 10.0);
}

#[test]
fn widget_edits_follow_the_toolbar_rules() {
    let mut doc = FakeDocument::default();
    let mut camera = session();
    let rotate_y = Coordinate::Rotate(Axis::Y);

    camera.edit_coordinate(rotate_y, CoordinateEdit::Input("12.6"), &mut doc);
    assert_eq!(camera.camera().rotate.angles.y, 12.6);
    camera.edit_coordinate(rotate_y, CoordinateEdit::Increment, &mut doc);
    assert_eq!(camera.camera().rotate.angles.y, 14.0);
    camera.edit_coordinate(rotate_y, CoordinateEdit::Input("oops"), &mut doc);
    assert_eq!(camera.camera().rotate.angles.y, 0.0);

    camera.edit_coordinate(Coordinate::Scale, CoordinateEdit::Input("oops"), &mut doc);
    assert_eq!(camera.camera().scale, 1.0);

    camera.edit_coordinate(Coordinate::Order, CoordinateEdit::Input("ZyQ"), &mut doc);
    assert_eq!(camera.camera().rotate.order.to_string(), "zy");
    camera.edit_coordinate(Coordinate::Order, CoordinateEdit::Decrement, &mut doc);
    assert_eq!(camera.camera().rotate.order.to_string(), "zyx");
    camera.edit_coordinate(Coordinate::Order, CoordinateEdit::Increment, &mut doc);
    assert_eq!(camera.camera().rotate.order.to_string(), "xzy");

    let mut partial = session();
    partial.edit_coordinate(Coordinate::Order, CoordinateEdit::Input("y"), &mut doc);
    partial.edit_coordinate(Coordinate::Order, CoordinateEdit::Increment, &mut doc);
    assert_eq!(partial.camera().rotate.order.to_string(), "xy");
}

#[test]
fn new_steps_start_at_the_camera() {
    let mut doc = FakeDocument::default();
    let mut camera = session();
    camera.apply_patch(
        &PosePatch {
            x: Some(-300.0),
            rotate_z: Some(90.0),
            scale: Some(4.0),
            ..PosePatch::default()
        },
        &mut doc,
    );

    let attributes = camera.new_step_attributes();
    let pairs: Vec<(&str, &str)> = attributes.iter().map(|(k, v)| (*k, v.as_str())).collect();
    assert_eq!(read_step_pose(pairs.as_slice()), camera.camera());
}

#[test]
fn resize_changes_window_fit_after_settling() {
    let mut doc = FakeDocument::with_step(FakeStep::with_attributes(&[("data-z", "10")]));
    let mut camera = session();
    camera.enter_step(&mut doc);
    camera.apply_patch(
        &PosePatch {
            z: Some(500.0),
            ..PosePatch::default()
        },
        &mut doc,
    );

    camera.resize(Size::new(512.0, 384.0));
    assert_eq!(camera.viewport(), Size::new(512.0, 384.0));
    camera.place_canvas(&mut doc, None);
    assert_eq!(doc.root.transform, "perspective(2000px) scale(0.5)");

    // Once the host has re-placed the canvas, the camera snaps back to the step.
    camera.resettle(&mut doc);
    assert_eq!(camera.camera().translate.z, 10.0);
}

#[test]
fn animated_placement_delays_by_zoom_direction() {
    let duration = Duration::from_millis(1000);
    let mut doc = FakeDocument::with_step(FakeStep::default());
    let mut camera = session();
    camera.apply_patch(
        &PosePatch {
            scale: Some(2.0),
            ..PosePatch::default()
        },
        &mut doc,
    );

    // Back to a scale 1 step: the canvas grows, so the scale change waits.
    camera.enter_step(&mut doc);
    camera.place_canvas(&mut doc, Some(duration));
    assert_eq!(doc.root.transition_duration, duration);
    assert_eq!(doc.root.transition_delay, Duration::from_millis(500));
    assert_eq!(doc.canvas.transition_delay, Duration::ZERO);

    // On to a scale 4 step: the canvas shrinks, so the move waits.
    doc.step = Some(FakeStep::with_attributes(&[("data-scale", "4")]));
    camera.enter_step(&mut doc);
    camera.place_canvas(&mut doc, Some(duration));
    assert_eq!(doc.root.transition_delay, Duration::ZERO);
    assert_eq!(doc.canvas.transition_delay, Duration::from_millis(500));

    // Same scale again: nothing waits.
    camera.place_canvas(&mut doc, Some(duration));
    assert_eq!(doc.root.transition_delay, Duration::ZERO);
    assert_eq!(doc.canvas.transition_delay, Duration::ZERO);
}

#[test]
fn config_comes_from_root_attributes() {
    let root = [("data-width", "1920"), ("data-height", "1080"), ("data-perspective", "500")];
    let camera = CameraSession::from_root(root.as_slice(), DESIGN_SIZE);
    assert_eq!(camera.config().width, 1920.0);
    assert_eq!(camera.config().height, 1080.0);
    assert_eq!(camera.config().perspective, 500.0);
    assert_eq!(camera.config().max_scale, 1.0);
}
