// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

//! Tests for the `impressionist_pose` crate.
//!
//! These check the pose model end to end: a camera and the canvas placed
//! for it cancel out, step poses survive a trip through their attributes,
//! and markup values coerce the way presentations expect.

use std::collections::BTreeMap;

use impressionist_pose::frame::Matrix3;
use impressionist_pose::{
    AxisOrder, Pose, Rotation, Vec3, ViewportConfig, compute_window_scale, read_step_pose,
    to_camera_frame, to_number, to_order, write_step_pose,
};
use kurbo::Size;

const PERMUTATIONS: [&str; 6] = ["xyz", "xzy", "yxz", "yzx", "zxy", "zyx"];

#[test]
fn camera_and_canvas_rotations_cancel() {
    for order in PERMUTATIONS {
        let order: AxisOrder = order.parse().unwrap();
        for t in [-720.0, -90.0, -12.5, 0.0, 1.0, 33.0, 90.0, 180.0, 359.0] {
            let camera = Rotation::new(t, t / 2.0, -t / 3.0, order);
            let both = camera.matrix(false) * camera.negated().matrix(true);
            assert!(
                both.approx_eq(&Matrix3::IDENTITY, 1e-9),
                "order {order}, angle {t}"
            );
        }
    }
}

#[test]
fn single_axis_rotation_cancels_basis_vectors() {
    let basis = [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ];
    for t in [-45.0, 10.0, 135.0] {
        let rotation = Rotation::new(t, 0.0, 0.0, AxisOrder::XYZ);
        let m = rotation.matrix(false) * rotation.negated().matrix(true);
        for v in basis {
            let back = m.apply(v);
            assert!((back - v).to_array().iter().all(|d| d.abs() < 1e-12));
        }
    }
}

#[test]
fn camera_frame_matches_rotation_matrix() {
    let delta = Vec3::new(6.0, -4.0, 9.0);
    for order in PERMUTATIONS {
        let rotation = Rotation::new(25.0, -60.0, 110.0, order.parse().unwrap());
        let a = to_camera_frame(delta, &rotation);
        let b = rotation.matrix(false).apply(delta);
        assert!((a - b).to_array().iter().all(|d| d.abs() < 1e-9), "{order}");
    }
}

#[test]
fn step_pose_round_trips_through_attributes() {
    for (i, order) in PERMUTATIONS.iter().enumerate() {
        let k = i as f64;
        let pose = Pose {
            translate: Vec3::new(-1500.5 + k, 0.25 * k, 3000.0),
            rotate: Rotation::new(12.5 * k, -90.0, 0.1 + k, order.parse().unwrap()),
            scale: 1.0 + 0.5 * k,
        };
        let mut attributes = BTreeMap::<String, String>::new();
        write_step_pose(&pose, &mut attributes);
        assert_eq!(read_step_pose(&attributes), pose);
    }
}

#[test]
fn window_scale_fits_and_clamps() {
    let config = ViewportConfig::DEFAULT;
    assert_eq!(compute_window_scale(&config, Size::new(512.0, 384.0)), 0.5);
    assert_eq!(compute_window_scale(&config, Size::new(2048.0, 1536.0)), 1.0);
    // The narrower dimension wins.
    assert_eq!(compute_window_scale(&config, Size::new(512.0, 768.0)), 0.5);
}

#[test]
fn markup_values_coerce_leniently() {
    assert_eq!(to_number(Some("abc"), 5.0), 5.0);
    assert_eq!(to_number(Some("2.75"), 0.0), 2.75);
    assert_eq!(to_number(Some(""), 2.0), 2.0);
    assert_eq!(to_number(None, 1.0), 1.0);

    assert_eq!(to_order(Some("zy"), AxisOrder::XYZ).to_string(), "zy");
    assert_eq!(to_order(Some("xyzz"), AxisOrder::XYZ), AxisOrder::XYZ);
    assert_eq!(to_order(Some("xqz"), AxisOrder::XYZ), AxisOrder::XYZ);
}
