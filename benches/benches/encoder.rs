// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use impressionist_camera::{canvas_styles, step_transform};
use impressionist_pose::{
    AxisOrder, Pose, Rotation, Vec3, ViewportConfig, read_step_pose, write_step_pose,
};
use kurbo::Size;

fn sample_poses() -> Vec<Pose> {
    let orders = ["xyz", "zyx", "yxz", "xz"];
    (0..64)
        .map(|i| {
            let f = f64::from(i);
            Pose {
                translate: Vec3::new(f * 137.5 - 4000.0, -f * 42.25, f * 3.0),
                rotate: Rotation::new(
                    f * 7.0,
                    -f * 11.5,
                    f * 0.25,
                    orders[i as usize % orders.len()]
                        .parse::<AxisOrder>()
                        .expect("static orders are valid"),
                ),
                scale: 1.0 + f / 8.0,
            }
        })
        .collect()
}

fn bench_encoder(c: &mut Criterion) {
    let poses = sample_poses();
    let mut group = c.benchmark_group("encoder");

    group.bench_function("canvas_styles(64)", |b| {
        b.iter(|| {
            for pose in &poses {
                black_box(canvas_styles(
                    black_box(pose),
                    &ViewportConfig::DEFAULT,
                    Size::new(1920.0, 1080.0),
                    None,
                ));
            }
        });
    });

    group.bench_function("step_transform(64)", |b| {
        b.iter(|| {
            for pose in &poses {
                black_box(step_transform(black_box(pose)));
            }
        });
    });

    group.bench_function("attributes_round_trip(64)", |b| {
        let mut attributes = BTreeMap::<String, String>::new();
        b.iter(|| {
            for pose in &poses {
                write_step_pose(black_box(pose), &mut attributes);
                black_box(read_step_pose(&attributes));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encoder);
criterion_main!(benches);
