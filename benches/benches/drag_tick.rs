// Copyright 2025 the Impressionist Authors
// SPDX-License-Identifier: MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use impressionist_camera::{
    AxisLocks, CameraSession, DragControl, DragController, DragDelta, DragTuning, ElementStyle,
    Stage, StepElement, drag_patch,
};
use impressionist_pose::{AxisOrder, Pose, Rotation, Vec3, ViewportConfig};
use kurbo::{Point, Size};

struct NullStage;

impl Stage for NullStage {
    fn set_root_style(&mut self, style: &ElementStyle) {
        black_box(style);
    }

    fn set_canvas_style(&mut self, style: &ElementStyle) {
        black_box(style);
    }

    fn active_step(&mut self) -> Option<&mut dyn StepElement> {
        None
    }
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");
    let tuning = DragTuning::DEFAULT;

    let camera = Pose {
        translate: Vec3::new(120.0, -40.0, 900.0),
        rotate: Rotation::new(15.0, -30.0, 60.0, AxisOrder::XYZ),
        scale: 2.0,
    };
    let delta = DragDelta {
        translate: Vec3::new(25.0, -14.0, 0.0),
        rotate: Vec3::new(0.0, 40.0, 0.0),
        scale: 0.0,
    };
    group.bench_function("drag_patch", |b| {
        b.iter(|| {
            let mut locks = AxisLocks::empty();
            black_box(drag_patch(
                black_box(&camera),
                black_box(&delta),
                &mut locks,
                &tuning,
            ))
        });
    });

    group.bench_function("controller_tick(3 controls)", |b| {
        b.iter_batched(
            || {
                let mut controller = DragController::new();
                for control in DragControl::ALL {
                    controller.pointer_down(control, Point::new(300.0, 300.0));
                }
                controller.pointer_move(Point::new(340.0, 260.0));
                controller
            },
            |mut controller| {
                let mut locks = AxisLocks::empty();
                black_box(controller.tick(&camera, &mut locks, &tuning))
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("session_tick(100)", |b| {
        b.iter_batched(
            || {
                let mut session =
                    CameraSession::new(ViewportConfig::DEFAULT, Size::new(1920.0, 1080.0));
                session.pointer_down(DragControl::Pan, Point::new(0.0, 0.0));
                session.pointer_move(Point::new(30.0, -20.0));
                session
            },
            |mut session| {
                let mut stage = NullStage;
                for _ in 0..100 {
                    black_box(session.tick(&mut stage));
                }
                session
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_drag);
criterion_main!(benches);
