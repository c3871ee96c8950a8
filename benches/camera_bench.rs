use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use tutorial3d::camera::{
    advance, CameraState, FrameInput, HeldKeys, LookAtCamera, MoveDirection,
};

fn advance_benchmark(c: &mut Criterion) {
    let input = FrameInput {
        elapsed: 1.0 / 60.0,
        cursor_delta: Vec2::new(3.0, -2.0),
        held: HeldKeys::from_directions(&[
            MoveDirection::Forward,
            MoveDirection::StrafeLeft,
        ]),
    };

    let _ = c.bench_function("free_fly_advance", |b| {
        let mut state = CameraState::default();
        b.iter(|| {
            black_box(advance(&mut state, black_box(&input), 1024, 768))
        });
    });
}

fn look_at_benchmark(c: &mut Criterion) {
    let camera = LookAtCamera::default();
    let _ = c.bench_function("look_at_view_projection", |b| {
        b.iter(|| black_box(camera.view_projection(1024, 768)).combined());
    });
}

fn many_frames_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_frames");

    for frames in [60_u32, 600, 6000] {
        let _ = group.bench_function(format!("{frames}"), |b| {
            let input = FrameInput {
                elapsed: 1.0 / 60.0,
                cursor_delta: Vec2::new(1.0, 0.5),
                held: HeldKeys::from_directions(&[MoveDirection::Forward]),
            };
            b.iter(|| {
                let mut state = CameraState::default();
                for _ in 0..frames {
                    let _ = advance(&mut state, &input, 1024, 768);
                }
                black_box(state)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    advance_benchmark,
    look_at_benchmark,
    many_frames_benchmark
);
criterion_main!(benches);
