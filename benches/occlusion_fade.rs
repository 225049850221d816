use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use topdown::core::{AnimatorParameters, InputState, KinematicBody};
use topdown::material::Material;
use topdown::math::intersect_aabb;
use topdown::scenes::create_courtyard_scene;
use topdown::traits::Button;
use topdown::{CameraSettings, PlayerController, PlayerSettings, Scene, SceneObject, TopDownCamera};

/// Scene with `count` crates scattered around the sight line, a quarter of them on it
fn scattered_scene(count: usize) -> Scene {
    let mut scene = Scene::new();
    for i in 0..count {
        let s = (i % 13) as f32 + 1.0;
        let x = if i % 4 == 0 { 0.0 } else { ((i as f32 * 0.37) % 40.0) - 20.0 };
        scene.spawn(
            SceneObject::new("crate", Vec3::new(x, s, -s))
                .with_box_collider(Vec3::splat(0.8))
                .with_material(Material::default()),
        );
    }
    scene
}

/// Benchmark: Single AABB intersection along a camera sight line
fn bench_aabb_intersection_hit(c: &mut Criterion) {
    let min = Vec3::new(-1.0, 6.0, -9.0);
    let max = Vec3::new(1.0, 8.0, -7.0);
    let origin = Vec3::new(0.0, 15.0, -15.0);
    let direction = Vec3::new(0.0, -1.0, 1.0).normalize();

    c.bench_function("aabb_intersection_hit", |b| {
        b.iter(|| {
            black_box(intersect_aabb(
                black_box(origin),
                black_box(direction),
                black_box(min),
                black_box(max),
            ))
        })
    });
}

/// Benchmark: Camera tick (follow + restore + scan + fade) by scene size
fn bench_camera_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera_tick");

    for count in [10, 100, 1000].iter() {
        let mut scene = scattered_scene(*count);
        let target = scene.spawn(SceneObject::new("player", Vec3::ZERO));
        let mut camera = TopDownCamera::start(CameraSettings::default(), target, &scene).unwrap();

        group.bench_with_input(BenchmarkId::new("crates", count), count, |b, _| {
            b.iter(|| black_box(camera.tick(black_box(1.0 / 60.0), &mut scene)))
        });
    }

    group.finish();
}

/// Benchmark: One simulated frame of player + camera through the courtyard
fn bench_frame(c: &mut Criterion) {
    let mut scene = create_courtyard_scene(8);
    let target = scene.spawn(SceneObject::new("player", Vec3::ZERO));
    let mut player = PlayerController::builder(PlayerSettings::default())
        .motor(KinematicBody::new(Vec3::ZERO, 0.0))
        .animator(AnimatorParameters::new())
        .build()
        .unwrap();
    let mut camera = TopDownCamera::start(CameraSettings::default(), target, &scene).unwrap();
    let mut input = InputState::new();
    input.press(Button::KeyW);

    c.bench_function("player_and_camera_frame", |b| {
        b.iter(|| {
            player.tick(&input, 1.0 / 60.0);
            scene.set_position(target, player.position());
            black_box(camera.tick(1.0 / 60.0, &mut scene))
        })
    });
}

criterion_group!(benches, bench_aabb_intersection_hit, bench_camera_tick, bench_frame);

criterion_main!(benches);
