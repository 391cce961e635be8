//! Criterion-Benchmarks für die Geometrie-Hotpaths.

use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec2;
use plan_region_viewer::render::tessellate_region;
use plan_region_viewer::{PlanRegion, PlanScene, WorldBounds};
use std::hint::black_box;

/// Baut eine synthetische Szene mit `n` Quadrat-Regionen im Gitter.
fn grid_scene(n: usize) -> PlanScene {
    let per_row = (n as f32).sqrt().ceil() as usize;
    let regions = (0..n)
        .map(|i| {
            let col = (i % per_row) as f32;
            let row = (i / per_row) as f32;
            let min = Vec2::new(col * 20.0, row * 20.0);
            let max = min + Vec2::new(10.0, 10.0);
            let points = vec![
                Vec2::new(min.x, min.y),
                Vec2::new(max.x, min.y),
                Vec2::new(max.x, max.y),
                Vec2::new(min.x, max.y),
            ];
            PlanRegion {
                id: i as u64,
                bounding_box: WorldBounds::from_points(&points),
                points,
                render_path: None,
                area_raw: 100.0,
                area_world: 100.0,
            }
        })
        .collect();
    PlanScene {
        regions,
        bounds: Some(WorldBounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: per_row as f32 * 20.0,
            max_y: per_row as f32 * 20.0,
        }),
        name: None,
    }
}

fn bench_regions_in_rect(c: &mut Criterion) {
    let scene = grid_scene(1000);
    c.bench_function("regions_in_rect_1000", |b| {
        b.iter(|| {
            scene.regions_in_rect(
                black_box(Vec2::new(100.0, 100.0)),
                black_box(Vec2::new(300.0, 300.0)),
            )
        })
    });
}

fn bench_region_at(c: &mut Criterion) {
    let scene = grid_scene(1000);
    c.bench_function("region_at_1000", |b| {
        b.iter(|| scene.region_at(black_box(Vec2::new(205.0, 205.0))))
    });
}

fn bench_tessellation(c: &mut Criterion) {
    let scene = grid_scene(1000);
    c.bench_function("tessellate_1000", |b| {
        b.iter(|| {
            scene
                .regions
                .iter()
                .filter_map(|r| tessellate_region(black_box(r)))
                .count()
        })
    });
}

criterion_group!(
    benches,
    bench_regions_in_rect,
    bench_region_at,
    bench_tessellation
);
criterion_main!(benches);
