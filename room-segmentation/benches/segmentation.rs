use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use room_segmentation::{segment_rooms, SegmentationConfig, WallRecord};

/// Grid of `n` x `n` square rooms built from full-length walls, so every
/// interior wall crosses every perpendicular one.
fn grid_walls(n: usize, cell: f64) -> Vec<WallRecord> {
    let extent = n as f64 * cell;
    let mut walls = Vec::with_capacity(2 * (n + 1));
    for i in 0..=n {
        let offset = i as f64 * cell;
        walls.push(WallRecord::from_coords(0.0, offset, extent, offset));
        walls.push(WallRecord::from_coords(offset, 0.0, offset, extent));
    }
    walls
}

fn bench_segmentation(c: &mut Criterion) {
    let config = SegmentationConfig::default();
    let mut group = c.benchmark_group("segment_rooms");

    for n in [4usize, 16, 48] {
        let walls = grid_walls(n, 10.0);
        group.bench_with_input(BenchmarkId::from_parameter(walls.len()), &walls, |b, walls| {
            b.iter(|| segment_rooms(black_box(walls), &config))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_segmentation);
criterion_main!(benches);
