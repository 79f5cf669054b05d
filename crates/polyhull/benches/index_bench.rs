//! Criterion benchmarks for the segment index backends.
//! Focus sizes: m in {100, 1000, 10000} segments.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polyhull::geom::{Coordinate, Envelope, LineSegment};
use polyhull::index::{LineSegmentIndex, ScanIndex};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_segments(m: usize, seed: u64) -> Vec<LineSegment<usize>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m)
        .map(|i| {
            let x: f64 = rng.gen_range(0.0..100.0);
            let y: f64 = rng.gen_range(0.0..100.0);
            let p = Coordinate::new(x, y);
            let q = Coordinate::new(x + rng.gen_range(-1.0..1.0), y + rng.gen_range(-1.0..1.0));
            LineSegment::tagged(p, q, i)
        })
        .collect()
}

fn bench_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_index");
    let probe = Envelope::from_points(&Coordinate::new(40.0, 40.0), &Coordinate::new(45.0, 45.0));
    for &m in &[100usize, 1000, 10000] {
        let segs = random_segments(m, 7);
        group.bench_with_input(BenchmarkId::new("rtree_build", m), &segs, |b, segs| {
            b.iter(|| {
                let mut idx = LineSegmentIndex::new();
                idx.add_all(segs.iter().copied());
                idx
            })
        });
        let mut rtree = LineSegmentIndex::new();
        rtree.add_all(segs.iter().copied());
        group.bench_with_input(BenchmarkId::new("rtree_query", m), &rtree, |b, idx| {
            b.iter(|| idx.query_envelope(&probe).len())
        });
        let mut scan = LineSegmentIndex::with_index(ScanIndex::new());
        scan.add_all(segs.iter().copied());
        group.bench_with_input(BenchmarkId::new("scan_query", m), &scan, |b, idx| {
            b.iter(|| idx.query_envelope(&probe).len())
        });
        group.bench_with_input(BenchmarkId::new("rtree_remove_all", m), &segs, |b, segs| {
            b.iter_batched(
                || {
                    let mut idx = LineSegmentIndex::new();
                    idx.add_all(segs.iter().copied());
                    idx
                },
                |mut idx| {
                    for s in segs {
                        idx.remove(s);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_index);
criterion_main!(benches);
