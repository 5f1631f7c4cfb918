//! Benchmarks for per-pixel evalscripts

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evalpix_algorithms::scripts::{MedianNdvi, ScriptKind, VegetationIndices};
use evalpix_core::{Band, Evalscript, Sample};

fn create_sample(kind: ScriptKind, seed: usize) -> Sample {
    let v = |k: usize| ((seed * 7 + k * 13) % 200) as f64 / 400.0;
    let values = [
        (Band::Red, v(1)),
        (Band::Green, v(2)),
        (Band::Blue, v(3)),
        (Band::Nir, 0.3 + v(4)),
        (Band::RedEdge, v(5)),
        (Band::DataMask, (seed % 5 != 0) as u8 as f64),
        (Band::Clear, 1.0),
    ];
    Sample::new(kind.describe().input, values).unwrap()
}

fn bench_vegetation_indices(c: &mut Criterion) {
    let samples: Vec<_> = (0..1024)
        .map(|i| create_sample(ScriptKind::VegetationIndices, i))
        .collect();
    c.bench_function("scripts/vegetation_indices", |b| {
        b.iter(|| {
            for s in &samples {
                black_box(VegetationIndices.evaluate_default(black_box(s)).unwrap());
            }
        })
    });
}

fn bench_median_ndvi(c: &mut Criterion) {
    let mut group = c.benchmark_group("scripts/median_ndvi");
    for orbits in [4, 16, 64] {
        let samples: Vec<_> = (0..orbits)
            .map(|i| create_sample(ScriptKind::MedianNdvi, i + 1))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(orbits), &orbits, |b, _| {
            b.iter(|| MedianNdvi.evaluate_default(black_box(&samples)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_vegetation_indices, bench_median_ndvi);
criterion_main!(benches);
