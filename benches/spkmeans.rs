use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use spkmeans::{spkmeans, SpkMeansConfig};

const WC: usize = 64;
const K: usize = 8;

/// Synthetic corpus: each document leans toward one of K topics, with a
/// small uniform noise floor so the clusters overlap a little.
fn synthetic_docs(dc: usize) -> Vec<Vec<f32>> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..dc)
        .map(|i| {
            let topic = i % K;
            (0..WC)
                .map(|j| {
                    let noise: f32 = rng.gen_range(0.0..0.1);
                    if j % K == topic {
                        1.0 + noise
                    } else {
                        noise
                    }
                })
                .collect()
        })
        .collect()
}

fn bench_spkmeans(c: &mut Criterion) {
    let mut group = c.benchmark_group("spkmeans");
    for &dc in &[100_usize, 1_000] {
        let docs = synthetic_docs(dc);
        group.bench_with_input(BenchmarkId::from_parameter(dc), &docs, |b, docs| {
            b.iter(|| {
                let mut docs = docs.clone();
                spkmeans(&mut docs, &SpkMeansConfig::new(K)).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_spkmeans);
criterion_main!(benches);
