//! GHASH benchmarks, one group per multiplication strategy.
use criterion::{BenchmarkId, Throughput, criterion_group, criterion_main};
use zkghash::{GHash, Multiplier, universal_hash::UniversalHash};

mod utils;
use utils::{Benchmarker, config};

fn bench(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("ghash");

    for multiplier in Multiplier::ALL {
        let name = format!(
            "{:?}/{:?}/{:?}",
            multiplier.lanes, multiplier.multiply, multiplier.reduction
        );

        for size in &[16, 256, 4096] {
            let buf = vec![0u8; *size];

            group.throughput(Throughput::Bytes(*size as u64));

            group.bench_function(BenchmarkId::new(&name, size), |b| {
                let mut ghash = GHash::new_with_multiplier(&Default::default(), multiplier);
                b.iter(|| ghash.update_padded(&buf));
            });
        }
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = config();
    targets = bench
);

criterion_main!(benches);
