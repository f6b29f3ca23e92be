//! AES block and AES-GCM benchmarks for each engine.
use criterion::{BenchmarkId, Throughput, criterion_group, criterion_main};
use zkaes::{Aes128, Aes128Gcm, Engine, gcm::TAG_SIZE, zkghash::Multiplier};

mod utils;
use utils::{Benchmarker, config};

fn bench_block(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("aes128");
    group.throughput(Throughput::Bytes(16));

    for engine in Engine::ALL {
        let aes = Aes128::with_engine(&[0x42; 16], engine);
        let block = [0u8; 16];

        group.bench_function(BenchmarkId::new("encrypt", format!("{engine:?}")), |b| {
            b.iter(|| aes.encrypt_block(&block));
        });
        group.bench_function(BenchmarkId::new("decrypt", format!("{engine:?}")), |b| {
            b.iter(|| aes.decrypt_block(&block));
        });
    }

    group.finish();
}

fn bench_gcm(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("aes128-gcm");

    for engine in Engine::ALL {
        let gcm = Aes128Gcm::from_key(&[0x42; 16], engine, Multiplier::default());

        for size in &[64, 1024, 8192] {
            let pt = vec![0u8; *size];
            let mut out = vec![0u8; *size + TAG_SIZE];

            group.throughput(Throughput::Bytes(*size as u64));

            group.bench_function(BenchmarkId::new(format!("{engine:?}"), size), |b| {
                b.iter(|| gcm.encrypt(&[0; 12], &pt, &mut out));
            });
        }
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = config();
    targets = bench_block, bench_gcm
);

criterion_main!(benches);
