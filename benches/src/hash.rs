//! Hash benchmarks: SHA-256, both SHA-512 compressions, both Keccak permutations and SM3.
use criterion::{BenchmarkId, Throughput, criterion_group, criterion_main};
use zkhash::{
    KeccakImpl, Sha512Impl,
    sha3::Sha3_256,
    sha256::sha256,
    sha512::Sha512,
    sm3::sm3,
};

mod utils;
use utils::{Benchmarker, config};

const SIZES: &[usize] = &[64, 1024, 8192];

fn bench(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("hash");

    for size in SIZES {
        let buf = vec![0u8; *size];
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_function(BenchmarkId::new("sha256", size), |b| {
            b.iter(|| sha256(&buf));
        });
        group.bench_function(BenchmarkId::new("sm3", size), |b| {
            b.iter(|| sm3(&buf));
        });

        for imp in Sha512Impl::ALL {
            group.bench_function(BenchmarkId::new(format!("sha512/{imp:?}"), size), |b| {
                b.iter(|| {
                    let mut h = Sha512::with_impl(imp);
                    h.update(&buf);
                    h.finalize()
                });
            });
        }

        for imp in KeccakImpl::ALL {
            group.bench_function(BenchmarkId::new(format!("sha3-256/{imp:?}"), size), |b| {
                b.iter(|| {
                    let mut h = Sha3_256::with_impl(imp);
                    h.update(&buf);
                    h.finalize()
                });
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
