//! SM4 and PRESENT single-block benchmarks.
use criterion::{BenchmarkId, Throughput, criterion_group, criterion_main};
use zkblock::{Present, PresentImpl, Sm4};

mod utils;
use utils::{Benchmarker, config};

fn bench(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("block");

    group.throughput(Throughput::Bytes(16));
    let sm4 = Sm4::new(&[0x42; 16]);
    group.bench_function("sm4/encrypt", |b| b.iter(|| sm4.encrypt_block(&[0; 16])));

    group.throughput(Throughput::Bytes(8));
    for imp in PresentImpl::ALL {
        let present = Present::new128(&[0x42; 16]).with_impl(imp);
        group.bench_function(BenchmarkId::new("present128/encrypt", format!("{imp:?}")), |b| {
            b.iter(|| present.encrypt_block(&[0; 8]));
        });
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = config();
    targets = bench
);

criterion_main!(benches);
