//! Criterion setup shared by the benchmarks. The `cpb` feature reports cycles per byte.

use criterion::Criterion;

#[cfg(feature = "cpb")]
use criterion_cycles_per_byte::CyclesPerByte;

#[cfg(not(feature = "cpb"))]
pub type Benchmarker = Criterion;

#[cfg(feature = "cpb")]
pub type Benchmarker = Criterion<CyclesPerByte>;

pub fn config() -> Benchmarker {
    let c = Criterion::default().sample_size(50);
    #[cfg(feature = "cpb")]
    let c = c.with_measurement(CyclesPerByte);
    c
}
