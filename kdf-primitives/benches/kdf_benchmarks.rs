#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Criterion benchmarks for the counter-mode KDFs
//!
//! Cost grows with the number of blocks, so each construction is measured
//! at a few output lengths that straddle block boundaries.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kdf_primitives::hash::DigestAlgorithm;
use kdf_primitives::kdf::{kbkdf_ctr_into, sskdf_digest_into, sskdf_hmac_into};
use std::hint::black_box;

const SECRET: [u8; 32] = [0x5c; 32];
const INFO: &[u8] = b"benchmark fixed info";
const OUTPUT_LENGTHS: [usize; 4] = [16, 32, 64, 1024];

fn bench_kbkdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("kbkdf_ctr_hmac_sha256");
    for out_len in OUTPUT_LENGTHS {
        group.throughput(Throughput::Bytes(out_len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(out_len), &out_len, |b, &out_len| {
            let mut out = vec![0u8; out_len];
            b.iter(|| {
                black_box(kbkdf_ctr_into(
                    DigestAlgorithm::Sha256,
                    black_box(&SECRET),
                    black_box(INFO),
                    &mut out,
                ))
            });
        });
    }
    group.finish();
}

fn bench_sskdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("sskdf_digest_sha256");
    for out_len in OUTPUT_LENGTHS {
        group.throughput(Throughput::Bytes(out_len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(out_len), &out_len, |b, &out_len| {
            let mut out = vec![0u8; out_len];
            b.iter(|| {
                black_box(sskdf_digest_into(
                    DigestAlgorithm::Sha256,
                    black_box(&SECRET),
                    black_box(INFO),
                    &mut out,
                ))
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("sskdf_hmac_sha256");
    for out_len in OUTPUT_LENGTHS {
        group.throughput(Throughput::Bytes(out_len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(out_len), &out_len, |b, &out_len| {
            let mut out = vec![0u8; out_len];
            b.iter(|| {
                black_box(sskdf_hmac_into(
                    DigestAlgorithm::Sha256,
                    black_box(&SECRET),
                    black_box(INFO),
                    black_box(b"salt"),
                    &mut out,
                ))
            });
        });
    }
    group.finish();
}

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("sskdf_digest_by_algorithm");
    for alg in DigestAlgorithm::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(alg.name()), &alg, |b, &alg| {
            let mut out = [0u8; 64];
            b.iter(|| black_box(sskdf_digest_into(alg, black_box(&SECRET), INFO, &mut out)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kbkdf, bench_sskdf, bench_algorithms);
criterion_main!(benches);
