// -*- mode: rust; -*-
//
// This file is part of curve25519-x4.
// See LICENSE for licensing information.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand_core::{OsRng, RngCore};

use curve25519_x4::{keygen, selected_backend, shared_secret, x25519, BackendKind};

fn random_secrets() -> [[u8; 32]; 4] {
    let mut k = [[0u8; 32]; 4];
    for lane in k.iter_mut() {
        OsRng.fill_bytes(lane);
    }
    k
}

fn backend_name() -> &'static str {
    match selected_backend() {
        BackendKind::Avx2 => "avx2",
        BackendKind::Portable => "portable",
    }
}

fn bench_keygen(c: &mut Criterion) {
    let secrets = random_secrets();
    c.bench_function(&format!("{}/keygen x4", backend_name()), |b| {
        b.iter(|| keygen(black_box(&secrets)))
    });
}

fn bench_shared_secret(c: &mut Criterion) {
    let secrets = random_secrets();
    let peers = keygen(&random_secrets());
    c.bench_function(&format!("{}/shared_secret x4", backend_name()), |b| {
        b.iter(|| shared_secret(black_box(&secrets), black_box(&peers)))
    });
}

fn bench_x25519(c: &mut Criterion) {
    let k = random_secrets();
    let u = keygen(&random_secrets()).map(|p| p.to_bytes());
    c.bench_function(&format!("{}/x25519 x4", backend_name()), |b| {
        b.iter(|| x25519(black_box(&k), black_box(&u)))
    });
}

criterion_group! {
    name = x25519_benches;
    config = Criterion::default();
    targets = bench_keygen, bench_shared_secret, bench_x25519,
}
criterion_main!(x25519_benches);
