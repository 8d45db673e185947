// Copyright 2024-2025 Irreducible Inc.

use std::array;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use gfni_field::{
	affine_byte, affine_inverse_byte, gf2p8_mul,
	reference::{affine_reference, mul_reference},
	AESField8b,
};
use rand::{thread_rng, Rng};

/// This number is chosen for values to fit into L1 cache
const BATCH_SIZE: usize = 64;

fn random_batch(rng: &mut impl Rng) -> [u8; BATCH_SIZE] {
	array::from_fn(|_| rng.gen())
}

fn multiply(c: &mut Criterion) {
	let mut rng = thread_rng();
	let lhs = random_batch(&mut rng);
	let rhs = random_batch(&mut rng);

	let mut group = c.benchmark_group("gf2p8_mul");
	group.throughput(Throughput::Elements(BATCH_SIZE as u64));
	group.bench_function("log_exp", |bench| {
		bench.iter(|| -> [u8; BATCH_SIZE] { array::from_fn(|i| gf2p8_mul(lhs[i], rhs[i])) })
	});
	group.bench_function("bit_serial", |bench| {
		bench.iter(|| -> [u8; BATCH_SIZE] { array::from_fn(|i| mul_reference(lhs[i], rhs[i])) })
	});
	group.bench_function("AESField8b::mul", |bench| {
		bench.iter(|| -> [AESField8b; BATCH_SIZE] {
			array::from_fn(|i| AESField8b::new(lhs[i]) * AESField8b::new(rhs[i]))
		})
	});
	group.finish();
}

fn affine(c: &mut Criterion) {
	let mut rng = thread_rng();
	let values = random_batch(&mut rng);
	let matrix: u64 = rng.gen();
	let imm8: u8 = rng.gen();

	let mut group = c.benchmark_group("gf2p8_affine");
	group.throughput(Throughput::Elements(BATCH_SIZE as u64));
	group.bench_function("affine", |bench| {
		bench.iter(|| -> [u8; BATCH_SIZE] {
			array::from_fn(|i| affine_byte(matrix, values[i], imm8))
		})
	});
	group.bench_function("affine_reference", |bench| {
		bench.iter(|| -> [u8; BATCH_SIZE] {
			array::from_fn(|i| affine_reference(matrix, values[i], imm8))
		})
	});
	group.bench_function("affine_inverse", |bench| {
		bench.iter(|| -> [u8; BATCH_SIZE] {
			array::from_fn(|i| affine_inverse_byte(matrix, values[i], imm8))
		})
	});
	group.finish();
}

criterion_group!(kernels, multiply, affine);
criterion_main!(kernels);
