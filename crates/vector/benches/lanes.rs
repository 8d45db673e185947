// Copyright 2024-2025 Irreducible Inc.

use std::array;

use criterion::{
	criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion, Throughput,
};
use gfni_vector::{
	arch::{OptimalStrategy, PortableStrategy},
	lane::{process_lanes, LaneOp, LaneStrategy},
	register::REGISTER_BYTES,
	VectorLength, VectorRegister,
};
use rand::{thread_rng, Rng};

fn random_register(rng: &mut impl Rng) -> VectorRegister {
	VectorRegister::from_bytes(array::from_fn(|_| rng.gen()))
}

fn bench_strategy<S: LaneStrategy>(
	group: &mut BenchmarkGroup<WallTime>,
	name: &str,
	op: LaneOp,
	src1: &VectorRegister,
	src2: &VectorRegister,
) {
	group.bench_function(name, |bench| {
		bench.iter(|| process_lanes::<S>(op, src1, src2, VectorLength::V512))
	});
}

fn lanes(c: &mut Criterion) {
	let mut rng = thread_rng();
	let src1 = random_register(&mut rng);
	let src2 = random_register(&mut rng);
	let imm8 = rng.gen();

	for (op_name, op) in [
		("gf2p8affineqb", LaneOp::Affine { imm8 }),
		("gf2p8affineinvqb", LaneOp::AffineInverse { imm8 }),
		("gf2p8mulb", LaneOp::Mul),
	] {
		let mut group = c.benchmark_group(op_name);
		group.throughput(Throughput::Bytes(REGISTER_BYTES as u64));
		bench_strategy::<PortableStrategy>(&mut group, "portable", op, &src1, &src2);
		bench_strategy::<OptimalStrategy>(&mut group, "optimal", op, &src1, &src2);
		group.finish();
	}
}

criterion_group!(vector_lanes, lanes);
criterion_main!(vector_lanes);
