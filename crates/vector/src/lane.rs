// Copyright 2024-2025 Irreducible Inc.

//! Lane processor: the per-lane kernels and their application across a vector length.

use std::array;

use crate::{
	register::{Lane, QWORD_BYTES},
	VectorLength, VectorRegister,
};

/// Backend computing one 128-bit lane of each instruction.
///
/// In the affine forms each qword of `matrices` is the matrix for the eight value bytes in the
/// same qword position.
pub trait LaneStrategy {
	fn affine_lane(values: &Lane, matrices: &Lane, imm8: u8) -> Lane;

	fn affine_inverse_lane(values: &Lane, matrices: &Lane, imm8: u8) -> Lane;

	fn mul_lane(lhs: &Lane, rhs: &Lane) -> Lane;
}

/// The two matrices carried by a lane, low qword first.
#[inline]
pub fn lane_matrices(lane: &Lane) -> [u64; 2] {
	array::from_fn(|half| u64::from_le_bytes(array::from_fn(|i| lane[half * QWORD_BYTES + i])))
}

/// Per-lane operation of one instruction, with the immediate already bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneOp {
	Affine { imm8: u8 },
	AffineInverse { imm8: u8 },
	Mul,
}

impl LaneOp {
	#[inline]
	pub fn apply<S: LaneStrategy>(self, src1: &Lane, src2: &Lane) -> Lane {
		match self {
			Self::Affine { imm8 } => S::affine_lane(src1, src2, imm8),
			Self::AffineInverse { imm8 } => S::affine_inverse_lane(src1, src2, imm8),
			Self::Mul => S::mul_lane(src1, src2),
		}
	}
}

/// Applies `op` to the first `len.lanes()` lanes of the sources.
///
/// Lanes above the active length are left zero in the result.
pub fn process_lanes<S: LaneStrategy>(
	op: LaneOp,
	src1: &VectorRegister,
	src2: &VectorRegister,
	len: VectorLength,
) -> VectorRegister {
	let mut result = VectorRegister::ZERO;
	for ((dst, lhs), rhs) in result
		.lanes_mut()
		.iter_mut()
		.zip(src1.lanes())
		.zip(src2.lanes())
		.take(len.lanes())
	{
		*dst = op.apply::<S>(lhs, rhs);
	}

	result
}
