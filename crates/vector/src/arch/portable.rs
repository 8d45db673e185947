// Copyright 2024-2025 Irreducible Inc.

use std::array;

use gfni_field::{affine_byte, affine_inverse_byte, gf2p8_mul};
use itertools::izip;

use super::PortableStrategy;
use crate::{
	lane::{lane_matrices, LaneStrategy},
	register::{Lane, QWORD_BYTES},
};

/// Applies `kernel` to every byte with the matrix of its qword. Matrices are decoded once.
#[inline(always)]
fn map_with_matrices(values: &Lane, matrices: &Lane, kernel: impl Fn(u64, u8) -> u8) -> Lane {
	let matrices = lane_matrices(matrices);
	array::from_fn(|i| kernel(matrices[i / QWORD_BYTES], values[i]))
}

impl LaneStrategy for PortableStrategy {
	fn affine_lane(values: &Lane, matrices: &Lane, imm8: u8) -> Lane {
		map_with_matrices(values, matrices, |matrix, value| affine_byte(matrix, value, imm8))
	}

	fn affine_inverse_lane(values: &Lane, matrices: &Lane, imm8: u8) -> Lane {
		map_with_matrices(values, matrices, |matrix, value| {
			affine_inverse_byte(matrix, value, imm8)
		})
	}

	fn mul_lane(lhs: &Lane, rhs: &Lane) -> Lane {
		let mut result = [0u8; 16];
		for (dst, &a, &b) in izip!(result.iter_mut(), lhs, rhs) {
			*dst = gf2p8_mul(a, b);
		}
		result
	}
}
