// Copyright 2024-2025 Irreducible Inc.

//! Per-byte kernels of `GF2P8AFFINEQB`, `GF2P8AFFINEINVQB` and `GF2P8MULB`.
//!
//! Every function is total: any combination of input bytes is valid.

use crate::{
	aes_field::{inverse, mul_via_tables},
	tracing::trace_kernel,
};

/// Multiplies the bit vector `value` by the 8x8 matrix `matrix` and adds `imm8`.
///
/// The lowest byte of `matrix` produces bit 7 of the result, the highest byte produces bit 0.
#[inline]
pub fn affine_byte(matrix: u64, value: u8, imm8: u8) -> u8 {
	trace_kernel!("affine_byte", matrix = matrix, value = value, imm8 = imm8);

	let mut rows = matrix;
	let mut result = 0u8;
	for i in (0..8).rev() {
		result |= parity_byte(rows as u8 & value) << i;
		rows >>= 8;
	}

	result ^ imm8
}

/// Same as [`affine_byte`] applied to the multiplicative inverse of `value` (0 stays 0).
#[inline]
pub fn affine_inverse_byte(matrix: u64, value: u8, imm8: u8) -> u8 {
	trace_kernel!("affine_inverse_byte", matrix = matrix, value = value, imm8 = imm8);

	affine_byte(matrix, inverse(value), imm8)
}

/// Field product of two bytes.
#[inline]
pub fn gf2p8_mul(a: u8, b: u8) -> u8 {
	trace_kernel!("gf2p8_mul", a = a, b = b);

	mul_via_tables(a, b)
}

#[inline(always)]
fn parity_byte(value: u8) -> u8 {
	(value.count_ones() & 1) as u8
}
