// Copyright 2024-2025 Irreducible Inc.

//! Bit-serial definitions of the field operations.
//!
//! These follow the architectural pseudocode literally and are only used to verify the
//! table-driven implementation and to regenerate the tables. They are not on any execution path.

use crate::aes_field::{AES_GENERATOR, AES_REDUCTION_POLYNOMIAL, MULTIPLICATIVE_ORDER};

/// Carry-less product of two bytes, up to 15 bits wide.
pub const fn clmul_u8(a: u8, b: u8) -> u16 {
	let mut product = 0u16;
	let mut bit = 0;
	while bit < 8 {
		if (a >> bit) & 1 == 1 {
			product ^= (b as u16) << bit;
		}
		bit += 1;
	}

	product
}

/// Reduce a carry-less product modulo the AES polynomial, clearing bits 14 down to 8.
pub const fn reduce(mut product: u16) -> u8 {
	let mut bit = 14;
	while bit > 7 {
		if (product >> bit) & 1 == 1 {
			product ^= AES_REDUCTION_POLYNOMIAL << (bit - 8);
		}
		bit -= 1;
	}

	product as u8
}

/// Field multiplication by polynomial multiply-and-reduce.
pub const fn mul_reference(a: u8, b: u8) -> u8 {
	reduce(clmul_u8(a, b))
}

/// Powers of the generator, with the last entry wrapping around to 1.
pub const fn generate_exp_table() -> [u8; 256] {
	let mut table = [0u8; 256];
	let mut value = 1u8;
	let mut i = 0;
	while i < 256 {
		table[i] = value;
		value = mul_reference(value, AES_GENERATOR);
		i += 1;
	}

	table
}

/// Discrete logarithms, with 0 mapped to 0.
pub const fn generate_log_table() -> [u8; 256] {
	let exp = generate_exp_table();
	let mut table = [0u8; 256];
	let mut i = 0;
	while i < MULTIPLICATIVE_ORDER {
		table[exp[i] as usize] = i as u8;
		i += 1;
	}

	table
}

/// Multiplicative inverses, with 0 mapped to 0.
pub const fn generate_inverse_table() -> [u8; 256] {
	let exp = generate_exp_table();
	let log = generate_log_table();
	let mut table = [0u8; 256];
	let mut a = 1;
	while a < 256 {
		let inv_log = (MULTIPLICATIVE_ORDER - log[a] as usize) % MULTIPLICATIVE_ORDER;
		table[a] = exp[inv_log];
		a += 1;
	}

	table
}

/// Affine transformation following the architectural pseudocode: output bit `7 - k` is the
/// parity of byte `k` of `matrix` masked by `value`.
pub fn affine_reference(matrix: u64, value: u8, imm8: u8) -> u8 {
	let rows = matrix.to_le_bytes();
	let mut result = 0u8;
	for (k, row) in rows.iter().enumerate() {
		let parity = (0..8).fold(0u8, |acc, bit| acc ^ ((row & value) >> bit) & 1);
		result |= parity << (7 - k);
	}

	result ^ imm8
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::aes_field::{exp, inverse, log};

	#[test]
	fn test_embedded_tables_match_generated() {
		let exp_table = generate_exp_table();
		let log_table = generate_log_table();
		let inverse_table = generate_inverse_table();
		for i in 0..256 {
			assert_eq!(exp(i), exp_table[i], "exp[{i}]");
			assert_eq!(log(i as u8), log_table[i], "log[{i}]");
			assert_eq!(inverse(i as u8), inverse_table[i], "inverse[{i}]");
		}
	}

	#[test]
	fn test_reduction_clears_high_bits() {
		assert_eq!(reduce(0x11b), 0);
		assert_eq!(reduce(0x100), 0x1b);
		assert_eq!(mul_reference(0x57, 0x83), 0xc1);
		assert_eq!(mul_reference(0x57, 0x13), 0xfe);
	}

	#[test]
	fn test_clmul_is_carry_less() {
		assert_eq!(clmul_u8(0x03, 0x03), 0x05);
		assert_eq!(clmul_u8(0xff, 0xff), 0x5555);
	}
}
