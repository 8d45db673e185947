// Copyright 2024-2025 Irreducible Inc.

use std::arch::x86_64::*;

use bytemuck::must_cast;

use crate::{
	arch::GfniStrategy,
	lane::LaneStrategy,
	register::Lane,
};

// The instructions take the immediate as a const generic, so the translation is applied with a
// separate XOR.
#[inline(always)]
fn translate(value: __m128i, imm8: u8) -> Lane {
	must_cast(unsafe { _mm_xor_si128(value, _mm_set1_epi8(imm8 as i8)) })
}

impl LaneStrategy for GfniStrategy {
	#[inline]
	fn affine_lane(values: &Lane, matrices: &Lane, imm8: u8) -> Lane {
		let x: __m128i = must_cast(*values);
		let a: __m128i = must_cast(*matrices);
		translate(unsafe { _mm_gf2p8affine_epi64_epi8::<0>(x, a) }, imm8)
	}

	#[inline]
	fn affine_inverse_lane(values: &Lane, matrices: &Lane, imm8: u8) -> Lane {
		let x: __m128i = must_cast(*values);
		let a: __m128i = must_cast(*matrices);
		translate(unsafe { _mm_gf2p8affineinv_epi64_epi8::<0>(x, a) }, imm8)
	}

	#[inline]
	fn mul_lane(lhs: &Lane, rhs: &Lane) -> Lane {
		let a: __m128i = must_cast(*lhs);
		let b: __m128i = must_cast(*rhs);
		must_cast(unsafe { _mm_gf2p8mul_epi8(a, b) })
	}
}
