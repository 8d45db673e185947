// Copyright 2024-2025 Irreducible Inc.

use std::array;

use gfni_field::{affine_inverse_byte, gf2p8_mul, linear_transformation::aes_sbox, AffineMatrix};
use gfni_vector::{
	execute, ArrayRegisterFile, Gf2p8Instruction, Gf2p8Opcode, MaskingMode, OpmaskRegister,
	RegisterFile, VectorLength, VectorRegister, VectorRegisterId,
};
use proptest::prelude::*;

const DST: usize = 1;
const SRC1: usize = 2;
const SRC2: usize = 3;
const MASK: usize = 5;

fn reg(index: usize) -> VectorRegisterId {
	VectorRegisterId::new(index).unwrap()
}

fn seeded_registers(prior: [u8; 64], src1: [u8; 64], src2: [u8; 64], mask: u64) -> ArrayRegisterFile {
	let mut regs = ArrayRegisterFile::default();
	regs.set_vector(reg(DST), VectorRegister::from_bytes(prior));
	regs.set_vector(reg(SRC1), VectorRegister::from_bytes(src1));
	regs.set_vector(reg(SRC2), VectorRegister::from_bytes(src2));
	regs.set_opmask(OpmaskRegister::new(MASK).unwrap(), mask);
	regs
}

fn masking_mode(zeroing: bool) -> MaskingMode {
	if zeroing {
		MaskingMode::Zero
	} else {
		MaskingMode::Merge
	}
}

fn register_bytes() -> impl Strategy<Value = [u8; 64]> {
	any::<[[u8; 32]; 2]>().prop_map(|halves| array::from_fn(|i| halves[i / 32][i % 32]))
}

fn len_strategy() -> impl Strategy<Value = VectorLength> {
	prop_oneof![
		Just(VectorLength::V128),
		Just(VectorLength::V256),
		Just(VectorLength::V512),
	]
}

proptest! {
	#[test]
	fn test_masked_mul_is_byte_granular(
		prior in register_bytes(),
		src1 in register_bytes(),
		src2 in register_bytes(),
		mask in any::<u64>(),
		zeroing in any::<bool>(),
		len in len_strategy(),
	) {
		let mut regs = seeded_registers(prior, src1, src2, mask);
		let instruction = Gf2p8Instruction::evex(
			Gf2p8Opcode::MulB,
			len,
			reg(DST),
			reg(SRC1),
			reg(SRC2),
			OpmaskRegister::new(MASK).unwrap(),
			masking_mode(zeroing),
		)
		.unwrap();
		execute(&instruction, &mut regs);

		let dst = regs.vector(reg(DST));
		for i in 0..64 {
			let expected = if i >= len.bytes() {
				0
			} else if (mask >> i) & 1 == 1 {
				gf2p8_mul(src1[i], src2[i])
			} else if zeroing {
				0
			} else {
				prior[i]
			};
			prop_assert_eq!(dst.as_bytes()[i], expected, "byte {}", i);
		}
	}

	#[test]
	fn test_masked_affine_inverse_is_qword_granular(
		prior in register_bytes(),
		src1 in register_bytes(),
		matrices in any::<[u64; 8]>(),
		mask in any::<u64>(),
		imm8 in any::<u8>(),
		zeroing in any::<bool>(),
	) {
		let src2 = VectorRegister::from_qwords(matrices);
		let mut regs = seeded_registers(prior, src1, *src2.as_bytes(), mask);
		let instruction = Gf2p8Instruction::evex(
			Gf2p8Opcode::AffineInvQb { imm8 },
			VectorLength::V512,
			reg(DST),
			reg(SRC1),
			reg(SRC2),
			OpmaskRegister::new(MASK).unwrap(),
			masking_mode(zeroing),
		)
		.unwrap();
		execute(&instruction, &mut regs);

		let dst = regs.vector(reg(DST));
		for i in 0..64 {
			let qword = i / 8;
			let expected = if (mask >> qword) & 1 == 1 {
				affine_inverse_byte(matrices[qword], src1[i], imm8)
			} else if zeroing {
				0
			} else {
				prior[i]
			};
			prop_assert_eq!(dst.as_bytes()[i], expected, "byte {}", i);
		}
	}
}

#[test]
fn test_all_clear_merge_mask_leaves_destination_unchanged() {
	let prior: [u8; 64] = array::from_fn(|i| i as u8);
	let mut regs = seeded_registers(prior, [0x11; 64], [0x22; 64], 0);
	let instruction = Gf2p8Instruction::evex(
		Gf2p8Opcode::AffineQb { imm8: 0x7f },
		VectorLength::V512,
		reg(DST),
		reg(SRC1),
		reg(SRC2),
		OpmaskRegister::new(MASK).unwrap(),
		MaskingMode::Merge,
	)
	.unwrap();
	execute(&instruction, &mut regs);

	assert_eq!(regs.vector(reg(DST)).as_bytes(), &prior);
}

#[test]
fn test_masked_narrow_width_clears_upper_bytes_even_when_merging() {
	let mut regs = seeded_registers([0xaa; 64], [0x01; 64], [0x01; 64], u64::MAX);
	let instruction = Gf2p8Instruction::evex(
		Gf2p8Opcode::MulB,
		VectorLength::V128,
		reg(DST),
		reg(SRC1),
		reg(SRC2),
		OpmaskRegister::new(MASK).unwrap(),
		MaskingMode::Merge,
	)
	.unwrap();
	execute(&instruction, &mut regs);

	let dst = regs.vector(reg(DST));
	assert_eq!(&dst.as_bytes()[..16], &[0x01; 16]);
	assert_eq!(&dst.as_bytes()[16..], &[0; 48]);
}

#[test]
fn test_aes_sbox_through_affine_inverse() {
	let mut regs = ArrayRegisterFile::default();
	let values: [u8; 64] = array::from_fn(|i| (i * 4) as u8);
	regs.set_vector(reg(SRC1), VectorRegister::from_bytes(values));
	regs.set_vector(reg(SRC2), VectorRegister::broadcast_qword(AffineMatrix::AES_SBOX.val()));

	let instruction = Gf2p8Instruction::vex(
		Gf2p8Opcode::AffineInvQb {
			imm8: AffineMatrix::AES_SBOX_TRANSLATION,
		},
		VectorLength::V256,
		reg(DST),
		reg(SRC1),
		reg(SRC2),
	)
	.unwrap();
	execute(&instruction, &mut regs);

	let dst = regs.vector(reg(DST));
	for (&byte, &value) in dst.as_bytes()[..32].iter().zip(&values) {
		assert_eq!(byte, aes_sbox(value));
	}
	assert_eq!(&dst.as_bytes()[32..], &[0; 32]);
}
