// Copyright 2024-2025 Irreducible Inc.

use gfni_utils::ensure;
use tracing::instrument;

use crate::{
	arch::OptimalStrategy,
	lane::{process_lanes, LaneOp, LaneStrategy},
	mask::{ElementSize, MaskingMode, WriteMask},
	register_file::{OpmaskRegister, RegisterFile, VectorRegisterId},
	writeback::{commit, WritePolicy},
	Error, VectorLength, VectorRegister,
};

/// Instructions of the GFNI family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gf2p8Opcode {
	/// `GF2P8AFFINEQB`
	AffineQb { imm8: u8 },
	/// `GF2P8AFFINEINVQB`
	AffineInvQb { imm8: u8 },
	/// `GF2P8MULB`
	MulB,
}

impl Gf2p8Opcode {
	pub const fn lane_op(self) -> LaneOp {
		match self {
			Self::AffineQb { imm8 } => LaneOp::Affine { imm8 },
			Self::AffineInvQb { imm8 } => LaneOp::AffineInverse { imm8 },
			Self::MulB => LaneOp::Mul,
		}
	}

	/// Granularity of the EVEX write mask.
	pub const fn mask_element(self) -> ElementSize {
		match self {
			Self::AffineQb { .. } | Self::AffineInvQb { .. } => ElementSize::Qword,
			Self::MulB => ElementSize::Byte,
		}
	}

	pub const fn mnemonic(self) -> &'static str {
		match self {
			Self::AffineQb { .. } => "gf2p8affineqb",
			Self::AffineInvQb { .. } => "gf2p8affineinvqb",
			Self::MulB => "gf2p8mulb",
		}
	}
}

/// Instruction encoding, which determines the write-back discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
	/// Destructive two-operand SSE form, 128 bits only.
	Legacy,
	/// Three-operand AVX form, 128 or 256 bits.
	Vex,
	/// Three-operand AVX-512 form with an optional write mask.
	Evex {
		opmask: OpmaskRegister,
		masking: MaskingMode,
	},
}

impl Encoding {
	pub const fn name(self) -> &'static str {
		match self {
			Self::Legacy => "legacy",
			Self::Vex => "VEX",
			Self::Evex { .. } => "EVEX",
		}
	}

	const fn supports(self, len: VectorLength) -> bool {
		match self {
			Self::Legacy => matches!(len, VectorLength::V128),
			Self::Vex => !matches!(len, VectorLength::V512),
			Self::Evex { .. } => true,
		}
	}
}

/// A decoded, validated GFNI instruction.
///
/// For the affine forms `src2` supplies the matrices and `src1` the bytes they are applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gf2p8Instruction {
	opcode: Gf2p8Opcode,
	encoding: Encoding,
	len: VectorLength,
	dst: VectorRegisterId,
	src1: VectorRegisterId,
	src2: VectorRegisterId,
}

impl Gf2p8Instruction {
	pub fn new(
		opcode: Gf2p8Opcode,
		encoding: Encoding,
		len: VectorLength,
		dst: VectorRegisterId,
		src1: VectorRegisterId,
		src2: VectorRegisterId,
	) -> Result<Self, Error> {
		ensure!(
			encoding.supports(len),
			Error::WidthNotEncodable {
				encoding: encoding.name(),
				len,
			}
		);

		if let Encoding::Legacy = encoding {
			ensure!(dst == src1, Error::LegacyNotDestructive);
		}
		if let Encoding::Evex {
			opmask,
			masking: MaskingMode::Zero,
		} = encoding
		{
			ensure!(!opmask.is_k0(), Error::ZeroingWithoutMask);
		}

		Ok(Self {
			opcode,
			encoding,
			len,
			dst,
			src1,
			src2,
		})
	}

	/// `GF2P8AFFINEQB xmm1, xmm2` style: `dst` is also the first source.
	pub fn legacy(
		opcode: Gf2p8Opcode,
		dst: VectorRegisterId,
		src: VectorRegisterId,
	) -> Result<Self, Error> {
		Self::new(opcode, Encoding::Legacy, VectorLength::V128, dst, dst, src)
	}

	pub fn vex(
		opcode: Gf2p8Opcode,
		len: VectorLength,
		dst: VectorRegisterId,
		src1: VectorRegisterId,
		src2: VectorRegisterId,
	) -> Result<Self, Error> {
		Self::new(opcode, Encoding::Vex, len, dst, src1, src2)
	}

	#[allow(clippy::too_many_arguments)]
	pub fn evex(
		opcode: Gf2p8Opcode,
		len: VectorLength,
		dst: VectorRegisterId,
		src1: VectorRegisterId,
		src2: VectorRegisterId,
		opmask: OpmaskRegister,
		masking: MaskingMode,
	) -> Result<Self, Error> {
		Self::new(opcode, Encoding::Evex { opmask, masking }, len, dst, src1, src2)
	}

	pub const fn opcode(&self) -> Gf2p8Opcode {
		self.opcode
	}

	pub const fn encoding(&self) -> Encoding {
		self.encoding
	}

	pub const fn len(&self) -> VectorLength {
		self.len
	}

	pub const fn dst(&self) -> VectorRegisterId {
		self.dst
	}

	pub const fn src1(&self) -> VectorRegisterId {
		self.src1
	}

	pub const fn src2(&self) -> VectorRegisterId {
		self.src2
	}

	/// Write-back discipline, reading the opmask register when one is encoded.
	pub fn write_policy(&self, regs: &impl RegisterFile) -> WritePolicy {
		match self.encoding {
			Encoding::Legacy => WritePolicy::PreserveUpper,
			Encoding::Vex => WritePolicy::ZeroUpper,
			Encoding::Evex { opmask, .. } if opmask.is_k0() => WritePolicy::ZeroUpper,
			Encoding::Evex { opmask, masking } => WritePolicy::Masked(WriteMask::new(
				regs.opmask(opmask),
				masking,
				self.opcode.mask_element(),
			)),
		}
	}
}

/// Computes the instruction result over the active lanes, without any write-back.
pub fn compute<S: LaneStrategy>(
	opcode: Gf2p8Opcode,
	src1: &VectorRegister,
	src2: &VectorRegister,
	len: VectorLength,
) -> VectorRegister {
	process_lanes::<S>(opcode.lane_op(), src1, src2, len)
}

/// Executes the instruction against `regs` with the fastest available lane backend.
pub fn execute(instruction: &Gf2p8Instruction, regs: &mut impl RegisterFile) {
	execute_with::<OptimalStrategy>(instruction, regs)
}

/// Reads the sources, computes the result and commits it to the destination register.
///
/// Condition flags and memory are never touched.
#[instrument(
	skip_all,
	level = "trace",
	fields(
		mnemonic = instruction.opcode.mnemonic(),
		len = instruction.len.bits(),
		encoding = instruction.encoding.name(),
	)
)]
pub fn execute_with<S: LaneStrategy>(instruction: &Gf2p8Instruction, regs: &mut impl RegisterFile) {
	let src1 = regs.vector(instruction.src1);
	let src2 = regs.vector(instruction.src2);
	let result = compute::<S>(instruction.opcode, &src1, &src2, instruction.len);

	let prior = regs.vector(instruction.dst);
	let policy = instruction.write_policy(&*regs);
	regs.set_vector(instruction.dst, commit(&prior, &result, instruction.len, policy));
}
