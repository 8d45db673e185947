// Copyright 2024-2025 Irreducible Inc.

use auto_impl::auto_impl;

use crate::{Error, VectorRegister};

pub const VECTOR_REGISTERS: usize = 32;
pub const OPMASK_REGISTERS: usize = 8;

/// Index of a vector register (`xmm0`..`xmm31`, sharing storage with the wider aliases).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VectorRegisterId(u8);

impl VectorRegisterId {
	pub fn new(index: usize) -> Result<Self, Error> {
		if index >= VECTOR_REGISTERS {
			return Err(Error::RegisterOutOfRange {
				index,
				max: VECTOR_REGISTERS,
			});
		}

		Ok(Self(index as u8))
	}

	pub const fn index(self) -> usize {
		self.0 as usize
	}
}

/// Index of an opmask register. `k0` in an EVEX mask field means "no masking".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpmaskRegister(u8);

impl OpmaskRegister {
	pub const K0: Self = Self(0);

	pub fn new(index: usize) -> Result<Self, Error> {
		if index >= OPMASK_REGISTERS {
			return Err(Error::OpmaskOutOfRange {
				index,
				max: OPMASK_REGISTERS,
			});
		}

		Ok(Self(index as u8))
	}

	pub const fn index(self) -> usize {
		self.0 as usize
	}

	pub const fn is_k0(self) -> bool {
		self.0 == 0
	}
}

/// Register storage owned by the surrounding emulator.
///
/// Writes receive the final 512-bit value: masking and zero-extension have already been applied.
#[auto_impl(&mut, Box)]
pub trait RegisterFile {
	fn vector(&self, reg: VectorRegisterId) -> VectorRegister;

	fn set_vector(&mut self, reg: VectorRegisterId, value: VectorRegister);

	fn opmask(&self, reg: OpmaskRegister) -> u64;
}

/// Plain in-memory register file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayRegisterFile {
	vectors: [VectorRegister; VECTOR_REGISTERS],
	opmasks: [u64; OPMASK_REGISTERS],
}

impl ArrayRegisterFile {
	pub fn set_opmask(&mut self, reg: OpmaskRegister, value: u64) {
		self.opmasks[reg.index()] = value;
	}
}

impl Default for ArrayRegisterFile {
	fn default() -> Self {
		Self {
			vectors: [VectorRegister::ZERO; VECTOR_REGISTERS],
			opmasks: [0; OPMASK_REGISTERS],
		}
	}
}

impl RegisterFile for ArrayRegisterFile {
	fn vector(&self, reg: VectorRegisterId) -> VectorRegister {
		self.vectors[reg.index()]
	}

	fn set_vector(&mut self, reg: VectorRegisterId, value: VectorRegister) {
		self.vectors[reg.index()] = value;
	}

	fn opmask(&self, reg: OpmaskRegister) -> u64 {
		self.opmasks[reg.index()]
	}
}
