// Copyright 2024-2025 Irreducible Inc.

use gfni_utils::checked_arithmetics::checked_int_div;

use crate::{
	register::{LANE_BYTES, QWORD_BYTES},
	Error,
};

/// Active width of a vector operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VectorLength {
	V128,
	V256,
	V512,
}

impl VectorLength {
	pub const ALL: [Self; 3] = [Self::V128, Self::V256, Self::V512];

	pub const fn bits(self) -> usize {
		match self {
			Self::V128 => 128,
			Self::V256 => 256,
			Self::V512 => 512,
		}
	}

	pub const fn bytes(self) -> usize {
		self.bits() / 8
	}

	/// Number of 128-bit lanes.
	pub const fn lanes(self) -> usize {
		checked_int_div(self.bytes(), LANE_BYTES)
	}

	pub const fn qwords(self) -> usize {
		checked_int_div(self.bytes(), QWORD_BYTES)
	}

	pub fn from_bits(bits: usize) -> Result<Self, Error> {
		match bits {
			128 => Ok(Self::V128),
			256 => Ok(Self::V256),
			512 => Ok(Self::V512),
			_ => Err(Error::UnsupportedVectorLength { bits }),
		}
	}

	/// Length from the two-bit EVEX.L'L field (VEX.L is its low bit).
	pub fn from_vl_field(vl: u8) -> Result<Self, Error> {
		match vl {
			0 => Ok(Self::V128),
			1 => Ok(Self::V256),
			2 => Ok(Self::V512),
			_ => Err(Error::UnsupportedVectorLength {
				bits: 128 << (vl & 0b11),
			}),
		}
	}
}
