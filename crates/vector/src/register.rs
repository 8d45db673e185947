// Copyright 2024-2025 Irreducible Inc.

use std::{
	array,
	fmt::{Debug, Formatter},
};

use bytemuck::{must_cast, must_cast_mut, must_cast_ref, Pod, Zeroable};

use crate::Error;

/// Bytes in a 128-bit lane.
pub const LANE_BYTES: usize = 16;
/// Bytes in a 64-bit element (one affine matrix).
pub const QWORD_BYTES: usize = 8;
/// Bytes in the widest architectural vector register.
pub const REGISTER_BYTES: usize = 64;
/// Lanes in the widest architectural vector register.
pub const REGISTER_LANES: usize = REGISTER_BYTES / LANE_BYTES;

/// 128-bit slice of a vector register, processed independently of the other lanes.
pub type Lane = [u8; LANE_BYTES];

/// Contents of a 512-bit vector register. Byte 0 is the least significant byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Zeroable, Pod)]
#[repr(transparent)]
pub struct VectorRegister([u8; REGISTER_BYTES]);

impl VectorRegister {
	pub const ZERO: Self = Self([0; REGISTER_BYTES]);

	pub const fn from_bytes(bytes: [u8; REGISTER_BYTES]) -> Self {
		Self(bytes)
	}

	/// Builds a register from its low bytes; the remaining bytes are zero.
	pub fn from_low_bytes(bytes: &[u8]) -> Result<Self, Error> {
		if bytes.len() > REGISTER_BYTES {
			return Err(Error::RegisterImageTooLong {
				len: bytes.len(),
				max: REGISTER_BYTES,
			});
		}

		let mut result = Self::ZERO;
		result.0[..bytes.len()].copy_from_slice(bytes);
		Ok(result)
	}

	pub fn from_lanes(lanes: [Lane; REGISTER_LANES]) -> Self {
		must_cast(lanes)
	}

	pub fn from_qwords(qwords: [u64; REGISTER_BYTES / QWORD_BYTES]) -> Self {
		let mut result = Self::ZERO;
		for (chunk, qword) in result.0.chunks_exact_mut(QWORD_BYTES).zip(qwords) {
			chunk.copy_from_slice(&qword.to_le_bytes());
		}
		result
	}

	/// Same 64-bit value in every qword, as a memory broadcast operand supplies it.
	pub fn broadcast_qword(qword: u64) -> Self {
		Self::from_qwords([qword; REGISTER_BYTES / QWORD_BYTES])
	}

	pub fn broadcast_byte(byte: u8) -> Self {
		Self([byte; REGISTER_BYTES])
	}

	pub const fn as_bytes(&self) -> &[u8; REGISTER_BYTES] {
		&self.0
	}

	pub fn as_bytes_mut(&mut self) -> &mut [u8; REGISTER_BYTES] {
		&mut self.0
	}

	pub fn lanes(&self) -> &[Lane; REGISTER_LANES] {
		must_cast_ref(&self.0)
	}

	pub fn lanes_mut(&mut self) -> &mut [Lane; REGISTER_LANES] {
		must_cast_mut(&mut self.0)
	}

	pub fn lane(&self, index: usize) -> &Lane {
		&self.lanes()[index]
	}

	/// Little-endian qword `index`.
	pub fn qword(&self, index: usize) -> u64 {
		let start = index * QWORD_BYTES;
		u64::from_le_bytes(array::from_fn(|i| self.0[start + i]))
	}

	pub fn qwords(&self) -> [u64; REGISTER_BYTES / QWORD_BYTES] {
		array::from_fn(|index| self.qword(index))
	}
}

impl Default for VectorRegister {
	fn default() -> Self {
		Self::ZERO
	}
}

impl From<[u8; REGISTER_BYTES]> for VectorRegister {
	fn from(bytes: [u8; REGISTER_BYTES]) -> Self {
		Self(bytes)
	}
}

impl From<VectorRegister> for [u8; REGISTER_BYTES] {
	fn from(value: VectorRegister) -> Self {
		value.0
	}
}

impl Debug for VectorRegister {
	/// Prints the lanes most significant first, each as a 128-bit hex number.
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let lanes = self
			.lanes()
			.iter()
			.rev()
			.map(|lane| format!("{:#034x}", u128::from_le_bytes(*lane)))
			.collect::<Vec<_>>();
		write!(f, "VectorRegister([{}])", lanes.join(","))
	}
}

#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;

	use super::*;

	#[test]
	fn test_lanes_view() {
		let register = VectorRegister::from_bytes(array::from_fn(|i| i as u8));
		assert_eq!(register.lane(2)[0], 32);
		assert_eq!(register.lane(3)[15], 63);
		assert_eq!(VectorRegister::from_lanes(*register.lanes()), register);
	}

	#[test]
	fn test_qwords_are_little_endian() {
		let register = VectorRegister::from_bytes(array::from_fn(|i| i as u8));
		assert_eq!(register.qword(0), 0x0706050403020100);
		assert_eq!(VectorRegister::from_qwords(register.qwords()), register);
		assert_eq!(VectorRegister::broadcast_qword(7).qword(5), 7);
	}

	#[test]
	fn test_from_low_bytes() {
		let register = VectorRegister::from_low_bytes(&[1, 2, 3]).unwrap();
		assert_eq!(&register.as_bytes()[..4], &[1, 2, 3, 0]);
		assert_matches!(
			VectorRegister::from_low_bytes(&[0; 65]),
			Err(Error::RegisterImageTooLong { len: 65, max: 64 })
		);
	}

	#[test]
	fn test_debug_format() {
		let mut register = VectorRegister::ZERO;
		register.as_bytes_mut()[0] = 0xab;
		let text = format!("{register:?}");
		assert!(text.ends_with("0x000000000000000000000000000000ab])"));
	}
}
