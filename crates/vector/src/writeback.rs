// Copyright 2024-2025 Irreducible Inc.

//! Commit of a computed result to the destination register.

use tracing::trace;

use crate::{
	mask::{MaskingMode, WriteMask},
	VectorLength, VectorRegister,
};

/// Write-back discipline of an instruction encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
	/// Legacy SSE: bytes above the active length keep their previous value.
	PreserveUpper,
	/// VEX and unmasked EVEX: bytes above the active length are cleared.
	ZeroUpper,
	/// Masked EVEX: per-element merge or zero, bytes above the active length are cleared.
	Masked(WriteMask),
}

/// Returns the new value of the destination register.
///
/// `prior` is the destination before the instruction, `result` holds the computed bytes in its
/// low `len.bytes()` bytes.
pub fn commit(
	prior: &VectorRegister,
	result: &VectorRegister,
	len: VectorLength,
	policy: WritePolicy,
) -> VectorRegister {
	let active = len.bytes();

	match policy {
		WritePolicy::PreserveUpper => {
			trace!(?len, "preserving bytes above the active length");

			let mut committed = *prior;
			committed.as_bytes_mut()[..active].copy_from_slice(&result.as_bytes()[..active]);
			committed
		}
		WritePolicy::ZeroUpper => {
			trace!(?len, "zero-extending");

			let mut committed = VectorRegister::ZERO;
			committed.as_bytes_mut()[..active].copy_from_slice(&result.as_bytes()[..active]);
			committed
		}
		WritePolicy::Masked(mask) => {
			trace!(?len, bits = mask.bits(), mode = ?mask.mode(), "masked write");

			commit_masked(prior, result, active, mask)
		}
	}
}

fn commit_masked(
	prior: &VectorRegister,
	result: &VectorRegister,
	active: usize,
	mask: WriteMask,
) -> VectorRegister {
	let element_bytes = mask.element().bytes();
	let mut committed = VectorRegister::ZERO;

	let elements = committed.as_bytes_mut()[..active]
		.chunks_exact_mut(element_bytes)
		.zip(result.as_bytes().chunks_exact(element_bytes))
		.zip(prior.as_bytes().chunks_exact(element_bytes))
		.enumerate();
	for (index, ((dst, computed), previous)) in elements {
		if mask.selects(index) {
			dst.copy_from_slice(computed);
		} else if mask.mode() == MaskingMode::Merge {
			dst.copy_from_slice(previous);
		}
	}

	committed
}

#[cfg(test)]
mod tests {
	use std::array;

	use proptest::{arbitrary::any, proptest};

	use super::*;
	use crate::mask::ElementSize;

	fn prior() -> VectorRegister {
		VectorRegister::from_bytes(array::from_fn(|i| 0x80 | i as u8))
	}

	fn result() -> VectorRegister {
		VectorRegister::from_bytes(array::from_fn(|i| i as u8))
	}

	#[test]
	fn test_preserve_upper() {
		let committed = commit(&prior(), &result(), VectorLength::V128, WritePolicy::PreserveUpper);
		assert_eq!(&committed.as_bytes()[..16], &result().as_bytes()[..16]);
		assert_eq!(&committed.as_bytes()[16..], &prior().as_bytes()[16..]);
	}

	#[test]
	fn test_zero_upper() {
		for len in VectorLength::ALL {
			let committed = commit(&prior(), &result(), len, WritePolicy::ZeroUpper);
			assert_eq!(&committed.as_bytes()[..len.bytes()], &result().as_bytes()[..len.bytes()]);
			assert!(committed.as_bytes()[len.bytes()..].iter().all(|&b| b == 0));
		}
	}

	#[test]
	fn test_qword_merge_mask() {
		let mask = WriteMask::new(0b1000_0001, MaskingMode::Merge, ElementSize::Qword);
		let committed = commit(&prior(), &result(), VectorLength::V512, WritePolicy::Masked(mask));
		assert_eq!(&committed.as_bytes()[..8], &result().as_bytes()[..8]);
		assert_eq!(&committed.as_bytes()[8..56], &prior().as_bytes()[8..56]);
		assert_eq!(&committed.as_bytes()[56..], &result().as_bytes()[56..]);
	}

	#[test]
	fn test_qword_zero_mask() {
		let mask = WriteMask::new(0b10, MaskingMode::Zero, ElementSize::Qword);
		let committed = commit(&prior(), &result(), VectorLength::V256, WritePolicy::Masked(mask));
		assert_eq!(&committed.as_bytes()[..8], &[0; 8]);
		assert_eq!(&committed.as_bytes()[8..16], &result().as_bytes()[8..16]);
		assert!(committed.as_bytes()[16..].iter().all(|&b| b == 0));
	}

	proptest! {
		#[test]
		fn test_byte_mask(bits in any::<u64>(), zeroing in any::<bool>()) {
			let mode = if zeroing { MaskingMode::Zero } else { MaskingMode::Merge };
			for len in VectorLength::ALL {
				let mask = WriteMask::new(bits, mode, ElementSize::Byte);
				let committed = commit(&prior(), &result(), len, WritePolicy::Masked(mask));
				for (i, &byte) in committed.as_bytes().iter().enumerate() {
					let expected = if i >= len.bytes() {
						0
					} else if (bits >> i) & 1 == 1 {
						result().as_bytes()[i]
					} else if zeroing {
						0
					} else {
						prior().as_bytes()[i]
					};
					assert_eq!(byte, expected, "byte {} at {:?}", i, len);
				}
			}
		}
	}
}
