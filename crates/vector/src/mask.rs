// Copyright 2024-2025 Irreducible Inc.

use gfni_utils::checked_arithmetics::checked_mask_bit;

use crate::register::QWORD_BYTES;

/// What happens to a destination element whose mask bit is clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskingMode {
	/// The element keeps its previous value.
	Merge,
	/// The element is cleared.
	Zero,
}

/// Size of the element one mask bit governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementSize {
	Byte,
	Qword,
}

impl ElementSize {
	pub const fn bytes(self) -> usize {
		match self {
			Self::Byte => 1,
			Self::Qword => QWORD_BYTES,
		}
	}
}

/// Predicate mask read from an opmask register, together with its masking attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteMask {
	bits: u64,
	mode: MaskingMode,
	element: ElementSize,
}

impl WriteMask {
	/// Qword-granular masks only see the low 8 bits of the opmask register.
	pub const fn new(opmask: u64, mode: MaskingMode, element: ElementSize) -> Self {
		let bits = match element {
			ElementSize::Byte => opmask,
			ElementSize::Qword => opmask & 0xff,
		};

		Self {
			bits,
			mode,
			element,
		}
	}

	pub const fn bits(&self) -> u64 {
		self.bits
	}

	pub const fn mode(&self) -> MaskingMode {
		self.mode
	}

	pub const fn element(&self) -> ElementSize {
		self.element
	}

	/// Whether element `index` receives the computed value.
	pub const fn selects(&self, index: usize) -> bool {
		checked_mask_bit(self.bits, index)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_qword_mask_reads_low_byte() {
		let mask = WriteMask::new(0xff00_0000_0000_0f05, MaskingMode::Merge, ElementSize::Qword);
		assert_eq!(mask.bits(), 0x05);
		assert!(mask.selects(0));
		assert!(!mask.selects(1));
		assert!(mask.selects(2));
	}

	#[test]
	fn test_byte_mask_keeps_all_bits() {
		let mask = WriteMask::new(1 << 63, MaskingMode::Zero, ElementSize::Byte);
		assert!(mask.selects(63));
		assert!(!mask.selects(0));
		assert_eq!(mask.element().bytes(), 1);
	}
}
