// Copyright 2024-2025 Irreducible Inc.

/// Division implementation that fails in case when `a` isn't divisible by `b`
pub const fn checked_int_div(a: usize, b: usize) -> usize {
	let result = a / b;
	assert!(b * result == a);

	result
}

/// Returns the bit `index` of `mask` as a boolean.
///
/// Fails when `index` doesn't address a bit of a 64-bit mask.
pub const fn checked_mask_bit(mask: u64, index: usize) -> bool {
	assert!(index < u64::BITS as usize);

	(mask >> index) & 1 == 1
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_checked_int_div_success() {
		assert_eq!(checked_int_div(64, 16), 4);
		assert_eq!(checked_int_div(32, 8), 4);
		assert_eq!(checked_int_div(16, 16), 1);
	}

	#[test]
	#[should_panic]
	fn test_checked_int_div_fail() {
		_ = checked_int_div(24, 16);
	}

	#[test]
	fn test_checked_mask_bit() {
		assert!(checked_mask_bit(0b101, 0));
		assert!(!checked_mask_bit(0b101, 1));
		assert!(checked_mask_bit(1 << 63, 63));
	}

	#[test]
	#[should_panic]
	fn test_checked_mask_bit_fail() {
		_ = checked_mask_bit(u64::MAX, 64);
	}
}
