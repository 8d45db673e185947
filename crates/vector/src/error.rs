// Copyright 2024-2025 Irreducible Inc.

use crate::VectorLength;

/// Error thrown when an instruction or register value violates an encoding rule.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
	#[error("unsupported vector length of {bits} bits")]
	UnsupportedVectorLength { bits: usize },
	#[error("vector register index {index} is out of range 0..{max}")]
	RegisterOutOfRange { index: usize, max: usize },
	#[error("opmask register index {index} is out of range 0..{max}")]
	OpmaskOutOfRange { index: usize, max: usize },
	#[error("{encoding} encoding cannot express a {} bit operation", .len.bits())]
	WidthNotEncodable {
		encoding: &'static str,
		len: VectorLength,
	},
	#[error("legacy encoding is destructive: destination and first source must be the same register")]
	LegacyNotDestructive,
	#[error("zero-masking requires an opmask register other than k0")]
	ZeroingWithoutMask,
	#[error("register image of {len} bytes does not fit into {max} bytes")]
	RegisterImageTooLong { len: usize, max: usize },
}
