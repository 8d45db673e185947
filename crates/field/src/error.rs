// Copyright 2024-2025 Irreducible Inc.

/// Error thrown when a field-level value cannot be constructed.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
	#[error("an 8x8 matrix needs 8 bytes, got {len}")]
	MatrixLengthMismatch { len: usize },
	#[error("index {index} is out of range 0..{max}")]
	IndexOutOfRange { index: usize, max: usize },
}
