// Copyright 2024-2025 Irreducible Inc.

use std::fmt::{Debug, Formatter};

use bytemuck::{Pod, Zeroable};
use rand::{Rng, RngCore};

use crate::{
	arithmetic_traits::InvertOrZero,
	kernels::{affine_byte, affine_inverse_byte},
	AESField8b, Error,
};

/// Generic transformation trait that is used both for scalars and lanes
pub trait Transformation<Input, Output> {
	fn transform(&self, data: &Input) -> Output;
}

/// An $\mathbb{F}_2$-linear map on bytes stored as a GFNI 8x8 bit matrix.
///
/// Byte `k` of the little-endian `u64` is the row that produces output bit `7 - k`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Zeroable, Pod)]
#[repr(transparent)]
pub struct AffineMatrix(u64);

impl AffineMatrix {
	/// Maps every byte to itself.
	pub const IDENTITY: Self = Self(0x0102040810204080);

	/// Linear part of the AES S-box, to be applied after field inversion with the translation
	/// [`Self::AES_SBOX_TRANSLATION`].
	pub const AES_SBOX: Self = Self(0xf1e3c78f1f3e7cf8);
	pub const AES_SBOX_TRANSLATION: u8 = 0x63;

	pub const fn new(matrix: u64) -> Self {
		Self(matrix)
	}

	pub const fn val(self) -> u64 {
		self.0
	}

	/// Builds the matrix of the linear map that sends bit `j` to `columns[j]`.
	pub const fn from_columns(columns: [u8; 8]) -> Self {
		Self(columns_to_rows(u64::from_le_bytes(columns)))
	}

	/// Image of bit `index` under the linear map.
	pub fn column(self, index: usize) -> Result<u8, Error> {
		if index >= 8 {
			return Err(Error::IndexOutOfRange { index, max: 8 });
		}

		Ok(affine_byte(self.0, 1 << index, 0))
	}

	pub fn columns(self) -> [u8; 8] {
		std::array::from_fn(|index| affine_byte(self.0, 1 << index, 0))
	}

	/// Matrix of the transposed linear map.
	///
	/// Row `r` lives in byte `7 - r`, so entry `(r, c)` is bit `c` of byte `7 - r`.
	pub const fn transpose(self) -> Self {
		let mut matrix = self.0;
		let mut result = 0;

		let mut i = 0;
		while i < 8 {
			let mut j = 0;
			while j < 8 {
				result |= (matrix & 1) << ((7 - j) * 8 + (7 - i));
				matrix >>= 1;
				j += 1;
			}
			i += 1;
		}

		Self(result)
	}

	pub fn random(mut rng: impl RngCore) -> Self {
		Self(rng.gen())
	}
}

impl From<u64> for AffineMatrix {
	fn from(value: u64) -> Self {
		Self(value)
	}
}

impl TryFrom<&[u8]> for AffineMatrix {
	type Error = Error;

	/// Reads the matrix from its little-endian memory image.
	fn try_from(bytes: &[u8]) -> Result<Self, Error> {
		let rows: [u8; 8] = bytes
			.try_into()
			.map_err(|_| Error::MatrixLengthMismatch { len: bytes.len() })?;

		Ok(Self(u64::from_le_bytes(rows)))
	}
}

impl Debug for AffineMatrix {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "AffineMatrix({:#018x})", self.0)
	}
}

/// Converts column images (byte `j` is the image of bit `j`) into the row layout read by
/// `GF2P8AFFINEQB`: bit `j` of byte `i` moves to bit `i` of byte `7 - j`.
const fn columns_to_rows(mut matrix: u64) -> u64 {
	let mut result = 0;

	let mut i = 0;
	while i < 8 {
		let mut j = 0;
		while j < 8 {
			result |= (matrix & 1) << ((7 - j) * 8 + i);
			matrix >>= 1;
			j += 1;
		}
		i += 1;
	}

	result
}

/// Matrix multiplication followed by a translation, as computed by `GF2P8AFFINEQB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineTransformation {
	pub matrix: AffineMatrix,
	pub translation: u8,
}

impl AffineTransformation {
	pub const fn new(matrix: AffineMatrix, translation: u8) -> Self {
		Self {
			matrix,
			translation,
		}
	}

	/// Applies the transformation to the field inverse of the input, as computed by
	/// `GF2P8AFFINEINVQB`.
	pub fn transform_inverse(&self, data: &AESField8b) -> AESField8b {
		AESField8b::new(affine_inverse_byte(self.matrix.val(), data.val(), self.translation))
	}
}

impl Transformation<u8, u8> for AffineTransformation {
	fn transform(&self, data: &u8) -> u8 {
		affine_byte(self.matrix.val(), *data, self.translation)
	}
}

impl Transformation<AESField8b, AESField8b> for AffineTransformation {
	fn transform(&self, data: &AESField8b) -> AESField8b {
		AESField8b::new(affine_byte(self.matrix.val(), data.val(), self.translation))
	}
}

/// AES `SubBytes` expressed through the affine-inverse kernel.
pub fn aes_sbox(value: u8) -> u8 {
	let sbox = AffineTransformation::new(AffineMatrix::AES_SBOX, AffineMatrix::AES_SBOX_TRANSLATION);
	sbox.transform(&AESField8b::new(value).invert_or_zero()).val()
}
