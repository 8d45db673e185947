// Copyright 2024-2025 Irreducible Inc.

//! Arithmetic over the AES field GF(2^8) as used by the x86 GFNI instructions.
//!
//! The crate provides the log/exp/inverse tables, the field element type [`AESField8b`], the
//! three per-byte instruction kernels and typed 8x8 bit matrices. The [`reference`] module holds
//! the bit-serial definitions everything is verified against.

pub mod aes_field;
pub mod arithmetic_traits;
pub mod error;
pub mod kernels;
pub mod linear_transformation;
pub mod reference;
mod tracing;

pub use aes_field::{exp, inverse, log, AESField8b};
pub use error::*;
pub use kernels::*;
pub use linear_transformation::{AffineMatrix, AffineTransformation, Transformation};
