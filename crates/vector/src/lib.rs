// Copyright 2024-2025 Irreducible Inc.

//! Execution semantics of `GF2P8AFFINEQB`, `GF2P8AFFINEINVQB` and `GF2P8MULB`.
//!
//! Results are computed lane by lane ([`lane`]) with a pluggable backend ([`arch`]) and then
//! committed to the destination register under the encoding's write-back discipline
//! ([`writeback`]). Nothing here touches flags or memory; every operation is a pure function of
//! the register values it reads.

pub mod arch;
pub mod error;
pub mod instruction;
pub mod lane;
pub mod mask;
pub mod register;
pub mod register_file;
pub mod vector_length;
pub mod writeback;

pub use error::*;
pub use instruction::{compute, execute, execute_with, Encoding, Gf2p8Instruction, Gf2p8Opcode};
pub use mask::{ElementSize, MaskingMode, WriteMask};
pub use register::{Lane, VectorRegister};
pub use register_file::{
	ArrayRegisterFile, OpmaskRegister, RegisterFile, VectorRegisterId,
};
pub use vector_length::VectorLength;
pub use writeback::{commit, WritePolicy};
