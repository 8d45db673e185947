// Copyright 2024-2025 Irreducible Inc.

/// Byte-by-byte evaluation with the scalar kernels of `gfni_field`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortableStrategy;

/// Use the host's GFNI instructions on 128-bit lanes.
#[derive(Debug, Clone, Copy, Default)]
pub struct GfniStrategy;
