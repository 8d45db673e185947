// Copyright 2024-2025 Irreducible Inc.

use cfg_if::cfg_if;

mod arch_optimal;
mod portable;
mod strategies;

cfg_if! {
	if #[cfg(all(target_arch = "x86_64", target_feature = "gfni", target_feature = "sse2"))] {
		mod x86_64;
	}
}

pub use arch_optimal::*;
pub use strategies::*;
