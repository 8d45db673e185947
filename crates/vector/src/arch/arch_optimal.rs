// Copyright 2024-2025 Irreducible Inc.

use cfg_if::cfg_if;

cfg_if! {
	if #[cfg(all(target_arch = "x86_64", target_feature = "gfni", target_feature = "sse2"))] {
		/// Fastest lane backend available for the compilation target.
		pub type OptimalStrategy = super::GfniStrategy;
	} else {
		/// Fastest lane backend available for the compilation target.
		pub type OptimalStrategy = super::PortableStrategy;
	}
}
