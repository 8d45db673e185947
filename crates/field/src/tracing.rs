// Copyright 2024-2025 Irreducible Inc.
use cfg_if::cfg_if;

cfg_if! {
	if #[cfg(feature = "trace_kernels")] {
		/// Emit one `TRACE` event per scalar kernel invocation.
		macro_rules! trace_kernel {
			($name:literal, $($field:tt)*) => {
				::tracing::event!(name: $name, ::tracing::Level::TRACE, $($field)*);
			};
		}
	} else {
		macro_rules! trace_kernel {
			($name:literal, $($field:tt)*) => {};
		}
	}
}

pub(crate) use trace_kernel;
