// Copyright 2024-2025 Irreducible Inc.

use tracing_subscriber::{
	fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::env::boolean_env_flag_set;

/// Environment flag that adds span-close events (with timings) to the log output.
pub const LOG_SPANS_FLAG: &str = "GFNI_LOG_SPANS";

/// Install the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`. Calling this more than once is
/// harmless: only the first subscriber is installed.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	let span_events = if boolean_env_flag_set(LOG_SPANS_FLAG) {
		FmtSpan::CLOSE
	} else {
		FmtSpan::NONE
	};

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_span_events(span_events))
		.try_init();
}
