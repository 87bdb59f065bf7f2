//! Logging setup for the demo CLI.
//!
//! Logs go to stderr so that rendered HTML on stdout stays clean.
//! `RUST_LOG` takes precedence over the configured level.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maps `-v` repetitions onto a level, starting from `configured`.
pub fn effective_level(configured: &str, verbosity: u8) -> String {
	match verbosity {
		0 => configured.to_string(),
		1 => "info".to_string(),
		2 => "debug".to_string(),
		_ => "trace".to_string(),
	}
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(level: &str) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

	let stderr_layer = fmt::layer()
		.with_writer(std::io::stderr)
		.with_target(true)
		.with_level(true);

	// A subscriber may already be installed, e.g. by a test harness.
	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(stderr_layer)
		.try_init();
}
