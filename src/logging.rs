//! Diagnostic output through `tracing`.
//!
//! Logs go to stderr so that stdout carries only the rendered configuration.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map the number of `-v` flags to a default level.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::WARN,
		1 => LevelFilter::INFO,
		2 => LevelFilter::DEBUG,
		_ => LevelFilter::TRACE,
	}
}

/// Install the global subscriber. `RUST_LOG` takes precedence over
/// `verbosity` when it is set.
pub fn initialize(verbosity: u8) {
	let filter = EnvFilter::builder()
		.with_default_directive(level_for_verbosity(verbosity).into())
		.from_env_lossy();

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.without_time()
		.try_init();
}
