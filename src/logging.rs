//! Diagnostic output for the `runnel` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left to
//! the binary, which calls [`initialize`] once at startup.

use std::io;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives, e.g. `runnel=debug`.
pub const LOG_ENV: &str = "RUNNEL_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

static INIT: Once = Once::new();

/// Install a stderr subscriber filtered by `RUNNEL_LOG`. Later calls are
/// no-ops, as is the first call when another subscriber is already set.
pub fn initialize() {
	INIT.call_once(|| {
		let filter = EnvFilter::try_from_env(LOG_ENV)
			.unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
		let _ = tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_writer(io::stderr)
			.with_target(false)
			.try_init();
	});
}
