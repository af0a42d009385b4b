use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn summary(config: &ResolvedConfig) -> String {
	let mut out = String::from("Effective configuration:\n");
	let _ = writeln!(out, "  Debounce: {} ms", config.debounce_ms);
	let _ = writeln!(out, "  Settle: {} ms", config.settle_ms);
	if config.allowed_runners.is_empty() {
		let _ = writeln!(out, "  Allowed runners: (all)");
	} else {
		let _ = writeln!(
			out,
			"  Allowed runners: {}",
			config.allowed_runners.join(", ")
		);
	}
	let _ = writeln!(out, "  Entries: {}", config.entries.len());
	out
}
