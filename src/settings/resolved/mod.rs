use std::time::Duration;

use runnel::{Entry, Timing};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::SettingsError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
	pub debounce_ms: u64,
	pub settle_ms: u64,
	pub allowed_runners: Vec<String>,
	pub entries: Vec<Entry>,
}

impl ResolvedConfig {
	pub const DEFAULT_DEBOUNCE_MS: u64 = 100;
	pub const DEFAULT_SETTLE_MS: u64 = 250;

	pub fn timing(&self) -> Timing {
		Timing {
			debounce: Duration::from_millis(self.debounce_ms),
			settle: Duration::from_millis(self.settle_ms),
		}
	}

	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), SettingsError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::summary(self));
	}
}
