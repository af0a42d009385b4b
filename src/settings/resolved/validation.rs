use std::collections::HashSet;
use std::ops::RangeInclusive;

use super::{ConfigSources, ResolvedConfig, SettingsError};

const DEBOUNCE_RANGE: RangeInclusive<u64> = 1..=1000;
const SETTLE_RANGE: RangeInclusive<u64> = 0..=5000;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), SettingsError> {
	if !DEBOUNCE_RANGE.contains(&config.debounce_ms) {
		return Err(SettingsError::invalid(
			"timing.debounce_ms",
			config.debounce_ms.to_string(),
			sources.source_for_debounce(),
			format!(
				"must be between {} and {}",
				DEBOUNCE_RANGE.start(),
				DEBOUNCE_RANGE.end()
			),
		));
	}

	if !SETTLE_RANGE.contains(&config.settle_ms) {
		return Err(SettingsError::invalid(
			"timing.settle_ms",
			config.settle_ms.to_string(),
			sources.source_for_settle(),
			format!("must be at most {}", SETTLE_RANGE.end()),
		));
	}

	let mut seen = HashSet::new();
	for (index, entry) in config.entries.iter().enumerate() {
		if entry.id.trim().is_empty() {
			return Err(SettingsError::EmptyEntryId { index });
		}
		if !seen.insert(entry.id.as_str()) {
			return Err(SettingsError::DuplicateEntryId {
				id: entry.id.clone(),
			});
		}
	}

	Ok(())
}
