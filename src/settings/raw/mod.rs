use std::env;

use anyhow::{Error, Result};
use runnel::Entry;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	timing: TimingSection,
	runners: RunnersSection,
	entries: Vec<Entry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct TimingSection {
	debounce_ms: Option<u64>,
	settle_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RunnersSection {
	allowed: Option<Vec<String>>,
}

impl RawConfig {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(ms) = cli.debounce_ms {
			self.timing.debounce_ms = Some(ms);
		}
		if let Some(ms) = cli.settle_ms {
			self.timing.settle_ms = Some(ms);
		}
		if let Some(allow) = &cli.allow {
			self.runners.allowed = Some(allow.clone());
		}
	}

	/// Fill defaults and validate, naming where any bad value came from.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			debounce_ms: detect_source(
				cli.debounce_ms.is_some(),
				self.timing.debounce_ms.is_some(),
				"RUNNEL__TIMING__DEBOUNCE_MS",
				"--debounce-ms",
				"timing.debounce_ms",
			),
			settle_ms: detect_source(
				cli.settle_ms.is_some(),
				self.timing.settle_ms.is_some(),
				"RUNNEL__TIMING__SETTLE_MS",
				"--settle-ms",
				"timing.settle_ms",
			),
		};

		let config = ResolvedConfig {
			debounce_ms: self
				.timing
				.debounce_ms
				.unwrap_or(ResolvedConfig::DEFAULT_DEBOUNCE_MS),
			settle_ms: self
				.timing
				.settle_ms
				.unwrap_or(ResolvedConfig::DEFAULT_SETTLE_MS),
			allowed_runners: self.runners.allowed.unwrap_or_default(),
			entries: self.entries,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
