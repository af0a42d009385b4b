//! Resolve the configuration directory for `runnel`.
//!
//! `RUNNEL_CONFIG_DIR` wins when set to a non-empty value; otherwise the
//! platform location from the `directories` crate is used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "runnel";
const APPLICATION: &str = "runnel";

pub const CONFIG_DIR_ENV: &str = "RUNNEL_CONFIG_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("no home directory to place runnel settings in"))
}

/// Read a directory override, treating an empty value as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	env::var_os(name)
		.filter(|value| !value.is_empty())
		.map(PathBuf::from)
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}
	Ok(project_dirs()?.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unset_variable_yields_none() {
		assert_eq!(dir_from_env("RUNNEL_TEST_SURELY_UNSET_VARIABLE"), None);
	}
}
