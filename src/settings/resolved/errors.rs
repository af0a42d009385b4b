use thiserror::Error;

use super::SettingSource;

#[derive(Debug, Error)]
pub(crate) enum SettingsError {
	#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
	Invalid {
		key: &'static str,
		value: String,
		origin: SettingSource,
		reason: String,
	},

	#[error("entry #{index} has an empty id")]
	EmptyEntryId { index: usize },

	#[error("entry id '{id}' is defined more than once")]
	DuplicateEntryId { id: String },
}

impl SettingsError {
	pub(crate) fn invalid<V, R>(key: &'static str, value: V, origin: SettingSource, reason: R) -> Self
	where
		V: Into<String>,
		R: Into<String>,
	{
		Self::Invalid {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}
