use thiserror::Error;

/// Errors raised while constructing a [`BackendManager`](crate::BackendManager).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManagerError {
	/// The backend cannot be reached or initialised right now.
	#[error("backend manager unavailable: {reason}")]
	Unavailable { reason: String },

	/// No runners are registered, so a manager would never produce matches.
	#[error("no runners are registered")]
	NoRunners,
}

impl ManagerError {
	pub fn unavailable(reason: impl Into<String>) -> Self {
		Self::Unavailable {
			reason: reason.into(),
		}
	}
}

/// Errors that can occur when mutating the [`RunnerRegistry`](crate::RunnerRegistry).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunnerRegistryError {
	/// A runner attempted to register an identifier that already exists in the registry.
	#[error("runner id '{id}' is already registered")]
	DuplicateId { id: String },

	/// Runners must carry a non-empty identifier.
	#[error("runner ids must not be empty")]
	EmptyId,
}
