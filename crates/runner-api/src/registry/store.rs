use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::RunnerRegistryError;
use crate::types::RunnerSelector;

use super::{RegisteredRunner, Runner};

/// Registry of the runners available to a backend manager, kept in
/// registration order.
#[derive(Clone, Default)]
pub struct RunnerRegistry {
	runners: IndexMap<String, RegisteredRunner>,
}

impl RunnerRegistry {
	/// Create a registry without any runners registered.
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a runner under its declared id.
	pub fn register<R>(&mut self, runner: R) -> Result<(), RunnerRegistryError>
	where
		R: Runner + 'static,
	{
		self.register_shared(Arc::new(runner))
	}

	/// Register an already shared runner.
	pub fn register_shared(&mut self, runner: Arc<dyn Runner>) -> Result<(), RunnerRegistryError> {
		let entry = RegisteredRunner::new(runner);
		if entry.id().is_empty() {
			return Err(RunnerRegistryError::EmptyId);
		}
		if self.runners.contains_key(entry.id()) {
			return Err(RunnerRegistryError::DuplicateId {
				id: entry.id().to_string(),
			});
		}
		self.runners.insert(entry.id().to_string(), entry);
		Ok(())
	}

	/// Lookup a runner by id.
	pub fn runner(&self, id: &str) -> Option<Arc<dyn Runner>> {
		self.runners.get(id).map(RegisteredRunner::runner)
	}

	/// Iterate over all registered runners.
	pub fn iter(&self) -> impl Iterator<Item = &RegisteredRunner> {
		self.runners.values()
	}

	/// Runners admitted by `selector`, in registration order.
	pub fn selected<'a>(
		&'a self,
		selector: &'a RunnerSelector,
	) -> impl Iterator<Item = &'a RegisteredRunner> + 'a {
		self.runners
			.values()
			.filter(move |entry| selector.admits(entry.id()))
	}

	/// Remove the runner registered under `id`.
	pub fn deregister(&mut self, id: &str) -> Option<RegisteredRunner> {
		self.runners.shift_remove(id)
	}

	pub fn ids(&self) -> impl Iterator<Item = &str> {
		self.runners.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.runners.len()
	}

	pub fn is_empty(&self) -> bool {
		self.runners.is_empty()
	}
}
