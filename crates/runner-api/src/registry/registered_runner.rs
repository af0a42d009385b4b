use std::sync::Arc;

use super::Runner;

/// Registration entry stored by the registry.
#[derive(Clone)]
pub struct RegisteredRunner {
	id: String,
	runner: Arc<dyn Runner>,
}

impl RegisteredRunner {
	#[must_use]
	pub fn new(runner: Arc<dyn Runner>) -> Self {
		Self {
			id: runner.id().to_string(),
			runner,
		}
	}

	#[must_use]
	pub fn id(&self) -> &str {
		&self.id
	}

	#[must_use]
	pub fn name(&self) -> &str {
		self.runner.name()
	}

	#[must_use]
	pub fn runner(&self) -> Arc<dyn Runner> {
		Arc::clone(&self.runner)
	}
}
