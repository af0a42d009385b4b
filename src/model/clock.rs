use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Source of the current time for the model's timers.
pub trait Clock: Send {
	fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> Instant {
		Instant::now()
	}
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
	now: Arc<Mutex<Instant>>,
}

impl ManualClock {
	#[must_use]
	pub fn new() -> Self {
		Self {
			now: Arc::new(Mutex::new(Instant::now())),
		}
	}

	/// Move the clock forward by `by`.
	pub fn advance(&self, by: Duration) {
		let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
		*now += by;
	}
}

impl Default for ManualClock {
	fn default() -> Self {
		Self::new()
	}
}

impl Clock for ManualClock {
	fn now(&self) -> Instant {
		*self.now.lock().unwrap_or_else(PoisonError::into_inner)
	}
}
