use std::time::{Duration, Instant};

/// Fire-once deadline. Re-arming replaces the previous deadline.
#[derive(Debug, Clone)]
pub(crate) struct SingleShot {
	interval: Duration,
	due: Option<Instant>,
}

impl SingleShot {
	pub(crate) fn new(interval: Duration) -> Self {
		Self {
			interval,
			due: None,
		}
	}

	pub(crate) fn arm(&mut self, now: Instant) {
		self.due = Some(now + self.interval);
	}

	pub(crate) fn cancel(&mut self) {
		self.due = None;
	}

	pub(crate) fn is_armed(&self) -> bool {
		self.due.is_some()
	}

	pub(crate) fn deadline(&self) -> Option<Instant> {
		self.due
	}

	/// Disarm and return `true` when the deadline has been reached.
	pub(crate) fn fire_if_due(&mut self, now: Instant) -> bool {
		match self.due {
			Some(due) if now >= due => {
				self.due = None;
				true
			}
			_ => false,
		}
	}
}
