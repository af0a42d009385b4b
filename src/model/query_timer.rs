use std::time::{Duration, Instant};

use super::timer::SingleShot;

/// What the caller should do after [`QueryTimer::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheduled {
	/// The debounce delay was (re)armed; a query will start when it expires.
	Armed,
	/// The text was empty: clear results now instead of starting a session.
	ClearNow,
}

/// Debounce gate in front of the backend.
///
/// Only the text from the most recent [`schedule`](Self::schedule) call
/// survives to [`poll`](Self::poll); intermediate texts are discarded.
#[derive(Debug, Clone)]
pub struct QueryTimer {
	timer: SingleShot,
	pending: String,
}

impl QueryTimer {
	pub fn new(interval: Duration) -> Self {
		Self {
			timer: SingleShot::new(interval),
			pending: String::new(),
		}
	}

	pub fn schedule(&mut self, text: &str, now: Instant) -> Scheduled {
		self.pending.clear();
		self.pending.push_str(text);
		if text.is_empty() {
			self.timer.cancel();
			Scheduled::ClearNow
		} else {
			self.timer.arm(now);
			Scheduled::Armed
		}
	}

	/// Return the pending text once the delay has expired.
	pub fn poll(&mut self, now: Instant) -> Option<String> {
		self.timer.fire_if_due(now).then(|| self.pending.clone())
	}

	pub fn cancel(&mut self) {
		self.timer.cancel();
	}

	pub fn pending(&self) -> &str {
		&self.pending
	}

	pub fn is_armed(&self) -> bool {
		self.timer.is_armed()
	}

	pub fn deadline(&self) -> Option<Instant> {
		self.timer.deadline()
	}
}
