use std::time::{Duration, Instant};

use super::timer::SingleShot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
	Idle,
	Running,
	Settling,
}

/// Debounced "busy" flag derived from session start and finish signals.
///
/// A finish only turns the flag off after the settle interval has passed
/// without a new start, so finish/restart pairs produced by typing never show
/// up as a flicker. Every transition method returns `Some(state)` exactly when
/// the externally visible flag changed.
#[derive(Debug, Clone)]
pub struct RunningStatusTracker {
	phase: Phase,
	settle: SingleShot,
}

impl RunningStatusTracker {
	pub fn new(settle: Duration) -> Self {
		Self {
			phase: Phase::Idle,
			settle: SingleShot::new(settle),
		}
	}

	pub fn on_started(&mut self) -> Option<bool> {
		self.settle.cancel();
		let previous = self.phase;
		self.phase = Phase::Running;
		(previous == Phase::Idle).then_some(true)
	}

	/// Begin settling. A second finish while settling restarts the window.
	pub fn on_finished(&mut self, now: Instant) -> Option<bool> {
		if self.phase == Phase::Idle {
			return None;
		}
		self.phase = Phase::Settling;
		self.settle.arm(now);
		None
	}

	pub fn poll(&mut self, now: Instant) -> Option<bool> {
		if self.phase == Phase::Settling && self.settle.fire_if_due(now) {
			self.phase = Phase::Idle;
			return Some(false);
		}
		None
	}

	pub fn is_running(&self) -> bool {
		self.phase != Phase::Idle
	}

	pub fn is_settling(&self) -> bool {
		self.phase == Phase::Settling
	}

	pub fn deadline(&self) -> Option<Instant> {
		self.settle.deadline()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SETTLE: Duration = Duration::from_millis(250);

	#[test]
	fn isolated_query_transitions_once_each_way() {
		let start = Instant::now();
		let mut tracker = RunningStatusTracker::new(SETTLE);
		assert_eq!(tracker.on_started(), Some(true));
		assert_eq!(tracker.on_finished(start), None);
		assert!(tracker.is_running());
		assert_eq!(tracker.poll(start + SETTLE / 2), None);
		assert_eq!(tracker.poll(start + SETTLE), Some(false));
		assert_eq!(tracker.poll(start + SETTLE * 2), None);
		assert!(!tracker.is_running());
	}

	#[test]
	fn restart_inside_settle_window_does_not_flicker() {
		let start = Instant::now();
		let mut tracker = RunningStatusTracker::new(SETTLE);
		tracker.on_started();
		tracker.on_finished(start);
		assert_eq!(tracker.on_started(), None);
		assert_eq!(tracker.poll(start + SETTLE * 4), None);
		assert!(tracker.is_running());
	}

	#[test]
	fn repeated_finish_restarts_settle_window() {
		let start = Instant::now();
		let mut tracker = RunningStatusTracker::new(SETTLE);
		tracker.on_started();
		tracker.on_finished(start);
		tracker.on_finished(start + Duration::from_millis(200));
		assert_eq!(tracker.poll(start + SETTLE), None);
		assert_eq!(
			tracker.poll(start + Duration::from_millis(200) + SETTLE),
			Some(false)
		);
	}

	#[test]
	fn finish_while_idle_is_ignored() {
		let start = Instant::now();
		let mut tracker = RunningStatusTracker::new(SETTLE);
		assert_eq!(tracker.on_finished(start), None);
		assert!(!tracker.is_running());
		assert_eq!(tracker.deadline(), None);
	}
}
