use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use runnel_runner_api::{
	BackendManager, Match, ManagerFactory, RunnerSelector, SessionEvent, SessionEventKind,
	SessionHandle, SessionToken,
};
use tracing::{debug, trace, warn};

/// Callback accepted from the current session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
	Matches(Vec<Match>),
	Finished,
}

/// Owns the backend manager and filters its callbacks down to the live
/// session.
pub struct BackendSession {
	factory: Box<dyn ManagerFactory>,
	manager: Option<Box<dyn BackendManager>>,
	tx: Sender<SessionEvent>,
	rx: Receiver<SessionEvent>,
	backlog: VecDeque<SessionEvent>,
	last_token: SessionToken,
	current: Option<SessionToken>,
}

impl BackendSession {
	pub fn new(factory: impl ManagerFactory + 'static) -> Self {
		let (tx, rx) = mpsc::channel();
		Self {
			factory: Box::new(factory),
			manager: None,
			tx,
			rx,
			backlog: VecDeque::new(),
			last_token: SessionToken::new(0),
			current: None,
		}
	}

	fn ensure_manager(&mut self) -> bool {
		if self.manager.is_some() {
			return true;
		}
		match self.factory.create() {
			Ok(manager) => {
				debug!("backend manager constructed");
				self.manager = Some(manager);
				true
			}
			Err(err) => {
				warn!(error = %err, "backend manager unavailable; query ignored");
				false
			}
		}
	}

	/// Replace the current session with a new one for `query`.
	///
	/// Returns `None` without touching the current session when no manager can
	/// be constructed.
	pub fn start(&mut self, query: &str, selector: &RunnerSelector) -> Option<SessionToken> {
		if !self.ensure_manager() {
			return None;
		}
		self.cancel();

		let token = self.last_token.next();
		self.last_token = token;
		self.current = Some(token);
		debug!(%token, query, single = selector.is_single(), "starting session");

		let handle = SessionHandle::new(self.tx.clone(), token);
		if let Some(manager) = self.manager.as_mut() {
			manager.launch_query(query, selector, handle);
		}
		Some(token)
	}

	/// Tear down the current session, if any.
	pub fn cancel(&mut self) -> Option<SessionToken> {
		let token = self.current.take()?;
		if let Some(manager) = self.manager.as_mut() {
			manager.cancel(token);
		}
		Some(token)
	}

	/// Collect queued callbacks for the current session, dropping everything
	/// that belongs to superseded sessions.
	pub fn drain(&mut self) -> Vec<SessionUpdate> {
		let mut updates = Vec::new();
		loop {
			let event = match self.backlog.pop_front() {
				Some(event) => event,
				None => match self.rx.try_recv() {
					Ok(event) => event,
					Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
				},
			};
			if Some(event.token) != self.current {
				trace!(token = %event.token, "dropping callback from superseded session");
				continue;
			}
			match event.kind {
				SessionEventKind::Matches(batch) => updates.push(SessionUpdate::Matches(batch)),
				SessionEventKind::Finished => {
					self.current = None;
					updates.push(SessionUpdate::Finished);
				}
			}
		}
		updates
	}

	/// Block for at most `timeout` until a callback is queued.
	///
	/// The callback stays queued for the next [`drain`](Self::drain).
	pub fn wait(&mut self, timeout: Duration) -> bool {
		if !self.backlog.is_empty() {
			return true;
		}
		match self.rx.recv_timeout(timeout) {
			Ok(event) => {
				self.backlog.push_back(event);
				true
			}
			Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
		}
	}

	/// Fire-and-forget execution of a match.
	pub fn run(&mut self, match_id: &str) {
		if let Some(manager) = self.manager.as_mut() {
			manager.run_match(match_id);
		}
	}

	pub fn is_available(&self) -> bool {
		self.manager.is_some()
	}

	pub fn current(&self) -> Option<SessionToken> {
		self.current
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use runnel_runner_api::ManagerError;
	use std::sync::{Arc, Mutex};

	#[derive(Default)]
	struct Recorded {
		handles: Vec<SessionHandle>,
		cancelled: Vec<SessionToken>,
		runs: Vec<String>,
	}

	struct RecordingManager(Arc<Mutex<Recorded>>);

	impl BackendManager for RecordingManager {
		fn launch_query(&mut self, _query: &str, _selector: &RunnerSelector, session: SessionHandle) {
			self.0.lock().unwrap().handles.push(session);
		}

		fn cancel(&mut self, token: SessionToken) {
			self.0.lock().unwrap().cancelled.push(token);
		}

		fn run_match(&mut self, match_id: &str) {
			self.0.lock().unwrap().runs.push(match_id.to_string());
		}
	}

	fn session() -> (BackendSession, Arc<Mutex<Recorded>>) {
		let recorded = Arc::new(Mutex::new(Recorded::default()));
		let shared = Arc::clone(&recorded);
		let session = BackendSession::new(move || {
			Ok(Box::new(RecordingManager(Arc::clone(&shared))) as Box<dyn BackendManager>)
		});
		(session, recorded)
	}

	#[test]
	fn stale_callbacks_are_dropped() {
		let (mut session, recorded) = session();
		let first = session.start("a", &RunnerSelector::default()).unwrap();
		let second = session.start("ab", &RunnerSelector::default()).unwrap();
		assert!(second > first);
		assert_eq!(recorded.lock().unwrap().cancelled, vec![first]);

		let handles = recorded.lock().unwrap().handles.clone();
		handles[0].matches(vec![Match::new("r", "stale", "Stale")]);
		handles[0].finished();
		handles[1].matches(vec![Match::new("r", "fresh", "Fresh")]);

		let updates = session.drain();
		assert_eq!(updates.len(), 1);
		assert!(matches!(&updates[0], SessionUpdate::Matches(batch) if batch[0].id == "fresh"));
		assert_eq!(session.current(), Some(second));
	}

	#[test]
	fn finished_ends_the_session() {
		let (mut session, recorded) = session();
		session.start("a", &RunnerSelector::default());
		let handle = recorded.lock().unwrap().handles[0].clone();
		handle.finished();
		handle.matches(Vec::new());

		assert_eq!(session.drain(), vec![SessionUpdate::Finished]);
		assert_eq!(session.current(), None);
	}

	#[test]
	fn construction_failure_is_retried_on_next_start() {
		let mut attempts = 0;
		let mut session = BackendSession::new(move || {
			attempts += 1;
			if attempts == 1 {
				Err(ManagerError::unavailable("offline"))
			} else {
				Ok(Box::new(RecordingManager(Arc::default())) as Box<dyn BackendManager>)
			}
		});

		assert_eq!(session.start("a", &RunnerSelector::default()), None);
		assert!(!session.is_available());
		assert!(session.start("a", &RunnerSelector::default()).is_some());
		assert!(session.is_available());
	}

	#[test]
	fn wait_keeps_the_event_for_drain() {
		let (mut session, recorded) = session();
		session.start("a", &RunnerSelector::default());
		assert!(!session.wait(Duration::ZERO));

		let handle = recorded.lock().unwrap().handles[0].clone();
		handle.finished();
		assert!(session.wait(Duration::from_secs(1)));
		assert_eq!(session.drain(), vec![SessionUpdate::Finished]);
	}

	#[test]
	fn run_is_forwarded_to_manager() {
		let (mut session, recorded) = session();
		session.run("ignored-before-construction");
		session.start("a", &RunnerSelector::default());
		session.run("firefox");
		assert_eq!(recorded.lock().unwrap().runs, vec!["firefox".to_string()]);
	}
}
