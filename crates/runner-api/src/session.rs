use std::fmt;
use std::sync::mpsc::Sender;

use crate::types::Match;

/// Identifier of one backend session. Tokens increase monotonically, so a
/// token that differs from the current one always belongs to a superseded
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionToken(u64);

impl SessionToken {
	#[must_use]
	pub const fn new(raw: u64) -> Self {
		Self(raw)
	}

	#[must_use]
	pub const fn get(self) -> u64 {
		self.0
	}

	/// The token following this one.
	#[must_use]
	pub const fn next(self) -> Self {
		Self(self.0.wrapping_add(1))
	}
}

impl fmt::Display for SessionToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Payload of a callback delivered by a backend.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEventKind {
	/// The complete current set of matches for the session.
	Matches(Vec<Match>),
	/// The backend has finished the session.
	Finished,
}

/// Callback emitted by a backend, tagged with the session that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEvent {
	pub token: SessionToken,
	pub kind: SessionEventKind,
}

/// Handle used by backends to report progress for one session.
///
/// Every batch is a full snapshot: consumers replace their rows with it rather
/// than appending. `finished` must be the last call for a session.
#[derive(Clone)]
pub struct SessionHandle {
	tx: Sender<SessionEvent>,
	token: SessionToken,
}

impl SessionHandle {
	#[must_use]
	pub fn new(tx: Sender<SessionEvent>, token: SessionToken) -> Self {
		Self { tx, token }
	}

	/// Identifier for the session this handle reports on.
	#[must_use]
	pub fn token(&self) -> SessionToken {
		self.token
	}

	/// Send the complete current batch of matches.
	///
	/// Returns `false` once the receiving model has been dropped.
	pub fn matches(&self, batch: Vec<Match>) -> bool {
		self.send(SessionEventKind::Matches(batch))
	}

	/// Report that the session has completed.
	pub fn finished(&self) -> bool {
		self.send(SessionEventKind::Finished)
	}

	fn send(&self, kind: SessionEventKind) -> bool {
		self.tx
			.send(SessionEvent {
				token: self.token,
				kind,
			})
			.is_ok()
	}
}

impl fmt::Debug for SessionHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SessionHandle")
			.field("token", &self.token)
			.finish_non_exhaustive()
	}
}
