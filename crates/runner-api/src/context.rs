use std::sync::atomic::{AtomicU64, Ordering};

use crate::session::SessionToken;

/// Shared inputs provided to runners when they are asked for matches.
///
/// Wrapping the inputs in a context struct keeps the [`Runner`](crate::Runner)
/// signature stable when new fields are added.
pub struct RunnerContext<'a> {
	query: &'a str,
	single_runner: bool,
	token: SessionToken,
	latest_session: &'a AtomicU64,
}

impl<'a> RunnerContext<'a> {
	#[must_use]
	pub fn new(
		query: &'a str,
		single_runner: bool,
		token: SessionToken,
		latest_session: &'a AtomicU64,
	) -> Self {
		Self {
			query,
			single_runner,
			token,
			latest_session,
		}
	}

	/// Query text as typed by the user.
	#[must_use]
	pub fn query(&self) -> &'a str {
		self.query
	}

	/// `true` when this runner is the only one queried. Runners typically
	/// relax their trigger rules in this mode.
	#[must_use]
	pub fn is_single_runner(&self) -> bool {
		self.single_runner
	}

	#[must_use]
	pub fn token(&self) -> SessionToken {
		self.token
	}

	/// Returns `false` once a newer session has superseded this one.
	/// Long-running runners should check this periodically and bail out.
	#[must_use]
	pub fn is_valid(&self) -> bool {
		self.latest_session.load(Ordering::Acquire) == self.token.get()
	}
}
