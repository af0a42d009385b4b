use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use indexmap::IndexSet;
use runnel_runner_api::{ManagerFactory, Match, RunnerSelector};
use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::events::{ModelEvent, Subscribers};
use super::query_timer::{QueryTimer, Scheduled};
use super::result_store::{ResultStore, StoreChange};
use super::role::{Role, RoleValue};
use super::running_status::RunningStatusTracker;
use super::session::{BackendSession, SessionUpdate};

/// Timer intervals used by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
	/// Quiet period after the last keystroke before a query starts.
	pub debounce: Duration,
	/// Time the busy flag stays up after a session finishes.
	pub settle: Duration,
}

impl Timing {
	pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);
	pub const DEFAULT_SETTLE: Duration = Duration::from_millis(250);
}

impl Default for Timing {
	fn default() -> Self {
		Self {
			debounce: Self::DEFAULT_DEBOUNCE,
			settle: Self::DEFAULT_SETTLE,
		}
	}
}

/// Live result list fed by a backend manager.
///
/// All methods run on the owning thread. Backend callbacks are queued until
/// [`pump`](Self::pump) applies them, together with any timer that has
/// expired since the last call. Observers receive [`ModelEvent`]s through
/// [`subscribe`](Self::subscribe).
pub struct ResultListModel {
	clock: Box<dyn Clock>,
	timer: QueryTimer,
	session: BackendSession,
	store: ResultStore,
	running: RunningStatusTracker,
	active_query: String,
	allowed: IndexSet<String>,
	subscribers: Subscribers,
}

impl ResultListModel {
	pub fn new(factory: impl ManagerFactory + 'static) -> Self {
		let timing = Timing::default();
		Self {
			clock: Box::new(SystemClock),
			timer: QueryTimer::new(timing.debounce),
			session: BackendSession::new(factory),
			store: ResultStore::new(),
			running: RunningStatusTracker::new(timing.settle),
			active_query: String::new(),
			allowed: IndexSet::new(),
			subscribers: Subscribers::default(),
		}
	}

	#[must_use]
	pub fn with_timing(mut self, timing: Timing) -> Self {
		self.timer = QueryTimer::new(timing.debounce);
		self.running = RunningStatusTracker::new(timing.settle);
		self
	}

	#[must_use]
	pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
		self.clock = Box::new(clock);
		self
	}

	pub fn subscribe(&mut self) -> Receiver<ModelEvent> {
		self.subscribers.subscribe()
	}

	/// Record new query text.
	///
	/// Non-empty text starts a session once the debounce interval passes
	/// without further edits. Empty text clears the list immediately.
	pub fn set_query(&mut self, text: &str) {
		let now = self.clock.now();
		if self.timer.schedule(text, now) == Scheduled::ClearNow {
			self.clear_now(now);
		}
	}

	/// Text of the query whose results are currently shown.
	pub fn current_query(&self) -> &str {
		&self.active_query
	}

	/// Text most recently passed to [`set_query`](Self::set_query).
	pub fn pending_query(&self) -> &str {
		self.timer.pending()
	}

	/// Restrict later queries to the given runner ids. An empty list allows
	/// every runner; exactly one id selects single-runner mode.
	///
	/// A query that is already running keeps its original selection.
	pub fn set_allowed_runners<I, S>(&mut self, ids: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let allowed: IndexSet<String> = ids
			.into_iter()
			.map(|id| id.as_ref().trim().to_string())
			.filter(|id| !id.is_empty())
			.collect();
		if allowed == self.allowed {
			return;
		}
		debug!(?allowed, "allowed runners changed");
		self.allowed = allowed;
		self.subscribers.emit(ModelEvent::RunnersChanged);
	}

	pub fn allowed_runners(&self) -> impl Iterator<Item = &str> {
		self.allowed.iter().map(String::as_str)
	}

	pub fn single_runner(&self) -> Option<&str> {
		match self.allowed.len() {
			1 => self.allowed.first().map(String::as_str),
			_ => None,
		}
	}

	pub fn selector(&self) -> RunnerSelector {
		RunnerSelector::from_allowed(self.allowed.iter().cloned())
	}

	pub fn row_count(&self) -> usize {
		self.store.count()
	}

	pub fn get(&self, row: usize, role: Role) -> RoleValue {
		self.store
			.get(row)
			.map_or(RoleValue::Invalid, |item| role.value_of(item))
	}

	pub fn get_by_name(&self, row: usize, name: &str) -> RoleValue {
		Role::from_name(name).map_or(RoleValue::Invalid, |role| self.get(row, role))
	}

	pub fn match_at(&self, row: usize) -> Option<&Match> {
		self.store.get(row)
	}

	pub fn matches(&self) -> impl Iterator<Item = &Match> {
		self.store.iter()
	}

	pub fn role_names(&self) -> impl Iterator<Item = (Role, &'static str)> {
		Role::ALL.into_iter().map(|role| (role, role.name()))
	}

	/// Execute the match shown at `row`. Rows that no longer exist are
	/// ignored.
	pub fn run(&mut self, row: usize) {
		let Some(id) = self.store.get(row).map(|item| item.id.clone()) else {
			return;
		};
		debug!(row, id = %id, "running match");
		self.session.run(&id);
	}

	pub fn is_running(&self) -> bool {
		self.running.is_running()
	}

	/// Whether a backend manager has been constructed.
	pub fn is_available(&self) -> bool {
		self.session.is_available()
	}

	/// Earliest instant at which [`pump`](Self::pump) has timer work to do.
	pub fn next_deadline(&self) -> Option<Instant> {
		match (self.timer.deadline(), self.running.deadline()) {
			(Some(a), Some(b)) => Some(a.min(b)),
			(a, b) => a.or(b),
		}
	}

	/// Nothing left to do until the next `set_query`.
	pub fn is_settled(&self) -> bool {
		!self.timer.is_armed() && self.session.current().is_none() && !self.is_running()
	}

	/// Apply queued backend callbacks, then any expired timers.
	pub fn pump(&mut self) {
		for update in self.session.drain() {
			match update {
				SessionUpdate::Matches(batch) => self.apply_batch(batch),
				SessionUpdate::Finished => {
					let now = self.clock.now();
					self.running.on_finished(now);
				}
			}
		}

		let now = self.clock.now();
		if let Some(query) = self.timer.poll(now) {
			self.start_query(query);
		}
		if let Some(running) = self.running.poll(now) {
			self.subscribers.emit(ModelEvent::RunningChanged(running));
		}
	}

	/// Block until a backend callback arrives or the next timer is due, for at
	/// most `limit`. Call [`pump`](Self::pump) afterwards.
	pub fn wait(&mut self, limit: Duration) {
		let timeout = self.next_deadline().map_or(limit, |deadline| {
			deadline.saturating_duration_since(self.clock.now()).min(limit)
		});
		self.session.wait(timeout);
	}

	fn start_query(&mut self, query: String) {
		let selector = self.selector();
		if self.session.start(&query, &selector).is_none() {
			return;
		}
		self.apply_store_change(|store| store.clear());
		self.set_active_query(query);
		if let Some(running) = self.running.on_started() {
			self.subscribers.emit(ModelEvent::RunningChanged(running));
		}
	}

	fn clear_now(&mut self, now: Instant) {
		if self.session.cancel().is_some() && !self.running.is_settling() {
			self.running.on_finished(now);
		}
		self.apply_store_change(|store| store.clear());
		self.set_active_query(String::new());
	}

	fn apply_batch(&mut self, batch: Vec<Match>) {
		self.apply_store_change(|store| store.replace(batch));
	}

	fn apply_store_change(&mut self, mutate: impl FnOnce(&mut ResultStore) -> StoreChange) {
		let before = self.store.count();
		match mutate(&mut self.store) {
			StoreChange::Unchanged => return,
			StoreChange::Appended { first, last } => {
				self.subscribers
					.emit(ModelEvent::RowsInserted { first, last });
			}
			StoreChange::Reset => self.subscribers.emit(ModelEvent::Reset),
		}
		if self.store.count() != before {
			self.subscribers.emit(ModelEvent::CountChanged);
		}
	}

	fn set_active_query(&mut self, query: String) {
		if self.active_query != query {
			self.active_query = query;
			self.subscribers.emit(ModelEvent::QueryChanged);
		}
	}
}
