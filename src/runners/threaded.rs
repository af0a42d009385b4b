use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, SendError, Sender};
use std::thread::{self, JoinHandle};

use runnel_runner_api::{
	BackendManager, ManagerError, ManagerFactory, Match, RunnerContext, RunnerRegistry,
	RunnerSelector, SessionHandle, SessionToken,
};
use tracing::{debug, trace, warn};

use super::commands::WorkerCommand;

/// Backend manager that runs every query on a dedicated worker thread.
///
/// Runners are queried one after another in registration order. After each
/// runner the accumulated matches are sorted by relevance and sent as a full
/// snapshot, so the model sees the list grow while slower runners are still
/// working. A newer query or a cancel makes the worker skip the remaining
/// runners.
///
/// Match ids are prefixed with the owning runner's id (`runner_match`) so
/// that ids stay unique across runners. A runner that panics contributes no
/// matches; the session still finishes.
pub struct ThreadedManager {
	tx: Sender<WorkerCommand>,
	latest_session: Arc<AtomicU64>,
	worker: Option<JoinHandle<()>>,
}

impl ThreadedManager {
	pub fn spawn(registry: RunnerRegistry) -> Result<Self, ManagerError> {
		if registry.is_empty() {
			return Err(ManagerError::NoRunners);
		}

		let (tx, rx) = mpsc::channel();
		let latest_session = Arc::new(AtomicU64::new(0));
		let thread_latest = Arc::clone(&latest_session);
		let worker = thread::Builder::new()
			.name("runnel-worker".into())
			.spawn(move || worker_loop(&registry, rx, &thread_latest))
			.map_err(|err| ManagerError::unavailable(err.to_string()))?;

		Ok(Self {
			tx,
			latest_session,
			worker: Some(worker),
		})
	}

	/// Factory spawning a fresh worker over a copy of `registry`.
	pub fn factory(registry: RunnerRegistry) -> impl ManagerFactory + 'static {
		move || {
			Self::spawn(registry.clone())
				.map(|manager| Box::new(manager) as Box<dyn BackendManager>)
		}
	}
}

impl BackendManager for ThreadedManager {
	fn launch_query(&mut self, query: &str, selector: &RunnerSelector, session: SessionHandle) {
		self.latest_session.store(session.token().get(), Ordering::Release);
		let command = WorkerCommand::Query {
			query: query.to_string(),
			selector: selector.clone(),
			session,
		};
		if let Err(SendError(WorkerCommand::Query { session, .. })) = self.tx.send(command) {
			warn!(token = %session.token(), "worker thread is gone; finishing session");
			session.finished();
		}
	}

	fn cancel(&mut self, token: SessionToken) {
		let _ = self.latest_session.compare_exchange(
			token.get(),
			0,
			Ordering::AcqRel,
			Ordering::Acquire,
		);
	}

	fn run_match(&mut self, match_id: &str) {
		let _ = self.tx.send(WorkerCommand::Run {
			match_id: match_id.to_string(),
		});
	}
}

impl Drop for ThreadedManager {
	fn drop(&mut self) {
		self.latest_session.store(0, Ordering::Release);
		let _ = self.tx.send(WorkerCommand::Shutdown);
		if let Some(worker) = self.worker.take() {
			let _ = worker.join();
		}
	}
}

fn worker_loop(registry: &RunnerRegistry, rx: Receiver<WorkerCommand>, latest: &AtomicU64) {
	let mut snapshot: Vec<Match> = Vec::new();
	while let Ok(command) = rx.recv() {
		match command {
			WorkerCommand::Query {
				query,
				selector,
				session,
			} => {
				snapshot = run_query(registry, &query, &selector, &session, latest);
				session.finished();
			}
			WorkerCommand::Run { match_id } => run_match(registry, &snapshot, &match_id),
			WorkerCommand::Shutdown => break,
		}
	}
}

fn run_query(
	registry: &RunnerRegistry,
	query: &str,
	selector: &RunnerSelector,
	session: &SessionHandle,
	latest: &AtomicU64,
) -> Vec<Match> {
	let token = session.token();
	let mut collected: Vec<Match> = Vec::new();

	for entry in registry.selected(selector) {
		let context = RunnerContext::new(query, selector.is_single(), token, latest);
		if !context.is_valid() {
			debug!(%token, "session superseded; skipping remaining runners");
			break;
		}

		let outcome = panic::catch_unwind(AssertUnwindSafe(|| entry.runner().matches(&context)));
		let Ok(found) = outcome else {
			warn!(%token, runner = entry.id(), "runner panicked; skipping its matches");
			continue;
		};
		trace!(%token, runner = entry.id(), count = found.len(), "runner finished");
		if found.is_empty() {
			continue;
		}
		collected.extend(found.into_iter().map(|mut item| {
			item.id = format!("{}_{}", entry.id(), item.id);
			item.runner_id = entry.id().to_string();
			item.runner_name = entry.name().to_string();
			item
		}));
		collected.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));

		if !session.matches(collected.clone()) {
			break;
		}
	}
	collected
}

fn run_match(registry: &RunnerRegistry, snapshot: &[Match], match_id: &str) {
	let Some(item) = snapshot.iter().find(|item| item.id == match_id) else {
		debug!(match_id, "run requested for unknown match");
		return;
	};
	let Some(runner) = registry.runner(&item.runner_id) else {
		return;
	};
	debug!(match_id, runner = runner.id(), "running match");
	let selected = unstamped(item);
	if panic::catch_unwind(AssertUnwindSafe(|| runner.run(&selected))).is_err() {
		warn!(match_id, runner = runner.id(), "runner panicked while running match");
	}
}

/// The match as its runner produced it, without the runner id prefix.
fn unstamped(item: &Match) -> Match {
	let mut selected = item.clone();
	if let Some(own) = item
		.id
		.strip_prefix(item.runner_id.as_str())
		.and_then(|rest| rest.strip_prefix('_'))
	{
		selected.id = own.to_string();
	}
	selected
}

#[cfg(test)]
mod tests {
	use super::*;
	use runnel_runner_api::{Runner, SessionEvent, SessionEventKind};
	use std::sync::Mutex;
	use std::time::Duration;

	const WAIT: Duration = Duration::from_secs(5);

	struct Fixed {
		id: &'static str,
		items: Vec<(&'static str, f64)>,
		ran: Arc<Mutex<Vec<String>>>,
	}

	impl Runner for Fixed {
		fn id(&self) -> &str {
			self.id
		}

		fn name(&self) -> &str {
			"Fixed"
		}

		fn matches(&self, context: &RunnerContext<'_>) -> Vec<Match> {
			self.items
				.iter()
				.filter(|(label, _)| label.contains(context.query()))
				.map(|(label, relevance)| Match::new("ignored", *label, *label).with_relevance(*relevance))
				.collect()
		}

		fn run(&self, selected: &Match) {
			self.ran
				.lock()
				.unwrap()
				.push(format!("{}:{}", self.id, selected.id));
		}
	}

	/// Panics on the query "boom" and finds nothing otherwise.
	struct Fragile;

	impl Runner for Fragile {
		fn id(&self) -> &str {
			"fragile"
		}

		fn name(&self) -> &str {
			"Fragile"
		}

		fn matches(&self, context: &RunnerContext<'_>) -> Vec<Match> {
			assert_ne!(context.query(), "boom", "fragile runner gave up");
			Vec::new()
		}
	}

	fn registry(ran: &Arc<Mutex<Vec<String>>>) -> RunnerRegistry {
		let mut registry = RunnerRegistry::new();
		registry
			.register(Fixed {
				id: "low",
				items: vec![("alpha", 0.2), ("alps", 0.1)],
				ran: Arc::clone(ran),
			})
			.unwrap();
		registry
			.register(Fixed {
				id: "high",
				items: vec![("alphabet", 0.9)],
				ran: Arc::clone(ran),
			})
			.unwrap();
		registry
	}

	fn collect_until_finished(rx: &Receiver<SessionEvent>) -> Vec<Vec<Match>> {
		let mut batches = Vec::new();
		loop {
			let event = rx.recv_timeout(WAIT).expect("worker reply");
			match event.kind {
				SessionEventKind::Matches(batch) => batches.push(batch),
				SessionEventKind::Finished => return batches,
			}
		}
	}

	#[test]
	fn snapshots_grow_and_are_sorted_by_relevance() {
		let ran = Arc::default();
		let mut manager = ThreadedManager::spawn(registry(&ran)).unwrap();
		let (tx, rx) = mpsc::channel();
		let handle = SessionHandle::new(tx, SessionToken::new(1));

		manager.launch_query("alp", &RunnerSelector::default(), handle);
		let batches = collect_until_finished(&rx);

		assert_eq!(batches.len(), 2);
		assert_eq!(batches[0].len(), 2);
		let last: Vec<_> = batches[1].iter().map(|m| m.id.as_str()).collect();
		assert_eq!(last, vec!["high_alphabet", "low_alpha", "low_alps"]);
		assert_eq!(batches[1][0].runner_id, "high");
		assert_eq!(batches[1][0].runner_name, "Fixed");
	}

	#[test]
	fn selector_limits_queried_runners() {
		let ran = Arc::default();
		let mut manager = ThreadedManager::spawn(registry(&ran)).unwrap();
		let (tx, rx) = mpsc::channel();

		manager.launch_query(
			"alp",
			&RunnerSelector::Single("high".into()),
			SessionHandle::new(tx, SessionToken::new(1)),
		);
		let batches = collect_until_finished(&rx);
		assert_eq!(batches.len(), 1);
		assert!(batches[0].iter().all(|m| m.runner_id == "high"));
	}

	#[test]
	fn run_dispatches_to_owning_runner() {
		let ran: Arc<Mutex<Vec<String>>> = Arc::default();
		let mut manager = ThreadedManager::spawn(registry(&ran)).unwrap();
		let (tx, rx) = mpsc::channel();

		manager.launch_query(
			"alp",
			&RunnerSelector::default(),
			SessionHandle::new(tx, SessionToken::new(1)),
		);
		collect_until_finished(&rx);
		manager.run_match("low_alps");
		manager.run_match("alps");
		manager.run_match("missing");
		drop(manager);

		assert_eq!(*ran.lock().unwrap(), vec!["low:alps".to_string()]);
	}

	#[test]
	fn equal_ids_from_different_runners_stay_distinct() {
		let ran: Arc<Mutex<Vec<String>>> = Arc::default();
		let mut registry = RunnerRegistry::new();
		for (id, relevance) in [("a", 0.1), ("b", 0.9)] {
			registry
				.register(Fixed {
					id,
					items: vec![("same", relevance)],
					ran: Arc::clone(&ran),
				})
				.unwrap();
		}
		let mut manager = ThreadedManager::spawn(registry).unwrap();
		let (tx, rx) = mpsc::channel();

		manager.launch_query(
			"same",
			&RunnerSelector::default(),
			SessionHandle::new(tx, SessionToken::new(1)),
		);
		let batches = collect_until_finished(&rx);
		let ids: Vec<_> = batches[1].iter().map(|m| m.id.as_str()).collect();
		assert_eq!(ids, vec!["b_same", "a_same"]);

		manager.run_match(&batches[1][1].id);
		drop(manager);
		assert_eq!(*ran.lock().unwrap(), vec!["a:same".to_string()]);
	}

	#[test]
	fn panicking_runner_is_skipped_and_worker_survives() {
		let ran = Arc::default();
		let mut registry = registry(&ran);
		registry.register(Fragile).unwrap();
		let mut manager = ThreadedManager::spawn(registry).unwrap();

		let (tx, rx) = mpsc::channel();
		manager.launch_query(
			"boom",
			&RunnerSelector::default(),
			SessionHandle::new(tx, SessionToken::new(1)),
		);
		assert!(collect_until_finished(&rx).is_empty());

		let (tx, rx) = mpsc::channel();
		manager.launch_query(
			"alp",
			&RunnerSelector::default(),
			SessionHandle::new(tx, SessionToken::new(2)),
		);
		let batches = collect_until_finished(&rx);
		let last: Vec<_> = batches[batches.len() - 1]
			.iter()
			.map(|m| m.runner_id.as_str())
			.collect();
		assert_eq!(last, vec!["high", "low", "low"]);
	}

	#[test]
	fn empty_registry_cannot_spawn() {
		assert!(matches!(
			ThreadedManager::spawn(RunnerRegistry::new()),
			Err(ManagerError::NoRunners)
		));
	}
}
