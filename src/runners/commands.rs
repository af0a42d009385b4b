use runnel_runner_api::{RunnerSelector, SessionHandle};

/// Requests sent from [`ThreadedManager`](super::ThreadedManager) to its
/// worker thread.
#[derive(Debug)]
pub(crate) enum WorkerCommand {
	Query {
		query: String,
		selector: RunnerSelector,
		session: SessionHandle,
	},
	Run {
		match_id: String,
	},
	Shutdown,
}
