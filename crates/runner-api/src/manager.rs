use crate::error::ManagerError;
use crate::session::{SessionHandle, SessionToken};
use crate::types::RunnerSelector;

/// The active backend query capability driven by the result list model.
///
/// Implementations may do their matching on other threads; they only report
/// back through the [`SessionHandle`] passed to
/// [`launch_query`](Self::launch_query).
pub trait BackendManager: Send {
	/// Begin an asynchronous search for `query` on the runners admitted by
	/// `selector`. Progress is reported through `session`.
	fn launch_query(&mut self, query: &str, selector: &RunnerSelector, session: SessionHandle);

	/// Advisory request to stop working on `token`. Late callbacks for a
	/// cancelled session are dropped by the model regardless.
	fn cancel(&mut self, token: SessionToken) {
		let _ = token;
	}

	/// Execute the action behind `match_id`. Unknown ids are ignored.
	fn run_match(&mut self, match_id: &str);
}

/// Produces backend managers on demand. Construction may fail, in which case
/// the model stays idle and retries on the next query.
pub trait ManagerFactory: Send {
	fn create(&mut self) -> Result<Box<dyn BackendManager>, ManagerError>;
}

impl<F> ManagerFactory for F
where
	F: FnMut() -> Result<Box<dyn BackendManager>, ManagerError> + Send,
{
	fn create(&mut self) -> Result<Box<dyn BackendManager>, ManagerError> {
		self()
	}
}
