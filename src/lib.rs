//! Live-search result list core.
//!
//! [`ResultListModel`] turns keystroke-driven query edits into debounced
//! backend sessions and keeps an ordered, randomly indexable list of the
//! matches those sessions stream back. The [`runners`] module ships a
//! thread-backed backend manager and a built-in runner; any other
//! [`BackendManager`] can be plugged in through a [`ManagerFactory`].

pub mod app_dirs;
pub mod logging;
pub mod model;
pub mod runners;

pub use model::{
	Clock, ManualClock, ModelEvent, ResultListModel, Role, RoleValue, SystemClock, Timing,
};
pub use runners::ThreadedManager;
pub use runners::builtin::{EntriesRunner, Entry};

pub use runnel_runner_api::{
	BackendManager, ManagerError, ManagerFactory, Match, MatchAction, MatchType, Runner,
	RunnerContext, RunnerRegistry, RunnerRegistryError, RunnerSelector, SessionHandle,
	SessionToken,
};
