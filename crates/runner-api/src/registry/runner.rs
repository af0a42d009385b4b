use crate::context::RunnerContext;
use crate::types::Match;

/// A pluggable search provider queried by the reference backend manager.
pub trait Runner: Send + Sync {
	/// Stable identifier used by allowed-runner lists.
	fn id(&self) -> &str;

	/// Human readable name copied into every match.
	fn name(&self) -> &str;

	/// Produce matches for the query described by `context`.
	fn matches(&self, context: &RunnerContext<'_>) -> Vec<Match>;

	/// Execute a match previously produced by this runner.
	fn run(&self, selected: &Match) {
		let _ = selected;
	}
}
