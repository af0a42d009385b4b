use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use runnel::{EntriesRunner, Match, ResultListModel, RunnerRegistry, ThreadedManager};
use tracing::debug;

use crate::settings::ResolvedConfig;

const WAIT_SLICE: Duration = Duration::from_millis(50);
const SETTLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Settled state of the list after one query edit.
#[derive(Debug, Clone)]
pub(crate) struct QueryOutcome {
	pub(crate) query: String,
	pub(crate) rows: Vec<Match>,
}

/// Drives a [`ResultListModel`] backed by the built-in runners, one query
/// edit at a time.
pub(crate) struct LiveSearchWorkflow {
	model: ResultListModel,
}

impl LiveSearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let timing = config.timing();
		let ResolvedConfig {
			allowed_runners,
			entries,
			..
		} = config;

		let mut registry = RunnerRegistry::new();
		registry
			.register(EntriesRunner::new(entries))
			.context("failed to register the entries runner")?;

		let mut model = ResultListModel::new(ThreadedManager::factory(registry)).with_timing(timing);
		model.set_allowed_runners(&allowed_runners);
		Ok(Self { model })
	}

	/// Apply `text` as the new query and wait until the list settles.
	pub(crate) fn query(&mut self, text: &str) -> Result<QueryOutcome> {
		self.model.set_query(text);
		self.settle()?;
		Ok(QueryOutcome {
			query: self.model.current_query().to_string(),
			rows: self.model.matches().cloned().collect(),
		})
	}

	/// Run the match at `row` and return its label.
	pub(crate) fn run(&mut self, row: usize) -> Result<String> {
		let Some(label) = self.model.match_at(row).map(|item| item.label.clone()) else {
			bail!(
				"row {row} is not in the result list ({} rows)",
				self.model.row_count()
			);
		};
		self.model.run(row);
		Ok(label)
	}

	fn settle(&mut self) -> Result<()> {
		let started = Instant::now();
		loop {
			self.model.pump();
			if self.model.is_settled() {
				debug!(rows = self.model.row_count(), "result list settled");
				return Ok(());
			}
			if started.elapsed() > SETTLE_TIMEOUT {
				bail!("result list did not settle within {SETTLE_TIMEOUT:?}");
			}
			self.model.wait(WAIT_SLICE);
		}
	}
}

#[cfg(test)]
mod tests {
	use runnel::Entry;

	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			debounce_ms: 5,
			settle_ms: 0,
			allowed_runners: Vec::new(),
			entries: vec![
				Entry::new("firefox", "Firefox"),
				Entry::new("files", "Files"),
				Entry::new("term", "Terminal"),
			],
		}
	}

	#[test]
	fn successive_edits_settle_on_latest_query() {
		let mut workflow = LiveSearchWorkflow::from_config(config()).expect("workflow");
		let outcome = workflow.query("fi").expect("settles");
		assert_eq!(outcome.query, "fi");
		assert_eq!(outcome.rows.len(), 2);

		let outcome = workflow.query("fire").expect("settles");
		let ids: Vec<_> = outcome.rows.iter().map(|m| m.id.as_str()).collect();
		assert_eq!(ids, vec!["entries_firefox"]);

		let outcome = workflow.query("").expect("settles");
		assert_eq!(outcome.query, "");
		assert!(outcome.rows.is_empty());
	}

	#[test]
	fn run_rejects_missing_rows() {
		let mut workflow = LiveSearchWorkflow::from_config(config()).expect("workflow");
		workflow.query("term").expect("settles");
		assert_eq!(workflow.run(0).expect("row exists"), "Terminal");
		assert!(workflow.run(5).is_err());
	}
}
