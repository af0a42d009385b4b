use std::sync::{Arc, Mutex, PoisonError};

use runnel_runner_api::{Match, MatchType, Runner, RunnerContext};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

/// One launchable item served by [`EntriesRunner`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
	pub id: String,
	pub label: String,
	#[serde(default)]
	pub subtext: String,
	#[serde(default)]
	pub icon: String,
}

impl Entry {
	pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			subtext: String::new(),
			icon: String::new(),
		}
	}

	#[must_use]
	pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
		self.subtext = subtext.into();
		self
	}
}

/// Matches a static list of entries by case-insensitive substring.
///
/// Outside single-runner mode a query needs at least
/// [`MIN_QUERY_CHARS`](Self::MIN_QUERY_CHARS) characters.
pub struct EntriesRunner {
	entries: Vec<Entry>,
	launched: Arc<Mutex<Vec<String>>>,
}

impl EntriesRunner {
	pub const ID: &'static str = "entries";
	pub const MIN_QUERY_CHARS: usize = 2;

	pub fn new(entries: Vec<Entry>) -> Self {
		Self {
			entries,
			launched: Arc::default(),
		}
	}

	/// Ids of entries run so far, oldest first.
	pub fn launched(&self) -> Arc<Mutex<Vec<String>>> {
		Arc::clone(&self.launched)
	}

	fn score(entry: &Entry, needle: &str) -> Option<(MatchType, f64)> {
		let label = entry.label.to_lowercase();
		if label == needle {
			Some((MatchType::Exact, 1.0))
		} else if label.starts_with(needle) {
			Some((MatchType::Possible, 0.8))
		} else if label.contains(needle) {
			Some((MatchType::Possible, 0.6))
		} else if entry.subtext.to_lowercase().contains(needle) {
			Some((MatchType::Informational, 0.3))
		} else {
			None
		}
	}
}

impl Runner for EntriesRunner {
	fn id(&self) -> &str {
		Self::ID
	}

	fn name(&self) -> &str {
		"Entries"
	}

	fn matches(&self, context: &RunnerContext<'_>) -> Vec<Match> {
		let needle = context.query().trim().to_lowercase();
		let min_chars = if context.is_single_runner() {
			1
		} else {
			Self::MIN_QUERY_CHARS
		};
		if needle.chars().count() < min_chars {
			return Vec::new();
		}

		let mut found = Vec::new();
		for entry in &self.entries {
			if !context.is_valid() {
				break;
			}
			if let Some((match_type, relevance)) = Self::score(entry, &needle) {
				found.push(
					Match::new(Self::ID, &entry.id, &entry.label)
						.with_type(match_type)
						.with_relevance(relevance)
						.with_subtext(&entry.subtext)
						.with_icon(&entry.icon)
						.with_data(json!({ "entry": entry.id })),
				);
			}
		}
		found
	}

	fn run(&self, selected: &Match) {
		info!(entry = %selected.id, label = %selected.label, "launching entry");
		self.launched
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.push(selected.id.clone());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use runnel_runner_api::SessionToken;
	use std::sync::atomic::AtomicU64;

	fn runner() -> EntriesRunner {
		EntriesRunner::new(vec![
			Entry::new("firefox", "Firefox").with_subtext("Web browser"),
			Entry::new("files", "Files").with_subtext("File manager"),
			Entry::new("fire", "Fire"),
			Entry::new("term", "Terminal"),
		])
	}

	fn ids(found: &[Match]) -> Vec<&str> {
		found.iter().map(|m| m.id.as_str()).collect()
	}

	#[test]
	fn matches_by_label_then_subtext() {
		let latest = AtomicU64::new(1);
		let context = RunnerContext::new("FIRE", false, SessionToken::new(1), &latest);
		let found = runner().matches(&context);
		assert_eq!(ids(&found), vec!["firefox", "fire"]);
		assert_eq!(found[1].match_type, MatchType::Exact);

		let context = RunnerContext::new("browser", false, SessionToken::new(1), &latest);
		let found = runner().matches(&context);
		assert_eq!(ids(&found), vec!["firefox"]);
		assert_eq!(found[0].match_type, MatchType::Informational);
	}

	#[test]
	fn single_runner_mode_accepts_one_character() {
		let latest = AtomicU64::new(1);
		let multi = RunnerContext::new("t", false, SessionToken::new(1), &latest);
		assert!(runner().matches(&multi).is_empty());

		let single = RunnerContext::new("t", true, SessionToken::new(1), &latest);
		assert_eq!(ids(&runner().matches(&single)), vec!["term"]);
	}

	#[test]
	fn superseded_session_yields_nothing() {
		let latest = AtomicU64::new(2);
		let context = RunnerContext::new("fire", false, SessionToken::new(1), &latest);
		assert!(runner().matches(&context).is_empty());
	}

	#[test]
	fn run_records_launch() {
		let runner = runner();
		runner.run(&Match::new(EntriesRunner::ID, "term", "Terminal"));
		assert_eq!(*runner.launched().lock().unwrap(), vec!["term".to_string()]);
	}
}
