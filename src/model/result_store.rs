use runnel_runner_api::Match;

/// Structural effect of a store mutation, used to pick the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
	Unchanged,
	/// Rows `first..=last` were appended; earlier rows are untouched.
	Appended { first: usize, last: usize },
	/// Every row index is invalidated.
	Reset,
}

/// Ordered matches for the current session.
///
/// The order handed over by the backend is kept as is; relevance is never used
/// to re-sort locally.
#[derive(Debug, Default, Clone)]
pub struct ResultStore {
	matches: Vec<Match>,
}

impl ResultStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Swap in a complete batch.
	pub fn replace(&mut self, matches: Vec<Match>) -> StoreChange {
		let old_len = self.matches.len();
		let change = if matches == self.matches {
			StoreChange::Unchanged
		} else if matches.len() > old_len && matches[..old_len] == self.matches[..] {
			StoreChange::Appended {
				first: old_len,
				last: matches.len() - 1,
			}
		} else {
			StoreChange::Reset
		};
		self.matches = matches;
		change
	}

	pub fn clear(&mut self) -> StoreChange {
		if self.matches.is_empty() {
			return StoreChange::Unchanged;
		}
		self.matches.clear();
		StoreChange::Reset
	}

	pub fn get(&self, row: usize) -> Option<&Match> {
		self.matches.get(row)
	}

	pub fn count(&self) -> usize {
		self.matches.len()
	}

	pub fn is_empty(&self) -> bool {
		self.matches.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Match> {
		self.matches.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn m(id: &str) -> Match {
		Match::new("test", id, id.to_uppercase())
	}

	#[test]
	fn growing_batch_with_same_prefix_appends() {
		let mut store = ResultStore::new();
		assert_eq!(
			store.replace(vec![m("a")]),
			StoreChange::Appended { first: 0, last: 0 }
		);
		assert_eq!(
			store.replace(vec![m("a"), m("b"), m("c")]),
			StoreChange::Appended { first: 1, last: 2 }
		);
		assert_eq!(store.count(), 3);
	}

	#[test]
	fn reordered_or_shrunk_batch_resets() {
		let mut store = ResultStore::new();
		store.replace(vec![m("a"), m("b")]);
		assert_eq!(store.replace(vec![m("b"), m("a"), m("c")]), StoreChange::Reset);
		assert_eq!(store.replace(vec![m("b")]), StoreChange::Reset);
		assert_eq!(store.get(0).map(|row| row.id.as_str()), Some("b"));
	}

	#[test]
	fn identical_batch_is_unchanged() {
		let mut store = ResultStore::new();
		store.replace(vec![m("a")]);
		assert_eq!(store.replace(vec![m("a")]), StoreChange::Unchanged);
	}

	#[test]
	fn out_of_range_rows_are_none() {
		let mut store = ResultStore::new();
		assert!(store.get(0).is_none());
		store.replace(vec![m("a")]);
		assert!(store.get(1).is_none());
		assert!(store.get(usize::MAX).is_none());
	}

	#[test]
	fn clear_reports_reset_only_when_rows_existed() {
		let mut store = ResultStore::new();
		assert_eq!(store.clear(), StoreChange::Unchanged);
		store.replace(vec![m("a")]);
		assert_eq!(store.clear(), StoreChange::Reset);
		assert!(store.is_empty());
	}
}
