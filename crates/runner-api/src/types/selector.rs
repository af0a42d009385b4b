/// Which runners a query is dispatched to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerSelector {
	/// Every listed runner, or every registered runner when the list is empty.
	All(Vec<String>),
	/// Exactly one runner. Runners see this as single-runner mode and may
	/// switch to exact or prefix matching.
	Single(String),
}

impl RunnerSelector {
	/// Build the selector for an allowed-runner list: one id selects
	/// single-runner mode, anything else selects every listed runner.
	#[must_use]
	pub fn from_allowed<I, S>(ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut ids: Vec<String> = ids.into_iter().map(Into::into).collect();
		if ids.len() == 1 {
			if let Some(id) = ids.pop() {
				return Self::Single(id);
			}
		}
		Self::All(ids)
	}

	#[must_use]
	pub fn is_single(&self) -> bool {
		matches!(self, Self::Single(_))
	}

	/// Returns `true` when the runner with `id` should receive the query.
	#[must_use]
	pub fn admits(&self, id: &str) -> bool {
		match self {
			Self::All(ids) => ids.is_empty() || ids.iter().any(|allowed| allowed == id),
			Self::Single(single) => single == id,
		}
	}
}

impl Default for RunnerSelector {
	fn default() -> Self {
		Self::All(Vec::new())
	}
}
