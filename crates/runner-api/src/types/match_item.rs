use serde::Serialize;
use serde_json::Value;

/// Category tag attached to every match by the runner that produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
	NoMatch,
	Completion,
	#[default]
	Possible,
	Informational,
	Helper,
	Exact,
}

impl MatchType {
	/// Stable lowercase name, matching the serialized form.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::NoMatch => "nomatch",
			Self::Completion => "completion",
			Self::Possible => "possible",
			Self::Informational => "informational",
			Self::Helper => "helper",
			Self::Exact => "exact",
		}
	}
}

/// Secondary action offered alongside a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchAction {
	pub id: String,
	pub label: String,
	pub icon: String,
}

impl MatchAction {
	#[must_use]
	pub fn new(id: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			icon: icon.into(),
		}
	}
}

/// One result produced by a runner.
///
/// Matches are value objects: the model never mutates them, and a new query
/// discards every match from the previous one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
	#[serde(rename = "type")]
	pub match_type: MatchType,
	pub label: String,
	pub icon: String,
	pub relevance: f64,
	pub data: Value,
	pub id: String,
	pub subtext: String,
	pub enabled: bool,
	pub runner_id: String,
	pub runner_name: String,
	pub actions: Vec<MatchAction>,
}

impl Match {
	/// Create an enabled match with the given identity and label.
	///
	/// The runner name defaults to the runner id until
	/// [`with_runner_name`](Self::with_runner_name) is called.
	#[must_use]
	pub fn new(runner_id: impl Into<String>, id: impl Into<String>, label: impl Into<String>) -> Self {
		let runner_id = runner_id.into();
		Self {
			match_type: MatchType::default(),
			label: label.into(),
			icon: String::new(),
			relevance: 0.0,
			data: Value::Null,
			id: id.into(),
			subtext: String::new(),
			enabled: true,
			runner_name: runner_id.clone(),
			runner_id,
			actions: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_type(mut self, match_type: MatchType) -> Self {
		self.match_type = match_type;
		self
	}

	#[must_use]
	pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = icon.into();
		self
	}

	#[must_use]
	pub fn with_relevance(mut self, relevance: f64) -> Self {
		self.relevance = relevance;
		self
	}

	#[must_use]
	pub fn with_data(mut self, data: Value) -> Self {
		self.data = data;
		self
	}

	#[must_use]
	pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
		self.subtext = subtext.into();
		self
	}

	#[must_use]
	pub fn with_enabled(mut self, enabled: bool) -> Self {
		self.enabled = enabled;
		self
	}

	#[must_use]
	pub fn with_runner_name(mut self, name: impl Into<String>) -> Self {
		self.runner_name = name.into();
		self
	}

	#[must_use]
	pub fn with_action(mut self, action: MatchAction) -> Self {
		self.actions.push(action);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn builder_defaults_runner_name_to_id() {
		let m = Match::new("apps", "firefox.desktop", "Firefox");
		assert_eq!(m.runner_name, "apps");
		assert!(m.enabled);
		assert_eq!(m.match_type, MatchType::Possible);
	}

	#[test]
	fn serializes_type_under_short_key() {
		let m = Match::new("calc", "1", "2")
			.with_type(MatchType::Exact)
			.with_data(json!({ "value": 2 }));
		let value = serde_json::to_value(&m).expect("serialize");
		assert_eq!(value["type"], "exact");
		assert_eq!(value["data"]["value"], 2);
		assert_eq!(value["runner_id"], "calc");
	}
}
