use runnel_runner_api::{Match, MatchAction, MatchType};
use serde_json::Value;

/// Field of a match addressable by presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
	Type,
	Label,
	Icon,
	Relevance,
	Data,
	Id,
	SubText,
	Enabled,
	RunnerId,
	RunnerName,
	Actions,
}

impl Role {
	pub const ALL: [Role; 11] = [
		Role::Type,
		Role::Label,
		Role::Icon,
		Role::Relevance,
		Role::Data,
		Role::Id,
		Role::SubText,
		Role::Enabled,
		Role::RunnerId,
		Role::RunnerName,
		Role::Actions,
	];

	/// Stable name used by bindings and by the JSON output.
	pub fn name(self) -> &'static str {
		match self {
			Role::Type => "type",
			Role::Label => "label",
			Role::Icon => "icon",
			Role::Relevance => "relevance",
			Role::Data => "data",
			Role::Id => "id",
			Role::SubText => "description",
			Role::Enabled => "enabled",
			Role::RunnerId => "runnerid",
			Role::RunnerName => "runnerName",
			Role::Actions => "actions",
		}
	}

	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|role| role.name() == name)
	}

	pub fn value_of(self, item: &Match) -> RoleValue {
		match self {
			Role::Type => RoleValue::Type(item.match_type),
			Role::Label => RoleValue::Text(item.label.clone()),
			Role::Icon => RoleValue::Text(item.icon.clone()),
			Role::Relevance => RoleValue::Number(item.relevance),
			Role::Data => RoleValue::Data(item.data.clone()),
			Role::Id => RoleValue::Text(item.id.clone()),
			Role::SubText => RoleValue::Text(item.subtext.clone()),
			Role::Enabled => RoleValue::Bool(item.enabled),
			Role::RunnerId => RoleValue::Text(item.runner_id.clone()),
			Role::RunnerName => RoleValue::Text(item.runner_name.clone()),
			Role::Actions => RoleValue::Actions(item.actions.clone()),
		}
	}
}

/// Value of one role for one row. `Invalid` stands in for rows that do not
/// exist and for unknown role names.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RoleValue {
	#[default]
	Invalid,
	Text(String),
	Number(f64),
	Bool(bool),
	Data(Value),
	Type(MatchType),
	Actions(Vec<MatchAction>),
}

impl RoleValue {
	pub fn is_valid(&self) -> bool {
		!matches!(self, RoleValue::Invalid)
	}

	pub fn as_text(&self) -> Option<&str> {
		match self {
			RoleValue::Text(text) => Some(text),
			_ => None,
		}
	}
}
