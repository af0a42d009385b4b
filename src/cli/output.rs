use anyhow::Result;
use runnel::{Match, Role, RoleValue};
use serde_json::{Map, Value, json};

use crate::workflow::QueryOutcome;

/// Print one settled result list as aligned plain text.
pub(crate) fn print_plain(outcome: &QueryOutcome) {
	print!("{}", format_plain(outcome));
}

pub(crate) fn format_plain(outcome: &QueryOutcome) -> String {
	let mut out = format!("query: '{}' ({} rows)\n", outcome.query, outcome.rows.len());
	for (row, item) in outcome.rows.iter().enumerate() {
		out.push_str(&format!("{row:>3}  {}", item.label));
		if !item.subtext.is_empty() {
			out.push_str(&format!(" - {}", item.subtext));
		}
		out.push_str(&format!("  [{}]\n", item.runner_name));
	}
	out
}

/// Format one settled result list as JSON, keyed by role name.
pub(crate) fn format_outcome_json(outcome: &QueryOutcome) -> Result<String> {
	let rows: Vec<Value> = outcome.rows.iter().map(row_json).collect();
	let payload = json!({
		"query": outcome.query,
		"count": outcome.rows.len(),
		"rows": rows,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_json(outcome: &QueryOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

fn row_json(item: &Match) -> Value {
	let fields: Map<String, Value> = Role::ALL
		.into_iter()
		.map(|role| (role.name().to_string(), role_value_json(role.value_of(item))))
		.collect();
	Value::Object(fields)
}

fn role_value_json(value: RoleValue) -> Value {
	match value {
		RoleValue::Invalid => Value::Null,
		RoleValue::Text(text) => Value::String(text),
		RoleValue::Number(number) => json!(number),
		RoleValue::Bool(flag) => Value::Bool(flag),
		RoleValue::Data(data) => data,
		RoleValue::Type(match_type) => Value::String(match_type.as_str().to_string()),
		RoleValue::Actions(actions) => json!(actions),
	}
}
