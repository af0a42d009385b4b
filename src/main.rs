mod cli;
mod settings;
mod workflow;

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use workflow::{LiveSearchWorkflow, QueryOutcome};

fn main() -> Result<()> {
	runnel::logging::initialize();
	let cli = parse_cli();

	let resolved = settings::load(&cli)?;
	if cli.print_config {
		resolved.print_summary();
	}

	let mut workflow = LiveSearchWorkflow::from_config(resolved)?;
	for line in io::stdin().lock().lines() {
		let line = line.context("failed to read query from stdin")?;
		let outcome = workflow.query(line.trim_end())?;
		print_outcome(cli.output, &outcome)?;
	}

	if let Some(row) = cli.run {
		let label = workflow.run(row)?;
		println!("ran: {label}");
	}

	Ok(())
}

fn print_outcome(format: OutputFormat, outcome: &QueryOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => print_plain(outcome),
		OutputFormat::Json => print_json(outcome)?,
	}
	Ok(())
}
