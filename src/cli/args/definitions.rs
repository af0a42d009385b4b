use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `runnel` binary.
///
/// Each line read from stdin is treated as the next state of a search box.
#[derive(Parser, Debug)]
#[command(
	name = "runnel",
	version,
	long_version = long_version(),
	about = "Feed queries from stdin into a live result list and print what settles",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "RUNNEL_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'a',
		long = "allow",
		value_delimiter = ',',
		value_name = "RUNNER",
		help = "Comma-separated runner ids to query; a single id enables single-runner mode (default: all)"
	)]
	pub(crate) allow: Option<Vec<String>>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period before a query starts (default: 100)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "settle-ms",
		value_name = "MS",
		help = "How long the busy flag outlives a finished query (default: 250)"
	)]
	pub(crate) settle_ms: Option<u64>,
	#[arg(
		short = 'r',
		long = "run",
		value_name = "ROW",
		help = "Run the match at ROW of the final result list before exiting (default: none)"
	)]
	pub(crate) run: Option<usize>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print each settled result list"
	)]
	pub(crate) output: OutputFormat,
}
