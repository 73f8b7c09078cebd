use std::path::PathBuf;

use clap::{Parser, Subcommand};


#[derive(Parser, Debug)]
#[command(name = "keychord")]
#[command(about = "Parse and check terminal keybinding strings")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Parse comma-separated keybinding lists and show how they render
	Parse {
		/// Keybinding lists, e.g. "ctrl+a" or "ctrl+/, tab"
		#[arg(required = true, value_name = "COMBO")]
		combos: Vec<String>,

		/// Abort on the first invalid list instead of reporting it
		#[arg(long)]
		must: bool,

		/// Print one JSON document per list
		#[arg(long, conflicts_with = "must")]
		json: bool,
	},
	/// Validate a TOML binding file
	Check {
		/// Binding file with a [bindings] table
		#[arg(value_name = "FILE")]
		file: PathBuf,
	},
	/// List every supported key identifier
	Keys,
}
