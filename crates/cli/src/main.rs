//! `keychord` binary.
//!
//! Parses keybinding strings the way a terminal UI's binding layer would
//! and shows how they render, or validates a binding file.

mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Command};
use tracing::info;

fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();
	logging::setup_tracing(cli.verbose);

	let mut out = std::io::stdout().lock();

	match cli.command {
		Command::Parse { combos, must, json } => {
			info!(count = combos.len(), must, "parsing keybinding lists");
			if !commands::parse(&combos, must, json, &mut out)? {
				return Ok(ExitCode::FAILURE);
			}
		}
		Command::Check { file } => commands::check(&file, &mut out)?,
		Command::Keys => commands::keys(&mut out)?,
	}

	Ok(ExitCode::SUCCESS)
}
