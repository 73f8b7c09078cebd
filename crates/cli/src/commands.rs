//! Subcommand implementations.
//!
//! Output goes to the given writer so the commands can be exercised
//! without a terminal.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use keychord_parser::{BindingSet, KeyDescriptor, keycode, must_parse_all, parse_all};
use serde::Serialize;
use tracing::{debug, warn};

/// JSON report for one parsed list.
#[derive(Serialize)]
struct Report<'a> {
	input: &'a str,
	#[serde(skip_serializing_if = "Option::is_none")]
	keys: Option<Vec<Entry<'a>>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	error: Option<String>,
}

#[derive(Serialize)]
struct Entry<'a> {
	display: String,
	#[serde(flatten)]
	descriptor: &'a KeyDescriptor,
}

fn joined(descriptors: &[KeyDescriptor]) -> String {
	descriptors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Parses each list and reports the result.
///
/// Returns `false` if any list failed. With `must`, an invalid list aborts
/// the process instead.
pub fn parse(combos: &[String], must: bool, json: bool, out: &mut impl Write) -> anyhow::Result<bool> {
	let mut all_ok = true;

	for input in combos {
		if must {
			let descriptors = must_parse_all(input);
			writeln!(out, "{input} = {}", joined(&descriptors))?;
			continue;
		}

		let result = parse_all(input);
		if let Err(err) = &result {
			warn!(%input, error = %err, "invalid keybinding list");
			all_ok = false;
		}

		if json {
			let report = match &result {
				Ok(descriptors) => Report {
					input,
					keys: Some(
						descriptors
							.iter()
							.map(|descriptor| Entry {
								display: descriptor.to_string(),
								descriptor,
							})
							.collect(),
					),
					error: None,
				},
				Err(err) => Report {
					input,
					keys: None,
					error: Some(err.to_string()),
				},
			};
			serde_json::to_writer(&mut *out, &report)?;
			writeln!(out)?;
		} else {
			match &result {
				Ok(descriptors) => writeln!(out, "{input} = {}", joined(descriptors))?,
				Err(err) => writeln!(out, "error parsing {input}: {err}")?,
			}
		}
	}

	Ok(all_ok)
}

/// Loads a binding file and lists each action with its rendered keys.
pub fn check(path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
	let text = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
	let set = BindingSet::from_toml_str(&text).with_context(|| format!("invalid binding file {}", path.display()))?;
	debug!(path = %path.display(), actions = set.len(), "loaded binding file");

	for (action, descriptors) in set.iter() {
		writeln!(out, "{action}: {}", joined(descriptors))?;
	}

	Ok(())
}

/// Lists the supported key identifiers, one per line.
pub fn keys(out: &mut impl Write) -> anyhow::Result<()> {
	for identifier in keycode::identifiers() {
		writeln!(out, "{identifier}")?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn run_parse(combos: &[&str], json: bool) -> (bool, String) {
		let combos: Vec<String> = combos.iter().map(|c| c.to_string()).collect();
		let mut out = Vec::new();
		let ok = parse(&combos, false, json, &mut out).unwrap();
		(ok, String::from_utf8(out).unwrap())
	}

	#[test]
	fn parse_prints_rendered_lists() {
		let (ok, out) = run_parse(&["ctrl+a", "ctrl+/, tab"], false);
		assert!(ok);
		assert_eq!(out, "ctrl+a = ^A\nctrl+/, tab = ^/, Tab\n");
	}

	#[test]
	fn parse_reports_failures() {
		let (ok, out) = run_parse(&["ctrl+b", "jibber+jabber"], false);
		assert!(!ok);
		assert_eq!(
			out,
			"ctrl+b = ^B\nerror parsing jibber+jabber: could not parse keybinding 'jibber+jabber' from request 'jibber+jabber': unsupported keybinding: KeyJibberJabber\n"
		);
	}

	#[test]
	fn parse_json_reports() {
		let (ok, out) = run_parse(&["alt+tab", ""], true);
		assert!(!ok);

		let lines: Vec<serde_json::Value> = out.lines().map(|line| serde_json::from_str(line).unwrap()).collect();
		assert_eq!(lines.len(), 2);
		assert_eq!(lines[0]["keys"][0]["display"], "Tab");
		assert_eq!(lines[0]["keys"][0]["modifier"], "alt");
		assert_eq!(lines[1]["error"], "must have at least one keybinding");
		assert!(lines[1].get("keys").is_none());
	}

	#[test]
	fn must_parse_prints_valid_lists() {
		let mut out = Vec::new();
		let ok = parse(&["ctrl+   alt +/".to_string()], true, false, &mut out).unwrap();
		assert!(ok);
		assert_eq!(String::from_utf8(out).unwrap(), "ctrl+   alt +/ = ^/\n");
	}

	#[test]
	#[should_panic(expected = "unsupported keybinding")]
	fn must_parse_aborts_on_invalid_list() {
		let mut out = Vec::new();
		let _ = parse(&["jibber+   jabber +/".to_string()], true, false, &mut out);
	}

	#[test]
	fn check_lists_actions() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[bindings]\nquit = \"ctrl+c, q\"\nsearch = \"ctrl+/\"").unwrap();

		let mut out = Vec::new();
		check(file.path(), &mut out).unwrap();
		assert_eq!(String::from_utf8(out).unwrap(), "quit: ^C, q\nsearch: ^/\n");
	}

	#[test]
	fn check_reports_file_and_action() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[bindings]\nbroken = \"jibber\"").unwrap();

		let err = check(file.path(), &mut Vec::new()).unwrap_err();
		let message = format!("{err:#}");
		assert!(message.contains("invalid binding file"), "{message}");
		assert!(message.contains("invalid keybinding for action 'broken'"), "{message}");
	}

	#[test]
	fn check_missing_file() {
		let err = check(Path::new("/nonexistent/bindings.toml"), &mut Vec::new()).unwrap_err();
		assert!(err.to_string().starts_with("failed to read"));
	}

	#[test]
	fn keys_lists_identifiers() {
		let mut out = Vec::new();
		keys(&mut out).unwrap();
		let out = String::from_utf8(out).unwrap();
		assert_eq!(out.lines().next(), Some("KeyF1"));
		assert!(out.lines().any(|line| line == "MouseWheelDown"));
		assert_eq!(out.lines().count(), 74);
	}
}
