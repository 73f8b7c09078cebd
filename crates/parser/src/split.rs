//! Comma-separated keybinding lists.

use tracing::trace;

use crate::descriptor::KeyDescriptor;
use crate::error::{Error, Result, fatal};
use crate::parser::parse;

const SEPARATOR: char = ',';

/// Parses a comma-separated list of combinations, in order.
///
/// Parsing stops at the first element that fails.
///
/// # Errors
///
/// - [`Error::EmptyKeybindingList`] if `input` is blank.
/// - [`Error::CompositeParseFailure`] wrapping the first element's error.
pub fn parse_all(input: &str) -> Result<Vec<KeyDescriptor>> {
	if input.trim().is_empty() {
		return Err(Error::EmptyKeybindingList);
	}

	let descriptors = input
		.split(SEPARATOR)
		.map(|element| {
			parse(element).map_err(|source| Error::CompositeParseFailure {
				element: element.trim().to_owned(),
				input: input.to_owned(),
				source: Box::new(source),
			})
		})
		.collect::<Result<Vec<_>>>()?;

	trace!(input, count = descriptors.len(), "parsed keybinding list");
	Ok(descriptors)
}

/// Parses a comma-separated list that is known to be valid.
///
/// # Panics
///
/// Panics with the error's message if any element fails or the list is empty.
#[track_caller]
pub fn must_parse_all(input: &str) -> Vec<KeyDescriptor> {
	match parse_all(input) {
		Ok(descriptors) => descriptors,
		Err(err) => fatal(err),
	}
}

#[cfg(test)]
mod tests {
	use keychord_keycode::{Key, Modifier};
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn keeps_input_order() {
		let keys: Vec<_> = parse_all("ctrl+a, tab")
			.unwrap()
			.iter()
			.map(KeyDescriptor::key)
			.collect();
		assert_eq!(keys, vec![Some(Key::CTRL_A), Some(Key::TAB)]);
	}

	#[test]
	fn single_element() {
		let descriptors = parse_all("ctrl+   alt +/").unwrap();
		assert_eq!(descriptors.len(), 1);
		assert_eq!(descriptors[0].modifier(), Modifier::Alt);
	}

	#[test]
	fn blank_input_is_empty_list() {
		assert_eq!(parse_all(""), Err(Error::EmptyKeybindingList));
		assert_eq!(parse_all(" \t "), Err(Error::EmptyKeybindingList));
	}

	#[test]
	fn reports_failing_element() {
		let err = parse_all("ctrl+a, jibber+jabber").unwrap_err();
		assert_eq!(
			err,
			Error::CompositeParseFailure {
				element: "jibber+jabber".to_string(),
				input: "ctrl+a, jibber+jabber".to_string(),
				source: Box::new(Error::UnsupportedKeybinding {
					lookup: "KeyJibberJabber".to_string(),
					modifier: Modifier::None,
				}),
			}
		);
		insta::assert_snapshot!(
			err,
			@"could not parse keybinding 'jibber+jabber' from request 'ctrl+a, jibber+jabber': unsupported keybinding: KeyJibberJabber"
		);
	}

	#[test]
	fn stops_at_first_failure() {
		let err = parse_all("nope, tab, jibber").unwrap_err();
		let Error::CompositeParseFailure { element, .. } = err else {
			panic!("expected a composite failure");
		};
		assert_eq!(element, "nope");
	}

	#[test]
	fn blank_element_fails() {
		let err = parse_all("a,,b").unwrap_err();
		let Error::CompositeParseFailure { element, source, .. } = err else {
			panic!("expected a composite failure");
		};
		assert_eq!(element, "");
		assert_eq!(
			*source,
			Error::UnsupportedKeybinding {
				lookup: "Key".to_string(),
				modifier: Modifier::None,
			}
		);
	}

	#[test]
	fn error_source_is_element_error() {
		use std::error::Error as _;

		let err = parse_all("tab, alt+jibber").unwrap_err();
		let source = err.source().map(ToString::to_string);
		assert_eq!(source.as_deref(), Some("unsupported keybinding: KeyJibber (+alt)"));
	}

	#[test]
	#[should_panic(expected = "must have at least one keybinding")]
	fn must_parse_all_panics_on_empty() {
		must_parse_all("");
	}

	#[test]
	#[should_panic(expected = "could not parse keybinding 'jibber+   jabber +/'")]
	fn must_parse_all_panics_on_bad_element() {
		must_parse_all("ctrl+/, tab, jibber+   jabber +/");
	}
}
