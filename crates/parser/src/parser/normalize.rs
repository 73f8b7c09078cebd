//! Token canonicalization.

use icu::casemap::CaseMapper;
use icu::properties::CodePointMapData;
use icu::properties::props::GeneralCategory;
use keychord_keycode::Modifier;

use crate::tables;

/// Canonical token that is extracted as [`Modifier::Alt`].
const ALT: &str = "Alt";

/// Outcome of normalizing a token sequence.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Normalized {
	/// A lone printable character, accepted without any lookup.
	Printable(char),
	/// Canonical tokens still to be resolved.
	Combo { tokens: Vec<String>, modifier: Modifier },
}

/// Canonicalizes tokens through the alias table and extracts the modifier.
///
/// A single printable character short-circuits with its case preserved.
/// Every other token is aliased or title-cased, `Alt` is lifted out as
/// the modifier, and single-byte names are upper-cased.
pub(crate) fn normalize(tokens: &[&str]) -> Normalized {
	if let [token] = tokens
		&& let Some(ch) = single_char(token)
		&& is_printable(ch)
	{
		return Normalized::Printable(ch);
	}

	let mut modifier = Modifier::None;
	let mut canonical = Vec::with_capacity(tokens.len());

	for token in tokens {
		let mut name = match tables::alias(token) {
			Some(alias) => alias.to_owned(),
			None => title_case(token),
		};

		if name == ALT {
			modifier = Modifier::Alt;
			continue;
		}

		if name.len() == 1 {
			name.make_ascii_uppercase();
		}
		canonical.push(name);
	}

	Normalized::Combo { tokens: canonical, modifier }
}

fn single_char(token: &str) -> Option<char> {
	let mut chars = token.chars();
	match (chars.next(), chars.next()) {
		(Some(ch), None) => Some(ch),
		_ => None,
	}
}

/// Letters, marks, numbers, punctuation, symbols and the ASCII space.
///
/// Format, private-use and unassigned code points are not printable even
/// though they are not control characters.
pub(crate) fn is_printable(ch: char) -> bool {
	if ch == ' ' {
		return true;
	}
	!matches!(
		CodePointMapData::<GeneralCategory>::new().get(ch),
		GeneralCategory::Unassigned
			| GeneralCategory::Control
			| GeneralCategory::Format
			| GeneralCategory::PrivateUse
			| GeneralCategory::Surrogate
			| GeneralCategory::SpaceSeparator
			| GeneralCategory::LineSeparator
			| GeneralCategory::ParagraphSeparator
	)
}

/// Title-cases the first letter of every word, leaving the rest untouched.
///
/// Word boundaries are ASCII characters other than letters, digits and
/// `_`, so `"f1"` becomes `"F1"` and `"ctrl-x"` becomes `"Ctrl-X"`. The
/// mapping is per character: `"ǆ"` becomes `"ǅ"` and `"ß"` is unchanged.
pub(crate) fn title_case(token: &str) -> String {
	let case = CaseMapper::new();
	let mut out = String::with_capacity(token.len());
	let mut word_start = true;

	for ch in token.chars() {
		if word_start {
			out.push(case.simple_titlecase(ch));
		} else {
			out.push(ch);
		}
		word_start = ch.is_ascii() && !(ch.is_ascii_alphanumeric() || ch == '_');
	}

	out
}
