//! # Parser
//!
//! Turns a single key combination such as `"ctrl+alt+/"` into a
//! [`KeyDescriptor`].
//!
//! ## Pipeline
//!
//! ```text
//! "ctrl+ alt +/"
//!   tokenize   -> ["ctrl", "alt", "/"]
//!   normalize  -> ["Ctrl", "Slash"], Alt
//!   resolve    -> "KeyCtrlSlash" -> Key::CTRL_SLASH
//! ```
//!
//! Tokens are separated by any run of whitespace or `+`. Each token is
//! replaced by its alias (`"pgup"` -> `"Pgup"`, `"/"` -> `"Slash"`) or
//! title-cased, `"Alt"` becomes the modifier, and the remaining tokens are
//! concatenated into an identifier (`Key` prefixed unless it names a mouse
//! action) looked up in the supported-key table.
//!
//! A combination that is a single printable character is accepted as that
//! character without any lookup, case preserved (`"a"` and `"A"` differ).

use std::str::FromStr;

use tracing::trace;

use crate::descriptor::KeyDescriptor;
use crate::error::{Error, Result, fatal};

use self::normalize::{Normalized, normalize};
use self::resolve::resolve;
use self::tokenize::tokenize;

mod normalize;
mod resolve;
mod tokenize;


/// Parses a single key combination.
///
/// # Errors
///
/// Returns [`Error::UnsupportedKeybinding`] if the normalized combination
/// names no supported key.
pub fn parse(combo: &str) -> Result<KeyDescriptor> {
	let tokens = tokenize(combo);
	trace!(combo, ?tokens, "tokenized keybinding");

	match normalize(&tokens) {
		Normalized::Printable(ch) => Ok(KeyDescriptor::printable(ch)),
		Normalized::Combo { tokens, modifier } => resolve(tokens, modifier),
	}
}

/// Parses a key combination that is known to be valid.
///
/// Meant for bindings compiled into the program, where a parse failure is
/// a programming error.
///
/// # Panics
///
/// Panics with the parse error's message if `combo` is not supported.
#[track_caller]
pub fn must_parse(combo: &str) -> KeyDescriptor {
	match parse(combo) {
		Ok(descriptor) => descriptor,
		Err(err) => fatal(err),
	}
}

impl FromStr for KeyDescriptor {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		parse(s)
	}
}
