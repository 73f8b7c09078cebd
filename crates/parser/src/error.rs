//! Error types for keybinding parsing.

use keychord_keycode::Modifier;
use thiserror::Error;

/// Errors produced while parsing key combinations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// The normalized combination names no supported key.
	#[error("unsupported keybinding: {lookup}{}", modifier_suffix(.modifier))]
	UnsupportedKeybinding {
		/// Identifier that was looked up (e.g. `"KeyJibberJabber"`).
		lookup: String,
		/// Modifier extracted before the lookup.
		modifier: Modifier,
	},

	/// One element of a comma-separated list failed to parse.
	#[error("could not parse keybinding '{element}' from request '{input}': {source}")]
	CompositeParseFailure {
		/// The failing element, without surrounding whitespace.
		element: String,
		/// The complete list as given by the caller.
		input: String,
		/// Why the element was rejected.
		#[source]
		source: Box<Error>,
	},

	/// The list contained no combinations at all.
	#[error("must have at least one keybinding")]
	EmptyKeybindingList,
}

/// Result type for keybinding parsing.
pub type Result<T> = std::result::Result<T, Error>;

fn modifier_suffix(modifier: &Modifier) -> String {
	match modifier {
		Modifier::None => String::new(),
		other => format!(" (+{other})"),
	}
}

/// Aborts on a keybinding that was expected to be valid.
#[track_caller]
pub(crate) fn fatal(err: Error) -> ! {
	tracing::error!(error = %err, "invalid built-in keybinding");
	panic!("{err}")
}
