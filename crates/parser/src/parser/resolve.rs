use keychord_keycode::{self as keycode, Modifier};
use tracing::{debug, trace};

use crate::descriptor::{KeyDescriptor, KeyValue};
use crate::error::{Error, Result};

/// Identifiers for mouse actions carry no `Key` prefix.
const MOUSE: &str = "Mouse";
const KEY_PREFIX: &str = "Key";

/// Builds the supported-key identifier for canonical tokens.
pub(crate) fn identifier(tokens: &[String]) -> String {
	let joined = tokens.concat();
	if joined.contains(MOUSE) { joined } else { format!("{KEY_PREFIX}{joined}") }
}

/// Resolves canonical tokens against the supported-key table.
pub(crate) fn resolve(tokens: Vec<String>, modifier: Modifier) -> Result<KeyDescriptor> {
	let lookup = identifier(&tokens);

	match keycode::lookup(&lookup) {
		Some(key) => {
			trace!(%lookup, ?key, %modifier, "resolved keybinding");
			Ok(KeyDescriptor::new(KeyValue::Code(key), modifier, tokens))
		}
		None => {
			debug!(%lookup, %modifier, "unsupported keybinding");
			Err(Error::UnsupportedKeybinding { lookup, modifier })
		}
	}
}
