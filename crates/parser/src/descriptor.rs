//! Parsed key combinations.

use keychord_keycode::{Key, Modifier};
use serde::Serialize;

/// What a combination resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyValue {
	/// A single printable character, bound as typed.
	Char(char),
	/// A symbolic key code from the terminal backend.
	Code(Key),
}

/// A parsed key combination, ready to hand to the input-binding layer.
///
/// `tokens` holds the normalized token sequence (without any `Alt` token)
/// and is only used to render the combination back to text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct KeyDescriptor {
	value: KeyValue,
	modifier: Modifier,
	tokens: Vec<String>,
}

impl KeyDescriptor {
	pub(crate) fn new(value: KeyValue, modifier: Modifier, tokens: Vec<String>) -> Self {
		debug_assert!(!tokens.is_empty());
		Self { value, modifier, tokens }
	}

	/// Descriptor for a lone printable character.
	pub(crate) fn printable(ch: char) -> Self {
		Self::new(KeyValue::Char(ch), Modifier::None, vec![ch.to_string()])
	}

	pub fn value(&self) -> KeyValue {
		self.value
	}

	pub fn modifier(&self) -> Modifier {
		self.modifier
	}

	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}

	/// Symbolic key code, or `None` for a printable character.
	pub fn key(&self) -> Option<Key> {
		match self.value {
			KeyValue::Code(key) => Some(key),
			KeyValue::Char(_) => None,
		}
	}

	/// Returns true if `other` triggers on the same input.
	///
	/// Tokens are ignored: `"tab"` and `"ctrl+i"` deliver the same key.
	pub fn same_input(&self, other: &KeyDescriptor) -> bool {
		self.value == other.value && self.modifier == other.modifier
	}
}
