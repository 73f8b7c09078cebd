//! Display rendering for parsed combinations.

use std::fmt;

use crate::descriptor::KeyDescriptor;
use crate::tables;

const CTRL: &str = "Ctrl";
const CTRL_PREFIX: char = '^';

/// Renders a descriptor back to a short human-readable form.
///
/// `Ctrl` becomes a leading `^` wherever it appears, glyph names are shown
/// as their character (`Slash` as `/`), and the rest are joined with `+`:
/// `"ctrl+/"` renders as `"^/"`, `"ctrl+a"` as `"^A"`.
pub fn render(descriptor: &KeyDescriptor) -> String {
	render_tokens(descriptor.tokens())
}

fn render_tokens(tokens: &[String]) -> String {
	let mut ctrl = false;
	let shown: Vec<&str> = tokens
		.iter()
		.filter_map(|token| {
			if token == CTRL {
				ctrl = true;
				return None;
			}
			Some(tables::glyph(token).unwrap_or(token.as_str()))
		})
		.collect();

	let mut out = String::new();
	if ctrl {
		out.push(CTRL_PREFIX);
	}
	out.push_str(&shown.join("+"));
	out
}

impl fmt::Display for KeyDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&render(self))
	}
}
