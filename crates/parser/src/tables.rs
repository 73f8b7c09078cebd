//! Token alias and display tables.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Raw token spellings mapped to the canonical name used in identifiers.
static ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
	HashMap::from([
		("/", "Slash"),
		("\\", "Backslash"),
		("[", "LsqBracket"),
		("]", "RsqBracket"),
		("_", "Underscore"),
		("escape", "Esc"),
		("~", "Tilde"),
		("pageup", "Pgup"),
		("pagedown", "Pgdn"),
		("pgup", "Pgup"),
		("pgdown", "Pgdn"),
		("up", "ArrowUp"),
		("down", "ArrowDown"),
		("right", "ArrowRight"),
		("left", "ArrowLeft"),
		("ctl", "Ctrl"),
	])
});

/// Canonical names shown as a glyph instead of their name.
static DISPLAY: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
	HashMap::from([
		("Slash", "/"),
		("Backslash", "\\"),
		("LsqBracket", "["),
		("RsqBracket", "]"),
		("Underscore", "_"),
		("Tilde", "~"),
		("Ctrl", "^"),
	])
});

/// Canonical name for a raw token, if it has an alias.
///
/// Keys are matched exactly, so `"Escape"` is not an alias of `"Esc"`.
pub(crate) fn alias(token: &str) -> Option<&'static str> {
	ALIASES.get(token).copied()
}

/// Display glyph for a canonical name.
pub(crate) fn glyph(canonical: &str) -> Option<&'static str> {
	DISPLAY.get(canonical).copied()
}
