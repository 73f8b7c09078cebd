//! Terminal key codes.
//!
//! Symbolic key values as reported by the terminal backend, following the
//! termbox numbering:
//! - Control keys occupy `0x00..=0x1F` and `0x7F`. Several names share one
//!   value because the terminal cannot tell them apart (`Ctrl+H` and
//!   Backspace both arrive as `0x08`).
//! - Special keys count down from `0xFFFF` (`F1`, `F2`, ..., arrows).
//! - Mouse actions continue below the arrow keys, after one reserved slot.
//!
//! The [`lookup`] table maps canonical identifiers such as `"KeyCtrlA"` or
//! `"MouseLeft"` to these values.

use std::fmt;

use serde::Serialize;

pub use supported::{identifiers, lookup};

mod supported;
#[cfg(test)]
mod tests;

/// A symbolic key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Key(u16);

/// Special keys are numbered downwards from the top of the `u16` range.
const fn special(offset: u16) -> Key {
	Key(0xFFFF - offset)
}

impl Key {
	pub const F1: Self = special(0);
	pub const F2: Self = special(1);
	pub const F3: Self = special(2);
	pub const F4: Self = special(3);
	pub const F5: Self = special(4);
	pub const F6: Self = special(5);
	pub const F7: Self = special(6);
	pub const F8: Self = special(7);
	pub const F9: Self = special(8);
	pub const F10: Self = special(9);
	pub const F11: Self = special(10);
	pub const F12: Self = special(11);
	pub const INSERT: Self = special(12);
	pub const DELETE: Self = special(13);
	pub const HOME: Self = special(14);
	pub const END: Self = special(15);
	pub const PGUP: Self = special(16);
	pub const PGDN: Self = special(17);
	pub const ARROW_UP: Self = special(18);
	pub const ARROW_DOWN: Self = special(19);
	pub const ARROW_LEFT: Self = special(20);
	pub const ARROW_RIGHT: Self = special(21);

	// special(22) is the backend's unnamed lower bound for keys.
	pub const MOUSE_LEFT: Self = special(23);
	pub const MOUSE_MIDDLE: Self = special(24);
	pub const MOUSE_RIGHT: Self = special(25);
	pub const MOUSE_RELEASE: Self = special(26);
	pub const MOUSE_WHEEL_UP: Self = special(27);
	pub const MOUSE_WHEEL_DOWN: Self = special(28);

	pub const CTRL_TILDE: Self = Key(0x00);
	pub const CTRL_2: Self = Key(0x00);
	pub const CTRL_SPACE: Self = Key(0x00);
	pub const CTRL_A: Self = Key(0x01);
	pub const CTRL_B: Self = Key(0x02);
	pub const CTRL_C: Self = Key(0x03);
	pub const CTRL_D: Self = Key(0x04);
	pub const CTRL_E: Self = Key(0x05);
	pub const CTRL_F: Self = Key(0x06);
	pub const CTRL_G: Self = Key(0x07);
	pub const BACKSPACE: Self = Key(0x08);
	pub const CTRL_H: Self = Key(0x08);
	pub const TAB: Self = Key(0x09);
	pub const CTRL_I: Self = Key(0x09);
	pub const CTRL_J: Self = Key(0x0A);
	pub const CTRL_K: Self = Key(0x0B);
	pub const CTRL_L: Self = Key(0x0C);
	pub const ENTER: Self = Key(0x0D);
	pub const CTRL_M: Self = Key(0x0D);
	pub const CTRL_N: Self = Key(0x0E);
	pub const CTRL_O: Self = Key(0x0F);
	pub const CTRL_P: Self = Key(0x10);
	pub const CTRL_Q: Self = Key(0x11);
	pub const CTRL_R: Self = Key(0x12);
	pub const CTRL_S: Self = Key(0x13);
	pub const CTRL_T: Self = Key(0x14);
	pub const CTRL_U: Self = Key(0x15);
	pub const CTRL_V: Self = Key(0x16);
	pub const CTRL_W: Self = Key(0x17);
	pub const CTRL_X: Self = Key(0x18);
	pub const CTRL_Y: Self = Key(0x19);
	pub const CTRL_Z: Self = Key(0x1A);
	pub const ESC: Self = Key(0x1B);
	pub const CTRL_LSQ_BRACKET: Self = Key(0x1B);
	pub const CTRL_3: Self = Key(0x1B);
	pub const CTRL_4: Self = Key(0x1C);
	pub const CTRL_BACKSLASH: Self = Key(0x1C);
	pub const CTRL_5: Self = Key(0x1D);
	pub const CTRL_RSQ_BRACKET: Self = Key(0x1D);
	pub const CTRL_6: Self = Key(0x1E);
	pub const CTRL_7: Self = Key(0x1F);
	pub const CTRL_SLASH: Self = Key(0x1F);
	pub const CTRL_UNDERSCORE: Self = Key(0x1F);
	pub const SPACE: Self = Key(0x20);
	pub const BACKSPACE2: Self = Key(0x7F);
	pub const CTRL_8: Self = Key(0x7F);

	/// Raw numeric value as delivered by the terminal backend.
	pub const fn value(self) -> u16 {
		self.0
	}

	/// Returns true for mouse actions (buttons, release and wheel).
	pub const fn is_mouse(self) -> bool {
		self.0 <= Self::MOUSE_LEFT.0 && self.0 >= Self::MOUSE_WHEEL_DOWN.0
	}
}

/// Modifier state reported alongside a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
	/// No modifier held.
	#[default]
	None,
	/// Alt (Meta) held; terminals report it as an ESC prefix.
	Alt,
}

impl Modifier {
	/// Lowercase name, as used in diagnostics.
	pub const fn as_str(self) -> &'static str {
		match self {
			Modifier::None => "none",
			Modifier::Alt => "alt",
		}
	}
}

impl fmt::Display for Modifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
