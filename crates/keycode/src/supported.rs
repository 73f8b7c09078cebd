//! Identifiers accepted for keybindings.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::Key;

/// Canonical identifier for every bindable key, in key-code order.
const SUPPORTED: &[(&str, Key)] = &[
	("KeyF1", Key::F1),
	("KeyF2", Key::F2),
	("KeyF3", Key::F3),
	("KeyF4", Key::F4),
	("KeyF5", Key::F5),
	("KeyF6", Key::F6),
	("KeyF7", Key::F7),
	("KeyF8", Key::F8),
	("KeyF9", Key::F9),
	("KeyF10", Key::F10),
	("KeyF11", Key::F11),
	("KeyF12", Key::F12),
	("KeyInsert", Key::INSERT),
	("KeyDelete", Key::DELETE),
	("KeyHome", Key::HOME),
	("KeyEnd", Key::END),
	("KeyPgup", Key::PGUP),
	("KeyPgdn", Key::PGDN),
	("KeyArrowUp", Key::ARROW_UP),
	("KeyArrowDown", Key::ARROW_DOWN),
	("KeyArrowLeft", Key::ARROW_LEFT),
	("KeyArrowRight", Key::ARROW_RIGHT),
	("KeyCtrlTilde", Key::CTRL_TILDE),
	("KeyCtrl2", Key::CTRL_2),
	("KeyCtrlSpace", Key::CTRL_SPACE),
	("KeyCtrlA", Key::CTRL_A),
	("KeyCtrlB", Key::CTRL_B),
	("KeyCtrlC", Key::CTRL_C),
	("KeyCtrlD", Key::CTRL_D),
	("KeyCtrlE", Key::CTRL_E),
	("KeyCtrlF", Key::CTRL_F),
	("KeyCtrlG", Key::CTRL_G),
	("KeyBackspace", Key::BACKSPACE),
	("KeyCtrlH", Key::CTRL_H),
	("KeyTab", Key::TAB),
	("KeyCtrlI", Key::CTRL_I),
	("KeyCtrlJ", Key::CTRL_J),
	("KeyCtrlK", Key::CTRL_K),
	("KeyCtrlL", Key::CTRL_L),
	("KeyEnter", Key::ENTER),
	("KeyCtrlM", Key::CTRL_M),
	("KeyCtrlN", Key::CTRL_N),
	("KeyCtrlO", Key::CTRL_O),
	("KeyCtrlP", Key::CTRL_P),
	("KeyCtrlQ", Key::CTRL_Q),
	("KeyCtrlR", Key::CTRL_R),
	("KeyCtrlS", Key::CTRL_S),
	("KeyCtrlT", Key::CTRL_T),
	("KeyCtrlU", Key::CTRL_U),
	("KeyCtrlV", Key::CTRL_V),
	("KeyCtrlW", Key::CTRL_W),
	("KeyCtrlX", Key::CTRL_X),
	("KeyCtrlY", Key::CTRL_Y),
	("KeyCtrlZ", Key::CTRL_Z),
	("KeyEsc", Key::ESC),
	("KeyCtrlLsqBracket", Key::CTRL_LSQ_BRACKET),
	("KeyCtrl3", Key::CTRL_3),
	("KeyCtrl4", Key::CTRL_4),
	("KeyCtrlBackslash", Key::CTRL_BACKSLASH),
	("KeyCtrl5", Key::CTRL_5),
	("KeyCtrlRsqBracket", Key::CTRL_RSQ_BRACKET),
	("KeyCtrl6", Key::CTRL_6),
	("KeyCtrl7", Key::CTRL_7),
	("KeyCtrlSlash", Key::CTRL_SLASH),
	("KeyCtrlUnderscore", Key::CTRL_UNDERSCORE),
	("KeySpace", Key::SPACE),
	("KeyBackspace2", Key::BACKSPACE2),
	("KeyCtrl8", Key::CTRL_8),
	("MouseLeft", Key::MOUSE_LEFT),
	("MouseMiddle", Key::MOUSE_MIDDLE),
	("MouseRight", Key::MOUSE_RIGHT),
	("MouseRelease", Key::MOUSE_RELEASE),
	("MouseWheelUp", Key::MOUSE_WHEEL_UP),
	("MouseWheelDown", Key::MOUSE_WHEEL_DOWN),
];

/// O(1) identifier lookup index.
static INDEX: LazyLock<HashMap<&'static str, Key>> = LazyLock::new(|| SUPPORTED.iter().copied().collect());

/// Resolves a canonical identifier (e.g. `"KeyCtrlA"`) to its key code.
///
/// Matching is exact; `"keyctrla"` is not an identifier.
pub fn lookup(identifier: &str) -> Option<Key> {
	INDEX.get(identifier).copied()
}

/// All supported identifiers, in key-code order.
pub fn identifiers() -> impl Iterator<Item = &'static str> {
	SUPPORTED.iter().map(|(name, _)| *name)
}
