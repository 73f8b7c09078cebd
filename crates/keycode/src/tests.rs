use rstest::rstest;

use super::*;

#[rstest]
#[case("KeyCtrlA", Key::CTRL_A)]
#[case("KeyTab", Key::TAB)]
#[case("KeyF12", Key::F12)]
#[case("KeyCtrlSlash", Key::CTRL_SLASH)]
#[case("MouseWheelDown", Key::MOUSE_WHEEL_DOWN)]
fn lookup_known_identifier(#[case] identifier: &str, #[case] expected: Key) {
	assert_eq!(lookup(identifier), Some(expected));
}

#[rstest]
#[case("")]
#[case("Key")]
#[case("keyctrla")]
#[case("KeyCtrlAlt")]
#[case("KeyMouseLeft")]
fn lookup_unknown_identifier(#[case] identifier: &str) {
	assert_eq!(lookup(identifier), None);
}

#[test]
fn terminal_aliases_share_a_value() {
	assert_eq!(Key::CTRL_H, Key::BACKSPACE);
	assert_eq!(Key::CTRL_I, Key::TAB);
	assert_eq!(Key::CTRL_M, Key::ENTER);
	assert_eq!(Key::CTRL_3, Key::ESC);
	assert_eq!(Key::CTRL_SLASH, Key::CTRL_UNDERSCORE);
	assert_eq!(lookup("KeyCtrlLsqBracket"), lookup("KeyEsc"));
}

#[test]
fn special_keys_count_down() {
	assert_eq!(Key::F1.value(), 0xFFFF);
	assert_eq!(Key::F2.value(), 0xFFFE);
	assert_eq!(Key::ARROW_RIGHT.value(), 0xFFFF - 21);
	assert_eq!(Key::MOUSE_LEFT.value(), 0xFFFF - 23);
	assert_eq!(Key::MOUSE_WHEEL_DOWN.value(), 0xFFFF - 28);
	assert!(Key::MOUSE_WHEEL_DOWN < Key::MOUSE_LEFT);
}

#[test]
fn mouse_range() {
	for key in [
		Key::MOUSE_LEFT,
		Key::MOUSE_MIDDLE,
		Key::MOUSE_RIGHT,
		Key::MOUSE_RELEASE,
		Key::MOUSE_WHEEL_UP,
		Key::MOUSE_WHEEL_DOWN,
	] {
		assert!(key.is_mouse(), "{key:?} should be a mouse action");
	}

	assert!(!Key::ARROW_RIGHT.is_mouse());
	assert!(!Key::CTRL_A.is_mouse());
}

#[test]
fn identifiers_cover_table() {
	let all: Vec<_> = identifiers().collect();
	assert_eq!(all.len(), 74);
	assert!(all.iter().all(|name| lookup(name).is_some()));
	assert!(all.iter().all(|name| name.starts_with("Key") || name.starts_with("Mouse")));
}

#[test]
fn modifier_names() {
	assert_eq!(Modifier::default(), Modifier::None);
	assert_eq!(Modifier::None.to_string(), "none");
	assert_eq!(Modifier::Alt.to_string(), "alt");
	assert_eq!(serde_json::to_string(&Modifier::Alt).unwrap(), r#""alt""#);
	assert_eq!(serde_json::to_string(&Key::CTRL_A).unwrap(), "1");
}
