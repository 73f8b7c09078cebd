//! Keybinding string parser for terminal UIs.
//!
//! Converts human-readable combinations into key descriptors for the
//! terminal's input-binding layer, and renders descriptors back to text:
//! - Single combinations: `"ctrl+a"`, `"ctrl+ alt +/"`, `"pgup"`, `"q"`
//! - Lists: `"ctrl+c, q"` (comma-separated, parsed in order)
//! - Rendering: `"ctrl+/"` is shown as `"^/"`
//! - Binding sets: action names mapped to lists, loaded from TOML
//!
//! The `must_*` variants panic instead of returning an error and are meant
//! for bindings compiled into the program.

pub use config::{BindingSet, ConfigError};
pub use descriptor::{KeyDescriptor, KeyValue};
pub use error::{Error, Result};
pub use keychord_keycode::{self as keycode, Key, Modifier};
pub use parser::{must_parse, parse};
pub use render::render;
pub use split::{must_parse_all, parse_all};

pub mod config;
mod descriptor;
mod error;
mod parser;
mod render;
mod split;
mod tables;

#[cfg(test)]
use serde_json as _;
